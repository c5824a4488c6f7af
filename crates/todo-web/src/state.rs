//! Application state management
//!
//! Shared state accessible via the Dioxus context provider.

use dioxus::prelude::*;

use todo_core::auth::AuthGatewayClient;
use todo_core::router::{SessionRouter, StartupCheck};
use todo_core::tasks::{TaskClient, TaskCommand};
use todo_core::views::TaskBoard;
use todo_core::ApiError;

use crate::components::schedule_notice_expiry;
use crate::config::client_config;
use crate::routes::Route;
use crate::services::{current_path, current_query, replace_location, LocalStorageSessionStore};

pub type WebRouter = SessionRouter<LocalStorageSessionStore>;

#[derive(Clone)]
struct Services {
    gateway: AuthGatewayClient,
    tasks: TaskClient,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Authentication state machine over `localStorage`
    pub router: Signal<WebRouter>,
    /// Why a third-party sign-in token could not be stored, if it failed
    pub redirect_error: Option<ApiError>,
    services: Result<Services, ApiError>,
    startup: StartupCheck,
}

impl AppState {
    /// Reads the stored session, takes any sign-in token off the landing
    /// URL and builds the API clients.
    ///
    /// Runs before the router renders, so route guards see the consumed
    /// token. Must run inside a component scope, since it creates signals.
    pub fn mount() -> Self {
        let config = client_config();
        tracing::info!("Using API at {}", config.api_base_url());

        let query = current_query();
        let (mut router, startup) = SessionRouter::mount(LocalStorageSessionStore, &query)
            .unwrap_or_else(|error| {
                tracing::error!("Failed to read stored session: {}", error);
                (
                    SessionRouter::signed_out(LocalStorageSessionStore),
                    StartupCheck::Skip,
                )
            });

        let redirect_error = match router.consume_landing_redirect(&current_path(), &query) {
            Ok(Some(page)) => {
                replace_location(page.path());
                None
            }
            Ok(None) => None,
            Err(error) => {
                tracing::error!("Failed to store sign-in token: {}", error);
                Some(error)
            }
        };

        let services = AuthGatewayClient::new(&config).and_then(|gateway| {
            Ok(Services {
                gateway,
                tasks: TaskClient::new(&config)?,
            })
        });

        Self {
            router: Signal::new(router),
            redirect_error,
            services,
            startup,
        }
    }

    pub fn gateway(&self) -> Result<AuthGatewayClient, ApiError> {
        self.services
            .as_ref()
            .map(|services| services.gateway.clone())
            .map_err(Clone::clone)
    }

    pub fn tasks(&self) -> Result<TaskClient, ApiError> {
        self.services
            .as_ref()
            .map(|services| services.tasks.clone())
            .map_err(Clone::clone)
    }

    /// Checks a credential found at mount with one background list call.
    ///
    /// The view is already shown as signed in; a failure drops the credential
    /// and the route guards move the user off protected pages.
    pub fn validate_stored_session(&self) {
        let StartupCheck::Validate(credential) = self.startup.clone() else {
            return;
        };
        let mut router = self.router;
        let tasks = self.tasks();

        spawn(async move {
            let result = match tasks {
                Ok(client) => client.list(&credential).await.map(|_| ()),
                Err(error) => Err(error),
            };
            if let Err(error) = result {
                if let Err(storage) = router.write().startup_failed(&error) {
                    tracing::error!("Failed to clear stored session: {}", storage);
                }
            }
        });
    }

    /// Runs a command begun on `board` and routes the result.
    ///
    /// Authorization and network failures leave the dashboard. Successful
    /// mutations schedule their notice to clear.
    pub fn run_task_command(
        &self,
        mut board: Signal<TaskBoard>,
        navigator: Navigator,
        command: TaskCommand,
    ) {
        let mut router = self.router;
        let credential = router.peek().credential().cloned();
        let tasks = self.tasks();
        let is_mutation = command.is_mutation();

        spawn(async move {
            let result = match (credential, tasks) {
                (Some(credential), Ok(client)) => client.execute(&credential, command).await,
                (None, _) => Err(ApiError::Unauthorized {
                    status: 401,
                    message: "Not signed in".to_string(),
                }),
                (_, Err(error)) => Err(error),
            };

            let completed = if is_mutation {
                board.write().complete(result)
            } else {
                board.write().complete_refresh(result)
            };
            match completed {
                Ok(()) if is_mutation => {
                    let generation = board.peek().notice().generation();
                    schedule_notice_expiry(generation, move |generation| {
                        board.write().expire_notice(generation)
                    });
                }
                Ok(()) => {}
                Err(error) => {
                    let next = router.write().handle_failure(&error);
                    match next {
                        Ok(Some(page)) => {
                            navigator.replace(Route::from(page));
                        }
                        Ok(None) => {}
                        Err(storage) => {
                            tracing::error!("Failed to clear stored session: {}", storage);
                        }
                    }
                }
            }
        });
    }
}
