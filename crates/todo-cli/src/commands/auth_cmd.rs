use todo_core::auth::AuthGatewayClient;
use todo_core::router::StartupCheck;
use todo_core::tasks::TaskClient;
use todo_core::ClientConfig;

use crate::cli::AuthCommands;
use crate::commands::common::{open_router, redirect_query};
use crate::error::CliError;

pub async fn run_auth(command: AuthCommands, config: &ClientConfig) -> Result<(), CliError> {
    match command {
        AuthCommands::Login { email, password } => {
            let gateway = AuthGatewayClient::new(config)?;
            let credential = gateway.login(&email, &password).await?;
            let (mut router, _) = open_router(config)?;
            router.sign_in(credential)?;
            println!("Signed in as {} on {}", email.trim(), config.api_base_url());
            Ok(())
        }
        AuthCommands::Register { email, password } => {
            let gateway = AuthGatewayClient::new(config)?;
            let registration = gateway.register(&email, &password).await?;
            if let Some(message) = registration.message {
                println!("{message}");
            }
            println!(
                "Registration successful! Please log in: todo auth login --email {} --password <PASSWORD>",
                registration.email
            );
            Ok(())
        }
        AuthCommands::Status => {
            let (mut router, check) = open_router(config)?;
            let StartupCheck::Validate(credential) = check else {
                println!("Not signed in on {}", config.api_base_url());
                return Ok(());
            };

            let client = TaskClient::new(config)?;
            match client.list(&credential).await {
                Ok(tasks) => {
                    println!(
                        "Signed in on {} ({} tasks)",
                        config.api_base_url(),
                        tasks.len()
                    );
                    Ok(())
                }
                Err(error) => {
                    router.startup_failed(&error)?;
                    println!("Stored session is no longer valid and has been cleared.");
                    Err(error.into())
                }
            }
        }
        AuthCommands::Logout => {
            let (mut router, _) = open_router(config)?;
            router.sign_out()?;
            println!("Signed out of {}", config.api_base_url());
            Ok(())
        }
        AuthCommands::Google => {
            let gateway = AuthGatewayClient::new(config)?;
            println!("{}", gateway.redirect_url());
            eprintln!(
                "Open the URL above in a browser, then run `todo auth token <callback URL>`."
            );
            Ok(())
        }
        AuthCommands::Token { value } => {
            let (mut router, _) = open_router(config)?;
            if router.consume_redirect(&redirect_query(&value))?.is_none() {
                return Err(CliError::MissingRedirectToken(value));
            }
            println!("Signed in on {}", config.api_base_url());
            Ok(())
        }
    }
}
