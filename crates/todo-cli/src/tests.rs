use pretty_assertions::assert_eq;
use todo_core::auth::credential_from_redirect;
use todo_core::session::SessionStore;
use todo_core::tasks::{TaskCommand, TaskOutcome};
use todo_core::{ClientConfig, Credential, Task, TaskId};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::auth::KeyringSessionStore;
use crate::cli::AuthCommands;
use crate::commands::add::run_add;
use crate::commands::auth_cmd::run_auth;
use crate::commands::common::{
    format_task_lines, parse_task_id, redirect_query, resolve_task_text, run_task_command,
};
use crate::error::CliError;

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(server.uri()).unwrap()
}

/// Keyring store for `config`, emptied first.
///
/// Mock servers are pooled and hand the same URI to later tests, so an entry
/// left by an earlier test would otherwise be read back here.
fn fresh_store(config: &ClientConfig) -> KeyringSessionStore {
    let store = KeyringSessionStore::for_config(config);
    store.clear().unwrap();
    store
}

#[test]
fn resolve_task_text_joins_and_trims() {
    let parts = vec!["  buy".to_string(), "milk ".to_string()];
    assert_eq!(resolve_task_text(&parts).unwrap(), "buy milk");
    assert!(matches!(
        resolve_task_text(&[" ".to_string()]),
        Err(CliError::EmptyTaskText)
    ));
    assert!(matches!(resolve_task_text(&[]), Err(CliError::EmptyTaskText)));
}

#[test]
fn parse_task_id_rejects_non_numeric_input() {
    assert_eq!(parse_task_id("12").unwrap(), TaskId(12));
    assert!(matches!(
        parse_task_id("twelve"),
        Err(CliError::InvalidTaskId(value)) if value == "twelve"
    ));
}

#[test]
fn format_task_lines_aligns_ids() {
    let lines = format_task_lines(&[Task::new(12, "buy milk"), Task::new(3, "walk")]);
    assert_eq!(lines, vec!["12  buy milk".to_string(), " 3  walk".to_string()]);
}

#[test]
fn cli_errors_render_the_message_shown_to_the_user() {
    let api = CliError::from(todo_core::ApiError::Network("refused".to_string()));
    assert_eq!(
        api.to_string(),
        todo_core::ApiError::Network("refused".to_string()).user_message()
    );
    assert_eq!(
        CliError::InvalidTaskId("x".to_string()).to_string(),
        "Invalid task id: x"
    );
    assert_eq!(
        CliError::NotSignedIn.to_string(),
        "Not signed in. Run `todo auth login` or `todo auth google` first."
    );
}

#[test]
fn redirect_query_accepts_urls_and_bare_tokens() {
    let from_bare = redirect_query("abc.def");
    assert_eq!(from_bare, "token=abc.def");
    assert_eq!(
        credential_from_redirect(&from_bare),
        Credential::new("abc.def")
    );

    let url = "http://localhost:3000/login?token=xyz";
    assert_eq!(redirect_query(url), url);
    assert_eq!(
        credential_from_redirect(&redirect_query(url)),
        Credential::new("xyz")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn task_commands_without_session_make_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server);
    fresh_store(&config);
    let error = run_task_command(&config, TaskCommand::List)
        .await
        .unwrap_err();
    assert!(matches!(error, CliError::NotSignedIn));
}

#[tokio::test(flavor = "current_thread")]
async fn leftover_entry_for_a_reused_server_uri_is_not_read() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server);
    KeyringSessionStore::for_config(&config)
        .set(&Credential::new("left-behind").unwrap())
        .unwrap();

    let store = fresh_store(&config);
    assert_eq!(store.get().unwrap(), None);
    let error = run_task_command(&config, TaskCommand::List)
        .await
        .unwrap_err();
    assert!(matches!(error, CliError::NotSignedIn));
}

#[tokio::test(flavor = "current_thread")]
async fn task_commands_use_the_stored_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(header("Authorization", "Bearer stored-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"id": 1, "task": "walk"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let store = fresh_store(&config);
    store.set(&Credential::new("stored-token").unwrap()).unwrap();

    let outcome = run_task_command(&config, TaskCommand::List).await.unwrap();
    assert_eq!(outcome, TaskOutcome::Listed(vec![Task::new(1, "walk")]));
    store.clear().unwrap();
}

#[tokio::test(flavor = "current_thread")]
async fn unauthorized_response_clears_stored_credential() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/todos/4"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({"msg": "Not enough segments"})),
        )
        .mount(&server)
        .await;

    let config = config_for(&server);
    let store = fresh_store(&config);
    store.set(&Credential::new("broken").unwrap()).unwrap();

    let error = run_task_command(&config, TaskCommand::Delete { id: TaskId(4) })
        .await
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Invalid or missing token. Please log in again."
    );
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn add_rejects_empty_text_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server);
    fresh_store(&config)
        .set(&Credential::new("valid").unwrap())
        .unwrap();
    let error = run_add(&["   ".to_string()], &config).await.unwrap_err();
    assert!(matches!(error, CliError::EmptyTaskText));
    fresh_store(&config);
}

#[tokio::test(flavor = "current_thread")]
async fn login_then_logout_round_trips_the_keychain() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "abc"})),
        )
        .mount(&server)
        .await;

    let config = config_for(&server);
    let store = fresh_store(&config);
    run_auth(
        AuthCommands::Login {
            email: "user@example.com".to_string(),
            password: "secret".to_string(),
        },
        &config,
    )
    .await
    .unwrap();
    assert_eq!(store.get().unwrap(), Credential::new("abc"));

    run_auth(AuthCommands::Logout, &config).await.unwrap();
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn token_command_stores_redirect_credential() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let store = fresh_store(&config);

    run_auth(
        AuthCommands::Token {
            value: "http://localhost:3000/login?token=from-google".to_string(),
        },
        &config,
    )
    .await
    .unwrap();
    assert_eq!(store.get().unwrap(), Credential::new("from-google"));

    let error = run_auth(
        AuthCommands::Token {
            value: "http://localhost:3000/login?token=".to_string(),
        },
        &config,
    )
    .await
    .unwrap_err();
    assert!(matches!(error, CliError::MissingRedirectToken(_)));
    store.clear().unwrap();
}

#[tokio::test(flavor = "current_thread")]
async fn status_clears_a_stale_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let store = fresh_store(&config);
    store.set(&Credential::new("stale").unwrap()).unwrap();

    let error = run_auth(AuthCommands::Status, &config).await.unwrap_err();
    assert!(matches!(error, CliError::Api(_)));
    assert_eq!(store.get().unwrap(), None);
}
