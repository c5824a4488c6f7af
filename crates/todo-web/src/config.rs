//! API configuration for the browser build.
//!
//! A wasm bundle has no process environment, so the base URL is captured from
//! `TODO_API_BASE_URL` when the bundle is compiled.

use todo_core::ClientConfig;

const BUILD_API_BASE_URL: Option<&str> = option_env!("TODO_API_BASE_URL");

pub fn client_config() -> ClientConfig {
    resolve_config(BUILD_API_BASE_URL)
}

fn resolve_config(build_value: Option<&str>) -> ClientConfig {
    ClientConfig::resolve(None, build_value.map(str::to_string)).unwrap_or_else(|error| {
        tracing::error!("Ignoring invalid API base URL: {}", error);
        ClientConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use todo_core::config::DEFAULT_API_BASE_URL;

    use super::*;

    #[test]
    fn build_value_is_normalized() {
        let config = resolve_config(Some(" https://todo.example.com/ "));
        assert_eq!(config.api_base_url(), "https://todo.example.com");
    }

    #[test]
    fn missing_or_invalid_value_falls_back_to_default() {
        assert_eq!(resolve_config(None).api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(resolve_config(Some("   ")).api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(
            resolve_config(Some("ftp://todo.example.com")).api_base_url(),
            DEFAULT_API_BASE_URL
        );
    }

    #[test]
    fn client_config_is_usable() {
        assert!(client_config().endpoint("/todos").ends_with("/todos"));
    }
}
