use catalog::config::{self, DEFAULT_API_BASE_URL, DEFAULT_SOAP_BASE_URL};
use std::env;
use std::time::Duration;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("http://catalog.local:8080/api/", DEFAULT_API_BASE_URL),
        "http://catalog.local:8080/api"
    );
}

#[test]
fn test_sanitize_base_url_no_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("http://catalog.local:8080/api", DEFAULT_API_BASE_URL),
        "http://catalog.local:8080/api"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("http://catalog.local:8080/ws///", DEFAULT_SOAP_BASE_URL),
        "http://catalog.local:8080/ws"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  http://catalog.local:8080/api/  ", DEFAULT_API_BASE_URL),
        "http://catalog.local:8080/api"
    );
}

#[test]
fn test_sanitize_base_url_empty_string_uses_fallback() {
    assert_eq!(config::sanitize_base_url("", DEFAULT_API_BASE_URL), "http://localhost:8080/api");
    assert_eq!(config::sanitize_base_url("   ", DEFAULT_SOAP_BASE_URL), "http://localhost:8080/ws");
}

#[test]
fn test_get_api_base_url_with_trailing_slash() {
    env::set_var("API_BASE_URL", "http://catalog.local:8080/api/");
    let result = config::get_api_base_url();
    assert_eq!(result, "http://catalog.local:8080/api");
    env::remove_var("API_BASE_URL");
}

#[test]
fn test_get_soap_base_url_with_trailing_slash() {
    env::set_var("SOAP_BASE_URL", "http://catalog.local:8080/ws/");
    let result = config::get_soap_base_url();
    assert_eq!(result, "http://catalog.local:8080/ws");
    env::remove_var("SOAP_BASE_URL");
}

#[test]
fn test_search_debounce_from_env_and_fallback() {
    env::set_var("SEARCH_DEBOUNCE_MS", "150");
    assert_eq!(config::get_search_debounce(), Duration::from_millis(150));

    env::set_var("SEARCH_DEBOUNCE_MS", "soon");
    assert_eq!(config::get_search_debounce(), Duration::from_millis(300));

    env::remove_var("SEARCH_DEBOUNCE_MS");
    assert_eq!(config::get_search_debounce(), Duration::from_millis(300));
}
