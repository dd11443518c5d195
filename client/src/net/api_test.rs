use futures::executor::block_on;

use super::*;

// =============================================================
// Build-time configuration
// =============================================================

#[test]
fn resolve_config_accepts_https_url() {
    let config = resolve_config(Some("https://script.example.test/macros/s/abc/exec")).expect("config");
    assert_eq!(config.url.as_str(), "https://script.example.test/macros/s/abc/exec");
}

#[test]
fn resolve_config_missing_url_is_config_error() {
    assert!(matches!(resolve_config(None), Err(EndpointError::Config(_))));
    assert!(matches!(resolve_config(Some("   ")), Err(EndpointError::Config(_))));
}

#[test]
fn resolve_config_rejects_non_http_scheme() {
    assert!(matches!(resolve_config(Some("ftp://example.test/exec")), Err(EndpointError::Config(_))));
}

#[test]
fn status_error_carries_code() {
    assert_eq!(status_error(500), EndpointError::Status { status: 500 });
}

#[test]
fn submit_content_type_is_cors_simple() {
    assert!(SUBMIT_CONTENT_TYPE.starts_with("text/plain"));
}

// =============================================================
// Native fallback
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn search_without_browser_fails_with_config_error() {
    let endpoint = GlooEndpoint { config: resolve_config(Some("https://example.test/exec")) };
    let reply = block_on(endpoint.search("a@b.co"));
    assert!(matches!(reply, Err(EndpointError::Config(_))));
}

#[test]
fn unconfigured_endpoint_reports_on_request() {
    let endpoint = GlooEndpoint { config: resolve_config(None) };
    let reply = block_on(endpoint.search("a@b.co"));
    assert!(matches!(reply, Err(EndpointError::Config(message)) if message.contains(ENDPOINT_URL_ENV)));
}
