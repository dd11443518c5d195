//! `gloo-net` transport for the remote requirements endpoint.
//!
//! Client-side (csr): real `fetch` calls via `gloo-net`; redirects are
//! followed by the browser. Native builds (tests): every call fails with a
//! configuration error since only the browser can reach the endpoint.
//!
//! ERROR HANDLING
//! ==============
//! The endpoint URL is baked in at build time. A missing or malformed value
//! does not stop the page from loading; it surfaces as
//! [`EndpointError::Config`] on the first request so the normal error
//! indicator reports it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use requirements::RequirementsEndpoint;
use requirements::config::{ENDPOINT_URL_ENV, EndpointConfig};
use requirements::error::EndpointError;
use requirements::wire::{Requirement, SearchResponse, SubmitResponse};

/// Endpoint URL captured from the build environment.
const BUILD_ENDPOINT_URL: Option<&str> = option_env!("REQDESK_ENDPOINT_URL");

#[cfg(any(test, feature = "csr"))]
const SUBMIT_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

fn resolve_config(raw: Option<&str>) -> Result<EndpointConfig, EndpointError> {
    match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => EndpointConfig::new(raw),
        _ => Err(EndpointError::Config(format!("{ENDPOINT_URL_ENV} was not set when this page was built"))),
    }
}

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16) -> EndpointError {
    EndpointError::Status { status }
}

#[derive(Clone, Debug)]
pub struct GlooEndpoint {
    config: Result<EndpointConfig, EndpointError>,
}

impl GlooEndpoint {
    /// Endpoint for the URL compiled into this build.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self { config: resolve_config(BUILD_ENDPOINT_URL) }
    }

    fn config(&self) -> Result<&EndpointConfig, EndpointError> {
        self.config.as_ref().map_err(Clone::clone)
    }
}

#[cfg(feature = "csr")]
async fn read_body(resp: gloo_net::http::Response) -> Result<String, EndpointError> {
    if !resp.ok() {
        return Err(status_error(resp.status()));
    }
    resp.text().await.map_err(|e| EndpointError::Request(e.to_string()))
}

#[async_trait::async_trait(?Send)]
impl RequirementsEndpoint for GlooEndpoint {
    async fn submit(&self, requirement: &Requirement) -> Result<SubmitResponse, EndpointError> {
        let config = self.config()?;
        let body = requirements::endpoint::submit_body(requirement)?;
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(config.url.as_str())
                .header("Content-Type", SUBMIT_CONTENT_TYPE)
                .body(body)
                .map_err(|e| EndpointError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| EndpointError::Request(e.to_string()))?;
            let text = read_body(resp).await?;
            requirements::endpoint::parse_submit_response(&text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (config, body);
            Err(EndpointError::Config("not available outside the browser".to_owned()))
        }
    }

    async fn search(&self, email: &str) -> Result<SearchResponse, EndpointError> {
        let config = self.config()?;
        let url = requirements::endpoint::search_url(&config.url, email);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(url.as_str())
                .send()
                .await
                .map_err(|e| EndpointError::Request(e.to_string()))?;
            let text = read_body(resp).await?;
            requirements::endpoint::parse_search_response(&text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(EndpointError::Config("not available outside the browser".to_owned()))
        }
    }
}
