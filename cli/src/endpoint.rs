//! `reqwest` transport for the remote requirements endpoint.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};

use requirements::RequirementsEndpoint;
use requirements::config::EndpointConfig;
use requirements::endpoint::{parse_search_response, parse_submit_response, search_url, submit_body};
use requirements::error::EndpointError;
use requirements::wire::{Requirement, SearchResponse, SubmitResponse};

/// Submissions go out as a CORS "simple" body so the scripting endpoint
/// accepts them from browsers and terminals alike.
const SUBMIT_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

pub struct HttpEndpoint {
    http: reqwest::Client,
    url: Url,
}

impl HttpEndpoint {
    /// Build a client honoring the configured timeouts. Redirects are
    /// followed (reqwest's default policy).
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &EndpointConfig) -> Result<Self, EndpointError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| EndpointError::Config(e.to_string()))?;
        Ok(Self { http, url: config.url.clone() })
    }

    async fn read_body(response: reqwest::Response) -> Result<String, EndpointError> {
        check_status(response.status())?;
        response.text().await.map_err(|e| EndpointError::Request(e.to_string()))
    }
}

fn check_status(status: StatusCode) -> Result<(), EndpointError> {
    if status.is_success() { Ok(()) } else { Err(EndpointError::Status { status: status.as_u16() }) }
}

#[async_trait::async_trait(?Send)]
impl RequirementsEndpoint for HttpEndpoint {
    async fn submit(&self, requirement: &Requirement) -> Result<SubmitResponse, EndpointError> {
        let body = submit_body(requirement)?;
        let response = self
            .http
            .post(self.url.clone())
            .header(CONTENT_TYPE, SUBMIT_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| EndpointError::Request(e.to_string()))?;
        let text = Self::read_body(response).await?;
        tracing::debug!(body = %text, "submit response");
        parse_submit_response(&text)
    }

    async fn search(&self, email: &str) -> Result<SearchResponse, EndpointError> {
        let response = self
            .http
            .get(search_url(&self.url, email))
            .send()
            .await
            .map_err(|e| EndpointError::Request(e.to_string()))?;
        let text = Self::read_body(response).await?;
        tracing::debug!(bytes = text.len(), "search response");
        parse_search_response(&text)
    }
}
