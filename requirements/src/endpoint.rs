//! Transport seam for the remote requirements endpoint.
//!
//! Hosts implement [`RequirementsEndpoint`] with their HTTP stack (`gloo-net`
//! in the browser, `reqwest` in the CLI). Flows only see the decoded JSON
//! responses; any transport or decode failure is an [`EndpointError`].

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use url::Url;

use crate::error::EndpointError;
use crate::wire::{ACTION_SEARCH, Requirement, SearchResponse, SubmitEnvelope, SubmitResponse};

#[async_trait::async_trait(?Send)]
pub trait RequirementsEndpoint {
    /// POST a requirement and decode the `{ success, message }` reply.
    async fn submit(&self, requirement: &Requirement) -> Result<SubmitResponse, EndpointError>;

    /// GET all requirements filed under `email`.
    async fn search(&self, email: &str) -> Result<SearchResponse, EndpointError>;
}

/// Build the search URL: `<base>?action=getRequirements&email=<urlencoded>`.
#[must_use]
pub fn search_url(base: &Url, email: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("action", ACTION_SEARCH)
        .append_pair("email", email);
    url
}

/// Serialize the submit body.
///
/// # Errors
///
/// Returns [`EndpointError::Decode`] if the requirement cannot be encoded.
pub fn submit_body(requirement: &Requirement) -> Result<String, EndpointError> {
    serde_json::to_string(&SubmitEnvelope::new(requirement)).map_err(|e| EndpointError::Decode(e.to_string()))
}

/// Decode a submit reply body.
///
/// # Errors
///
/// Returns [`EndpointError::Decode`] for non-JSON bodies.
pub fn parse_submit_response(body: &str) -> Result<SubmitResponse, EndpointError> {
    serde_json::from_str(body).map_err(|e| EndpointError::Decode(e.to_string()))
}

/// Decode a search reply body.
///
/// # Errors
///
/// Returns [`EndpointError::Decode`] for non-JSON bodies.
pub fn parse_search_response(body: &str) -> Result<SearchResponse, EndpointError> {
    serde_json::from_str(body).map_err(|e| EndpointError::Decode(e.to_string()))
}
