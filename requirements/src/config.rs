//! Endpoint configuration.
//!
//! The variable names are shared by the CLI's flag fallbacks and the
//! browser's build-time lookup.

use url::Url;

use crate::error::EndpointError;

pub const ENDPOINT_URL_ENV: &str = "REQDESK_ENDPOINT_URL";
pub const REQUEST_TIMEOUT_ENV: &str = "REQDESK_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_ENV: &str = "REQDESK_CONNECT_TIMEOUT_SECS";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub url: Url,
    pub timeouts: Timeouts,
}

impl EndpointConfig {
    /// Build a config for `raw_url` with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError::Config`] if the URL does not parse or is not
    /// `http`/`https`.
    pub fn new(raw_url: &str) -> Result<Self, EndpointError> {
        Ok(Self { url: parse_endpoint_url(raw_url)?, timeouts: Timeouts::default() })
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }
}

/// Parse and check an endpoint URL.
///
/// # Errors
///
/// Returns [`EndpointError::Config`] for unparsable or non-HTTP URLs.
pub fn parse_endpoint_url(raw: &str) -> Result<Url, EndpointError> {
    let url = Url::parse(raw.trim()).map_err(|e| EndpointError::Config(format!("invalid endpoint URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(EndpointError::Config(format!("unsupported endpoint scheme '{other}'"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
