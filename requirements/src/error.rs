//! Error types for endpoint access and the two form flows.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures are reported before any network call and map to
//! blocking alerts. Endpoint failures map to the inline error indicator.
//! `user_message` on each flow error yields the exact text the UI shows.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback text when a failure carries no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Shown when the endpoint rejects a submission without a message.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Submission failed";

/// Shown when a search request fails outright.
pub const SEARCH_FAILED_MESSAGE: &str = "Error loading requirements. Please try again.";

/// Failure talking to the remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    /// The endpoint URL or client settings are unusable.
    #[error("endpoint not configured: {0}")]
    Config(String),

    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("endpoint returned status {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Failure reading or encoding an attachment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("could not read \"{name}\": {reason}")]
    Read { name: String, reason: String },
}

/// Failure of the submission flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The rich-text description has no visible text.
    #[error("Please provide a detailed description of your requirement")]
    EmptyDescription,

    /// A previous submission has not finished yet.
    #[error("A submission is already in progress")]
    InProgress,

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    /// The endpoint answered `success: false`.
    #[error("{}", message.as_deref().unwrap_or(SUBMISSION_FAILED_MESSAGE))]
    Rejected { message: Option<String> },
}

impl SubmitError {
    /// Whether this failure was decided locally, before any network call.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyDescription | Self::InProgress)
    }

    /// Text displayed to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_owned()
        } else {
            message
        }
    }
}

/// Failure of the tracking flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Please enter your email address")]
    EmptyEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// A previous search has not finished yet.
    #[error("A search is already in progress")]
    InProgress,

    #[error(transparent)]
    Endpoint(#[from] EndpointError),
}

impl SearchError {
    /// Whether this failure was decided locally, before any network call.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyEmail | Self::InvalidEmail | Self::InProgress)
    }

    /// Text displayed to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Endpoint(_) => SEARCH_FAILED_MESSAGE.to_owned(),
            other => other.to_string(),
        }
    }
}
