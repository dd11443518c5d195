//! Submission flow: validate, encode attachments, POST, reflect outcome.
//!
//! SYSTEM CONTEXT
//! ==============
//! The endpoint contract is the JSON-aware one: the reply carries a
//! `success` flag and optional `message`, and `success: false` is surfaced as
//! an error. Nothing is retried.
//!
//! [`SubmitState`] holds the loading/success/error indicator and doubles as
//! the re-entrancy guard: a second submit while loading is refused.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use chrono::{SecondsFormat, Utc};

use crate::attachment::{AttachmentCollector, FileSource};
use crate::endpoint::RequirementsEndpoint;
use crate::error::SubmitError;
use crate::richtext::{RichTextSurface, has_visible_text};
use crate::validate::normalize_email;
use crate::wire::{AttachmentDescriptor, INITIAL_STATUS, Requirement};

/// How long the success indicator stays up.
pub const SUCCESS_DISPLAY_SECS: u64 = 5;

/// Raw values of the plain form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub member_name: String,
    pub member_email: String,
    pub department: String,
    pub priority: String,
    pub title: String,
}

impl SubmissionForm {
    /// Assemble the outbound payload from the inputs.
    ///
    /// Email is trimmed and lower-cased, name and title trimmed, the select
    /// values passed through verbatim.
    #[must_use]
    pub fn to_requirement(
        &self,
        description_html: &str,
        files: Vec<AttachmentDescriptor>,
        timestamp: String,
    ) -> Requirement {
        Requirement {
            member_name: self.member_name.trim().to_owned(),
            member_email: normalize_email(&self.member_email),
            department: self.department.clone(),
            priority: self.priority.clone(),
            title: self.title.trim().to_owned(),
            description: description_html.to_owned(),
            timestamp,
            status: INITIAL_STATUS.to_owned(),
            files,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Current time as RFC 3339 UTC with millisecond precision.
#[must_use]
pub fn submission_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Reject descriptions with no visible text.
///
/// # Errors
///
/// Returns [`SubmitError::EmptyDescription`].
pub fn check_description(plain_text: &str) -> Result<(), SubmitError> {
    if has_visible_text(plain_text) { Ok(()) } else { Err(SubmitError::EmptyDescription) }
}

/// Indicator shown by the submit tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub phase: SubmitPhase,
    /// Bumped on every accepted submission; stale success timers compare
    /// against it.
    pub generation: u64,
}

impl SubmitState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SubmitPhase::Loading
    }

    /// Enter the loading state, clearing any prior success or error.
    ///
    /// Returns the new generation, or `None` if a submission is in flight.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_loading() {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.phase = SubmitPhase::Loading;
        Some(self.generation)
    }

    /// Leave the loading state. Returns `true` when the form should reset.
    pub fn complete(&mut self, result: &Result<Option<String>, SubmitError>) -> bool {
        match result {
            Ok(_) => {
                self.phase = SubmitPhase::Success;
                true
            }
            Err(err) if err.is_validation() => {
                self.phase = SubmitPhase::Idle;
                false
            }
            Err(err) => {
                self.phase = SubmitPhase::Error(err.user_message());
                false
            }
        }
    }

    /// Auto-hide the success indicator if `generation` is still current.
    pub fn expire_success(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.phase == SubmitPhase::Success {
            self.phase = SubmitPhase::Idle;
            return true;
        }
        false
    }

    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, SubmitPhase::Error(_)) {
            self.phase = SubmitPhase::Idle;
        }
    }
}

/// Validate, encode, and send one requirement.
///
/// Returns the endpoint's optional success message.
///
/// # Errors
///
/// - [`SubmitError::EmptyDescription`] before any I/O when the text is blank
/// - [`SubmitError::Encode`] when an attachment cannot be read
/// - [`SubmitError::Endpoint`] on transport or decode failure
/// - [`SubmitError::Rejected`] when the endpoint answers `success: false`
pub async fn submit_requirement<E, F>(
    endpoint: &E,
    form: &SubmissionForm,
    description_html: &str,
    description_text: &str,
    attachments: &AttachmentCollector<F>,
) -> Result<Option<String>, SubmitError>
where
    E: RequirementsEndpoint + ?Sized,
    F: FileSource,
{
    check_description(description_text)?;

    let files = attachments.encode_all().await?;
    let requirement = form.to_requirement(description_html, files, submission_timestamp());
    tracing::info!(
        title = %requirement.title,
        email = %requirement.member_email,
        files = requirement.files.len(),
        "submitting requirement"
    );

    let response = endpoint.submit(&requirement).await?;
    if !response.success {
        tracing::warn!(message = ?response.message, "requirement rejected by endpoint");
        return Err(SubmitError::Rejected { message: response.message });
    }
    tracing::info!("requirement submitted");
    Ok(response.message)
}

/// Drive a whole submission against owned form state.
///
/// On success the form, the attachment list, and the rich-text surface are
/// reset. On failure everything is left as the user entered it.
///
/// # Errors
///
/// Same as [`submit_requirement`], plus [`SubmitError::InProgress`] when the
/// state is already loading.
pub async fn run_submission<E, F, S>(
    state: &mut SubmitState,
    endpoint: &E,
    form: &mut SubmissionForm,
    surface: &S,
    attachments: &mut AttachmentCollector<F>,
) -> Result<Option<String>, SubmitError>
where
    E: RequirementsEndpoint + ?Sized,
    F: FileSource,
    S: RichTextSurface + ?Sized,
{
    check_description(&surface.plain_text())?;
    if state.begin().is_none() {
        return Err(SubmitError::InProgress);
    }

    let result = submit_requirement(endpoint, form, &surface.html(), &surface.plain_text(), attachments).await;
    if let Err(err) = &result {
        tracing::warn!(error = %err, "submission failed");
    }
    if state.complete(&result) {
        form.clear();
        attachments.clear();
        surface.clear();
    }
    result
}
