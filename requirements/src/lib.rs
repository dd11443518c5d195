//! Shared requirement model and form flows.
//!
//! This crate owns everything the browser form and the companion CLI have in
//! common: the wire schema spoken with the remote endpoint, the attachment
//! collector, input validation, the submission and tracking flows, and the
//! card view-model used to render fetched records.
//!
//! It performs no I/O itself. Network access goes through the
//! [`RequirementsEndpoint`] trait and file access through [`FileSource`], so
//! each host (WASM or native) plugs in its own transport.

pub mod attachment;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod results;
pub mod richtext;
pub mod submit;
pub mod track;
pub mod validate;
pub mod view;
pub mod wire;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use attachment::{AttachmentCollector, FileCategory, FileSource, MAX_FILE_BYTES};
pub use config::EndpointConfig;
pub use endpoint::RequirementsEndpoint;
pub use error::{EncodeError, EndpointError, SearchError, SubmitError};
pub use results::{ResultSet, StatusFilter};
pub use richtext::RichTextSurface;
pub use submit::{SubmissionForm, SubmitPhase, SubmitState};
pub use track::{SearchPhase, TrackState};
pub use view::{RequirementCard, StatusBadge};
pub use wire::{AttachmentDescriptor, Requirement, RequirementRecord, SearchResponse, SubmitResponse};
