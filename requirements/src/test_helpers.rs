//! Shared fakes for flow tests.

use std::cell::RefCell;
use std::sync::Mutex;

use crate::attachment::FileSource;
use crate::endpoint::RequirementsEndpoint;
use crate::error::{EncodeError, EndpointError};
use crate::richtext::RichTextSurface;
use crate::wire::{Requirement, RequirementRecord, SearchResponse, SubmitResponse};

pub const MIB: u64 = 1024 * 1024;

// =========================================================================
// MockFile
// =========================================================================

#[derive(Clone, Debug)]
pub struct MockFile {
    pub name: &'static str,
    pub mime: &'static str,
    pub size: u64,
    pub bytes: Vec<u8>,
    pub fail: bool,
}

impl MockFile {
    pub fn new(name: &'static str, bytes: &[u8]) -> Self {
        Self { name, mime: "application/pdf", size: bytes.len() as u64, bytes: bytes.to_vec(), fail: false }
    }

    /// A file that reports `size` bytes without holding them.
    pub fn sized(name: &'static str, size: u64) -> Self {
        Self { name, mime: "image/png", size, bytes: vec![1, 2, 3], fail: false }
    }
}

#[async_trait::async_trait(?Send)]
impl FileSource for MockFile {
    fn name(&self) -> String {
        self.name.to_owned()
    }

    fn mime_type(&self) -> String {
        self.mime.to_owned()
    }

    fn size(&self) -> u64 {
        self.size
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        if self.fail {
            return Err(EncodeError::Read { name: self.name.to_owned(), reason: "unreadable".to_owned() });
        }
        Ok(self.bytes.clone())
    }
}

// =========================================================================
// MockEndpoint
// =========================================================================

/// Endpoint returning canned replies and recording every call.
#[derive(Default)]
pub struct MockEndpoint {
    pub submit_reply: Mutex<Option<Result<SubmitResponse, EndpointError>>>,
    pub search_reply: Mutex<Option<Result<SearchResponse, EndpointError>>>,
    pub submitted: Mutex<Vec<Requirement>>,
    pub searched: Mutex<Vec<String>>,
}

impl MockEndpoint {
    pub fn with_submit(reply: Result<SubmitResponse, EndpointError>) -> Self {
        Self { submit_reply: Mutex::new(Some(reply)), ..Self::default() }
    }

    pub fn with_search(reply: Result<SearchResponse, EndpointError>) -> Self {
        Self { search_reply: Mutex::new(Some(reply)), ..Self::default() }
    }

    pub fn call_count(&self) -> usize {
        self.submitted.lock().unwrap().len() + self.searched.lock().unwrap().len()
    }
}

#[async_trait::async_trait(?Send)]
impl RequirementsEndpoint for MockEndpoint {
    async fn submit(&self, requirement: &Requirement) -> Result<SubmitResponse, EndpointError> {
        self.submitted.lock().unwrap().push(requirement.clone());
        self.submit_reply
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(SubmitResponse { success: true, message: None }))
    }

    async fn search(&self, email: &str) -> Result<SearchResponse, EndpointError> {
        self.searched.lock().unwrap().push(email.to_owned());
        self.search_reply
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(SearchResponse::default()))
    }
}

// =========================================================================
// MockSurface
// =========================================================================

pub struct MockSurface {
    pub html: RefCell<String>,
    pub text: RefCell<String>,
}

impl MockSurface {
    pub fn new(html: &str, text: &str) -> Self {
        Self { html: RefCell::new(html.to_owned()), text: RefCell::new(text.to_owned()) }
    }
}

impl RichTextSurface for MockSurface {
    fn html(&self) -> String {
        self.html.borrow().clone()
    }

    fn plain_text(&self) -> String {
        self.text.borrow().clone()
    }

    fn clear(&self) {
        self.html.replace("<p><br></p>".to_owned());
        self.text.replace("\n".to_owned());
    }
}

pub fn record(title: &str, status: &str) -> RequirementRecord {
    RequirementRecord {
        title: title.to_owned(),
        status: status.to_owned(),
        timestamp: "2026-10-17T15:04:00.000Z".to_owned(),
        ..RequirementRecord::default()
    }
}
