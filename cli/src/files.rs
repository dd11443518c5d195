//! Local-file attachments and description input for the CLI.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use requirements::error::EncodeError;
use requirements::richtext::plain_text_from_html;
use requirements::{FileSource, RichTextSurface};

/// An attachment read from disk at submit time.
#[derive(Clone, Debug)]
pub struct PathFile {
    path: PathBuf,
    name: String,
    size: u64,
}

impl PathFile {
    /// Stat `path` so the size check can run before any bytes are read.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be inspected.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let size = std::fs::metadata(path)?.len();
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self { path: path.to_path_buf(), name, size })
    }
}

#[async_trait::async_trait(?Send)]
impl FileSource for PathFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        guess_mime_type(&self.name).to_owned()
    }

    fn size(&self) -> u64 {
        self.size
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| EncodeError::Read { name: self.name.clone(), reason: e.to_string() })
    }
}

/// MIME type for the extensions the form knows about.
#[must_use]
pub fn guess_mime_type(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "zip" => "application/zip",
        "rar" => "application/vnd.rar",
        "txt" => "text/plain",
        "csv" => "text/csv",
        _ => "application/octet-stream",
    }
}

/// Description supplied as an HTML string on the command line.
pub struct HtmlDescription {
    html: RefCell<String>,
}

impl HtmlDescription {
    #[must_use]
    pub fn new(html: String) -> Self {
        Self { html: RefCell::new(html) }
    }
}

impl RichTextSurface for HtmlDescription {
    fn html(&self) -> String {
        self.html.borrow().clone()
    }

    fn plain_text(&self) -> String {
        plain_text_from_html(&self.html.borrow())
    }

    fn clear(&self) {
        self.html.borrow_mut().clear();
    }
}
