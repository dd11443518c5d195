//! Attachment collector: size checks, list presentation, and base64 encoding.
//!
//! DESIGN
//! ======
//! The collector is generic over [`FileSource`] so the browser can hold
//! `web_sys::File` handles while the CLI holds paths. Oversized files are
//! rejected when a selection is accepted and never enter the collector, so
//! the rendered list and the encoded payload always agree.

#[cfg(test)]
#[path = "attachment_test.rs"]
mod attachment_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::EncodeError;
use crate::wire::AttachmentDescriptor;

/// Largest accepted attachment, in bytes (10 MiB).
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// MIME type used when the host cannot determine one.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// A selected file whose bytes can be read asynchronously.
#[async_trait::async_trait(?Send)]
pub trait FileSource {
    fn name(&self) -> String;
    fn mime_type(&self) -> String;
    fn size(&self) -> u64;
    async fn read_bytes(&self) -> Result<Vec<u8>, EncodeError>;
}

/// Display category derived from a file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileCategory {
    Pdf,
    Word,
    Excel,
    PowerPoint,
    Image,
    Archive,
    Generic,
}

impl FileCategory {
    /// Categorize by the text after the last `.`, case-insensitively.
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        let ext = name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Self::Pdf,
            "doc" | "docx" => Self::Word,
            "xls" | "xlsx" => Self::Excel,
            "ppt" | "pptx" => Self::PowerPoint,
            "jpg" | "jpeg" | "png" | "gif" => Self::Image,
            "zip" | "rar" => Self::Archive,
            _ => Self::Generic,
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Pdf => "fa-file-pdf",
            Self::Word => "fa-file-word",
            Self::Excel => "fa-file-excel",
            Self::PowerPoint => "fa-file-powerpoint",
            Self::Image => "fa-file-image",
            Self::Archive => "fa-file-zipper",
            Self::Generic => "fa-file",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Pdf => "#ef4444",
            Self::Word => "#2563eb",
            Self::Excel => "#16a34a",
            Self::PowerPoint => "#ea580c",
            Self::Image => "#9333ea",
            Self::Archive => "#ca8a04",
            Self::Generic => "#6b7280",
        }
    }
}

/// Size in MiB rounded to two decimals, e.g. `"2.50 MB"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size_mib(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// A file refused because it exceeds [`MAX_FILE_BYTES`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRejection {
    pub name: String,
    pub size_bytes: u64,
}

impl FileRejection {
    #[must_use]
    pub fn alert_message(&self) -> String {
        format!("File \"{}\" is too large. Maximum size is 10MB.", self.name)
    }
}

/// One row of the rendered attachment list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileListItem {
    pub index: usize,
    pub name: String,
    pub size_label: String,
    pub category: FileCategory,
}

/// Ordered set of files retained for the next submission.
#[derive(Clone, Debug)]
pub struct AttachmentCollector<F> {
    files: Vec<F>,
}

impl<F> Default for AttachmentCollector<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F: FileSource> AttachmentCollector<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current selection, dropping oversized files.
    ///
    /// Returns one rejection per dropped file, in selection order.
    pub fn select(&mut self, files: impl IntoIterator<Item = F>) -> Vec<FileRejection> {
        self.files.clear();
        let mut rejected = Vec::new();
        for file in files {
            let size = file.size();
            if size > MAX_FILE_BYTES {
                let name = file.name();
                tracing::warn!(file = %name, size, "attachment exceeds size limit");
                rejected.push(FileRejection { name, size_bytes: size });
                continue;
            }
            self.files.push(file);
        }
        rejected
    }

    /// Remove the file at `index`. Out-of-range positions are ignored.
    pub fn remove(&mut self, index: usize) -> Option<F> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    #[must_use]
    pub fn files(&self) -> &[F] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Presentation rows for the retained files.
    #[must_use]
    pub fn items(&self) -> Vec<FileListItem> {
        self.files
            .iter()
            .enumerate()
            .map(|(index, file)| {
                let name = file.name();
                FileListItem {
                    index,
                    category: FileCategory::from_file_name(&name),
                    size_label: format_size_mib(file.size()),
                    name,
                }
            })
            .collect()
    }

    /// Read and encode every retained file, preserving order.
    ///
    /// # Errors
    ///
    /// Returns the first [`EncodeError`] if any file cannot be read.
    pub async fn encode_all(&self) -> Result<Vec<AttachmentDescriptor>, EncodeError> {
        futures::future::try_join_all(self.files.iter().map(encode_file)).await
    }
}

/// Read one file and wrap it as an attachment descriptor.
///
/// # Errors
///
/// Propagates the file's read failure.
pub async fn encode_file<F: FileSource>(file: &F) -> Result<AttachmentDescriptor, EncodeError> {
    let bytes = file.read_bytes().await?;
    let mime_type = file.mime_type();
    Ok(AttachmentDescriptor {
        name: file.name(),
        mime_type: if mime_type.trim().is_empty() { FALLBACK_MIME_TYPE.to_owned() } else { mime_type },
        data: encode_bytes(&bytes),
    })
}

/// Standard padded base64.
#[must_use]
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Inverse of [`encode_bytes`].
///
/// # Errors
///
/// Returns the decoder's error for malformed input.
pub fn decode_bytes(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(data)
}
