//! Browser `File` handles as attachment sources.
//!
//! Name, size, and MIME type are captured when the user picks the file so
//! the size check and file list never touch the handle. Bytes are read only
//! when a submission encodes its attachments.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use requirements::FileSource;
use requirements::error::EncodeError;

#[derive(Clone, Debug)]
pub struct BrowserFile {
    name: String,
    mime_type: String,
    size: u64,
    #[cfg(feature = "csr")]
    handle: web_sys::File,
}

impl BrowserFile {
    #[cfg(feature = "csr")]
    #[must_use]
    pub fn new(handle: web_sys::File) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = handle.size().max(0.0) as u64;
        Self { name: handle.name(), mime_type: handle.type_(), size, handle }
    }

    #[cfg(not(feature = "csr"))]
    #[must_use]
    pub fn new(name: &str, mime_type: &str, size: u64) -> Self {
        Self { name: name.to_owned(), mime_type: mime_type.to_owned(), size }
    }
}

/// Every file currently held by a file input, in selection order.
#[cfg(feature = "csr")]
#[must_use]
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Vec<BrowserFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).map(BrowserFile::new).collect()
}

#[cfg(any(test, feature = "csr"))]
fn read_failed(name: &str, reason: &str) -> EncodeError {
    EncodeError::Read { name: name.to_owned(), reason: reason.to_owned() }
}

#[async_trait::async_trait(?Send)]
impl FileSource for BrowserFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        #[cfg(feature = "csr")]
        {
            let buffer = wasm_bindgen_futures::JsFuture::from(self.handle.array_buffer())
                .await
                .map_err(|e| read_failed(&self.name, &format!("{e:?}")))?;
            Ok(js_sys::Uint8Array::new(&buffer).to_vec())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(EncodeError::Read { name: self.name.clone(), reason: "file access requires a browser".to_owned() })
        }
    }
}
