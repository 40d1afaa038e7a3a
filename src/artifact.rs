//! The built document as handed to a delivery channel.

use crate::common::Result;
use crate::ooxml::opc::constants::content_type as ct;
use std::path::Path;

/// Suggested filename for every built document.
pub const ARTIFACT_FILENAME: &str = "خروجی_قالب_RTL_Arial.docx";

/// MIME type of a WordprocessingML document.
pub const DOCX_MIME_TYPE: &str = ct::WML_DOCUMENT;

/// `.docx` bytes with the filename and MIME type they are delivered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxArtifact {
    bytes: Vec<u8>,
}

impl DocxArtifact {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[inline]
    pub fn filename(&self) -> &'static str {
        ARTIFACT_FILENAME
    }

    #[inline]
    pub fn mime_type(&self) -> &'static str {
        DOCX_MIME_TYPE
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the bytes to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}
