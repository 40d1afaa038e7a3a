//! Office Open XML (OOXML) writing.
//!
//! The module is organized into two layers:
//!
//! 1. **OPC Layer** (`opc`): package handling (ZIP, parts, relationships)
//! 2. **WordprocessingML** (`docx`): the document model, its serializer and a
//!    structural reader for checking what was written
//!
//! # Example
//!
//! ```rust
//! use rtlscribe::ooxml::docx::{DocxSummary, MutableDocument, ParagraphAlignment};
//!
//! let mut doc = MutableDocument::new();
//! doc.add_paragraph_with_text("سلام")
//!     .set_alignment(ParagraphAlignment::Right)
//!     .set_bidi(true);
//!
//! let bytes = doc.to_bytes()?;
//! let summary = DocxSummary::from_bytes(&bytes)?;
//! assert_eq!(summary.paragraphs[0].text(), "سلام");
//! # Ok::<(), rtlscribe::ooxml::error::OoxmlError>(())
//! ```
pub mod docx;
pub mod error;
pub mod opc;

pub use error::{OoxmlError, Result};
