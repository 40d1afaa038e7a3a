//! rtlscribe - Right-to-left Word documents from plain text
//!
//! Turns a plain text message into a `.docx` where every line is a
//! right-aligned, right-to-left paragraph in one font, inside a page with
//! equal margins and a double page border. Lines that start with a bullet
//! glyph or a number (ASCII or Persian digits) get a hanging indent.
//!
//! # Features
//!
//! - **Line classification**: bullet, numbered or plain, robust to a leading RTL mark
//! - **Formatting policy**: font, margins, indents and border as a plain value, loadable from YAML
//! - **OOXML writer**: OPC packaging and WordprocessingML serialization in memory
//! - **Read-back**: inspect what a built document contains
//! - **Delivery**: answer inbound chat updates through any [`delivery::MessageSink`]
//!
//! # Example - Building a document
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = rtlscribe::build("سلام\n• مورد اول\n۱. مورد دوم")?;
//! assert_eq!(&bytes[..2], b"PK");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Custom policy
//!
//! ```
//! use rtlscribe::{DocumentBuilder, FormatPolicy};
//! use rtlscribe::ooxml::docx::DocxSummary;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let policy = FormatPolicy {
//!     font_family: "Vazirmatn".to_string(),
//!     ..FormatPolicy::default()
//! };
//! let builder = DocumentBuilder::new(policy)?;
//! let summary = DocxSummary::from_bytes(&builder.build("متن")?)?;
//! assert!(summary.style("Normal").unwrap().fonts.all_are("Vazirmatn"));
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod builder;
pub mod classify;
pub mod common;
pub mod delivery;
pub mod ooxml;
pub mod policy;

pub use artifact::DocxArtifact;
pub use builder::DocumentBuilder;
pub use classify::{LineKind, classify};
pub use common::{Error, Result};
pub use policy::FormatPolicy;

/// Build a `.docx` from plain text with the default policy.
pub fn build(raw: &str) -> Result<Vec<u8>> {
    DocumentBuilder::default().build(raw)
}
