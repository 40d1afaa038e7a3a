//! Open Packaging Conventions (OPC) implementation.
//!
//! The packaging layer for the documents this crate writes:
//!
//! - Content type and relationship constants
//! - Part names (`PackURI`) and relationships
//! - In-memory package assembly
//! - ZIP-based physical packaging

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use error::OpcError;
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
