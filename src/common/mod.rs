//! Common types and utilities shared across the crate.
//!
//! Errors, length units and XML text helpers live here so that both the
//! OOXML writer and the policy layer can use them without depending on each
//! other.

// Submodule declarations
pub mod error;
pub mod len;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use len::Length;
