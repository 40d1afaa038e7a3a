//! Unified error types for rtlscribe.
//!
//! This module provides a unified error type that encompasses packaging, markup,
//! configuration and input errors, presenting a consistent API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
