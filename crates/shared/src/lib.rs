//! # Bosun Shared
//!
//! Common types used across all Bosun crates: identifiers, the
//! attribute-bearing content tree, the content error taxonomy, random domains
//! and project configuration.

pub mod config;
pub mod element;
pub mod error;
pub mod identifier;
pub mod random;
pub mod values;

// Re-exports
pub use config::*;
pub use element::*;
pub use error::*;
pub use identifier::*;
pub use random::*;
pub use values::*;
