//! # Bosun CLI
//!
//! Developer tooling around the job content and hiring crates.

pub mod commands;
pub mod project;
