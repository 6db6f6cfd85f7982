//! Restart-core: Shared types, errors, and configuration
//!
//! This crate provides the foundational types used across the Restart workspace.

pub mod config;
pub mod errors;
pub mod format;
pub mod types;

pub use config::*;
pub use errors::*;
pub use format::*;
pub use types::*;
