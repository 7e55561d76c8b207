//! # Genesis Shared
//!
//! Error type and configuration used across the Genesis crates.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
