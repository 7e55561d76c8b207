//! Genesis CLI library
//!
//! Command implementations and the server wiring, kept out of `main.rs`
//! so they can be tested.

pub mod commands;
pub mod server;
