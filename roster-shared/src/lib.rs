//! # Roster Shared Library
//!
//! This crate contains the in-memory models used by both Roster programs:
//! the user directory web server and the console item list.
//!
//! ## Module Organization
//!
//! - `models`: In-memory stores and their record types

pub mod models;

/// Current version of the Roster shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
