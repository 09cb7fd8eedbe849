//! # Roster API Server Library
//!
//! This library provides the user directory web server: an in-memory list
//! of users managed through server-rendered HTML pages and form posts.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `middleware`: Response middleware
//! - `routes`: Route handlers
//! - `views`: HTML page rendering

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod views;
