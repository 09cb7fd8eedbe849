/// Route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `pages`: Landing page and the not-found fallback
/// - `users`: User directory CRUD pages and form handlers

pub mod pages;
pub mod users;
