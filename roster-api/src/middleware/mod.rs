/// Middleware modules for the directory server
///
/// - `security`: Security headers on every response

pub mod security;
