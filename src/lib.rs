//! Tollgate - a small HTTP/1.1 server
//!
//! Parses a request per connection, resolves it to a view or a static
//! file, and writes back a single `Connection: Close` response.

pub mod app;
pub mod config;
pub mod http;
pub mod routing;
pub mod server;
pub mod static_files;
pub mod template;
pub mod views;
