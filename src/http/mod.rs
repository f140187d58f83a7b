//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request per connection, one
//! read per request, and every response closes the connection.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection worker and its state machine
//! - **`parser`**: parses a request out of a byte buffer
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: frames responses and writes them to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Worker State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One bounded read
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Parsing   │
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐    no route: static file or 404
//!        │  Resolving  │ ───────────────────────┐
//!        └──────┬──────┘                        │
//!               ▼                               │
//!        ┌─────────────┐                        │
//!        │ Dispatching │                        │
//!        └──────┬──────┘                        │
//!               ▼                               │
//!        ┌─────────────┐                        │
//!        │  Building   │ ◄──────────────────────┘
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Sending   │
//!        └──────┬──────┘
//!               ▼
//!            Closed      ← also reached directly from any failure
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tollgate::app::App;
//! use tollgate::http::connection::Worker;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = Arc::new(App::from_config(&Default::default())?);
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, peer) = listener.accept().await?;
//!         tokio::spawn(Worker::new(socket, peer, Arc::clone(&app)).run());
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
