//! String Analyzer Server - HTTP REST API for analyzed strings
//!
//! Accepts strings, computes their descriptive properties (length,
//! palindrome check, unique characters, word count, character frequency,
//! SHA-256 identity), persists them to a JSON document and serves lookup,
//! filtered listing and deletion.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /strings` - Analyze and store `{ "value": "..." }` (201, 400, 409, 422)
//! - `GET /strings/{value}` - Fetch by original value (200, 404)
//! - `GET /strings` - List with `is_palindrome`, `min_length`, `max_length`,
//!   `word_count`, `contains_character` filters (200, 400)
//! - `DELETE /strings/{value}` - Delete by original value (204, 404)
//! - `GET /`, `GET /health`, `GET /ready` - Info and probes
//!
//! Every error body is `{ "error": "<message>" }`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
