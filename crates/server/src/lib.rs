//! KMP Trace Server - HTTP front end for the traceable KMP matcher
//!
//! This crate wraps [`matcher::search`] in a small axum service and serves
//! the browser viewer that replays the trace step by step.
//!
//! # Features
//!
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: JSON error responses with error codes
//! - **Metrics**: Prometheus text exposition of search counters and histograms
//! - **Graceful Shutdown**: Proper signal handling for production deployments
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
//! # Endpoints
//!
//! - `GET /` - Step-by-step viewer page
//! - `POST /kmp` - Traced search; body `{"text": "...", "pattern": "..."}`
//! - `POST /api/v1/kmp` - Same as `/kmp`
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `GET /api/v1/info` - Service metadata and input limits

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::{LogFormat, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
