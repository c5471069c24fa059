//! Vigia API — HTTP binding for the aggregation layer.
//!
//! This crate is plumbing: it mounts the query surface on axum routes,
//! applies CORS, serves report artifacts statically, and maps the error
//! taxonomy onto status codes. All computed semantics live in
//! `vigia-query`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use routes::router;
pub use server::serve;
