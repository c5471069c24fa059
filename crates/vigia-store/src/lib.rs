//! Vigia Store — read-only data access for observations and elections.
//!
//! Defines the [`ObservationStore`] and [`ElectionRegistry`] contracts and
//! two interchangeable backends:
//!
//! - [`MemoryStore`]: a seeded in-memory dataset for demo deployments
//! - [`SqliteStore`]: a SQLite database read through a sqlx pool
//!
//! The backend is selected by configuration; the aggregation layer only
//! ever sees the trait objects.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod matching;
pub mod memory;
pub mod sqlite;

pub use backend::{connect, DataSource, ElectionRegistry, ObservationStore};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
