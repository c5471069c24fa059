//! Vigia Query — the aggregation layer.
//!
//! Turns raw observation and election rows into the derived dashboard
//! metrics (KPIs, per-election risk stats) and builds the report catalog
//! from a directory scan. This is the only crate with computed semantics;
//! the HTTP binding above it and the stores below it are collaborators.
//!
//! # Modules
//!
//! - [`engine`]: dashboard KPIs and per-election detail
//! - [`reports`]: report catalog scanner
//! - [`shapes`]: response record shapes

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod reports;
pub mod shapes;

#[cfg(test)]
mod proptests;

pub use engine::{ire_index, Engine};
pub use reports::{country_iso_of, list_reports};
pub use shapes::{
    CountryRef, DashboardStats, ElectionDetail, ElectionMetadata, ElectionStats, ElectionSummary,
};
