//! Vigia Core — shared types, errors, and configuration.
//!
//! This crate provides the foundational types used across all Vigia crates.
//! It has no internal Vigia dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`types`]: Domain types (observations, elections, reports)
//! - [`config`]: Service configuration

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

// Re-export key types at crate root for convenience
pub use config::{Config, DataBackend};
pub use error::{Error, Result};
pub use types::{
    Category, Election, MonitoringStatus, Observation, ReportEntry, Severity,
};
