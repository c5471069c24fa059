//! Domain types for electoral observation data.
//!
//! All types here are read-only views over externally ingested records:
//! this service never creates, updates, or deletes them.

mod election;
mod observation;
mod report;

pub use election::{Election, MonitoringStatus};
pub use observation::{Category, Observation, Severity};
pub use report::{ReportEntry, MOEP_REPORT_TYPE};

/// Normalizes an ISO2 country code for lookups.
///
/// All country-scoped lookups are case-insensitive; backends compare
/// uppercase-normalized codes.
pub fn normalize_iso2(iso2: &str) -> String {
    iso2.trim().to_ascii_uppercase()
}
