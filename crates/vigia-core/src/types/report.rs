//! Mission report catalog entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Artifact type tag for in-scope mission reports.
pub const MOEP_REPORT_TYPE: &str = "MOEP";

/// A single entry in the report catalog.
///
/// Derived on every catalog request by scanning the report directory;
/// never persisted or cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Bare file name, e.g. `MOEP_NG_INTEGRAL.html`.
    pub filename: String,
    /// Relative URL-safe path the static mount serves the file under.
    pub path: String,
    /// File size in kilobytes, rounded to one decimal.
    pub size_kb: f64,
    /// File modification time.
    pub created_at: DateTime<Utc>,
    /// Artifact type; always [`MOEP_REPORT_TYPE`] for in-scope files.
    #[serde(rename = "type")]
    pub report_type: String,
    /// ISO2 code parsed from the filename, or `"??"` when absent.
    pub country_iso: String,
}
