//! Report catalog scanner.
//!
//! The catalog is derived on every request by scanning the fixed `moep`
//! subdirectory of the reports root; nothing is cached. Only files named
//! `MOEP_<ISO>_INTEGRAL.<ext>` are in scope, everything else in the tree
//! is ignored.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};

use vigia_core::types::MOEP_REPORT_TYPE;
use vigia_core::{ReportEntry, Result};

/// Subdirectory of the reports root holding MOEP artifacts.
pub const MOEP_SUBDIR: &str = "moep";

/// Parses the ISO2 country token out of a report filename.
///
/// The code is the second underscore-delimited token; a filename with
/// fewer than two tokens yields `"??"`.
pub fn country_iso_of(filename: &str) -> String {
    filename
        .split('_')
        .nth(1)
        .map(str::to_string)
        .unwrap_or_else(|| "??".to_string())
}

/// Returns `true` for filenames matching `MOEP_<ISO>_INTEGRAL.<ext>`.
fn in_scope(filename: &str) -> bool {
    let Some((stem, ext)) = filename.rsplit_once('.') else {
        return false;
    };
    if ext.is_empty() {
        return false;
    }
    let tokens: Vec<&str> = stem.split('_').collect();
    matches!(tokens.as_slice(), ["MOEP", iso, "INTEGRAL"] if !iso.is_empty())
}

/// Scans the report tree under `root` and builds the catalog.
///
/// Entries are sorted ascending by country code, then filename. A missing
/// `moep` directory yields an empty catalog; any other filesystem failure
/// propagates.
pub fn list_reports(root: &Path) -> Result<Vec<ReportEntry>> {
    let dir = root.join(MOEP_SUBDIR);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "report directory missing, empty catalog");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut reports = Vec::new();
    for entry in entries {
        let entry = entry?;
        let filename = entry.file_name().to_string_lossy().into_owned();
        let metadata = entry.metadata()?;
        if !metadata.is_file() || !in_scope(&filename) {
            continue;
        }
        let size_kb = (metadata.len() as f64 / 1024.0 * 10.0).round() / 10.0;
        let created_at: DateTime<Utc> = metadata.modified()?.into();
        reports.push(ReportEntry {
            path: format!("/reports/{MOEP_SUBDIR}/{filename}"),
            size_kb,
            created_at,
            report_type: MOEP_REPORT_TYPE.to_string(),
            country_iso: country_iso_of(&filename),
            filename,
        });
    }

    reports.sort_by(|a, b| {
        a.country_iso
            .cmp(&b.country_iso)
            .then_with(|| a.filename.cmp(&b.filename))
    });
    Ok(reports)
}
