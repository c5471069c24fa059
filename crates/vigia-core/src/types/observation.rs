//! Field observation records and their classification enums.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Risk level of an observation.
///
/// Ordered: `Moderado < Alerta < Critico`. The set is closed — an
/// unrecognized severity string is a parse error, never a value that
/// silently passes severity filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Moderate risk.
    Moderado,
    /// Elevated risk requiring attention.
    Alerta,
    /// Critical risk.
    Critico,
}

impl Severity {
    /// Returns `true` if this severity counts toward the critical-risk KPI
    /// (ALERTA or CRITICO).
    pub fn is_critical_risk(&self) -> bool {
        *self >= Severity::Alerta
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MODERADO" => Ok(Severity::Moderado),
            "ALERTA" => Ok(Severity::Alerta),
            "CRITICO" => Ok(Severity::Critico),
            other => Err(Error::parse(format!("unrecognized severity '{other}'"))),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Moderado => write!(f, "MODERADO"),
            Severity::Alerta => write!(f, "ALERTA"),
            Severity::Critico => write!(f, "CRITICO"),
        }
    }
}

/// Thematic category of an observation.
///
/// The well-known categories drive KPI counters; anything else ingested
/// upstream is carried through as [`Category::Other`] rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Electoral irregularities (roll tampering, procedural violations).
    Irregularidad,
    /// Transparency concerns (result publication, access to tallies).
    Transparencia,
    /// Overseas / external voting.
    VotoExterior,
    /// Any other upstream category, preserved verbatim.
    Other(String),
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.as_str() {
            "IRREGULARIDAD" => Category::Irregularidad,
            "TRANSPARENCIA" => Category::Transparencia,
            "VOTO_EXTERIOR" => Category::VotoExterior,
            _ => Category::Other(s),
        }
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Irregularidad => write!(f, "IRREGULARIDAD"),
            Category::Transparencia => write!(f, "TRANSPARENCIA"),
            Category::VotoExterior => write!(f, "VOTO_EXTERIOR"),
            Category::Other(s) => write!(f, "{s}"),
        }
    }
}

/// A single field observation captured by the ingestion pipeline.
///
/// Immutable once stored; this service only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Unique, immutable identifier.
    pub id: i64,
    /// Thematic category.
    pub category: Category,
    /// Short headline for the observation.
    pub title: String,
    /// Optional indicator code the observation maps to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
    /// Risk level.
    pub severity: Severity,
    /// Capture timestamp, used for recency ordering.
    pub captured_at: DateTime<Utc>,
    /// Name of the reporting source.
    pub source_name: String,
    /// Link to the source material, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// ISO2 code of the country the observation belongs to.
    ///
    /// May be absent for older ingested rows; country association then
    /// falls back to text matching on category/source_name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_iso2: Option<String>,
}
