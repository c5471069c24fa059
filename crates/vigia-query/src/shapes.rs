//! Response record shapes.
//!
//! These are the flat result objects the query surface returns. Field
//! names are the wire contract the dashboard client consumes; renames here
//! are breaking changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use vigia_core::{Election, MonitoringStatus};

/// Top-level dashboard KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Count of all stored observations.
    pub total_observations: u64,
    /// Count of observations at ALERTA or CRITICO severity.
    pub critical_risk: u64,
    /// Count of VOTO_EXTERIOR observations.
    pub overseas_monitor: u64,
    /// Electoral risk index, 0–100 with one decimal.
    pub ire_index: f64,
    /// Count of elections under active monitoring.
    pub active_elections: u64,
}

/// Country reference nested in election list entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRef {
    /// Human-readable country name.
    pub name: String,
    /// ISO2 code.
    pub iso2: String,
}

/// One entry of the active-election list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionSummary {
    /// Election identifier.
    pub id: i64,
    /// ISO2 country code.
    pub country_iso2: String,
    /// Election date.
    pub election_date: NaiveDate,
    /// Free-text election type.
    pub election_type: String,
    /// Monitoring status (always ACTIVE in list views).
    pub status: MonitoringStatus,
    /// Nested country reference.
    pub countries: CountryRef,
}

impl From<Election> for ElectionSummary {
    fn from(e: Election) -> Self {
        Self {
            id: e.id,
            country_iso2: e.country_iso2.clone(),
            election_date: e.election_date,
            election_type: e.election_type,
            status: e.monitoring_status,
            countries: CountryRef {
                name: e.country_name,
                iso2: e.country_iso2,
            },
        }
    }
}

/// Election metadata block of the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionMetadata {
    /// Election identifier.
    pub id: i64,
    /// ISO2 country code.
    pub country_iso2: String,
    /// Human-readable country name.
    pub country_name: String,
    /// Election date.
    pub date: NaiveDate,
    /// Free-text election type.
    #[serde(rename = "type")]
    pub election_type: String,
    /// Monitoring status.
    pub status: MonitoringStatus,
}

impl From<Election> for ElectionMetadata {
    fn from(e: Election) -> Self {
        Self {
            id: e.id,
            country_iso2: e.country_iso2,
            country_name: e.country_name,
            date: e.election_date,
            election_type: e.election_type,
            status: e.monitoring_status,
        }
    }
}

/// Per-election risk stats block of the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionStats {
    /// Observations associated with this country.
    pub total_alerts: u64,
    /// Of those, observations at CRITICO severity.
    pub critical_alerts: u64,
    /// Sentiment signal supplied by an external pipeline.
    ///
    /// Not computed by this service; see
    /// [`engine::SENTIMENT_SCORE_PLACEHOLDER`](crate::engine::SENTIMENT_SCORE_PLACEHOLDER).
    pub sentiment_score: u32,
}

/// Full election detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionDetail {
    /// Election metadata.
    pub metadata: ElectionMetadata,
    /// Derived risk stats.
    pub stats: ElectionStats,
}
