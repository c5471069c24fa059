//! Election (mission) records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lifecycle status of an election under monitoring.
///
/// Only `Active` elections appear in list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MonitoringStatus {
    /// Mission planned, monitoring not yet started.
    Pending,
    /// Mission in the field.
    Active,
    /// Mission concluded.
    Closed,
}

impl FromStr for MonitoringStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(MonitoringStatus::Pending),
            "ACTIVE" => Ok(MonitoringStatus::Active),
            "CLOSED" => Ok(MonitoringStatus::Closed),
            other => Err(Error::parse(format!(
                "unrecognized monitoring status '{other}'"
            ))),
        }
    }
}

impl fmt::Display for MonitoringStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitoringStatus::Pending => write!(f, "PENDING"),
            MonitoringStatus::Active => write!(f, "ACTIVE"),
            MonitoringStatus::Closed => write!(f, "CLOSED"),
        }
    }
}

/// An election being monitored by an observation mission.
///
/// Created and updated by an external election-tracking process; this
/// service only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Election {
    /// Unique identifier.
    pub id: i64,
    /// ISO2 country code. Stored uppercase; lookups normalize before
    /// comparing.
    pub country_iso2: String,
    /// Human-readable country name.
    pub country_name: String,
    /// Free-text election type (Presidential, General, Referendum, ...).
    pub election_type: String,
    /// Calendar date of the election.
    pub election_date: NaiveDate,
    /// Current monitoring lifecycle status.
    pub monitoring_status: MonitoringStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_roundtrip() {
        for s in ["PENDING", "ACTIVE", "CLOSED"] {
            assert_eq!(s.parse::<MonitoringStatus>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        let err = "SUSPENDED".parse::<MonitoringStatus>().unwrap_err();
        assert!(err.to_string().contains("SUSPENDED"));
    }

    #[test]
    fn test_election_serde_shape() {
        let election = Election {
            id: 1,
            country_iso2: "UG".to_string(),
            country_name: "Uganda".to_string(),
            election_type: "Presidential".to_string(),
            election_date: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
            monitoring_status: MonitoringStatus::Active,
        };
        let json = serde_json::to_value(&election).unwrap();
        assert_eq!(json["election_date"], "2026-02-15");
        assert_eq!(json["monitoring_status"], "ACTIVE");
    }
}
