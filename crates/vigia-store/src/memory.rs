//! In-memory backend with a seeded demo dataset.

use async_trait::async_trait;
use chrono::NaiveDate;

use vigia_core::types::normalize_iso2;
use vigia_core::{Category, Election, MonitoringStatus, Observation, Result, Severity};

use crate::backend::{ElectionRegistry, ObservationStore};
use crate::matching;

/// Read-only in-memory store serving both contracts.
///
/// Used for demo deployments and as the test double for the aggregation
/// layer. Rows are fixed at construction.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    observations: Vec<Observation>,
    elections: Vec<Election>,
}

impl MemoryStore {
    /// Creates a store over the given rows.
    pub fn new(observations: Vec<Observation>, elections: Vec<Election>) -> Self {
        Self {
            observations,
            elections,
        }
    }

    /// Creates a store holding the seeded demo dataset.
    pub fn seeded() -> Self {
        Self::new(seed_observations(), seed_elections())
    }
}

#[async_trait]
impl ObservationStore for MemoryStore {
    async fn latest(&self, limit: usize) -> Result<Vec<Observation>> {
        let mut rows = self.observations.clone();
        rows.sort_by(|a, b| b.captured_at.cmp(&a.captured_at));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn for_country(&self, iso2: &str, country_name: &str) -> Result<Vec<Observation>> {
        Ok(self
            .observations
            .iter()
            .filter(|o| matching::matches_country(o, iso2, country_name))
            .cloned()
            .collect())
    }

    async fn count_all(&self) -> Result<u64> {
        Ok(self.observations.len() as u64)
    }

    async fn count_with_min_severity(&self, min: Severity) -> Result<u64> {
        Ok(self
            .observations
            .iter()
            .filter(|o| o.severity >= min)
            .count() as u64)
    }

    async fn count_in_category(&self, category: &Category) -> Result<u64> {
        Ok(self
            .observations
            .iter()
            .filter(|o| &o.category == category)
            .count() as u64)
    }
}

#[async_trait]
impl ElectionRegistry for MemoryStore {
    async fn list_active(&self) -> Result<Vec<Election>> {
        let mut rows: Vec<Election> = self
            .elections
            .iter()
            .filter(|e| e.monitoring_status == MonitoringStatus::Active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.election_date.cmp(&b.election_date));
        Ok(rows)
    }

    async fn get_by_iso(&self, iso2: &str) -> Result<Option<Election>> {
        let iso2 = normalize_iso2(iso2);
        Ok(self
            .elections
            .iter()
            .filter(|e| normalize_iso2(&e.country_iso2) == iso2)
            .min_by_key(|e| e.election_date)
            .cloned())
    }

    async fn count_active(&self) -> Result<u64> {
        Ok(self
            .elections
            .iter()
            .filter(|e| e.monitoring_status == MonitoringStatus::Active)
            .count() as u64)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn seed_elections() -> Vec<Election> {
    vec![
        Election {
            id: 1,
            country_iso2: "UG".to_string(),
            country_name: "Uganda".to_string(),
            election_type: "Presidential".to_string(),
            election_date: date(2026, 2, 15),
            monitoring_status: MonitoringStatus::Active,
        },
        Election {
            id: 2,
            country_iso2: "NG".to_string(),
            country_name: "Nigeria".to_string(),
            election_type: "General".to_string(),
            election_date: date(2026, 3, 1),
            monitoring_status: MonitoringStatus::Active,
        },
        Election {
            id: 3,
            country_iso2: "CO".to_string(),
            country_name: "Colombia".to_string(),
            election_type: "Congressional".to_string(),
            election_date: date(2026, 3, 15),
            monitoring_status: MonitoringStatus::Active,
        },
        Election {
            id: 4,
            country_iso2: "CR".to_string(),
            country_name: "Costa Rica".to_string(),
            election_type: "Presidential".to_string(),
            election_date: date(2026, 4, 6),
            monitoring_status: MonitoringStatus::Active,
        },
        Election {
            id: 5,
            country_iso2: "EC".to_string(),
            country_name: "Ecuador".to_string(),
            election_type: "Referendum".to_string(),
            election_date: date(2026, 5, 1),
            monitoring_status: MonitoringStatus::Pending,
        },
    ]
}

fn seed_observations() -> Vec<Observation> {
    fn ts(s: &str) -> chrono::DateTime<chrono::Utc> {
        s.parse().unwrap_or_default()
    }
    vec![
        Observation {
            id: 1,
            category: Category::Irregularidad,
            title: "Posibles irregularidades en padrón electoral".to_string(),
            indicator: None,
            severity: Severity::Alerta,
            captured_at: ts("2026-02-06T10:30:00Z"),
            source_name: "Electoral Commission".to_string(),
            source_url: None,
            country_iso2: Some("UG".to_string()),
        },
        Observation {
            id: 2,
            category: Category::Transparencia,
            title: "Demoras en publicación de resultados".to_string(),
            indicator: None,
            severity: Severity::Critico,
            captured_at: ts("2026-02-06T11:15:00Z"),
            source_name: "INEC Nigeria".to_string(),
            source_url: None,
            country_iso2: Some("NG".to_string()),
        },
        Observation {
            id: 3,
            category: Category::VotoExterior,
            title: "Centros de votación sin supervisión".to_string(),
            indicator: None,
            severity: Severity::Moderado,
            captured_at: ts("2026-02-06T12:00:00Z"),
            source_name: "OAS Mission".to_string(),
            source_url: None,
            country_iso2: Some("CO".to_string()),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_latest_orders_and_limits() {
        let store = MemoryStore::seeded();
        let rows = store.latest(2).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].captured_at >= rows[1].captured_at);
        assert_eq!(rows[0].id, 3);
    }

    #[tokio::test]
    async fn test_latest_with_zero_limit_is_empty() {
        let store = MemoryStore::seeded();
        assert!(store.latest(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_latest_on_empty_store() {
        let store = MemoryStore::new(vec![], vec![]);
        assert!(store.latest(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_active_excludes_pending() {
        let store = MemoryStore::seeded();
        let active = store.list_active().await.unwrap();
        assert_eq!(active.len(), 4);
        assert!(active
            .iter()
            .all(|e| e.monitoring_status == MonitoringStatus::Active));
        // Ascending by election date.
        let dates: Vec<_> = active.iter().map(|e| e.election_date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[tokio::test]
    async fn test_get_by_iso_case_insensitive() {
        let store = MemoryStore::seeded();
        let lower = store.get_by_iso("ug").await.unwrap().unwrap();
        let upper = store.get_by_iso("UG").await.unwrap().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.country_name, "Uganda");
    }

    #[tokio::test]
    async fn test_get_by_iso_unknown_is_none() {
        let store = MemoryStore::seeded();
        assert!(store.get_by_iso("ZZ").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_iso_duplicate_takes_earliest() {
        let mut elections = seed_elections();
        elections.push(Election {
            id: 6,
            country_iso2: "UG".to_string(),
            country_name: "Uganda".to_string(),
            election_type: "Runoff".to_string(),
            election_date: date(2026, 6, 1),
            monitoring_status: MonitoringStatus::Pending,
        });
        let store = MemoryStore::new(vec![], elections);
        let hit = store.get_by_iso("UG").await.unwrap().unwrap();
        assert_eq!(hit.id, 1);
        assert_eq!(hit.election_date, date(2026, 2, 15));
    }

    #[tokio::test]
    async fn test_counts() {
        let store = MemoryStore::seeded();
        assert_eq!(store.count_all().await.unwrap(), 3);
        assert_eq!(
            store.count_with_min_severity(Severity::Alerta).await.unwrap(),
            2
        );
        assert_eq!(
            store.count_with_min_severity(Severity::Critico).await.unwrap(),
            1
        );
        assert_eq!(
            store
                .count_in_category(&Category::VotoExterior)
                .await
                .unwrap(),
            1
        );
        assert_eq!(store.count_active().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_for_country_exact_match() {
        let store = MemoryStore::seeded();
        let rows = store.for_country("ng", "Nigeria").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 2);
    }
}
