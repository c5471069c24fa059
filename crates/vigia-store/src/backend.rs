//! Store and registry contracts, and backend selection.

use std::sync::Arc;

use async_trait::async_trait;

use vigia_core::{
    Category, Config, DataBackend, Election, Error, Observation, Result, Severity,
};

use crate::memory::MemoryStore;
use crate::sqlite::SqliteStore;

/// Read access to observation records.
///
/// Implementations are read-only and side-effect free: an empty result is
/// an empty vector, never an error.
#[async_trait]
pub trait ObservationStore: Send + Sync {
    /// Returns up to `limit` observations, most recent `captured_at` first.
    async fn latest(&self, limit: usize) -> Result<Vec<Observation>>;

    /// Returns the observations associated with a country.
    ///
    /// Rows carrying an explicit `country_iso2` are matched exactly
    /// (case-insensitive). Rows without one fall back to the text
    /// heuristic in [`crate::matching`], which needs the country name.
    async fn for_country(&self, iso2: &str, country_name: &str) -> Result<Vec<Observation>>;

    /// Total number of stored observations.
    async fn count_all(&self) -> Result<u64>;

    /// Number of observations at or above the given severity.
    async fn count_with_min_severity(&self, min: Severity) -> Result<u64>;

    /// Number of observations in the given category.
    async fn count_in_category(&self, category: &Category) -> Result<u64>;
}

/// Read access to election (mission) records.
#[async_trait]
pub trait ElectionRegistry: Send + Sync {
    /// Returns elections with ACTIVE monitoring status, ascending by
    /// election date.
    async fn list_active(&self) -> Result<Vec<Election>>;

    /// Looks up an election by ISO2 code, case-insensitively.
    ///
    /// When duplicate rows share an ISO2 code, the earliest election date
    /// wins (deterministic tie-break).
    async fn get_by_iso(&self, iso2: &str) -> Result<Option<Election>>;

    /// Number of elections with ACTIVE monitoring status.
    async fn count_active(&self) -> Result<u64>;
}

/// A connected data source: one object serving both contracts.
#[derive(Clone)]
pub struct DataSource {
    /// Observation store handle.
    pub observations: Arc<dyn ObservationStore>,
    /// Election registry handle.
    pub elections: Arc<dyn ElectionRegistry>,
}

/// Connects the data source selected by configuration.
///
/// `memory` yields the seeded demo dataset; `sqlite` opens a read pool on
/// `data_source.database_url`.
pub async fn connect(config: &Config) -> Result<DataSource> {
    match config.data_source.backend {
        DataBackend::Memory => {
            tracing::info!("data source: seeded in-memory dataset");
            let store = Arc::new(MemoryStore::seeded());
            Ok(DataSource {
                observations: store.clone(),
                elections: store,
            })
        }
        DataBackend::Sqlite => {
            let url = config
                .data_source
                .database_url
                .as_deref()
                .ok_or_else(|| Error::config("sqlite backend requires database_url"))?;
            tracing::info!(url, "data source: sqlite");
            let store = Arc::new(SqliteStore::connect(url).await?);
            Ok(DataSource {
                observations: store.clone(),
                elections: store,
            })
        }
    }
}
