//! SQLite backend read through a sqlx pool.
//!
//! Each operation acquires a connection from the pool for the duration of
//! its query and releases it on every exit path, including errors. The
//! service never writes: `observation` and `election` are populated by the
//! external ingestion and election-tracking processes.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use vigia_core::types::normalize_iso2;
use vigia_core::{Category, Election, Error, Observation, Result, Severity};

use crate::backend::{ElectionRegistry, ObservationStore};
use crate::matching;

/// SQLite-backed store serving both contracts.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens a connection pool on the given sqlite URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Wraps an existing pool (used by tests).
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Row types
// ============================================================================

// Enum-valued columns come back as text and are parsed into the closed
// domain enums; an unrecognized value is a Parse error, not a silent skip.

#[derive(sqlx::FromRow)]
struct ObservationRow {
    id: i64,
    category: String,
    title: String,
    indicator: Option<String>,
    severity: String,
    captured_at: DateTime<Utc>,
    source_name: String,
    source_url: Option<String>,
    country_iso2: Option<String>,
}

impl TryFrom<ObservationRow> for Observation {
    type Error = Error;

    fn try_from(row: ObservationRow) -> Result<Self> {
        Ok(Observation {
            id: row.id,
            category: Category::from(row.category),
            title: row.title,
            indicator: row.indicator,
            severity: row.severity.parse()?,
            captured_at: row.captured_at,
            source_name: row.source_name,
            source_url: row.source_url,
            country_iso2: row.country_iso2,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ElectionRow {
    id: i64,
    country_iso2: String,
    country_name: String,
    election_type: String,
    election_date: NaiveDate,
    monitoring_status: String,
}

impl TryFrom<ElectionRow> for Election {
    type Error = Error;

    fn try_from(row: ElectionRow) -> Result<Self> {
        Ok(Election {
            id: row.id,
            country_iso2: row.country_iso2,
            country_name: row.country_name,
            election_type: row.election_type,
            election_date: row.election_date,
            monitoring_status: row.monitoring_status.parse()?,
        })
    }
}

const OBSERVATION_COLUMNS: &str = "id, category, title, indicator, severity, \
     captured_at, source_name, source_url, country_iso2";

const ELECTION_COLUMNS: &str =
    "id, country_iso2, country_name, election_type, election_date, monitoring_status";

fn collect_observations(rows: Vec<ObservationRow>) -> Result<Vec<Observation>> {
    rows.into_iter().map(Observation::try_from).collect()
}

// ============================================================================
// ObservationStore
// ============================================================================

#[async_trait]
impl ObservationStore for SqliteStore {
    async fn latest(&self, limit: usize) -> Result<Vec<Observation>> {
        let sql = format!(
            "SELECT {OBSERVATION_COLUMNS} FROM observation \
             ORDER BY captured_at DESC LIMIT ?"
        );
        let rows = sqlx::query_as::<_, ObservationRow>(&sql)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;
        collect_observations(rows)
    }

    async fn for_country(&self, iso2: &str, country_name: &str) -> Result<Vec<Observation>> {
        let iso2 = normalize_iso2(iso2);

        // Authoritative path: explicit country linkage.
        let sql = format!(
            "SELECT {OBSERVATION_COLUMNS} FROM observation \
             WHERE UPPER(country_iso2) = ? ORDER BY captured_at DESC"
        );
        let exact = sqlx::query_as::<_, ObservationRow>(&sql)
            .bind(&iso2)
            .fetch_all(&self.pool)
            .await?;
        let mut result = collect_observations(exact)?;

        // Fallback path: unlinked rows matched by the text heuristic.
        let sql = format!(
            "SELECT {OBSERVATION_COLUMNS} FROM observation \
             WHERE country_iso2 IS NULL ORDER BY captured_at DESC"
        );
        let unlinked = sqlx::query_as::<_, ObservationRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        for obs in collect_observations(unlinked)? {
            if matching::matches_country(&obs, &iso2, country_name) {
                result.push(obs);
            }
        }
        Ok(result)
    }

    async fn count_all(&self) -> Result<u64> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM observation")
            .fetch_one(&self.pool)
            .await?;
        Ok(n as u64)
    }

    async fn count_with_min_severity(&self, min: Severity) -> Result<u64> {
        let sql = match min {
            Severity::Moderado => "SELECT COUNT(*) FROM observation",
            Severity::Alerta => {
                "SELECT COUNT(*) FROM observation WHERE severity IN ('ALERTA', 'CRITICO')"
            }
            Severity::Critico => "SELECT COUNT(*) FROM observation WHERE severity = 'CRITICO'",
        };
        let n: i64 = sqlx::query_scalar(sql).fetch_one(&self.pool).await?;
        Ok(n as u64)
    }

    async fn count_in_category(&self, category: &Category) -> Result<u64> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM observation WHERE category = ?")
            .bind(category.to_string())
            .fetch_one(&self.pool)
            .await?;
        Ok(n as u64)
    }
}

// ============================================================================
// ElectionRegistry
// ============================================================================

#[async_trait]
impl ElectionRegistry for SqliteStore {
    async fn list_active(&self) -> Result<Vec<Election>> {
        let sql = format!(
            "SELECT {ELECTION_COLUMNS} FROM election \
             WHERE monitoring_status = 'ACTIVE' ORDER BY election_date ASC"
        );
        let rows = sqlx::query_as::<_, ElectionRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Election::try_from).collect()
    }

    async fn get_by_iso(&self, iso2: &str) -> Result<Option<Election>> {
        // Earliest election date wins when duplicate rows share an ISO2.
        let sql = format!(
            "SELECT {ELECTION_COLUMNS} FROM election \
             WHERE UPPER(country_iso2) = ? ORDER BY election_date ASC LIMIT 1"
        );
        let row = sqlx::query_as::<_, ElectionRow>(&sql)
            .bind(normalize_iso2(iso2))
            .fetch_optional(&self.pool)
            .await?;
        row.map(Election::try_from).transpose()
    }

    async fn count_active(&self) -> Result<u64> {
        let n: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM election WHERE monitoring_status = 'ACTIVE'")
                .fetch_one(&self.pool)
                .await?;
        Ok(n as u64)
    }
}
