//! The aggregation engine.
//!
//! One engine, one join strategy: election detail associates observations
//! through the store's `for_country` contract (explicit ISO2 linkage first,
//! text fallback only for unlinked rows). The engine never reaches past
//! the store traits, so the same computation serves every backend.

use vigia_core::{Category, Error, Observation, Result, Severity};
use vigia_store::DataSource;

use crate::shapes::{
    DashboardStats, ElectionDetail, ElectionMetadata, ElectionStats, ElectionSummary,
};

/// Default number of rows returned by the latest-observations query.
pub const DEFAULT_LATEST_LIMIT: usize = 10;

/// Placeholder value for the external sentiment signal.
///
/// Sentiment is produced by a separate analysis pipeline that is not yet
/// wired in; until it is, detail views carry this constant so the field's
/// provenance stays explicit rather than looking computed.
pub const SENTIMENT_SCORE_PLACEHOLDER: u32 = 72;

/// Computes the IRE index ("Índice de Riesgo Electoral").
///
/// Ratio of critical-risk observations to total observations, scaled to
/// 0–100 and rounded to one decimal. The denominator floor of 1 makes the
/// zero-observation case a defined 0.0 rather than a division error; the
/// cap keeps the value inside [0, 100] whatever the inputs.
pub fn ire_index(critical_risk: u64, total_observations: u64) -> f64 {
    let ratio = critical_risk as f64 / total_observations.max(1) as f64 * 100.0;
    let rounded = (ratio * 10.0).round() / 10.0;
    rounded.min(100.0)
}

/// Aggregation engine over a pluggable data source.
#[derive(Clone)]
pub struct Engine {
    source: DataSource,
}

impl Engine {
    /// Creates an engine over the given data source.
    pub fn new(source: DataSource) -> Self {
        Self { source }
    }

    /// Computes the top-level dashboard KPIs.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let observations = &self.source.observations;
        let total_observations = observations.count_all().await?;
        let critical_risk = observations.count_with_min_severity(Severity::Alerta).await?;
        let overseas_monitor = observations
            .count_in_category(&Category::VotoExterior)
            .await?;
        let active_elections = self.source.elections.count_active().await?;

        Ok(DashboardStats {
            total_observations,
            critical_risk,
            overseas_monitor,
            ire_index: ire_index(critical_risk, total_observations),
            active_elections,
        })
    }

    /// Lists elections under active monitoring, ascending by date.
    pub async fn list_active_elections(&self) -> Result<Vec<ElectionSummary>> {
        let elections = self.source.elections.list_active().await?;
        Ok(elections.into_iter().map(ElectionSummary::from).collect())
    }

    /// Builds the detail view for the election matching `iso2`.
    ///
    /// Lookup is case-insensitive. An unknown code is a [`Error::NotFound`],
    /// never a partial record.
    pub async fn election_detail(&self, iso2: &str) -> Result<ElectionDetail> {
        let election = self
            .source
            .elections
            .get_by_iso(iso2)
            .await?
            .ok_or_else(|| Error::not_found("election", iso2))?;

        let country_obs = self
            .source
            .observations
            .for_country(&election.country_iso2, &election.country_name)
            .await?;
        let total_alerts = country_obs.len() as u64;
        let critical_alerts = country_obs
            .iter()
            .filter(|o| o.severity == Severity::Critico)
            .count() as u64;

        Ok(ElectionDetail {
            metadata: ElectionMetadata::from(election),
            stats: ElectionStats {
                total_alerts,
                critical_alerts,
                sentiment_score: SENTIMENT_SCORE_PLACEHOLDER,
            },
        })
    }

    /// Returns the most recent observations, newest first.
    pub async fn latest_observations(&self, limit: Option<usize>) -> Result<Vec<Observation>> {
        self.source
            .observations
            .latest(limit.unwrap_or(DEFAULT_LATEST_LIMIT))
            .await
    }
}
