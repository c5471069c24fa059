//! Integration tests for the SQLite backend against an in-memory database.

#![allow(clippy::unwrap_used)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use vigia_core::{Category, MonitoringStatus, Severity};
use vigia_store::{ElectionRegistry, ObservationStore, SqliteStore};

// A single-connection pool so the in-memory database outlives each query.
async fn pool_with_schema() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query(
        "CREATE TABLE observation (
            id INTEGER PRIMARY KEY,
            category TEXT NOT NULL,
            title TEXT NOT NULL,
            indicator TEXT,
            severity TEXT NOT NULL,
            captured_at TEXT NOT NULL,
            source_name TEXT NOT NULL,
            source_url TEXT,
            country_iso2 TEXT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TABLE election (
            id INTEGER PRIMARY KEY,
            country_iso2 TEXT NOT NULL,
            country_name TEXT NOT NULL,
            election_type TEXT NOT NULL,
            election_date TEXT NOT NULL,
            monitoring_status TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    pool
}

async fn insert_observation(
    pool: &SqlitePool,
    id: i64,
    category: &str,
    severity: &str,
    captured_at: &str,
    source_name: &str,
    country_iso2: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO observation
         (id, category, title, indicator, severity, captured_at, source_name, source_url, country_iso2)
         VALUES (?, ?, ?, NULL, ?, ?, ?, NULL, ?)",
    )
    .bind(id)
    .bind(category)
    .bind(format!("observation {id}"))
    .bind(severity)
    .bind(captured_at)
    .bind(source_name)
    .bind(country_iso2)
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_election(
    pool: &SqlitePool,
    id: i64,
    iso2: &str,
    name: &str,
    date: &str,
    status: &str,
) {
    sqlx::query(
        "INSERT INTO election
         (id, country_iso2, country_name, election_type, election_date, monitoring_status)
         VALUES (?, ?, ?, 'General', ?, ?)",
    )
    .bind(id)
    .bind(iso2)
    .bind(name)
    .bind(date)
    .bind(status)
    .execute(pool)
    .await
    .unwrap();
}

#[tokio::test]
async fn latest_orders_by_recency_and_limits() {
    let pool = pool_with_schema().await;
    insert_observation(&pool, 1, "IRREGULARIDAD", "ALERTA", "2026-02-06 10:30:00+00:00", "EC", Some("UG")).await;
    insert_observation(&pool, 2, "TRANSPARENCIA", "CRITICO", "2026-02-06 11:15:00+00:00", "INEC", Some("NG")).await;
    insert_observation(&pool, 3, "VOTO_EXTERIOR", "MODERADO", "2026-02-06 12:00:00+00:00", "OAS", Some("CO")).await;

    let store = SqliteStore::from_pool(pool);
    let rows = store.latest(2).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 3);
    assert_eq!(rows[1].id, 2);
    assert!(rows[0].captured_at >= rows[1].captured_at);
}

#[tokio::test]
async fn latest_on_empty_table_is_empty() {
    let store = SqliteStore::from_pool(pool_with_schema().await);
    assert!(store.latest(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn counts_respect_severity_and_category() {
    let pool = pool_with_schema().await;
    insert_observation(&pool, 1, "IRREGULARIDAD", "CRITICO", "2026-02-06 10:00:00+00:00", "a", None).await;
    insert_observation(&pool, 2, "IRREGULARIDAD", "MODERADO", "2026-02-06 10:01:00+00:00", "b", None).await;
    insert_observation(&pool, 3, "VOTO_EXTERIOR", "ALERTA", "2026-02-06 10:02:00+00:00", "c", None).await;

    let store = SqliteStore::from_pool(pool);
    assert_eq!(store.count_all().await.unwrap(), 3);
    assert_eq!(
        store.count_with_min_severity(Severity::Alerta).await.unwrap(),
        2
    );
    assert_eq!(
        store.count_with_min_severity(Severity::Moderado).await.unwrap(),
        3
    );
    assert_eq!(
        store
            .count_in_category(&Category::VotoExterior)
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn for_country_prefers_explicit_linkage_with_text_fallback() {
    let pool = pool_with_schema().await;
    // Explicitly linked to NG.
    insert_observation(&pool, 1, "TRANSPARENCIA", "CRITICO", "2026-02-06 11:00:00+00:00", "INEC", Some("NG")).await;
    // Unlinked, source mentions Nigeria: picked up by the fallback.
    insert_observation(&pool, 2, "IRREGULARIDAD", "ALERTA", "2026-02-06 12:00:00+00:00", "INEC Nigeria", None).await;
    // Explicitly linked elsewhere; must not leak in via its source text.
    insert_observation(&pool, 3, "IRREGULARIDAD", "ALERTA", "2026-02-06 13:00:00+00:00", "Nigeria desk", Some("UG")).await;

    let store = SqliteStore::from_pool(pool);
    let rows = store.for_country("ng", "Nigeria").await.unwrap();
    let ids: Vec<i64> = rows.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn unknown_severity_row_is_a_parse_error() {
    let pool = pool_with_schema().await;
    insert_observation(&pool, 1, "IRREGULARIDAD", "SEVERE", "2026-02-06 10:00:00+00:00", "a", None).await;

    let store = SqliteStore::from_pool(pool);
    let err = store.latest(10).await.unwrap_err();
    assert!(err.to_string().contains("SEVERE"));
}

#[tokio::test]
async fn elections_active_listing_and_lookup() {
    let pool = pool_with_schema().await;
    insert_election(&pool, 1, "NG", "Nigeria", "2026-03-01", "ACTIVE").await;
    insert_election(&pool, 2, "UG", "Uganda", "2026-02-15", "ACTIVE").await;
    insert_election(&pool, 3, "EC", "Ecuador", "2026-05-01", "PENDING").await;

    let store = SqliteStore::from_pool(pool);
    let active = store.list_active().await.unwrap();
    assert_eq!(active.len(), 2);
    assert_eq!(active[0].country_iso2, "UG");
    assert_eq!(active[1].country_iso2, "NG");
    assert!(active
        .iter()
        .all(|e| e.monitoring_status == MonitoringStatus::Active));

    let hit = store.get_by_iso("ug").await.unwrap().unwrap();
    assert_eq!(hit.country_name, "Uganda");
    assert!(store.get_by_iso("ZZ").await.unwrap().is_none());
    assert_eq!(store.count_active().await.unwrap(), 2);
}

#[tokio::test]
async fn get_by_iso_duplicate_rows_take_earliest_date() {
    let pool = pool_with_schema().await;
    insert_election(&pool, 1, "UG", "Uganda", "2026-06-01", "ACTIVE").await;
    insert_election(&pool, 2, "UG", "Uganda", "2026-02-15", "PENDING").await;

    let store = SqliteStore::from_pool(pool);
    let hit = store.get_by_iso("UG").await.unwrap().unwrap();
    assert_eq!(hit.id, 2);
}
