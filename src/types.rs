//! Common types for the dashboard
//!
//! All shared data structures used across modules.

use serde::{Deserialize, Deserializer, Serialize};

/// The latest US-wide record from the stats endpoint.
///
/// Only the fields the page shows are read; everything else in the payload
/// is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Report date as `YYYYMMDD`
    #[serde(deserialize_with = "date_as_string")]
    pub date: String,
    /// Cumulative deaths
    pub death: i64,
    /// Deaths since the previous report
    pub death_increase: i64,
    /// Cumulative positive cases
    pub positive: i64,
    /// Patients currently in ICU
    pub in_icu_currently: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Number(u64),
}

// The live API sends the date as a bare number (20210307)
fn date_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawDate::deserialize(deserializer)? {
        RawDate::Text(s) => s,
        RawDate::Number(n) => n.to_string(),
    })
}

/// Formatted projection of a snapshot, as written to the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotView {
    pub death_total: String,
    pub total_cases: String,
    pub total_icu: String,
    pub lives_lost: String,
    pub data_date: String,
    pub short_date: String,
    pub assembled_date: String,
}

/// API response for the snapshot endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot: StatsSnapshot,
    pub view: SnapshotView,
    pub fetched_at: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub timestamp: String,
}
