//! Stats endpoint client
//!
//! One unauthenticated GET per page load. The response is handed back raw
//! (status + body) so the caller decides what a non-200 means.

use crate::error::{DashboardError, Result};
use crate::types::StatsSnapshot;

/// Status and body of one upstream response
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Anything that can produce the stats document
#[allow(async_fn_in_trait)] // single-threaded wasm, no Send bound needed
pub trait StatsSource {
    /// Fetch the current stats document
    async fn fetch(&self) -> Result<RawResponse>;
}

/// Stats API client
pub struct StatsClient {
    url: String,
    client: reqwest::Client,
}

impl StatsClient {
    /// Create new client for the given endpoint
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Endpoint this client talks to
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl StatsSource for StatsClient {
    async fn fetch(&self) -> Result<RawResponse> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

/// Fetch and parse the current snapshot. Anything but a 200 is an error;
/// there is no retry.
pub async fn fetch_snapshot<S: StatsSource>(source: &S) -> Result<StatsSnapshot> {
    let response = source.fetch().await?;
    if response.status != 200 {
        return Err(DashboardError::UpstreamStatus(response.status));
    }
    parse_payload(&response.body)
}

/// Parse the stats document and take its first record
pub fn parse_payload(body: &str) -> Result<StatsSnapshot> {
    // Only index 0 matters; later records are never validated
    let records: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let first = records.into_iter().next().ok_or(DashboardError::EmptyPayload)?;
    Ok(serde_json::from_value(first)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_takes_first_record() {
        let body = r#"[
            {"date":20210307,"death":515151,"deathIncrease":842,"positive":28756489,"inIcuCurrently":8134},
            {"date":20210306,"death":514309}
        ]"#;

        let snapshot = parse_payload(body).unwrap();
        assert_eq!(snapshot.date, "20210307");
        assert_eq!(snapshot.death, 515_151);
    }

    #[test]
    fn test_parse_payload_empty_array() {
        assert!(matches!(parse_payload("[]"), Err(DashboardError::EmptyPayload)));
    }

    #[test]
    fn test_parse_payload_not_an_array() {
        let body = r#"{"date":"20210115","death":1,"deathIncrease":0,"positive":2,"inIcuCurrently":3}"#;
        assert!(matches!(parse_payload(body), Err(DashboardError::Json(_))));
    }

    struct Canned(u16, &'static str);

    impl StatsSource for Canned {
        async fn fetch(&self) -> Result<RawResponse> {
            Ok(RawResponse { status: self.0, body: self.1.to_string() })
        }
    }

    #[tokio::test]
    async fn test_fetch_snapshot_ok() {
        let source = Canned(
            200,
            r#"[{"date":"20210115","death":500000,"deathIncrease":3,"positive":1000000,"inIcuCurrently":2000}]"#,
        );
        let snapshot = fetch_snapshot(&source).await.unwrap();
        assert_eq!(snapshot.death_increase, 3);
    }

    #[tokio::test]
    async fn test_fetch_snapshot_rejects_non_200() {
        // even a valid body is ignored when the status is wrong
        let source = Canned(
            204,
            r#"[{"date":"20210115","death":500000,"deathIncrease":3,"positive":1000000,"inIcuCurrently":2000}]"#,
        );
        let err = fetch_snapshot(&source).await.unwrap_err();
        assert!(matches!(err, DashboardError::UpstreamStatus(204)));
    }
}
