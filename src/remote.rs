//! Approved reviews read from the hosted database's REST interface.
use crate::error::SourceError;
use crate::models::approved::ApprovedRow;
use crate::source::{ApprovedReviewSource, REVIEWS_TABLE};
use async_trait::async_trait;
use leptos::logging::log;
use reqwest::Client;

/// Client for the hosted store, authenticated with its service key.
#[derive(Clone)]
pub struct RestReviewSource {
    client: Client,
    base_url: String,
    service_key: String,
}

impl RestReviewSource {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, REVIEWS_TABLE)
    }

    fn approved_query() -> [(&'static str, &'static str); 3] {
        [
            ("select", "*"),
            ("status", "eq.approved"),
            ("order", "rating.desc,created_at.desc"),
        ]
    }
}

/// Parses the store's JSON array without constraining column types.
fn decode_rows(body: &[u8]) -> Result<Vec<ApprovedRow>, SourceError> {
    Ok(serde_json::from_slice(body)?)
}

#[async_trait]
impl ApprovedReviewSource for RestReviewSource {
    async fn query_approved_reviews(&self) -> Result<Vec<ApprovedRow>, SourceError> {
        let body = self
            .client
            .get(self.table_url())
            .query(&Self::approved_query())
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        let rows = decode_rows(&body)?;
        log!("[REMOTE] Fetched {} approved reviews", rows.len());
        Ok(rows)
    }
}
