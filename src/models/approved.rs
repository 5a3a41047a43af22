// src/models/approved.rs
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Moderation state of a row in the `client_reviews` table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    Pending,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "approved",
            ReviewStatus::Pending => "pending",
            ReviewStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "approved" => Some(ReviewStatus::Approved),
            "pending" => Some(ReviewStatus::Pending),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }
}

/// One row of the approved-reviews response. The review store owns the
/// schema, so every column is carried through exactly as it was returned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct ApprovedRow(pub Map<String, Value>);

impl ApprovedRow {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn status(&self) -> Option<ReviewStatus> {
        self.get("status")?.as_str().and_then(ReviewStatus::parse)
    }
}

/// A row of the local SQLite `client_reviews` table, whose schema this crate creates.
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovedReview {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub rating: i64,
    pub text: String,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
}

impl From<ApprovedReview> for ApprovedRow {
    fn from(review: ApprovedReview) -> Self {
        let mut row = Map::new();
        row.insert("id".into(), review.id.into());
        row.insert("name".into(), review.name.into());
        row.insert("role".into(), review.role.into());
        row.insert("rating".into(), review.rating.into());
        row.insert("text".into(), review.text.into());
        row.insert("status".into(), review.status.as_str().into());
        row.insert(
            "created_at".into(),
            review.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, false).into(),
        );
        ApprovedRow(row)
    }
}
