//! The store the approved-reviews endpoint reads from, injected into the
//! handler so tests can swap in a local or failing store.
use crate::error::SourceError;
use crate::models::approved::ApprovedRow;
use async_trait::async_trait;

/// Table holding moderated client reviews.
pub const REVIEWS_TABLE: &str = "client_reviews";

#[async_trait]
pub trait ApprovedReviewSource: Send + Sync {
    /// Every row whose status is `approved`, all columns, ordered by rating
    /// then creation time, both descending.
    async fn query_approved_reviews(&self) -> Result<Vec<ApprovedRow>, SourceError>;
}
