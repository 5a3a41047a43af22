#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use crate::source::ApprovedReviewSource;
#[cfg(feature = "ssr")]
use leptos::logging::{error, log};

/// Path the approved-reviews endpoint is mounted at.
pub const APPROVED_REVIEWS_PATH: &str = "/api/getApprovedReviews";
/// Body text returned when the review store cannot be read.
pub const FETCH_FAILED: &str = "Failed to fetch";

#[cfg(feature = "ssr")]
pub async fn get_approved_reviews(source: web::Data<dyn ApprovedReviewSource>) -> HttpResponse {
    log!("[API] Received request for approved reviews");

    match source.query_approved_reviews().await {
        Ok(reviews) => {
            log!("[API] Returning {} approved reviews", reviews.len());
            HttpResponse::Ok().json(reviews)
        }
        Err(err) => {
            // The cause stays in the server log only.
            error!("[API] Failed to fetch approved reviews: {}", err);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": FETCH_FAILED }))
        }
    }
}
