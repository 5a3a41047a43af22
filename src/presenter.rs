//! Review Presenter: validates submissions and turns the stored collection
//! into pages of display-ready cards, newest first.
use crate::error::SubmitError;
use crate::models::review::{Rating, Review, ReviewInput};
use crate::store::{ReviewStore, StorageSlot};
use leptos::logging::{error, log};

/// Reviews revealed per page.
pub const PAGE_SIZE: usize = 3;
pub const EMPTY_PLACEHOLDER: &str = "No reviews yet. Be the first to write one!";
pub const SUCCESS_MESSAGE: &str = "Thanks! Your review has been submitted.";

/// One rendered review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCard {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub stars: String,
    pub text: String,
}

/// What the reviews section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewsView {
    /// Nothing revealed: placeholder text, no reveal-more control.
    Empty { placeholder: &'static str },
    Page {
        cards: Vec<ReviewCard>,
        show_more: bool,
    },
}

impl ReviewsView {
    pub fn cards(&self) -> &[ReviewCard] {
        match self {
            ReviewsView::Empty { .. } => &[],
            ReviewsView::Page { cards, .. } => cards,
        }
    }

    pub fn show_more(&self) -> bool {
        matches!(self, ReviewsView::Page { show_more: true, .. })
    }
}

/// Sorts a copy of `reviews` newest first and reveals `reveal_count` of them.
/// Reviews sharing a timestamp keep their insertion order.
pub fn build_view(reviews: &[Review], reveal_count: usize) -> ReviewsView {
    let mut sorted: Vec<&Review> = reviews.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let cards: Vec<ReviewCard> = sorted
        .iter()
        .take(reveal_count)
        .map(|review| ReviewCard {
            id: review.id,
            name: review.name.clone(),
            role: review.role.label().to_string(),
            stars: review.rating.stars(),
            text: review.text.clone(),
        })
        .collect();

    if cards.is_empty() {
        return ReviewsView::Empty {
            placeholder: EMPTY_PLACEHOLDER,
        };
    }
    ReviewsView::Page {
        cards,
        show_more: reveal_count < sorted.len(),
    }
}

/// Checks the form values, returning trimmed name and text plus the rating.
fn validate(input: &ReviewInput) -> Result<(String, String, Rating), SubmitError> {
    let name = input.name.trim();
    let text = input.text.trim();
    let rating = input.rating.and_then(Rating::new);
    match rating {
        Some(rating) if !name.is_empty() && !text.is_empty() => {
            Ok((name.to_string(), text.to_string(), rating))
        }
        _ => Err(SubmitError::Invalid),
    }
}

/// State of one reviews widget: its store and how many reviews are revealed.
#[derive(Debug, Clone)]
pub struct ReviewPresenter<S> {
    store: ReviewStore<S>,
    reveal_count: usize,
}

impl<S: StorageSlot> ReviewPresenter<S> {
    pub fn new(store: ReviewStore<S>) -> Self {
        let reveal_count = if store.load().is_empty() { 0 } else { PAGE_SIZE };
        Self {
            store,
            reveal_count,
        }
    }

    pub fn reveal_count(&self) -> usize {
        self.reveal_count
    }

    pub fn store(&self) -> &ReviewStore<S> {
        &self.store
    }

    pub fn render(&self) -> ReviewsView {
        build_view(&self.store.load(), self.reveal_count)
    }

    pub fn reveal_more(&mut self) -> ReviewsView {
        self.reveal_count += PAGE_SIZE;
        self.render()
    }

    /// Stores a review submitted now.
    pub fn submit(&mut self, input: &ReviewInput) -> Result<&'static str, SubmitError> {
        self.submit_at(input, chrono::Utc::now().timestamp_millis())
    }

    /// Stores a review created at `now` (ms since the epoch). On success the
    /// view resets to the newest page.
    pub fn submit_at(&mut self, input: &ReviewInput, now: i64) -> Result<&'static str, SubmitError> {
        self.try_submit(input, now).inspect_err(|err| {
            if !matches!(err, SubmitError::Invalid) {
                error!("[PRESENTER] Could not save review: {}", err);
            }
        })
    }

    fn try_submit(&mut self, input: &ReviewInput, now: i64) -> Result<&'static str, SubmitError> {
        let (name, text, rating) = validate(input).inspect_err(|_| {
            log!("[PRESENTER] Rejected incomplete review submission");
        })?;

        let id = match self.store.load().iter().map(|r| r.id).max() {
            Some(max_id) if max_id >= now => max_id
                .checked_add(1)
                .ok_or(SubmitError::IdsExhausted(max_id))?,
            _ => now,
        };
        let review = Review {
            id,
            name,
            role: input.role,
            rating,
            text,
            created_at: now,
        };
        self.store.append(review)?;

        self.reveal_count = PAGE_SIZE;
        Ok(SUCCESS_MESSAGE)
    }
}
