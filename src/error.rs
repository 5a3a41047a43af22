use thiserror::Error;

/// Message shown next to the review form when a field is missing.
pub const VALIDATION_MESSAGE: &str = "Please fill out all fields and select a rating.";
/// Message shown when a valid review could not be saved.
pub const SAVE_FAILED_MESSAGE: &str = "Sorry, your review could not be saved. Please try again.";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode reviews: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("local storage write failed: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{}", VALIDATION_MESSAGE)]
    Invalid,
    #[error("no review id left after {0}")]
    IdsExhausted(i64),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// Text for the form's message area. Save failures get a fixed message;
    /// their detail only goes to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Invalid => VALIDATION_MESSAGE,
            SubmitError::IdsExhausted(_) | SubmitError::Store(_) => SAVE_FAILED_MESSAGE,
        }
    }
}

#[cfg(feature = "ssr")]
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("request to review store failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("review store returned unreadable rows: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected row in client_reviews: {0}")]
    Row(String),
}

#[cfg(feature = "ssr")]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{present} is set but {missing} is not")]
    Incomplete {
        present: &'static str,
        missing: &'static str,
    },
}
