// src/models/review.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Star rating between 1 and 5 inclusive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// One star glyph per rating point.
    pub fn stars(self) -> String {
        "⭐".repeat(self.0 as usize)
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or_else(|| format!("rating {} is outside 1..=5", value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Who the reviewer is, picked from the form's fixed list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Client,
    #[serde(rename = "Business Owner")]
    BusinessOwner,
    Partner,
    Other,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Client, Role::BusinessOwner, Role::Partner, Role::Other];

    pub fn label(self) -> &'static str {
        match self {
            Role::Client => "Client",
            Role::BusinessOwner => "Business Owner",
            Role::Partner => "Partner",
            Role::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|role| role.label() == label)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A testimonial kept in the visitor's local storage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i64,          // Creation time in ms, bumped when it would collide
    pub name: String,     // Reviewer name, trimmed
    pub role: Role,
    pub rating: Rating,
    pub text: String,     // Review body, trimmed
    #[serde(rename = "date")]
    pub created_at: i64,  // Milliseconds since the Unix epoch
}

/// Raw values captured by the review form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewInput {
    pub name: String,
    pub role: Role,
    pub text: String,
    pub rating: Option<u8>, // None until a star option is picked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_rejects_out_of_range() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert_eq!(Rating::new(4).map(Rating::value), Some(4));
    }

    #[test]
    fn stars_match_rating() {
        for value in Rating::MIN..=Rating::MAX {
            let rating = Rating::new(value).unwrap();
            assert_eq!(rating.stars().chars().count(), value as usize);
        }
    }

    #[test]
    fn review_uses_date_field_for_timestamp() {
        let json = r#"{"id":1700000000000,"name":"Ana","role":"Business Owner","rating":5,"text":"Great","date":1700000000000}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.role, Role::BusinessOwner);
        assert_eq!(review.created_at, 1_700_000_000_000);

        let back = serde_json::to_value(&review).unwrap();
        assert_eq!(back["date"], 1_700_000_000_000i64);
        assert_eq!(back["rating"], 5);
    }

    #[test]
    fn review_with_bad_rating_or_timestamp_fails_to_decode() {
        let bad_rating = r#"{"id":1,"name":"A","role":"Client","rating":9,"text":"t","date":1}"#;
        assert!(serde_json::from_str::<Review>(bad_rating).is_err());

        let bad_date = r#"{"id":1,"name":"A","role":"Client","rating":3,"text":"t","date":"yesterday"}"#;
        assert!(serde_json::from_str::<Review>(bad_date).is_err());
    }

    #[test]
    fn role_labels_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_label(role.label()), Some(role));
        }
        assert_eq!(Role::from_label("Wizard"), None);
    }
}
