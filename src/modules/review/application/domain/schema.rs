use std::ops::RangeInclusive;

use crate::shared::storage::StorageFault;

pub const MAX_TITLE_LEN: usize = 100;
pub const RATING_RANGE: RangeInclusive<i32> = 1..=10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub title: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidReview {
    pub title: String,
    pub text: String,
    pub rating: i32,
}

pub fn validate_review(draft: ReviewDraft) -> Result<ValidReview, StorageFault> {
    let mut errors = Vec::new();

    let title = match trimmed(draft.title) {
        None => {
            errors.push("Please add a title for the review".to_string());
            None
        }
        Some(t) if t.chars().count() > MAX_TITLE_LEN => {
            errors.push("Title can not be more than 100 characters".to_string());
            None
        }
        Some(t) => Some(t),
    };

    let text = trimmed(draft.text);
    if text.is_none() {
        errors.push("Please add some text".to_string());
    }

    let rating = draft.rating.filter(|r| RATING_RANGE.contains(r));
    if rating.is_none() {
        errors.push("Please add a rating between 1 and 10".to_string());
    }

    match (title, text, rating) {
        (Some(title), Some(text), Some(rating)) => Ok(ValidReview {
            title,
            text,
            rating,
        }),
        _ => Err(StorageFault::Validation(errors)),
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
