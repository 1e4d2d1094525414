//! Screen state for the rating page and the actions that update it.
use std::fmt;

use chrono::{DateTime, Utc};
use leptos::logging::{log, warn};

use crate::error::InvalidSubmission;
use crate::models::rating::Rating;
use crate::models::review::{Review, ReviewCollection};

/// Pending value of the rating field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RatingInput {
    #[default]
    Unset,
    Value(u8),
    /// Text typed into the numeric field that is not a `u8`.
    Unparsed(String),
}

impl RatingInput {
    /// Interprets text from the numeric field. Never fails; bad input is
    /// kept so it can be rejected at submission.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return RatingInput::Unset;
        }
        match trimmed.parse::<u8>() {
            Ok(value) => RatingInput::Value(value),
            Err(_) => RatingInput::Unparsed(text.to_string()),
        }
    }

    /// Star count to highlight in the picker, zero unless a valid value is set.
    pub fn selected_stars(&self) -> u8 {
        match self {
            RatingInput::Value(value) => Rating::new(*value).map(Rating::value).unwrap_or(0),
            _ => 0,
        }
    }

    pub fn to_rating(&self) -> Result<Rating, InvalidSubmission> {
        match self {
            RatingInput::Unset => Err(InvalidSubmission::MissingRating),
            RatingInput::Value(value) => Rating::new(*value),
            RatingInput::Unparsed(text) => Err(InvalidSubmission::RatingNotNumeric(text.clone())),
        }
    }
}

impl fmt::Display for RatingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingInput::Unset => Ok(()),
            RatingInput::Value(value) => write!(f, "{value}"),
            RatingInput::Unparsed(text) => f.write_str(text),
        }
    }
}

/// The fields being edited before a review is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: RatingInput,
    pub comment: String,
    pub username: String,
}

impl ReviewDraft {
    pub fn select_rating(&mut self, stars: u8) {
        self.rating = RatingInput::Value(stars);
    }

    pub fn set_rating_text(&mut self, text: &str) {
        self.rating = RatingInput::from_text(text);
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builds a review from the pending fields without touching them.
    pub fn to_review(&self, at: DateTime<Utc>) -> Result<Review, InvalidSubmission> {
        let rating = self.rating.to_rating()?;
        Review::new(rating, self.comment.clone(), self.username.clone(), at)
    }

    /// Appends the pending review to `reviews` and resets the draft.
    /// On error neither the draft nor the collection changes.
    pub fn submit(
        &mut self,
        reviews: &mut ReviewCollection,
        at: DateTime<Utc>,
    ) -> Result<usize, InvalidSubmission> {
        let review = self.to_review(at)?;
        let index = reviews.push(review);
        self.clear();
        Ok(index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewAction {
    SelectRating(u8),
    SetRatingText(String),
    SetComment(String),
    SetUsername(String),
    Submit { at: DateTime<Utc> },
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewPageState {
    pub draft: ReviewDraft,
    pub reviews: ReviewCollection,
}

impl ReviewPageState {
    pub fn apply(&mut self, action: ReviewAction) -> Result<(), InvalidSubmission> {
        match action {
            ReviewAction::SelectRating(stars) => self.draft.select_rating(stars),
            ReviewAction::SetRatingText(text) => self.draft.set_rating_text(&text),
            ReviewAction::SetComment(comment) => self.draft.set_comment(comment),
            ReviewAction::SetUsername(username) => self.draft.set_username(username),
            ReviewAction::Clear => self.draft.clear(),
            ReviewAction::Submit { at } => match self.draft.submit(&mut self.reviews, at) {
                Ok(index) => {
                    log!(
                        "[REVIEW] Stored review {} ({} total, average {})",
                        index + 1,
                        self.reviews.len(),
                        self.reviews.formatted_average()
                    );
                }
                Err(err) => {
                    warn!("[REVIEW] Rejected submission: {}", err);
                    return Err(err);
                }
            },
        }
        Ok(())
    }
}

/// Pure form of [`ReviewPageState::apply`].
pub fn reduce(
    mut state: ReviewPageState,
    action: ReviewAction,
) -> (ReviewPageState, Result<(), InvalidSubmission>) {
    let outcome = state.apply(action);
    (state, outcome)
}
