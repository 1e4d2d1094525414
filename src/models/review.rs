// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rating::{Rating, MAX_STARS};
use crate::error::InvalidSubmission;

/// A submitted review. Immutable once created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    rating: Rating,
    comment: String,           // Free-text comment, never blank
    username: String,          // Who left the review, never blank
    date: DateTime<Utc>,       // Submission time
}

impl Review {
    pub fn new(
        rating: Rating,
        comment: impl Into<String>,
        username: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Result<Self, InvalidSubmission> {
        let comment = comment.into();
        let username = username.into();
        if comment.trim().is_empty() {
            return Err(InvalidSubmission::EmptyComment);
        }
        if username.trim().is_empty() {
            return Err(InvalidSubmission::EmptyUsername);
        }
        Ok(Self {
            rating,
            comment,
            username,
            date,
        })
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Append-only list of reviews in submission order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ReviewCollection {
    reviews: Vec<Review>,
}

impl ReviewCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a review and returns its position.
    pub(crate) fn push(&mut self, review: Review) -> usize {
        self.reviews.push(review);
        self.reviews.len() - 1
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Review> {
        self.reviews.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Review> {
        self.reviews.iter()
    }

    /// Mean of all ratings, `0.0` for an empty collection.
    pub fn average_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        let total: u32 = self
            .reviews
            .iter()
            .map(|review| u32::from(review.rating.value()))
            .sum();
        f64::from(total) / self.reviews.len() as f64
    }

    pub fn formatted_average(&self) -> String {
        format!("{:.1}", self.average_rating())
    }

    /// Number of reviews per star value, index 0 holding the one-star count.
    pub fn rating_distribution(&self) -> [usize; MAX_STARS as usize] {
        let mut counts = [0; MAX_STARS as usize];
        for review in &self.reviews {
            counts[usize::from(review.rating.value()) - 1] += 1;
        }
        counts
    }
}
