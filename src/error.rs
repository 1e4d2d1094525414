use thiserror::Error;

/// Reasons a pending review cannot be submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSubmission {
    #[error("Please pick a rating between 1 and 5")]
    MissingRating,
    #[error("Rating {0} is out of range, it must be between 1 and 5")]
    RatingOutOfRange(u8),
    #[error("Rating \"{0}\" is not a number")]
    RatingNotNumeric(String),
    #[error("Please leave a comment")]
    EmptyComment,
    #[error("Please enter a username")]
    EmptyUsername,
}
