use crate::constants::{POINTS_MAX, POINTS_MIN, TEXT_MAX_LEN, TITLE_MAX_LEN};
use thiserror::Error;

/// Rejected construction or mutation input.
///
/// Violations reject the whole operation; nothing is clamped or repaired.
/// The display text is part of the contract — external callers match on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A question title was empty.
    #[error("Title cannot be empty")]
    EmptyTitle,

    /// A question title exceeded the character limit.
    #[error("Title cannot be longer than {} characters", TITLE_MAX_LEN)]
    TitleTooLong,

    /// A choice text was empty.
    #[error("Text cannot be empty")]
    EmptyText,

    /// A choice text exceeded the character limit.
    #[error("Text cannot be longer than {} characters", TEXT_MAX_LEN)]
    TextTooLong,

    /// Points fell outside the allowed range.
    #[error("Points must be between {} and {}", POINTS_MIN, POINTS_MAX)]
    PointsOutOfRange,

    /// The selection limit must allow at least one choice.
    #[error("Max selections must be at least 1")]
    MaxSelectionsZero,
}

/// Errors produced by [`Question`](crate::Question) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Malformed input, propagated unchanged from field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An operation referenced a choice id that does not exist.
    #[error("Invalid choice id: {id}")]
    InvalidChoiceId {
        /// The id that matched no owned choice.
        id: u32,
    },

    /// More choice ids were submitted than the question permits.
    #[error("Cannot select more than {limit} choices")]
    SelectionLimit {
        /// The question's `max_selections` at the time of the call.
        limit: u32,
    },
}
