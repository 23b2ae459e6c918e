use crate::constants::TEXT_MAX_LEN;
use crate::error::ValidationError;
use serde::Serialize;

/// A single answer option belonging to a question.
///
/// In normal use choices are created through
/// [`Question::add_choice`](crate::Question::add_choice), which assigns the
/// sequential id; the constructor is public so hosts can validate texts in
/// isolation. Fields are read-only from the outside — correctness marks are
/// changed through the owning question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: u32,
    text: String,
    is_correct: bool,
}

impl Choice {
    /// Creates a choice after validating its text.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyText`] or
    /// [`ValidationError::TextTooLong`] when the text is outside
    /// 1..=100 characters.
    pub fn new(id: u32, text: impl Into<String>, is_correct: bool) -> Result<Self, ValidationError> {
        let text = text.into();
        match text.chars().count() {
            0 => Err(ValidationError::EmptyText),
            len if len > TEXT_MAX_LEN => Err(ValidationError::TextTooLong),
            _ => Ok(Self { id, text, is_correct }),
        }
    }

    /// Identifier unique within the owning question (1-based, creation order).
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Answer text shown to the user.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this choice is part of the answer key.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub(crate) fn set_correct(&mut self, correct: bool) {
        self.is_correct = correct;
    }
}
