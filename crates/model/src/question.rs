use crate::choice::Choice;
use crate::constants::{DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS, POINTS_MAX, POINTS_MIN, TITLE_MAX_LEN};
use crate::error::{QuizError, ValidationError};
use crate::id::QuestionIdAllocator;
use serde::Serialize;
use tracing::debug;

/// A quiz question owning an ordered set of [`Choice`]s.
///
/// The question mediates all choice creation, removal, and marking; the rest
/// of the program only ever sees shared borrows of the stored choices, so the
/// answer key cannot be edited behind the aggregate's back.
///
/// # Example
/// ```rust
/// use quizcore_model::{Question, QuestionIdAllocator};
///
/// # fn main() -> Result<(), quizcore_model::QuizError> {
/// let ids = QuestionIdAllocator::new();
/// let mut question = Question::builder("What is the capital of France?")
///     .points(2)
///     .build(&ids)?;
/// question.add_choice("Paris", true)?;
/// question.add_choice("London", false)?;
///
/// assert_eq!(question.select_choices(&[1])?, vec![1]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    id: u64,
    title: String,
    points: u32,
    max_selections: u32,
    choices: Vec<Choice>,
    // Monotone per-question counter so choice ids stay unique after removals.
    #[serde(skip)]
    next_choice_id: u32,
}

impl Question {
    /// Starts building a question with default points and selection limit
    /// (both 1).
    pub fn builder(title: impl Into<String>) -> QuestionBuilder {
        QuestionBuilder {
            title: title.into(),
            points: DEFAULT_POINTS,
            max_selections: DEFAULT_MAX_SELECTIONS,
        }
    }

    /// Builds a question with all defaults.
    ///
    /// # Errors
    /// Same as [`QuestionBuilder::build`].
    pub fn new(title: impl Into<String>, ids: &QuestionIdAllocator) -> Result<Self, ValidationError> {
        Self::builder(title).build(ids)
    }

    /// Identifier allocated at construction time.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Title shown to the user.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Points awarded for a correct answer.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Upper bound on how many choice ids a single [`select_choices`]
    /// submission may contain.
    ///
    /// [`select_choices`]: Self::select_choices
    #[must_use]
    pub const fn max_selections(&self) -> u32 {
        self.max_selections
    }

    /// The owned choices in insertion order.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Looks up a choice by id.
    #[must_use]
    pub fn choice(&self, id: u32) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id() == id)
    }

    /// Ids of every choice currently marked correct, in insertion order.
    #[must_use]
    pub fn correct_choice_ids(&self) -> Vec<u32> {
        self.choices
            .iter()
            .filter(|choice| choice.is_correct())
            .map(Choice::id)
            .collect()
    }

    /// Appends a new choice and returns a borrow of the stored value.
    ///
    /// Ids count up from 1 in call order and are never reused, even after
    /// removals.
    ///
    /// # Errors
    /// Propagates [`Choice::new`] validation unchanged when the text is
    /// outside 1..=100 characters.
    pub fn add_choice(&mut self, text: impl Into<String>, is_correct: bool) -> Result<&Choice, ValidationError> {
        let choice = Choice::new(self.next_choice_id, text, is_correct)?;
        self.next_choice_id += 1;

        debug!(question = self.id, choice = choice.id(), "choice added");
        self.choices.push(choice);
        Ok(self.choices.last().expect("choice was just pushed"))
    }

    /// Removes the choice with the given id and returns it.
    ///
    /// The relative order of the remaining choices is preserved and their ids
    /// are not reassigned.
    ///
    /// # Errors
    /// Returns [`QuizError::InvalidChoiceId`] when no such choice exists.
    pub fn remove_choice_by_id(&mut self, id: u32) -> Result<Choice, QuizError> {
        let index = self
            .choices
            .iter()
            .position(|choice| choice.id() == id)
            .ok_or(QuizError::InvalidChoiceId { id })?;

        debug!(question = self.id, choice = id, "choice removed");
        Ok(self.choices.remove(index))
    }

    /// Drops every owned choice. Never fails, even when already empty.
    pub fn remove_all_choices(&mut self) {
        debug!(question = self.id, count = self.choices.len(), "all choices removed");
        self.choices.clear();
    }

    /// Overwrites the answer key.
    ///
    /// Choices named in `ids` become correct; every other choice becomes
    /// incorrect, even if it was correct before. Ids that match no owned
    /// choice are ignored.
    pub fn set_correct_choices(&mut self, ids: &[u32]) {
        for choice in &mut self.choices {
            choice.set_correct(ids.contains(&choice.id()));
        }
    }

    /// Checks a submission against the answer key.
    ///
    /// Returns the ids from `ids` whose choice is correct, in the order they
    /// were submitted. Ids that match no owned choice are excluded without
    /// error. The question itself is left untouched.
    ///
    /// # Errors
    /// Returns [`QuizError::SelectionLimit`] when more ids are submitted than
    /// [`max_selections`](Self::max_selections) permits. The limit applies to
    /// the submitted count, before any correctness filtering.
    pub fn select_choices(&self, ids: &[u32]) -> Result<Vec<u32>, QuizError> {
        if ids.len() > self.max_selections as usize {
            return Err(QuizError::SelectionLimit {
                limit: self.max_selections,
            });
        }

        Ok(ids
            .iter()
            .copied()
            .filter(|id| self.choice(*id).is_some_and(Choice::is_correct))
            .collect())
    }
}

/// Staged [`Question`] construction with validated defaults.
#[derive(Debug, Clone)]
pub struct QuestionBuilder {
    title: String,
    points: u32,
    max_selections: u32,
}

impl QuestionBuilder {
    /// Points awarded for a correct answer (default 1).
    #[must_use]
    pub fn points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    /// Upper bound on ids a single submission may contain (default 1).
    #[must_use]
    pub fn max_selections(mut self, max_selections: u32) -> Self {
        self.max_selections = max_selections;
        self
    }

    /// Validates the staged fields and allocates an id for the question.
    ///
    /// The id is taken from `ids` only after validation succeeds, so rejected
    /// input never consumes one.
    ///
    /// # Errors
    /// * [`ValidationError::EmptyTitle`] / [`ValidationError::TitleTooLong`]
    ///   when the title is outside 1..=200 characters.
    /// * [`ValidationError::PointsOutOfRange`] when points fall outside
    ///   1..=100.
    /// * [`ValidationError::MaxSelectionsZero`] when the selection limit is 0.
    pub fn build(self, ids: &QuestionIdAllocator) -> Result<Question, ValidationError> {
        match self.title.chars().count() {
            0 => return Err(ValidationError::EmptyTitle),
            len if len > TITLE_MAX_LEN => return Err(ValidationError::TitleTooLong),
            _ => {},
        }
        if !(POINTS_MIN..=POINTS_MAX).contains(&self.points) {
            return Err(ValidationError::PointsOutOfRange);
        }
        if self.max_selections == 0 {
            return Err(ValidationError::MaxSelectionsZero);
        }

        let id = ids.allocate();
        debug!(question = id, title = %self.title, "question created");

        Ok(Question {
            id,
            title: self.title,
            points: self.points,
            max_selections: self.max_selections,
            choices: Vec::new(),
            next_choice_id: 1,
        })
    }
}
