//! # Quiz question domain model
//!
//! Pure in-memory model of a quiz [`Question`] and the candidate [`Choice`]
//! answers it owns: validated construction, choice management, and
//! single/multi-select answer checking. Keep it lean: no I/O, no persistence,
//! no async — hosts (a web layer, a CLI) embed the model and keep it in
//! process memory.
//!
//! Question identifiers come from an explicit [`QuestionIdAllocator`] owned by
//! the host instead of hidden global state; share one allocator to get ids
//! that are unique across every question in the process.
//!
//! ## Usage
//! ```rust
//! use quizcore_model::prelude::*;
//!
//! # fn main() -> Result<(), QuizError> {
//! let ids = QuestionIdAllocator::new();
//! let mut question = Question::builder("Which countries are in Europe?")
//!     .points(5)
//!     .max_selections(3)
//!     .build(&ids)?;
//!
//! question.add_choice("France", true)?;
//! question.add_choice("Japan", false)?;
//! question.add_choice("Italy", true)?;
//!
//! assert_eq!(question.select_choices(&[1, 2, 3])?, vec![1, 3]);
//! # Ok(())
//! # }
//! ```

mod choice;
pub mod constants;
mod error;
mod id;
mod question;

pub use crate::choice::Choice;
pub use crate::error::{QuizError, ValidationError};
pub use crate::id::QuestionIdAllocator;
pub use crate::question::{Question, QuestionBuilder};

/// Convenience re-exports for hosts embedding the model.
pub mod prelude {
    pub use crate::choice::Choice;
    pub use crate::error::{QuizError, ValidationError};
    pub use crate::id::QuestionIdAllocator;
    pub use crate::question::{Question, QuestionBuilder};
}
