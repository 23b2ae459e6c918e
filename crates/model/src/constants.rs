//! Field bounds shared by the domain types.
//!
//! Lengths are measured in characters (Unicode scalar values), not bytes.

/// Maximum length of a question title, in characters.
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum length of a choice text, in characters.
pub const TEXT_MAX_LEN: usize = 100;

/// Lowest number of points a question may award.
pub const POINTS_MIN: u32 = 1;

/// Highest number of points a question may award.
pub const POINTS_MAX: u32 = 100;

/// Points awarded when the host does not say otherwise.
pub const DEFAULT_POINTS: u32 = 1;

/// Selection limit applied when the host does not say otherwise.
pub const DEFAULT_MAX_SELECTIONS: u32 = 1;
