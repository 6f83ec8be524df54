//! Word-matching engine
//!
//! Pure value types with no I/O, randomness or game state. Every operation is
//! total: letters missing from a word produce empty results, never errors.

mod feedback;
mod secret;
mod word;

pub use feedback::{Feedback, Mark};
pub use secret::{SecretWord, greens, yellows};
pub use word::Word;
