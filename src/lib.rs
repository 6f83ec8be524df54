//! Word matching for Hangman and Wordle
//!
//! A letter-position engine plus the round drivers and console commands built
//! on it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordmatch::core::{SecretWord, Word};
//!
//! let secret = SecretWord::new("aaabb");
//! let guess = Word::new("bbbcc");
//!
//! assert!(secret.greens(&guess).is_empty());
//! assert_eq!(secret.yellows(&guess).len(), 2);
//! ```

// Word-matching engine
pub mod core;

// Round drivers
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;
