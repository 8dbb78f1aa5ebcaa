//! Alphagram Quiz
//!
//! A terminal anagram quiz for word game players: shows the sorted letters of
//! a random word from a word list and asks for the word.
//!
//! # Quick Start
//!
//! ```rust
//! use alphagram_quiz::core::WordEntry;
//! use alphagram_quiz::quiz::{Phase, Round};
//!
//! let entry = WordEntry::parse_line("CAT A small feline").unwrap();
//! assert_eq!(entry.alphagram(), "ACT");
//!
//! let round = Round::new(&entry);
//! assert_eq!(round.respond("cat\n").phase, Phase::RoundResolved);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Quiz loop
pub mod quiz;

// Terminal output formatting
pub mod output;
