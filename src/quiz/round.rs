//! Single round of the quiz
//!
//! A round presents one word's alphagram and reacts to guesses until the word
//! is answered, given up, or the player quits. `Round::respond` is a pure
//! transition from (round, input) to (next phase, output line).

use crate::core::WordEntry;

/// Where the quiz stands after handling an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Still waiting for the current word to be guessed
    AwaitingGuess,
    /// Word answered or given up; the next round can start
    RoundResolved,
    /// Player asked to quit; no further rounds
    Quitting,
    /// Session over
    Stopped,
}

/// A classified player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Correct,
    GiveUp,
    Define,
    Quit,
    Wrong,
}

impl Guess {
    /// Classify a raw input line against the round's word
    ///
    /// The trailing line terminator is dropped and the rest upper-cased.
    /// The word itself is checked before the `C` and `Q` commands.
    #[must_use]
    pub fn classify(raw: &str, entry: &WordEntry) -> Self {
        let normalized = normalize(raw);

        if normalized.is_empty() {
            Self::GiveUp
        } else if entry.matches(&normalized) {
            Self::Correct
        } else if normalized == "C" {
            Self::Define
        } else if normalized == "Q" {
            Self::Quit
        } else {
            Self::Wrong
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim_end_matches(['\n', '\r']).to_uppercase()
}

/// Result of one transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub guess: Guess,
    pub phase: Phase,
    pub message: Option<String>,
}

/// One word being quizzed
#[derive(Debug, Clone, Copy)]
pub struct Round<'a> {
    entry: &'a WordEntry,
}

impl<'a> Round<'a> {
    #[must_use]
    pub const fn new(entry: &'a WordEntry) -> Self {
        Self { entry }
    }

    #[must_use]
    pub const fn entry(&self) -> &'a WordEntry {
        self.entry
    }

    /// The line shown before every guess
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("Alphagram: {}", self.entry.alphagram())
    }

    /// Handle one line of player input
    #[must_use]
    pub fn respond(&self, raw: &str) -> Reply {
        let guess = Guess::classify(raw, self.entry);
        let (phase, message) = match guess {
            Guess::Correct => (
                Phase::RoundResolved,
                Some(format!("Correct! Word: {}", self.entry)),
            ),
            Guess::GiveUp => (
                Phase::RoundResolved,
                Some(format!("Giving up? Word: {}", self.entry)),
            ),
            Guess::Define => (
                Phase::AwaitingGuess,
                Some(format!("Definition: {}", self.entry.definition())),
            ),
            Guess::Quit => (Phase::Quitting, None),
            Guess::Wrong => (Phase::AwaitingGuess, Some("Nope, try again...".to_string())),
        };

        Reply {
            guess,
            phase,
            message,
        }
    }
}
