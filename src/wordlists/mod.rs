//! Word lists for the quiz
//!
//! A `WordStore` is built once from a word file and only read afterwards.

pub mod loader;

use crate::core::WordEntry;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use loader::{load_from_reader, load_word_store};

/// Errors raised while building a `WordStore`
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot open word file '{}'", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read word list")]
    Read(#[from] io::Error),

    #[error("word list{} contains no words", path_suffix(.path))]
    EmptyWordList { path: Option<PathBuf> },
}

#[allow(clippy::ref_option)]
fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref().map_or_else(String::new, |p| format!(" '{}'", p.display()))
}

/// Ordered, non-empty collection of word entries
#[derive(Debug, Clone)]
pub struct WordStore {
    entries: Vec<WordEntry>,
}

impl WordStore {
    /// Build a store from already parsed entries
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyWordList` if `entries` is empty.
    pub fn from_entries(entries: Vec<WordEntry>) -> Result<Self, StoreError> {
        if entries.is_empty() {
            return Err(StoreError::EmptyWordList { path: None });
        }
        Ok(Self { entries })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    /// Pick an entry uniformly at random
    ///
    /// Sampling is with replacement: the same entry may come up again.
    ///
    /// # Panics
    /// Will not panic - `from_entries` rejects empty entry lists.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &WordEntry {
        self.entries
            .choose(rng)
            .expect("store is non-empty by construction")
    }
}
