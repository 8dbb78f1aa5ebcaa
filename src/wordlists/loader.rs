//! Word list loading utilities
//!
//! Reads the plain text word file format: one entry per line, the word first,
//! then a whitespace run, then the definition.

use super::{StoreError, WordStore};
use crate::core::WordEntry;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Load a word store from a file
///
/// The file is opened and closed within this call.
///
/// # Errors
///
/// Returns `StoreError::FileAccess` if the file cannot be opened,
/// `StoreError::Read` if reading fails part way, and
/// `StoreError::EmptyWordList` if the file holds no entries.
///
/// # Examples
/// ```no_run
/// use alphagram_quiz::wordlists::load_word_store;
///
/// let store = load_word_store("data/3-words.txt").unwrap();
/// println!("Loaded {} words", store.len());
/// ```
pub fn load_word_store<P: AsRef<Path>>(path: P) -> Result<WordStore, StoreError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| StoreError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let store = load_from_reader(BufReader::new(file)).map_err(|err| match err {
        StoreError::EmptyWordList { .. } => StoreError::EmptyWordList {
            path: Some(path.to_path_buf()),
        },
        other => other,
    })?;

    info!(path = %path.display(), words = store.len(), "loaded word list");
    Ok(store)
}

/// Parse word entries from any buffered reader
///
/// Blank lines are skipped; every other line yields one entry, in order.
///
/// # Errors
///
/// Returns `StoreError::Read` on an I/O failure and
/// `StoreError::EmptyWordList` if no entries were found.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<WordStore, StoreError> {
    let mut entries = Vec::new();
    let mut blank = 0_usize;

    for line in reader.lines() {
        match WordEntry::parse_line(&line?) {
            Some(entry) => entries.push(entry),
            None => blank += 1,
        }
    }

    if blank > 0 {
        debug!(blank, "skipped blank lines in word list");
    }

    WordStore::from_entries(entries)
}
