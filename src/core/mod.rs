//! Core domain types for the quiz
//!
//! Pure types with no I/O: word entries and the alphagram function.

mod entry;

pub use entry::{WordEntry, alphagram};
