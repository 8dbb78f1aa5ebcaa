//! Terminal output
//!
//! Helpers for the startup and error lines the binary prints around a session.

pub mod display;

pub use display::{print_error, print_file_echo, print_prompt};
