//! Quiz loop
//!
//! `round` holds the pure per-guess transitions, `session` runs them
//! against real input and output.

pub mod round;
pub mod session;

pub use round::{Guess, Phase, Reply, Round};
pub use session::{Session, Summary};
