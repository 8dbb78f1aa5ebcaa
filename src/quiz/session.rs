//! Interactive quiz session
//!
//! Drives rounds over any buffered reader and writer so the whole loop can
//! be exercised without a terminal.

use super::round::{Guess, Phase, Round};
use crate::wordlists::WordStore;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Counts gathered over a session, for logging only
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rounds: usize,
    pub answered: usize,
    pub given_up: usize,
}

/// A quiz session over a word store
pub struct Session<'a, R, W, G> {
    store: &'a WordStore,
    input: R,
    output: W,
    rng: G,
    phase: Phase,
    summary: Summary,
}

impl<'a, R: BufRead, W: Write, G: Rng> Session<'a, R, W, G> {
    pub const fn new(store: &'a WordStore, input: R, output: W, rng: G) -> Self {
        Self {
            store,
            input,
            output,
            rng,
            phase: Phase::AwaitingGuess,
            summary: Summary {
                rounds: 0,
                answered: 0,
                given_up: 0,
            },
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Run rounds until the player quits, then print the farewell line
    ///
    /// End of input counts as a quit. Calling `run` again on a finished
    /// session does nothing and returns the same summary.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<Summary> {
        if self.phase == Phase::Stopped {
            return Ok(self.summary);
        }

        while self.phase != Phase::Quitting {
            let store = self.store;
            let round = Round::new(store.choose(&mut self.rng));
            self.summary.rounds += 1;
            debug!(round = self.summary.rounds, word = round.entry().name(), "starting round");

            self.phase = Phase::AwaitingGuess;
            while self.phase == Phase::AwaitingGuess {
                writeln!(self.output, "{}", round.prompt())?;
                self.output.flush()?;

                let Some(line) = self.read_guess()? else {
                    debug!("end of input, quitting");
                    self.phase = Phase::Quitting;
                    break;
                };

                let reply = round.respond(&line);
                if let Some(message) = &reply.message {
                    writeln!(self.output, "{message}")?;
                }
                match reply.guess {
                    Guess::Correct => self.summary.answered += 1,
                    Guess::GiveUp => self.summary.given_up += 1,
                    Guess::Define | Guess::Quit | Guess::Wrong => {}
                }
                self.phase = reply.phase;
            }
        }

        writeln!(self.output, "Bye...")?;
        self.output.flush()?;
        self.phase = Phase::Stopped;

        info!(
            rounds = self.summary.rounds,
            answered = self.summary.answered,
            given_up = self.summary.given_up,
            "session finished"
        );
        Ok(self.summary)
    }

    // Bytes that are not UTF-8 become U+FFFD and fall through to a wrong guess
    fn read_guess(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Consume the session and hand back the output sink
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }
}
