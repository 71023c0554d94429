//! Human-driven guesser

use std::io::{self, BufRead, Write};

use super::{GuessError, Guesser};
use crate::core::{Feedback, ObscuredWord};

/// Delegates every guess to a person typing at a prompt
pub struct ManualGuesser {
    input: Box<dyn BufRead>,
}

impl ManualGuesser {
    /// Read guesses from `input`
    #[must_use]
    pub fn new(input: Box<dyn BufRead>) -> Self {
        Self { input }
    }

    /// Read guesses from standard input
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(Box::new(io::BufReader::new(io::stdin())))
    }

    /// Read one line and return it trimmed
    ///
    /// # Errors
    /// Returns an I/O error if reading fails, or `UnexpectedEof` when the
    /// input is closed.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}

impl Guesser for ManualGuesser {
    fn guess(&mut self, obscured: &ObscuredWord) -> Result<char, GuessError> {
        loop {
            print!("{obscured}  Guess: ");
            io::stdout().flush()?;

            if let Some(letter) = self.read_line()?.chars().next() {
                return Ok(letter.to_ascii_lowercase());
            }
        }
    }

    fn update_state(
        &mut self,
        _feedback: &Feedback,
        _obscured: &ObscuredWord,
    ) -> Result<(), GuessError> {
        Ok(())
    }
}
