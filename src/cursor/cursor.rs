//! The cursor the parser reads from.
//!
//! A [`Cursor`] owns its [`Source`] and always holds one character of
//! lookahead. Whitespace is consumed eagerly, so after any public method
//! returns the lookahead is either a non-whitespace character or the cursor
//! is at the end of input.

use std::io::Read;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::source::{ReaderSource, Source, StrSource};

/// Lookahead reported by [`Cursor::peek`] once the input is exhausted.
pub const END_OF_INPUT: char = '\0';

pub struct Cursor<S: Source> {
    /// The exclusively owned character source
    source: S,
    /// Current lookahead, `END_OF_INPUT` when `at_end` is set
    next: char,
    /// Set once the source is exhausted or failed
    at_end: bool,
    /// Offset of `next` in the input
    pos: u32,
    /// Number of characters read so far, saturating at `u32::MAX`
    pub(super) read: u32,
    /// One past the last non-whitespace character consumed
    end: u32,
}

impl<'a> Cursor<StrSource<'a>> {
    pub fn from_text(text: &'a str) -> Self {
        Cursor::new(StrSource::new(text))
    }
}

impl<R: Read> Cursor<ReaderSource<R>> {
    pub fn from_reader(reader: R) -> Self {
        Cursor::new(ReaderSource::new(reader))
    }
}

impl<S: Source> Cursor<S> {
    /// Binds the cursor to `source` and loads the first non-whitespace
    /// character as lookahead.
    pub fn new(source: S) -> Self {
        let mut cursor = Cursor {
            source,
            next: END_OF_INPUT,
            at_end: false,
            pos: 0,
            read: 0,
            end: 0,
        };
        cursor.skip();
        cursor
    }

    /// Returns the current lookahead without consuming it.
    ///
    /// At end of input this is [`END_OF_INPUT`]; check [`Cursor::at_end`]
    /// before trusting it.
    pub fn peek(&self) -> char {
        self.next
    }

    /// Returns true if no more characters are available.
    pub fn at_end(&self) -> bool {
        self.at_end
    }

    /// Returns the lookahead, or `None` at end of input.
    pub fn current(&self) -> Option<char> {
        if self.at_end {
            None
        } else {
            Some(self.next)
        }
    }

    /// Returns the position of the lookahead character.
    ///
    /// At end of input this is one past the last character read.
    pub fn get_position(&self) -> Position {
        Position(self.pos)
    }

    /// Returns the position just past the last consumed token character.
    pub fn get_last_end(&self) -> Position {
        Position(self.end)
    }

    /// Reads the next available character, skipping over whitespace.
    pub fn skip(&mut self) {
        self.read_next();
        self.skip_whitespace();
    }

    /// Consumes the lookahead if it is `expected`.
    ///
    /// # Returns
    ///
    /// Returns an `UnexpectedCharacter` error positioned at the lookahead
    /// if it does not match.
    pub fn expect(&mut self, expected: char) -> Result<(), Error> {
        match self.current() {
            Some(c) if c == expected => {
                self.skip();
                Ok(())
            }
            found => Err(Error::new(
                ErrorImpl::UnexpectedCharacter { expected, found },
                self.get_position(),
            )),
        }
    }

    /// Reads an identifier: a letter followed by zero or more letters or
    /// digits. Should only be called when the lookahead is a letter.
    pub fn read_identifier(&mut self) -> String {
        let mut identifier = String::new();
        identifier.push(self.next);
        self.read_next();

        while !self.at_end && self.next.is_alphanumeric() {
            identifier.push(self.next);
            self.read_next();
        }
        self.skip_whitespace();

        tracing::trace!(identifier = %identifier, "read identifier");
        identifier
    }

    /// Reads a non-negative decimal integer. Should only be called when the
    /// lookahead is a digit; otherwise nothing is consumed and 0 is returned.
    ///
    /// # Returns
    ///
    /// Returns a `NumberParseError` positioned at the first digit if the
    /// literal does not fit in an `i64`. The whole literal is consumed
    /// either way.
    pub fn read_integer(&mut self) -> Result<i64, Error> {
        let start = self.get_position();
        let mut token = String::new();
        let mut result: Option<i64> = Some(0);

        while !self.at_end && self.next.is_ascii_digit() {
            let digit = i64::from(self.next as u8 - b'0');
            result = result
                .and_then(|acc| acc.checked_mul(10))
                .and_then(|acc| acc.checked_add(digit));
            token.push(self.next);
            self.read_next();
        }
        self.skip_whitespace();

        tracing::trace!(literal = %token, "read integer");
        result.ok_or_else(|| Error::new(ErrorImpl::NumberParseError { token }, start))
    }

    // An I/O failure is indistinguishable from running out of input. Once
    // at the end the cursor stays there.
    fn read_next(&mut self) {
        if self.at_end {
            return;
        }
        if self.read > 0 && !self.next.is_whitespace() {
            self.end = self.pos.saturating_add(1);
        }

        match self.source.read_char() {
            Ok(Some(c)) => {
                self.next = c;
                self.pos = self.read;
                self.read = self.read.saturating_add(1);
            }
            Ok(None) => self.finish(),
            Err(e) => {
                tracing::debug!(error = %e, "source failed, treating as end of input");
                self.finish();
            }
        }
    }

    fn finish(&mut self) {
        self.next = END_OF_INPUT;
        self.at_end = true;
        self.pos = self.read;
    }

    fn skip_whitespace(&mut self) {
        while !self.at_end && self.next.is_whitespace() {
            self.read_next();
        }
    }
}
