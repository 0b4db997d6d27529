//! Character sources a [`Cursor`](super::cursor::Cursor) can read from.

use std::{
    io::{self, Read},
    str::Chars,
};

/// A stream of characters read one at a time.
///
/// `Ok(None)` marks the end of the stream.
pub trait Source {
    fn read_char(&mut self) -> io::Result<Option<char>>;
}

/// Reads from an in-memory string.
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        StrSource {
            chars: text.chars(),
        }
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(text: &'a str) -> Self {
        StrSource::new(text)
    }
}

impl Source for StrSource<'_> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.next())
    }
}

/// Decodes UTF-8 from a byte reader.
///
/// No buffering is done here; wrap slow readers in a `BufReader`.
pub struct ReaderSource<R: Read> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource { reader }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> Source for ReaderSource<R> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };

        let width = match first {
            0x00..=0x7F => return Ok(Some(first as char)),
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return Err(invalid_utf8()),
        };

        let mut buf = [first, 0, 0, 0];
        self.reader.read_exact(&mut buf[1..width])?;

        std::str::from_utf8(&buf[..width])
            .map_err(|_| invalid_utf8())?
            .chars()
            .next()
            .map(Some)
            .ok_or_else(invalid_utf8)
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")
}
