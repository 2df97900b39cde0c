//! Line reader
//!
//! Splits the reply stream into terminator-delimited lines and spots the nil
//! sentinel before anyone tries to parse it.

use std::io::{self, BufRead, Read};

use crate::error::{ReplyError, Result};

/// `$-1` / `*-1`
pub fn is_nil(line: &[u8]) -> bool {
    matches!(line, [b'$' | b'*', b'-', b'1'])
}

/// Reads lines out of a buffered source into a reusable buffer
pub struct LineReader<R> {
    reader: R,

    /// Holds the most recent line, terminator stripped
    line: Vec<u8>,

    max_line_len: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, max_line_len: usize) -> Self {
        Self {
            reader,
            line: Vec::with_capacity(64),
            max_line_len,
        }
    }

    /// Read the next line
    ///
    /// Returns the bytes before LF with one trailing CR removed. Fails with
    /// `Nil` for the nil sentinel, `EmptyLine` for a bare terminator and
    /// `Truncated` when the stream ends or the line outgrows the limit.
    pub fn read_line(&mut self) -> Result<&[u8]> {
        self.line.clear();

        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if available.is_empty() {
                return Err(ReplyError::Truncated(format!(
                    "stream ended after {} bytes of an unterminated line",
                    self.line.len()
                )));
            }

            let (consumed, done) = match available.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    self.line.extend_from_slice(&available[..pos]);
                    (pos + 1, true)
                }
                None => {
                    self.line.extend_from_slice(available);
                    (available.len(), false)
                }
            };
            self.reader.consume(consumed);

            // The CR of a CRLF split across reads still counts toward the line here
            if self.line.len() > self.max_line_len + 1 {
                return Err(self.line_too_long());
            }
            if done {
                break;
            }
        }

        if self.line.last() == Some(&b'\r') {
            self.line.pop();
        }
        if self.line.len() > self.max_line_len {
            return Err(self.line_too_long());
        }
        if self.line.is_empty() {
            return Err(ReplyError::EmptyLine);
        }
        if is_nil(&self.line) {
            return Err(ReplyError::Nil);
        }

        tracing::trace!(len = self.line.len(), "read reply line");
        Ok(&self.line)
    }

    /// Read exactly `len` bytes that follow a line
    ///
    /// Grows the buffer as bytes arrive instead of trusting `len` up front.
    pub fn read_span(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut span = Vec::with_capacity(len.min(64 * 1024));
        let read = (&mut self.reader).take(len as u64).read_to_end(&mut span)?;
        if read < len {
            return Err(ReplyError::Truncated(format!(
                "expected {} bytes, stream ended after {}",
                len, read
            )));
        }
        Ok(span)
    }

    /// True if the source has no bytes left
    pub fn at_end(&mut self) -> Result<bool> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.is_empty()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn line_too_long(&self) -> ReplyError {
        ReplyError::Truncated(format!(
            "line exceeds the {} byte limit before a terminator",
            self.max_line_len
        ))
    }
}
