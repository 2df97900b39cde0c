//! Reply decoder
//!
//! Reads one complete reply per call from a blocking byte stream.

use std::io::{BufRead, BufReader, Read};

use bytes::Bytes;

use super::line::LineReader;
use super::{BulkElement, ReplyValue, TypeTag};
use crate::config::DecoderConfig;
use crate::error::{ReplyError, Result};

/// Decodes RESP replies from a stream it owns
///
/// Each call consumes exactly the bytes of one reply, so calls can be
/// repeated to read successive replies from the same connection. Every read
/// blocks; put a read timeout on the underlying stream to bound a call.
pub struct ReplyDecoder<R> {
    lines: LineReader<R>,
    config: DecoderConfig,
}

impl<R: Read> ReplyDecoder<BufReader<R>> {
    /// Wrap an unbuffered source with default limits
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, DecoderConfig::default())
    }

    /// Wrap an unbuffered source
    pub fn with_config(inner: R, config: DecoderConfig) -> Self {
        // A zero-capacity BufReader never yields bytes
        let reader = BufReader::with_capacity(config.read_buffer_size.max(1), inner);
        Self::from_buf_read(reader, config)
    }
}

impl<R: BufRead> ReplyDecoder<R> {
    /// Use an already buffered source as is
    pub fn from_buf_read(reader: R, config: DecoderConfig) -> Self {
        Self {
            lines: LineReader::new(reader, config.max_line_len),
            config,
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn get_ref(&self) -> &R {
        self.lines.get_ref()
    }

    /// Reading from the returned source directly desynchronizes the decoder
    pub fn get_mut(&mut self) -> &mut R {
        self.lines.get_mut()
    }

    pub fn into_inner(self) -> R {
        self.lines.into_inner()
    }

    // =========================================================================
    // Entry Points
    // =========================================================================

    /// Decode one reply
    ///
    /// A top-level nil bulk or nil array fails with [`ReplyError::Nil`].
    pub fn decode(&mut self) -> Result<ReplyValue> {
        let line = self.lines.read_line()?;

        let tag = TypeTag::try_from(line[0])?;
        let body = &line[1..];

        let reply = match tag {
            TypeTag::Status => ReplyValue::Status(Bytes::copy_from_slice(body)),
            TypeTag::Error => ReplyValue::Error(Bytes::copy_from_slice(body)),
            TypeTag::Integer => ReplyValue::Integer(parse_integer(body)?),
            TypeTag::Bulk => {
                let len = parse_length(body, "bulk length", self.config.max_bulk_len)?;
                ReplyValue::BulkString(self.read_bulk_payload(len)?)
            }
            TypeTag::Array => {
                let count = parse_length(body, "array count", self.config.max_array_len)?;
                ReplyValue::Array(self.read_array_elements(count)?)
            }
        };

        tracing::trace!(kind = ?reply.kind(), "decoded reply");
        Ok(reply)
    }

    /// Decode one reply, mapping a top-level nil to `None`
    pub fn decode_optional(&mut self) -> Result<Option<ReplyValue>> {
        match self.decode() {
            Ok(reply) => Ok(Some(reply)),
            Err(ReplyError::Nil) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Decode the next reply, or `None` if the stream ended cleanly
    ///
    /// Only the end of stream before the first byte of a reply counts as
    /// clean; ending anywhere inside a reply is still `Truncated`.
    pub fn next_reply(&mut self) -> Result<Option<ReplyValue>> {
        if self.lines.at_end()? {
            return Ok(None);
        }
        self.decode().map(Some)
    }

    /// Iterate over replies until the stream ends
    ///
    /// Top-level nil replies come through as `Err(ReplyError::Nil)` and do
    /// not end iteration. Any other error does.
    pub fn replies(&mut self) -> Replies<'_, R> {
        Replies {
            decoder: self,
            failed: false,
        }
    }

    // =========================================================================
    // Bulk / Array
    // =========================================================================

    /// Read `len` payload bytes plus the terminator that follows them
    fn read_bulk_payload(&mut self, len: usize) -> Result<Bytes> {
        let total = len
            .checked_add(2)
            .ok_or_else(|| ReplyError::MalformedLength(format!("bulk length {} overflows", len)))?;

        let mut payload = self.lines.read_span(total)?;

        if self.config.strict_terminator && payload[len..] != *b"\r\n" {
            return Err(ReplyError::ProtocolViolation(format!(
                "bulk payload of {} bytes not followed by CRLF",
                len
            )));
        }

        payload.truncate(len);
        Ok(Bytes::from(payload))
    }

    /// Read the elements of an array whose header announced `count`
    fn read_array_elements(&mut self, count: usize) -> Result<Vec<BulkElement>> {
        let mut elements = Vec::with_capacity(count.min(1024));

        for index in 0..count {
            let line = match self.lines.read_line() {
                Ok(line) => line,
                Err(ReplyError::Nil) => {
                    elements.push(BulkElement::Absent);
                    continue;
                }
                Err(e) => return Err(e),
            };

            if line[0] != TypeTag::Bulk.as_byte() {
                return Err(ReplyError::ProtocolViolation(format!(
                    "array element {} has tag {:?}, only bulk strings are allowed",
                    index, line[0] as char
                )));
            }

            // Nil elements never get here; the line reader already turned them into Absent
            let len = parse_length(&line[1..], "bulk length", self.config.max_bulk_len)?;
            elements.push(BulkElement::Value(self.read_bulk_payload(len)?));
        }

        Ok(elements)
    }
}

/// Iterator returned by [`ReplyDecoder::replies`]
pub struct Replies<'a, R> {
    decoder: &'a mut ReplyDecoder<R>,
    failed: bool,
}

impl<R: BufRead> Iterator for Replies<'_, R> {
    type Item = Result<ReplyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.decoder.next_reply() {
            Ok(Some(reply)) => Some(Ok(reply)),
            Ok(None) => None,
            Err(ReplyError::Nil) => Some(Err(ReplyError::Nil)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

// =============================================================================
// Numeric fields
// =============================================================================

/// Parse an integer reply body
fn parse_integer(body: &[u8]) -> Result<i64> {
    std::str::from_utf8(body)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| ReplyError::MalformedInteger(String::from_utf8_lossy(body).into_owned()))
}

/// Parse a non-negative length or count no larger than `max`
fn parse_length(body: &[u8], what: &str, max: usize) -> Result<usize> {
    let len = std::str::from_utf8(body)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| {
            ReplyError::MalformedLength(format!(
                "{} {:?} is not a non-negative decimal",
                what,
                String::from_utf8_lossy(body)
            ))
        })?;

    if len > max {
        return Err(ReplyError::MalformedLength(format!(
            "{} {} exceeds the limit of {}",
            what, len, max
        )));
    }
    Ok(len)
}
