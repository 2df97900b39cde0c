//! Reply definitions
//!
//! Decoded values handed back to the caller.

use std::fmt;

use bytes::Bytes;

use super::TypeTag;

/// One decoded reply
///
/// Owns its data; nothing in it refers back to the stream it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyValue {
    /// `+OK`
    ///
    /// Kept as raw bytes; servers may put any byte except CR/LF here.
    Status(Bytes),

    /// `-ERR unknown command`
    ///
    /// Decoding succeeded; whether this is a failure is the caller's call.
    Error(Bytes),

    /// `:1000`
    Integer(i64),

    /// `$5\r\nhello`
    BulkString(Bytes),

    /// `*2\r\n$5\r\nhello\r\n$-1`
    Array(Vec<BulkElement>),
}

/// An array element: a bulk payload or the protocol nil
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkElement {
    Value(Bytes),
    Absent,
}

impl ReplyValue {
    /// The tag this reply was encoded under
    pub fn kind(&self) -> TypeTag {
        match self {
            ReplyValue::Status(_) => TypeTag::Status,
            ReplyValue::Error(_) => TypeTag::Error,
            ReplyValue::Integer(_) => TypeTag::Integer,
            ReplyValue::BulkString(_) => TypeTag::Bulk,
            ReplyValue::Array(_) => TypeTag::Array,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ReplyValue::Error(_))
    }

    /// Status text, if this is a status reply with valid UTF-8
    pub fn as_status(&self) -> Option<&str> {
        match self {
            ReplyValue::Status(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Error message, if this is an error reply with valid UTF-8
    pub fn as_error(&self) -> Option<&str> {
        match self {
            ReplyValue::Error(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Raw line body of a status or error reply
    pub fn text_bytes(&self) -> Option<&[u8]> {
        match self {
            ReplyValue::Status(b) | ReplyValue::Error(b) => Some(&b[..]),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ReplyValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bulk(&self) -> Option<&Bytes> {
        match self {
            ReplyValue::BulkString(b) => Some(b),
            _ => None,
        }
    }

    pub fn into_array(self) -> Option<Vec<BulkElement>> {
        match self {
            ReplyValue::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Split server error replies off from everything else
    pub fn into_result(self) -> Result<ReplyValue, Bytes> {
        match self {
            ReplyValue::Error(message) => Err(message),
            other => Ok(other),
        }
    }
}

impl BulkElement {
    pub fn is_absent(&self) -> bool {
        matches!(self, BulkElement::Absent)
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            BulkElement::Value(b) => Some(&b[..]),
            BulkElement::Absent => None,
        }
    }

    /// The payload as text, if present and valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }
}

impl From<BulkElement> for Option<Bytes> {
    fn from(element: BulkElement) -> Self {
        match element {
            BulkElement::Value(b) => Some(b),
            BulkElement::Absent => None,
        }
    }
}

impl From<&str> for BulkElement {
    fn from(s: &str) -> Self {
        BulkElement::Value(Bytes::copy_from_slice(s.as_bytes()))
    }
}

// =============================================================================
// redis-cli style rendering
// =============================================================================

impl fmt::Display for ReplyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyValue::Status(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            ReplyValue::Error(b) => write!(f, "(error) {}", String::from_utf8_lossy(b)),
            ReplyValue::Integer(n) => write!(f, "(integer) {n}"),
            ReplyValue::BulkString(b) => write!(f, "\"{}\"", b.escape_ascii()),
            ReplyValue::Array(elements) => {
                if elements.is_empty() {
                    return write!(f, "(empty array)");
                }
                let width = elements.len().to_string().len();
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{:>width$}) {element}", i + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for BulkElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulkElement::Value(b) => write!(f, "\"{}\"", b.escape_ascii()),
            BulkElement::Absent => write!(f, "(nil)"),
        }
    }
}
