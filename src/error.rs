//! Error types for respline
//!
//! Every failure a decode can produce, including the protocol's explicit nil.

use std::io;

use thiserror::Error;

/// Result type alias using ReplyError
pub type Result<T> = std::result::Result<T, ReplyError>;

/// Unified error type for reply decoding
#[derive(Debug, Error)]
pub enum ReplyError {
    // -------------------------------------------------------------------------
    // Sentinel
    // -------------------------------------------------------------------------
    /// The server explicitly replied with nil (`$-1` or `*-1`).
    ///
    /// Not a failure of the stream. Inside an array it is absorbed as
    /// [`BulkElement::Absent`](crate::protocol::BulkElement::Absent).
    #[error("redis: nil")]
    Nil,

    // -------------------------------------------------------------------------
    // Stream Errors
    // -------------------------------------------------------------------------
    #[error("Truncated reply: {0}")]
    Truncated(String),

    #[error("IO error: {0}")]
    Io(#[source] io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Empty line in reply stream")]
    EmptyLine,

    #[error("Malformed integer reply: {0:?}")]
    MalformedInteger(String),

    #[error("Malformed length prefix: {0}")]
    MalformedLength(String),

    #[error("Unsupported reply type tag: 0x{0:02x}")]
    UnsupportedTag(u8),

    #[error("Protocol violation: {0}")]
    ProtocolViolation(String),
}

impl ReplyError {
    /// True if the server explicitly represented absence
    pub fn is_nil(&self) -> bool {
        matches!(self, ReplyError::Nil)
    }

    /// True if the stream ended (or overflowed a limit) mid-reply
    pub fn is_truncated(&self) -> bool {
        matches!(self, ReplyError::Truncated(_))
    }

    /// True if the server sent bytes that are not a valid reply
    ///
    /// After one of these the stream position is unknown and the connection
    /// layer should resynchronize or drop the connection.
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            ReplyError::EmptyLine
                | ReplyError::MalformedInteger(_)
                | ReplyError::MalformedLength(_)
                | ReplyError::UnsupportedTag(_)
                | ReplyError::ProtocolViolation(_)
        )
    }
}

impl From<io::Error> for ReplyError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => ReplyError::Truncated(err.to_string()),
            _ => ReplyError::Io(err),
        }
    }
}
