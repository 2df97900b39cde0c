//! # respline
//!
//! A blocking decoder for Redis Serialization Protocol (RESP) replies:
//! - Status, error, integer, bulk string and array replies
//! - Nil as a first-class value inside arrays
//! - Bounded line and payload sizes
//! - Exactly one reply consumed per call
//!
//! ## Data Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Connection (owned by the caller)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ impl Read
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      LineReader                             │
//! │          (CRLF framing, nil sentinel, limits)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     ReplyDecoder                            │
//! │         (tag dispatch, bulk payloads, arrays)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!            ReplyValue / ReplyError
//! ```
//!
//! ## Example
//!
//! ```
//! use respline::{ReplyDecoder, ReplyValue, BulkElement};
//!
//! let mut decoder = ReplyDecoder::new(&b"*2\r\n$5\r\nhello\r\n$-1\r\n"[..]);
//! let reply = decoder.decode().unwrap();
//! assert_eq!(
//!     reply,
//!     ReplyValue::Array(vec![BulkElement::from("hello"), BulkElement::Absent])
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ReplyError, Result};
pub use config::DecoderConfig;
pub use protocol::{BulkElement, ReplyDecoder, ReplyValue, TypeTag};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of respline
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
