//! Protocol Module
//!
//! Decodes replies in the Redis Serialization Protocol (RESP).
//!
//! ## Wire Format
//! ```text
//! +OK\r\n                          status
//! -ERR unknown command\r\n         error
//! :1000\r\n                        integer
//! $5\r\nhello\r\n                  bulk string      ($-1\r\n is nil)
//! *2\r\n$5\r\nhello\r\n$-1\r\n     array of bulks   (*-1\r\n is nil)
//! ```
//!
//! ### Type Tags
//! - `+`: status
//! - `-`: error
//! - `:`: integer
//! - `$`: bulk string
//! - `*`: array (elements are bulk strings or nil only)

mod tag;
mod reply;
mod line;
mod decoder;

pub use tag::TypeTag;
pub use reply::{BulkElement, ReplyValue};
pub use line::{is_nil, LineReader};
pub use decoder::{ReplyDecoder, Replies};
