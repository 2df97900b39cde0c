//! Reply type tags
//!
//! The single leading byte of every reply line.

use crate::error::ReplyError;

/// Reply kinds, keyed by their leading byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TypeTag {
    Status = b'+',
    Error = b'-',
    Integer = b':',
    Bulk = b'$',
    Array = b'*',
}

impl TypeTag {
    /// The wire byte for this tag
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = ReplyError;

    fn try_from(byte: u8) -> Result<Self, ReplyError> {
        match byte {
            b'+' => Ok(TypeTag::Status),
            b'-' => Ok(TypeTag::Error),
            b':' => Ok(TypeTag::Integer),
            b'$' => Ok(TypeTag::Bulk),
            b'*' => Ok(TypeTag::Array),
            other => Err(ReplyError::UnsupportedTag(other)),
        }
    }
}
