//! Configuration for respline
//!
//! Decoder limits with sensible defaults.

/// Limits and strictness knobs for a [`ReplyDecoder`](crate::ReplyDecoder)
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    // -------------------------------------------------------------------------
    // Line Configuration
    // -------------------------------------------------------------------------
    /// Longest line accepted before a terminator, terminator excluded.
    /// A longer line fails as truncated.
    pub max_line_len: usize,

    // -------------------------------------------------------------------------
    // Payload Configuration
    // -------------------------------------------------------------------------
    /// Largest bulk string length prefix accepted (in bytes)
    pub max_bulk_len: usize,

    /// Largest array element count accepted
    pub max_array_len: usize,

    /// Require the two bytes after a bulk payload to be CRLF
    pub strict_terminator: bool,

    // -------------------------------------------------------------------------
    // Buffering Configuration
    // -------------------------------------------------------------------------
    /// Capacity of the BufReader created around a plain `Read` source.
    /// Zero is treated as one.
    pub read_buffer_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_line_len: 4096,
            max_bulk_len: 512 * 1024 * 1024, // 512 MB
            max_array_len: 1024 * 1024,
            strict_terminator: false,
            read_buffer_size: 8 * 1024,
        }
    }
}

impl DecoderConfig {
    /// Create a new config builder
    pub fn builder() -> DecoderConfigBuilder {
        DecoderConfigBuilder::default()
    }
}

/// Builder for DecoderConfig
#[derive(Default)]
pub struct DecoderConfigBuilder {
    config: DecoderConfig,
}

impl DecoderConfigBuilder {
    /// Set the longest accepted line (in bytes)
    pub fn max_line_len(mut self, len: usize) -> Self {
        self.config.max_line_len = len;
        self
    }

    /// Set the largest accepted bulk string (in bytes)
    pub fn max_bulk_len(mut self, len: usize) -> Self {
        self.config.max_bulk_len = len;
        self
    }

    /// Set the largest accepted array element count
    pub fn max_array_len(mut self, len: usize) -> Self {
        self.config.max_array_len = len;
        self
    }

    /// Reject bulk payloads not followed by CRLF
    pub fn strict_terminator(mut self, strict: bool) -> Self {
        self.config.strict_terminator = strict;
        self
    }

    /// Set the read buffer capacity (in bytes)
    pub fn read_buffer_size(mut self, size: usize) -> Self {
        self.config.read_buffer_size = size;
        self
    }

    pub fn build(self) -> DecoderConfig {
        self.config
    }
}
