//! Uplink Codec Error Types
//!
//! Core error types for uplink payload decoding.

use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Uplink payload decoding errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Payload shorter than the 4 bytes one float field occupies.
    ///
    /// The message text is part of the webhook contract and is surfaced
    /// verbatim in the response error list.
    #[error("Not enough bytes for float")]
    NotEnoughBytes,
}
