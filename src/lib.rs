//! LoRaWAN Uplink Float Codec
//!
//! Payload formatter for LoRaWAN network-server webhooks: decodes a
//! single-precision IEEE-754 value from a 4-byte little-endian uplink
//! payload into a named application field.
//!
//! # Architecture
//!
//! This library provides:
//! - **Float Decoder** (`ieee754`): manual binary32 decomposition (sign,
//!   biased exponent, mantissa with the implicit leading one) without
//!   reinterpreting through a built-in float-bytes cast
//! - **Uplink Adapter** (`uplink`): payload length validation and the
//!   webhook success/error response contract
//!
//! The crate is pure and stateless: one synchronous call per uplink, no
//! shared state, safe to invoke concurrently.

pub mod error;
pub mod ieee754;
pub mod uplink;

// Re-export core types
pub use error::{CodecError, Result};
pub use ieee754::{assemble_u32_le, decode_f32_le, FLOAT_FIELD_LEN};
pub use uplink::{decode_uplink, DecodedData, UplinkInput, UplinkResponse};
