//! Uplink payload adapter
//!
//! Shapes raw webhook uplinks into the decoded application contract:
//! a minimum-length check, one float field decoded from offset 0, and a
//! success/error response the network-server integration moves across the
//! JSON boundary.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::{CodecError, Result};
use crate::ieee754::{decode_f32_le, FLOAT_FIELD_LEN};

/// Raw uplink as delivered by the network-server webhook.
///
/// `bytes` is the decrypted application payload. The LoRaWAN port is carried
/// alongside the payload by every network server; it is accepted here and
/// ignored by decoding. Unknown webhook fields are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UplinkInput {
    /// Raw payload bytes
    pub bytes: Vec<u8>,
    /// LoRaWAN application port
    #[serde(default, rename = "fPort", skip_serializing_if = "Option::is_none")]
    pub f_port: Option<u8>,
}

/// Decoded fields of one uplink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodedData {
    /// Rolling average reported by the device, recovered from the first
    /// 4 payload bytes
    pub rolling_avg: f64,
}

/// Decoder outcome: decoded data or a non-empty error list, never both.
///
/// Serializes to exactly `{"data": {...}}` or `{"errors": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UplinkResponse {
    /// Successful decode
    Decoded {
        /// Decoded application fields
        data: DecodedData,
    },
    /// Rejected payload
    Failed {
        /// Human-readable error messages, in detection order
        errors: Vec<String>,
    },
}

impl UplinkResponse {
    /// Create a success response
    pub fn decoded(data: DecodedData) -> Self {
        Self::Decoded { data }
    }

    /// Create a failure response from a codec error
    pub fn failed(err: CodecError) -> Self {
        Self::Failed {
            errors: vec![err.to_string()],
        }
    }

    /// Decoded data, if this is a success response
    pub fn data(&self) -> Option<&DecodedData> {
        match self {
            Self::Decoded { data } => Some(data),
            Self::Failed { .. } => None,
        }
    }

    /// Error messages, empty for success responses
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Decoded { .. } => &[],
            Self::Failed { errors } => errors,
        }
    }
}

/// Decode one uplink payload into the webhook response contract.
///
/// Payloads shorter than 4 bytes are rejected with the error list
/// `["Not enough bytes for float"]` and no decoding is attempted. Otherwise
/// the first 4 bytes are decoded as a little-endian binary32 into
/// `data.rolling_avg`; trailing bytes are ignored.
pub fn decode_uplink(input: &UplinkInput) -> UplinkResponse {
    match try_decode(input) {
        Ok(data) => {
            trace!(rolling_avg = data.rolling_avg, "decoded uplink payload");
            UplinkResponse::decoded(data)
        },
        Err(err) => {
            warn!(payload_len = input.bytes.len(), %err, "rejected uplink payload");
            UplinkResponse::failed(err)
        },
    }
}

fn try_decode(input: &UplinkInput) -> Result<DecodedData> {
    if input.bytes.len() < FLOAT_FIELD_LEN {
        return Err(CodecError::NotEnoughBytes);
    }

    Ok(DecodedData {
        rolling_avg: decode_f32_le(&input.bytes, 0),
    })
}
