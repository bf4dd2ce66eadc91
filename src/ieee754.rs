//! IEEE-754 binary32 field extraction
//!
//! Decodes single-precision floats from raw little-endian payload bytes by
//! decomposing the bit pattern directly: sign, biased exponent, and mantissa
//! with the implicit leading one. No built-in float-bytes cast is involved
//! in the decode path; `f32::from_le_bytes` appears only as a test oracle.

/// Bias subtracted from the 8-bit exponent field.
const EXPONENT_BIAS: i32 = 127;

/// Mask for the 23 explicit mantissa bits (bits 0-22).
const MANTISSA_MASK: u32 = 0x007F_FFFF;

/// Implicit leading one prefixed to the mantissa of normalized values.
const IMPLICIT_ONE: u32 = 0x0080_0000;

/// Number of payload bytes occupied by one binary32 field.
pub const FLOAT_FIELD_LEN: usize = 4;

/// Assemble a 32-bit word from four little-endian bytes.
///
/// `bytes[offset]` supplies the least significant 8 bits, `bytes[offset + 3]`
/// the most significant. Assembly runs over `u32`: shifting the fourth byte
/// into bit 31 must not sign-extend.
///
/// # Panics
/// Panics if `bytes.len() < offset + 4`.
#[inline]
pub fn assemble_u32_le(bytes: &[u8], offset: usize) -> u32 {
    debug_assert!(
        bytes.len() >= offset + FLOAT_FIELD_LEN,
        "Buffer too short: need {} bytes from offset {}",
        FLOAT_FIELD_LEN,
        offset
    );

    (bytes[offset] as u32)
        | ((bytes[offset + 1] as u32) << 8)
        | ((bytes[offset + 2] as u32) << 16)
        | ((bytes[offset + 3] as u32) << 24)
}

/// Decode a binary32 float stored little-endian at `offset`.
///
/// Extracts the sign (bit 31) and exponent (bits 23-30, bias 127), restores
/// the implicit leading one into the 23-bit mantissa, and scales:
/// `value = sign * significand * 2^(exponent - 23)`. The `-23` rescales the
/// 24-bit integer significand into [1, 2). The result is computed in `f64`,
/// which represents every finite normalized binary32 value exactly.
///
/// ±0.0 bit patterns short-circuit to signed zero. Subnormal and Inf/NaN
/// patterns get no special treatment: the normalized formula is applied
/// uniformly and deviates from strict IEEE-754 for those inputs. Decode
/// correctness is guaranteed for finite normalized values only.
///
/// # Arguments
/// * `bytes` - Source payload buffer
/// * `offset` - Index of the first (least significant) byte of the field
///
/// # Panics
/// Panics if `bytes.len() < offset + 4`. Callers validate payload length
/// before decoding (see [`crate::uplink::decode_uplink`]).
pub fn decode_f32_le(bytes: &[u8], offset: usize) -> f64 {
    let bits = assemble_u32_le(bytes, offset);

    // ±0.0: the normalized formula below would fabricate the implicit
    // leading one and yield 2^-127 instead.
    if bits << 1 == 0 {
        return if bits >> 31 == 1 { -0.0 } else { 0.0 };
    }

    let sign = if bits >> 31 == 1 { -1.0 } else { 1.0 };
    let exponent = ((bits >> 23) & 0xFF) as i32 - EXPONENT_BIAS;
    let significand = (bits & MANTISSA_MASK) | IMPLICIT_ONE;

    sign * f64::from(significand) * 2f64.powi(exponent - 23)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_u32_le() {
        let bytes = [0x78, 0x56, 0x34, 0x12];
        assert_eq!(assemble_u32_le(&bytes, 0), 0x1234_5678);
    }

    #[test]
    fn test_assemble_u32_le_at_offset() {
        let bytes = [0xAA, 0x00, 0x00, 0x80, 0x3F];
        assert_eq!(assemble_u32_le(&bytes, 1), 0x3F80_0000);
    }

    #[test]
    fn test_assemble_high_bit_no_sign_extension() {
        // Fourth byte with its top bit set lands in bit 31 cleanly
        let bytes = [0x00, 0x00, 0x80, 0xBF];
        assert_eq!(assemble_u32_le(&bytes, 0), 0xBF80_0000);
    }

    #[test]
    fn test_decode_known_values() {
        let cases: [([u8; 4], f64); 7] = [
            ([0x00, 0x00, 0x80, 0x3F], 1.0),
            ([0x00, 0x00, 0x00, 0x00], 0.0),
            ([0x00, 0x00, 0xA0, 0xC0], -5.0),
            ([0x00, 0x00, 0x80, 0xBF], -1.0),
            ([0x00, 0x00, 0xC8, 0x41], 25.0),
            ([0x00, 0x00, 0x00, 0x3F], 0.5),
            ([0x66, 0x66, 0xC8, 0x42], 100.19999694824219),
        ];

        for (bytes, expected) in cases {
            assert_eq!(decode_f32_le(&bytes, 0), expected, "bytes {bytes:02X?}");
        }
    }

    #[test]
    fn test_decode_negative_zero() {
        let value = decode_f32_le(&[0x00, 0x00, 0x00, 0x80], 0);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
    }

    #[test]
    fn test_decode_at_offset() {
        // Field starts after a 2-byte header
        let bytes = [0xFF, 0xFF, 0x00, 0x00, 0xA0, 0xC0];
        assert_eq!(decode_f32_le(&bytes, 2), -5.0);
    }

    #[test]
    fn test_decode_normalized_extremes() {
        // Largest finite and smallest normalized magnitudes
        assert_eq!(
            decode_f32_le(&f32::MAX.to_le_bytes(), 0),
            f64::from(f32::MAX)
        );
        assert_eq!(
            decode_f32_le(&f32::MIN_POSITIVE.to_le_bytes(), 0),
            f64::from(f32::MIN_POSITIVE)
        );
    }

    #[test]
    fn test_decode_matches_oracle_per_exponent() {
        // Every normalized exponent field, both signs, mantissa corners
        for exp_field in 1u32..=254 {
            for mantissa in [0u32, 0x00_0001, 0x2A_AAAA, 0x7F_FFFF] {
                for sign in [0u32, 1] {
                    let bits = (sign << 31) | (exp_field << 23) | mantissa;
                    let bytes = bits.to_le_bytes();
                    let expected = f64::from(f32::from_le_bytes(bytes));
                    assert_eq!(decode_f32_le(&bytes, 0), expected, "bits {bits:#010X}");
                }
            }
        }
    }

    #[test]
    fn test_decode_matches_oracle_randomized() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut checked = 0u32;
        while checked < 10_000 {
            let bits: u32 = rng.gen();
            let exp_field = (bits >> 23) & 0xFF;
            if exp_field == 0 || exp_field == 0xFF {
                // Normalized finite inputs only
                continue;
            }

            let bytes = bits.to_le_bytes();
            let expected = f64::from(f32::from_le_bytes(bytes));
            assert_eq!(decode_f32_le(&bytes, 0), expected, "bits {bits:#010X}");
            checked += 1;
        }
    }

    #[test]
    fn test_roundtrip_encode_decode() {
        let values: [f32; 8] = [1.0, -1.0, 0.5, -5.0, 25.0, 100.25, 1.0e-30, -3.5e30];

        for value in values {
            let decoded = decode_f32_le(&value.to_le_bytes(), 0);
            assert_eq!(decoded, f64::from(value), "value {value}");
        }
    }
}
