//! Fixed-width field validation.
//!
//! Every fixed-width field in every advertisement format must serialize to
//! exactly its declared byte width. [`validate`] is the single place that
//! contract is enforced: byte strings must already carry the right length,
//! integers are converted to big-endian fixed-width bytes with a range
//! check, and anything else is rejected outright.

use crate::error::BeaconError;

/// A loosely-typed field value, as accepted at the construction boundary.
///
/// The wire formats take "bytes or integer only" — text and floats are
/// representable here so that they can be rejected with a useful error
/// instead of being silently coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Bytes(&'a [u8]),
    Int(i64),
    Str(&'a str),
    Float(f64),
}

/// Validates that `value` is representable as exactly `width` bytes and
/// returns the fixed-width big-endian byte string.
///
/// - `Bytes` succeed iff their length equals `width`.
/// - `Int` succeeds iff the value fits `width` bytes (unsigned range for
///   non-negative values, two's-complement range for negative ones).
/// - `Str` and `Float` always fail; the formats do not coerce.
pub fn validate(value: FieldValue<'_>, width: usize) -> Result<Vec<u8>, BeaconError> {
    match value {
        FieldValue::Bytes(bytes) => {
            if bytes.len() != width {
                return Err(BeaconError::LengthMismatch {
                    expected: width,
                    actual: bytes.len(),
                });
            }
            Ok(bytes.to_vec())
        }
        FieldValue::Int(val) => int_to_fixed_be(val, width),
        FieldValue::Str(_) => Err(BeaconError::UnsupportedType("string")),
        FieldValue::Float(_) => Err(BeaconError::UnsupportedType("float")),
    }
}

fn int_to_fixed_be(val: i64, width: usize) -> Result<Vec<u8>, BeaconError> {
    debug_assert!(width >= 1);
    if width < 8 {
        let bits = 8 * width as u32;
        let in_range = if val >= 0 {
            (val as i128) < (1i128 << bits)
        } else {
            (val as i128) >= -(1i128 << (bits - 1))
        };
        if !in_range {
            return Err(BeaconError::IntOutOfRange { value: val, width });
        }
    }
    // Two's-complement big-endian, sign-extended or truncated to width.
    let mut out = vec![if val < 0 { 0xFF } else { 0x00 }; width];
    let be = val.to_be_bytes();
    let take = width.min(8);
    out[width - take..].copy_from_slice(&be[8 - take..]);
    Ok(out)
}
