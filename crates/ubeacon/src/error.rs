//! Beacon codec error type.

use thiserror::Error;

/// Errors produced while validating field values or decoding
/// advertisement frames.
///
/// Every variant is a local, synchronous failure reported at the point of
/// detection; a decoder either fully populates a record or returns one of
/// these. Callers dispatching over multiple formats should treat any
/// variant as "this buffer is not a valid instance of this format".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BeaconError {
    /// A value or frame does not match a required fixed width.
    #[error("value must be exactly {expected} bytes long, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// An integer falls outside the representable range of its field.
    #[error("integer {value} does not fit in {width} bytes")]
    IntOutOfRange { value: i64, width: usize },
    /// A field value that is neither bytes nor an integer.
    #[error("value must be bytes or an integer, got {0}")]
    UnsupportedType(&'static str),
    /// A text identifier containing a character outside `[0-9a-fA-F-]`.
    #[error("invalid hexadecimal digit {0:?}")]
    InvalidHexDigit(char),
    /// A sub-format tag (data-format byte, frame-type byte, beacon code)
    /// with no known handler.
    #[error("unrecognized format discriminant {0:#04x}")]
    UnrecognizedDiscriminant(u8),
    /// A filter predicate referencing an attribute no beacon format has.
    #[error("unsupported filter key `{0}`")]
    UnsupportedFilterKey(String),
    /// Not enough information was supplied to build a record or filter.
    #[error("a raw frame or a complete field set is required")]
    Construction,
}
