//! 128-bit identifier codec.
//!
//! Converts between the canonical hyphenated hexadecimal form
//! (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, lowercase) and the 16-byte
//! binary form used on the wire. The round trip is exact in both
//! directions.

use std::fmt;
use std::str::FromStr;

use crate::error::BeaconError;

/// A 16-byte beacon identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid(pub [u8; 16]);

impl Uuid {
    /// Parses a hyphenated hexadecimal identifier string.
    ///
    /// Hyphens are ignored wherever they appear; the remaining digits
    /// must decode to exactly 16 bytes. A non-hexadecimal character fails
    /// with [`BeaconError::InvalidHexDigit`], a wrong digit count with a
    /// length mismatch carrying the actual byte count.
    pub fn parse(text: &str) -> Result<Self, BeaconError> {
        let mut bytes = [0u8; 16];
        let mut nibbles = 0usize;
        for ch in text.chars() {
            if ch == '-' {
                continue;
            }
            let digit = ch.to_digit(16).ok_or(BeaconError::InvalidHexDigit(ch))?;
            if nibbles < 32 {
                bytes[nibbles / 2] = (bytes[nibbles / 2] << 4) | digit as u8;
            }
            nibbles += 1;
        }
        if nibbles != 32 {
            return Err(BeaconError::LengthMismatch {
                expected: 16,
                actual: (nibbles + 1) / 2,
            });
        }
        Ok(Self(bytes))
    }

    /// Creates an identifier from its 16-byte binary form.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the 16-byte binary form.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl FromStr for Uuid {
    type Err = BeaconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Uuid {
    /// Formats as lowercase 8-4-4-4-12 hex digit groups.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        for (i, byte) in b.iter().enumerate() {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                write!(f, "-")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_form() {
        let uuid = Uuid::parse("3df93d5a-a1f2-47bb-a3cf-3e49e6a89bb6").unwrap();
        assert_eq!(
            uuid.as_bytes(),
            &[
                0x3D, 0xF9, 0x3D, 0x5A, 0xA1, 0xF2, 0x47, 0xBB, 0xA3, 0xCF, 0x3E, 0x49, 0xE6,
                0xA8, 0x9B, 0xB6
            ]
        );
    }

    #[test]
    fn display_round_trip() {
        let text = "acbdf5ff-d272-45f5-8e45-01672fe51c47";
        let uuid: Uuid = text.parse().unwrap();
        assert_eq!(uuid.to_string(), text);
        assert_eq!(Uuid::parse(&uuid.to_string()).unwrap(), uuid);
    }

    #[test]
    fn binary_round_trip() {
        let bytes = [
            0xBE, 0xFF, 0x10, 0x20, 0x29, 0x20, 0xFF, 0x44, 0x01, 0x03, 0xFF, 0x4A, 0x40, 0x0A,
            0xBF, 0xD7,
        ];
        let uuid = Uuid::from_bytes(bytes);
        assert_eq!(uuid.to_string(), "beff1020-2920-ff44-0103-ff4a400abfd7");
        assert_eq!(*Uuid::parse(&uuid.to_string()).unwrap().as_bytes(), bytes);
    }

    #[test]
    fn uppercase_input_normalizes_to_lowercase() {
        let uuid = Uuid::parse("ACBDF5FF-D272-45F5-8E45-01672FE51C47").unwrap();
        assert_eq!(uuid.to_string(), "acbdf5ff-d272-45f5-8e45-01672fe51c47");
    }

    #[test]
    fn wrong_length_reports_actual_byte_count() {
        assert_eq!(
            Uuid::parse("acbdf5ff-d272-45f5-8e45").unwrap_err(),
            BeaconError::LengthMismatch {
                expected: 16,
                actual: 10
            }
        );
        assert_eq!(
            Uuid::parse("acbdf5ff-d272-45f5-8e45-01672fe51c4700").unwrap_err(),
            BeaconError::LengthMismatch {
                expected: 16,
                actual: 17
            }
        );
        assert!(Uuid::parse("").is_err());
    }

    #[test]
    fn non_hex_digits_fail() {
        assert_eq!(
            Uuid::parse("zdbdf5ff-d272-45f5-8e45-01672fe51c47").unwrap_err(),
            BeaconError::InvalidHexDigit('z')
        );
    }
}
