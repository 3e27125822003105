//! MikroTik tag advertisement codec.
//!
//! Protocol specification:
//! <https://help.mikrotik.com/docs/display/UM/MikroTik+Tag+advertisement+formats>
//!
//! Unlike the proximity formats this layout is little-endian throughout.

use ubeacon_buffers::{Reader, Writer};

use crate::error::BeaconError;
use crate::{strip_flags, ADV_TYPE_MFG_DATA, FLAGS_DATA, FLAGS_LENGTH, FLAGS_TYPE};

/// Length of the type and data portion of the manufacturer-specific AD
/// structure.
const AD_LENGTH: u8 = 0x15;

/// MikroTik's registered company identifier.
pub const COMPANY_ID: u16 = 0x094F;

/// Raw temperature value meaning "no sensor reading".
const TEMPERATURE_ABSENT: i16 = -128 * 256;

/// A MikroTik tag advertisement.
///
/// Acceleration is in g (raw value over 256); `temperature` is `None`
/// when the tag reports the absent-sensor marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MikroTik {
    pub version: u8,
    pub encrypted: bool,
    pub salt: u16,
    pub acceleration_x: f64,
    pub acceleration_y: f64,
    pub acceleration_z: f64,
    pub temperature: Option<f64>,
    pub uptime: u32,
    pub trigger: u8,
    pub battery: u8,
}

impl MikroTik {
    /// Assembles the advertisement bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(25);
        writer.buf(&[FLAGS_LENGTH, FLAGS_TYPE, FLAGS_DATA]);
        writer.u8(AD_LENGTH);
        writer.u8(ADV_TYPE_MFG_DATA);
        writer.u16_le(COMPANY_ID);
        writer.u8(self.version);
        writer.u8(self.encrypted as u8);
        writer.u16_le(self.salt);
        writer.u16_le((self.acceleration_x * 256.0).round() as u16);
        writer.u16_le((self.acceleration_y * 256.0).round() as u16);
        writer.u16_le((self.acceleration_z * 256.0).round() as u16);
        writer.i16_le(match self.temperature {
            Some(temperature) => (temperature * 256.0).round() as i16,
            None => TEMPERATURE_ABSENT,
        });
        writer.u32_le(self.uptime);
        writer.u8(self.trigger);
        writer.u8(self.battery);
        writer.flush()
    }

    /// Decodes a received advertisement, with or without the leading
    /// flags structure.
    pub fn decode(adv_data: &[u8]) -> Result<Self, BeaconError> {
        let data = strip_flags(adv_data);
        if data.len() != 1 + AD_LENGTH as usize || data[0] != AD_LENGTH {
            return Err(BeaconError::LengthMismatch {
                expected: 1 + AD_LENGTH as usize,
                actual: data.len(),
            });
        }

        let mut reader = Reader::new(data);
        reader.skip(4); // length + AD type + company id
        let version = reader.u8();
        let encrypted = reader.u8() != 0;
        let salt = reader.u16_le();
        let acceleration_x = reader.u16_le() as f64 / 256.0;
        let acceleration_y = reader.u16_le() as f64 / 256.0;
        let acceleration_z = reader.u16_le() as f64 / 256.0;
        let raw_temperature = reader.i16_le();
        Ok(Self {
            version,
            encrypted,
            salt,
            acceleration_x,
            acceleration_y,
            acceleration_z,
            temperature: if raw_temperature == TEMPERATURE_ABSENT {
                None
            } else {
                Some(raw_temperature as f64 / 256.0)
            },
            uptime: reader.u32_le(),
            trigger: reader.u8(),
            battery: reader.u8(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MikroTik {
        MikroTik {
            version: 1,
            encrypted: false,
            salt: 0xA6CE,
            acceleration_x: 0.0,
            acceleration_y: 0.0,
            acceleration_z: 2.0 / 256.0,
            temperature: Some(28.625),
            uptime: 5_703_825,
            trigger: 0,
            battery: 95,
        }
    }

    #[test]
    fn round_trip() {
        let tag = sample();
        assert_eq!(MikroTik::decode(&tag.encode()).unwrap(), tag);
    }

    #[test]
    fn absent_temperature_marker() {
        let mut tag = sample();
        tag.temperature = None;
        let adv = tag.encode();
        assert_eq!(&adv[17..19], &[0x00, 0x80]);
        assert_eq!(MikroTik::decode(&adv).unwrap().temperature, None);
    }

    #[test]
    fn rejects_wrong_declared_length() {
        let mut adv = sample().encode();
        adv[3] = 0x16;
        assert!(matches!(
            MikroTik::decode(&adv),
            Err(BeaconError::LengthMismatch { .. })
        ));
    }
}
