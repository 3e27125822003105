//! LinTech Smart Beacon advertisement codec.
//!
//! Protocol specification:
//! <https://www.lintech.de/support/downloads/bluetooth-low-energy-smart-beacon/>

use ubeacon_buffers::{Reader, Writer};

use crate::error::BeaconError;
use crate::uuid::Uuid;
use crate::{strip_flags, ADV_TYPE_MFG_DATA, FLAGS_DATA, FLAGS_LENGTH, FLAGS_TYPE};

/// Length of the type and data portion of the manufacturer-specific AD
/// structure.
const AD_LENGTH: u8 = 0x1B;

/// LinTech's registered company identifier.
pub const COMPANY_ID: u16 = 0x0144;

/// LinTech beacon advertisement code.
const DEVICE_TYPE: u16 = 0xFF03;

/// LinTech beacon proximity UUID.
pub const PROXIMITY_UUID: &str = "beff1020-2920-ff44-0103-ff4a400abfd7";

/// Default reference RSSI at 1 m from the advertiser.
const DEFAULT_REFERENCE_RSSI: i8 = -70;

/// A LinTech beacon advertisement.
///
/// The final status byte packs the TX power setting into its low three
/// bits and the battery level into the high five.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinTechBeacon {
    pub uuid: Uuid,
    pub major: u16,
    pub minor: u16,
    pub reference_rssi: i8,
    pub tx_power: u8,
    pub battery_level: u8,
}

impl LinTechBeacon {
    /// Creates a beacon with the default reference RSSI and the fixed
    /// TX-power/battery status byte `0xFC` used by test advertisers.
    pub fn new(uuid: Uuid, major: u16, minor: u16) -> Self {
        Self {
            uuid,
            major,
            minor,
            reference_rssi: DEFAULT_REFERENCE_RSSI,
            tx_power: 0xFC & 0b111,
            battery_level: 0xFC >> 3,
        }
    }

    /// Assembles the advertisement bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(31);
        writer.buf(&[FLAGS_LENGTH, FLAGS_TYPE, FLAGS_DATA]);
        writer.u8(AD_LENGTH);
        writer.u8(ADV_TYPE_MFG_DATA);
        writer.u16_le(COMPANY_ID);
        writer.u16(DEVICE_TYPE);
        writer.buf(self.uuid.as_bytes());
        writer.u16(self.major);
        writer.u16(self.minor);
        writer.i8(self.reference_rssi);
        writer.u8((self.battery_level << 3) | (self.tx_power & 0b111));
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
        reader.skip(6); // length + AD type + company id + device type
        let mut uuid = [0u8; 16];
        uuid.copy_from_slice(reader.buf(16));
        let major = reader.u16();
        let minor = reader.u16();
        let reference_rssi = reader.i8();
        let status = reader.u8();
        Ok(Self {
            uuid: Uuid::from_bytes(uuid),
            major,
            minor,
            reference_rssi,
            tx_power: status & 0b111,
            battery_level: status >> 3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_byte_splits_into_tx_power_and_battery() {
        let uuid = Uuid::parse(PROXIMITY_UUID).unwrap();
        let beacon = LinTechBeacon::new(uuid, 1, 2);
        assert_eq!(beacon.tx_power, 4);
        assert_eq!(beacon.battery_level, 31);
        let decoded = LinTechBeacon::decode(&beacon.encode()).unwrap();
        assert_eq!(decoded, beacon);
    }

    #[test]
    fn rejects_truncated_frame() {
        let uuid = Uuid::parse(PROXIMITY_UUID).unwrap();
        let adv = LinTechBeacon::new(uuid, 1, 2).encode();
        assert!(matches!(
            LinTechBeacon::decode(&adv[..10]),
            Err(BeaconError::LengthMismatch { .. })
        ));
    }
}
