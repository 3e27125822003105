//! AltBeacon advertisement codec.
//!
//! Protocol specification: <https://github.com/AltBeacon/spec>

use ubeacon_buffers::{Reader, Writer};

use crate::error::BeaconError;
use crate::uuid::Uuid;
use crate::{strip_flags, ADV_TYPE_MFG_DATA, FLAGS_DATA, FLAGS_LENGTH, FLAGS_TYPE};

/// Length of the type and data portion of the manufacturer-specific AD
/// structure.
const AD_LENGTH: u8 = 0x1B;

/// The AltBeacon advertisement code. AltBeacon detection keys off this
/// two-byte signature rather than a registered company identifier.
pub const BEACON_CODE: [u8; 2] = [0xBE, 0xAC];

/// Default manufacturer company identifier (Radius Networks).
pub const DEFAULT_COMPANY_ID: u16 = 0x0118;

/// Default reference RSSI at 1 m from the advertiser.
const DEFAULT_REFERENCE_RSSI: i8 = -70;

/// An AltBeacon advertisement.
///
/// The 20-byte beacon id is carried as a 16-byte organizational unit
/// identifier plus a 4-byte use-case identifier, exposed here as
/// `uuid` and `major`/`minor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltBeacon {
    pub company_id: u16,
    pub uuid: Uuid,
    pub major: u16,
    pub minor: u16,
    pub reference_rssi: i8,
    pub mfg_reserved: u8,
}

impl AltBeacon {
    /// Creates a beacon with the default company identifier, reference
    /// RSSI and reserved byte.
    pub fn new(uuid: Uuid, major: u16, minor: u16) -> Self {
        Self {
            company_id: DEFAULT_COMPANY_ID,
            uuid,
            major,
            minor,
            reference_rssi: DEFAULT_REFERENCE_RSSI,
            mfg_reserved: 0x00,
        }
    }

    /// Assembles the advertisement bytes: flags, manufacturer AD header,
    /// company id, beacon code, beacon id, reference RSSI, reserved byte.
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(31);
        writer.buf(&[FLAGS_LENGTH, FLAGS_TYPE, FLAGS_DATA]);
        writer.u8(AD_LENGTH);
        writer.u8(ADV_TYPE_MFG_DATA);
        writer.u16_le(self.company_id);
        writer.buf(&BEACON_CODE);
        writer.buf(self.uuid.as_bytes());
        writer.u16(self.major);
        writer.u16(self.minor);
        writer.i8(self.reference_rssi);
        writer.u8(self.mfg_reserved);
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
        if data[4..6] != BEACON_CODE {
            return Err(BeaconError::UnrecognizedDiscriminant(data[4]));
        }

        let mut reader = Reader::new(data);
        reader.skip(2); // length + AD type
        let company_id = reader.u16_le();
        reader.skip(2); // beacon code
        let mut uuid = [0u8; 16];
        uuid.copy_from_slice(reader.buf(16));
        Ok(Self {
            company_id,
            uuid: Uuid::from_bytes(uuid),
            major: reader.u16(),
            minor: reader.u16(),
            reference_rssi: reader.i8(),
            mfg_reserved: reader.u8(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_beacon_code() {
        let mut adv = AltBeacon::new(Uuid::from_bytes([0u8; 16]), 1, 2).encode();
        adv[7] = 0xAC;
        adv[8] = 0xBE;
        assert!(matches!(
            AltBeacon::decode(&adv),
            Err(BeaconError::UnrecognizedDiscriminant(_))
        ));
    }

    #[test]
    fn rejects_truncated_frame() {
        let adv = AltBeacon::new(Uuid::from_bytes([0u8; 16]), 1, 2).encode();
        assert!(matches!(
            AltBeacon::decode(&adv[..adv.len() - 1]),
            Err(BeaconError::LengthMismatch { .. })
        ));
    }
}
