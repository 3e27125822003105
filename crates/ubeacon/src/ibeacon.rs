//! iBeacon advertisement codec.
//!
//! Protocol specification: <https://developer.apple.com/ibeacon/>

use ubeacon_buffers::{Reader, Writer};

use crate::error::BeaconError;
use crate::uuid::Uuid;
use crate::{strip_flags, ADV_TYPE_MFG_DATA, FLAGS_DATA, FLAGS_LENGTH, FLAGS_TYPE};

/// Length of the type and data portion of the manufacturer-specific AD
/// structure.
const AD_LENGTH: u8 = 0x1A;

/// Apple's registered company identifier.
pub const COMPANY_ID: u16 = 0x004C;

/// Proximity beacon type and data length marker.
const BEACON_TYPE: [u8; 2] = [0x02, 0x15];

/// Default reference RSSI at 1 m from the advertiser.
const DEFAULT_REFERENCE_RSSI: i8 = -70;

/// An iBeacon advertisement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IBeacon {
    pub uuid: Uuid,
    pub major: u16,
    pub minor: u16,
    pub reference_rssi: i8,
}

impl IBeacon {
    /// Creates a beacon with the default reference RSSI.
    pub fn new(uuid: Uuid, major: u16, minor: u16) -> Self {
        Self {
            uuid,
            major,
            minor,
            reference_rssi: DEFAULT_REFERENCE_RSSI,
        }
    }

    /// Assembles the 30-byte advertisement.
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(30);
        writer.buf(&[FLAGS_LENGTH, FLAGS_TYPE, FLAGS_DATA]);
        writer.u8(AD_LENGTH);
        writer.u8(ADV_TYPE_MFG_DATA);
        writer.u16_le(COMPANY_ID);
        writer.buf(&BEACON_TYPE);
        writer.buf(self.uuid.as_bytes());
        writer.u16(self.major);
        writer.u16(self.minor);
        writer.i8(self.reference_rssi);
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
        if data[4..6] != BEACON_TYPE {
            return Err(BeaconError::UnrecognizedDiscriminant(data[4]));
        }

        let mut reader = Reader::new(data);
        reader.skip(6); // length + AD type + company id + beacon type
        let mut uuid = [0u8; 16];
        uuid.copy_from_slice(reader.buf(16));
        Ok(Self {
            uuid: Uuid::from_bytes(uuid),
            major: reader.u16(),
            minor: reader.u16(),
            reference_rssi: reader.i8(),
        })
    }
}
