//! Eddystone-UID frame codec.

use ubeacon_buffers::{Reader, Writer};

use super::{check_frame, DEFAULT_REFERENCE_RSSI, EDDYSTONE_UUID, FRAME_TYPE_UID};
use crate::error::BeaconError;
use crate::fields::{validate, FieldValue};
use crate::{strip_flags, ADV_TYPE_SERVICE_DATA, ADV_TYPE_SERVICE_UUID16};

/// Declared frame length of a UID frame.
const FRAME_LENGTH: u8 = 0x17;

/// An Eddystone-UID advertisement: a 10-byte namespace and a 6-byte
/// instance identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EddystoneUid {
    pub namespace_id: [u8; 10],
    pub instance_id: [u8; 6],
    pub reference_rssi: i8,
}

impl EddystoneUid {
    /// Creates a frame with the default reference RSSI.
    pub fn new(namespace_id: [u8; 10], instance_id: [u8; 6]) -> Self {
        Self {
            namespace_id,
            instance_id,
            reference_rssi: DEFAULT_REFERENCE_RSSI,
        }
    }

    /// Creates a frame from loosely-typed field values (raw bytes or
    /// integers), running both identifiers through fixed-width
    /// validation.
    pub fn from_fields(
        namespace_id: FieldValue<'_>,
        instance_id: FieldValue<'_>,
    ) -> Result<Self, BeaconError> {
        let namespace = validate(namespace_id, 10)?;
        let instance = validate(instance_id, 6)?;
        let mut frame = Self::new([0; 10], [0; 6]);
        frame.namespace_id.copy_from_slice(&namespace);
        frame.instance_id.copy_from_slice(&instance);
        Ok(frame)
    }

    /// Assembles the 28-byte advertisement (service UUID list followed by
    /// the service data structure).
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(28);
        writer.u8(0x03); // service UUID list length
        writer.u8(ADV_TYPE_SERVICE_UUID16);
        writer.buf(&EDDYSTONE_UUID);
        writer.u8(FRAME_LENGTH);
        writer.u8(ADV_TYPE_SERVICE_DATA);
        writer.buf(&EDDYSTONE_UUID);
        writer.u8(FRAME_TYPE_UID);
        writer.i8(self.reference_rssi);
        writer.buf(&self.namespace_id);
        writer.buf(&self.instance_id);
        writer.buf(&[0x00, 0x00]); // reserved
        writer.flush()
    }

    /// Decodes a received advertisement, with or without a leading flags
    /// structure.
    pub fn decode(adv_data: &[u8]) -> Result<Self, BeaconError> {
        let data = strip_flags(adv_data);
        let declared = check_frame(data, FRAME_TYPE_UID)?;
        if declared != FRAME_LENGTH as usize {
            return Err(BeaconError::LengthMismatch {
                expected: FRAME_LENGTH as usize,
                actual: declared,
            });
        }

        let mut reader = Reader::new(data);
        reader.skip(9); // headers + frame type
        let reference_rssi = reader.i8();
        let mut namespace_id = [0u8; 10];
        namespace_id.copy_from_slice(reader.buf(10));
        let mut instance_id = [0u8; 6];
        instance_id.copy_from_slice(reader.buf(6));
        Ok(Self {
            namespace_id,
            instance_id,
            reference_rssi,
        })
    }
}
