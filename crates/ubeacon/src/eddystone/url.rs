//! Eddystone-URL frame codec.

use ubeacon_buffers::Writer;

use super::{
    check_frame, compress_url, expand_url, DEFAULT_REFERENCE_RSSI, EDDYSTONE_UUID, FRAME_TYPE_URL,
};
use crate::error::BeaconError;
use crate::{strip_flags, ADV_TYPE_SERVICE_DATA, ADV_TYPE_SERVICE_UUID16};

/// An Eddystone-URL advertisement.
///
/// The URL is stored in plain text; compression against the scheme/TLD
/// token tables happens at the wire boundary, so the encode/decode round
/// trip reproduces the original text exactly.
///
/// The codec does not enforce the outer 31-byte legacy advertising
/// ceiling; keeping an encoded URL transmittable is the transport
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EddystoneUrl {
    pub url: String,
    pub reference_rssi: i8,
}

impl EddystoneUrl {
    /// Creates a frame with the default reference RSSI.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reference_rssi: DEFAULT_REFERENCE_RSSI,
        }
    }

    /// Assembles the advertisement (service UUID list followed by the
    /// service data structure with the compressed URL).
    pub fn encode(&self) -> Vec<u8> {
        let (scheme, mut body) = compress_url(&self.url);
        // The frame shares a one-byte length field with its 6 header
        // bytes, capping the body at 249 bytes.
        body.truncate(u8::MAX as usize - 6);
        let mut writer = Writer::with_capacity(12 + body.len());
        writer.u8(0x03); // service UUID list length
        writer.u8(ADV_TYPE_SERVICE_UUID16);
        writer.buf(&EDDYSTONE_UUID);
        writer.u8(6 + body.len() as u8);
        writer.u8(ADV_TYPE_SERVICE_DATA);
        writer.buf(&EDDYSTONE_UUID);
        writer.u8(FRAME_TYPE_URL);
        writer.i8(self.reference_rssi);
        writer.u8(scheme);
        writer.buf(&body);
        writer.flush()
    }

    /// Decodes a received advertisement, with or without a leading flags
    /// structure.
    pub fn decode(adv_data: &[u8]) -> Result<Self, BeaconError> {
        let data = strip_flags(adv_data);
        check_frame(data, FRAME_TYPE_URL)?;
        let reference_rssi = data[9] as i8;
        let url = expand_url(data[10], &data[11..])?;
        Ok(Self {
            url,
            reference_rssi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_scheme_byte() {
        let mut adv = EddystoneUrl::new("https://micropython.com").encode();
        adv[10] = 0x2F;
        assert!(matches!(
            EddystoneUrl::decode(&adv),
            Err(BeaconError::UnrecognizedDiscriminant(0x2F))
        ));
    }

    #[test]
    fn frame_length_tracks_body_length() {
        let adv = EddystoneUrl::new("https://micropython.de").encode();
        assert_eq!(adv[4] as usize, adv.len() - 5);
    }

    #[test]
    fn multibyte_url_round_trips() {
        let mut frame = EddystoneUrl::new("https://über.com");
        frame.reference_rssi = -68;
        assert_eq!(EddystoneUrl::decode(&frame.encode()).unwrap(), frame);
    }

    #[test]
    fn oversized_body_truncates_to_the_length_field_range() {
        let long = format!("https://{}.com", "a".repeat(300));
        let adv = EddystoneUrl::new(&long).encode();
        assert_eq!(adv[4], u8::MAX);
        assert_eq!(adv[4] as usize, adv.len() - 5);
        let decoded = EddystoneUrl::decode(&adv).unwrap();
        assert_eq!(decoded.url, long[..249 + 8].to_string());
    }
}
