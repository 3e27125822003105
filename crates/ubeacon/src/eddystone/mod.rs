//! Eddystone advertisement codecs.
//!
//! Protocol specification: <https://github.com/google/eddystone>
//!
//! Eddystone frames are service-data AD structures under the 16-bit
//! service UUID `0xFEAA`; a frame-type byte selects the sub-format. The
//! UID and URL frames are implemented here.

mod tokens;
mod uid;
mod url;

pub use tokens::{compress_url, expand_url, DEFAULT_SCHEME, SCHEMES, TLDS};
pub use uid::EddystoneUid;
pub use url::EddystoneUrl;

use crate::error::BeaconError;
use crate::ADV_TYPE_SERVICE_DATA;
use crate::ADV_TYPE_SERVICE_UUID16;

/// The Eddystone 16-bit service UUID, as it appears on the wire.
pub const EDDYSTONE_UUID: [u8; 2] = [0xAA, 0xFE];

/// Frame-type byte of the Eddystone-UID frame.
pub const FRAME_TYPE_UID: u8 = 0x00;
/// Frame-type byte of the Eddystone-URL frame.
pub const FRAME_TYPE_URL: u8 = 0x10;

/// Default reference RSSI at 0 m from the advertiser.
const DEFAULT_REFERENCE_RSSI: i8 = -47;

/// Validates the shared Eddystone service header and frame type, and
/// checks the declared frame length against the actual buffer.
///
/// Expects the flags structure to have been stripped already. Returns the
/// frame length declared by the length byte.
fn check_frame(data: &[u8], frame_type: u8) -> Result<usize, BeaconError> {
    if data.len() < 11 {
        return Err(BeaconError::LengthMismatch {
            expected: 11,
            actual: data.len(),
        });
    }
    if data[1] != ADV_TYPE_SERVICE_UUID16
        || data[2..4] != EDDYSTONE_UUID
        || data[5] != ADV_TYPE_SERVICE_DATA
        || data[6..8] != EDDYSTONE_UUID
    {
        return Err(BeaconError::UnrecognizedDiscriminant(data[1]));
    }
    if data[8] != frame_type {
        return Err(BeaconError::UnrecognizedDiscriminant(data[8]));
    }
    let declared = data[4] as usize;
    if data.len() != 5 + declared {
        return Err(BeaconError::LengthMismatch {
            expected: 5 + declared,
            actual: data.len(),
        });
    }
    Ok(declared)
}
