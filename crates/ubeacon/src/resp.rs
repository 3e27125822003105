//! Scan response payloads and device naming.
//!
//! Beacons advertise their frame in the advertising PDU and answer
//! active scans with a small response carrying the complete local name.

use crate::{ADV_TYPE_COMPLETE_NAME, FLAGS_DATA, FLAGS_LENGTH, FLAGS_TYPE};

/// Base name used when the application does not supply one.
pub const DEFAULT_NAME: &str = "uBeacon";

/// Builds a scan response advertisement carrying `name` as the Complete
/// Local Name, prefixed by the standard flags triplet.
pub fn scan_response(name: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(5 + name.len());
    out.extend_from_slice(&[FLAGS_LENGTH, FLAGS_TYPE, FLAGS_DATA]);
    out.push(name.len() as u8 + 1);
    out.push(ADV_TYPE_COMPLETE_NAME);
    out.extend_from_slice(name);
    out
}

/// Derives a per-device name by appending the uppercase hex rendering
/// of `unique_id` (typically MAC tail bytes) to `base`.
pub fn device_name(base: &str, unique_id: &[u8]) -> String {
    let mut name = String::with_capacity(base.len() + 1 + unique_id.len() * 2);
    name.push_str(base);
    name.push(' ');
    for byte in unique_id {
        name.push_str(&format!("{byte:02X}"));
    }
    name
}
