//! Multi-format BLE beacon advertisement codec.
//!
//! Encodes structured beacon descriptions into raw advertisement byte
//! buffers and decodes received buffers back into structured records, for
//! the formats found in the wild: AltBeacon, iBeacon, Eddystone-UID,
//! Eddystone-URL, LinTech, RuuviTag and MikroTik.
//!
//! The crate is purely synchronous and stateless: every operation is a
//! bounded computation over a caller-owned buffer of at most a few dozen
//! bytes. Radio transport, scanning loops and link-layer framing live
//! elsewhere; this crate starts and ends at the advertisement-data bytes.
//!
//! # Example
//!
//! ```
//! use ubeacon::{recognize, BeaconRecord, IBeacon, Uuid};
//!
//! let beacon = IBeacon::new(
//!     Uuid::parse("acbdf5ff-d272-45f5-8e45-01672fe51c47").unwrap(),
//!     42,
//!     21,
//! );
//! let adv = beacon.encode();
//! assert_eq!(adv.len(), 30);
//!
//! match recognize(&adv) {
//!     Some(BeaconRecord::IBeacon(decoded)) => assert_eq!(decoded, beacon),
//!     other => panic!("unexpected dispatch result: {:?}", other),
//! }
//! ```

mod dispatch;
mod error;
mod fields;
mod filter;
mod record;
mod resp;
mod uuid;

pub mod altbeacon;
pub mod eddystone;
pub mod ibeacon;
pub mod lintech;
pub mod mikrotik;
pub mod ruuvitag;

pub use altbeacon::AltBeacon;
pub use dispatch::recognize;
pub use eddystone::{EddystoneUid, EddystoneUrl};
pub use error::BeaconError;
pub use fields::{validate, FieldValue};
pub use filter::{BeaconFilter, FilterValue};
pub use ibeacon::IBeacon;
pub use lintech::LinTechBeacon;
pub use mikrotik::MikroTik;
pub use record::BeaconRecord;
pub use resp::{device_name, scan_response, DEFAULT_NAME};
pub use ruuvitag::RuuviTag;
pub use uuid::Uuid;

/// Length byte of the flags AD structure.
pub const FLAGS_LENGTH: u8 = 0x02;
/// AD type of the flags structure.
pub const FLAGS_TYPE: u8 = 0x01;
/// Flags value: general discoverable, BR/EDR not supported.
pub const FLAGS_DATA: u8 = 0x06;

/// AD type of the manufacturer-specific data structure.
pub const ADV_TYPE_MFG_DATA: u8 = 0xFF;
/// AD type of the complete list of 16-bit service UUIDs.
pub const ADV_TYPE_SERVICE_UUID16: u8 = 0x03;
/// AD type of the 16-bit-UUID service data structure.
pub const ADV_TYPE_SERVICE_DATA: u8 = 0x16;
/// AD type of the complete local name structure.
pub const ADV_TYPE_COMPLETE_NAME: u8 = 0x09;

/// Default advertising interval in microseconds.
pub const ADV_INTERVAL_US: u32 = 250_000;

/// Strips the leading flags AD structure, if present.
///
/// Scanners differ in what they hand over: some pass the full
/// advertisement including the flags structure, others only the data
/// structure that follows it. Decoders accept both by peeking at the
/// two-byte flags signature and skipping the three-byte structure when it
/// matches.
pub fn strip_flags(adv_data: &[u8]) -> &[u8] {
    if adv_data.len() >= 3 && adv_data[0] == FLAGS_LENGTH && adv_data[1] == FLAGS_TYPE {
        &adv_data[3..]
    } else {
        adv_data
    }
}
