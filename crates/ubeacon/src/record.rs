//! The tagged union over all supported beacon formats.

use std::fmt;

use crate::altbeacon::AltBeacon;
use crate::eddystone::{EddystoneUid, EddystoneUrl};
use crate::ibeacon::IBeacon;
use crate::lintech::LinTechBeacon;
use crate::mikrotik::MikroTik;
use crate::ruuvitag::RuuviTag;

/// A decoded (or application-authored) beacon, one variant per wire
/// format. Records are immutable value types: changing a field means
/// constructing a new record.
#[derive(Debug, Clone, PartialEq)]
pub enum BeaconRecord {
    AltBeacon(AltBeacon),
    IBeacon(IBeacon),
    EddystoneUid(EddystoneUid),
    EddystoneUrl(EddystoneUrl),
    LinTech(LinTechBeacon),
    RuuviTag(RuuviTag),
    MikroTik(MikroTik),
}

impl BeaconRecord {
    /// Assembles the advertisement bytes for this record's format.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            BeaconRecord::AltBeacon(beacon) => beacon.encode(),
            BeaconRecord::IBeacon(beacon) => beacon.encode(),
            BeaconRecord::EddystoneUid(beacon) => beacon.encode(),
            BeaconRecord::EddystoneUrl(beacon) => beacon.encode(),
            BeaconRecord::LinTech(beacon) => beacon.encode(),
            BeaconRecord::RuuviTag(beacon) => beacon.encode(),
            BeaconRecord::MikroTik(beacon) => beacon.encode(),
        }
    }

    /// Human-readable format name.
    pub fn format_name(&self) -> &'static str {
        match self {
            BeaconRecord::AltBeacon(_) => "AltBeacon",
            BeaconRecord::IBeacon(_) => "iBeacon",
            BeaconRecord::EddystoneUid(_) => "Eddystone-UID",
            BeaconRecord::EddystoneUrl(_) => "Eddystone-URL",
            BeaconRecord::LinTech(_) => "LinTech",
            BeaconRecord::RuuviTag(_) => "RuuviTag",
            BeaconRecord::MikroTik(_) => "MikroTik",
        }
    }
}

impl fmt::Display for BeaconRecord {
    /// Formats as `bytes: <len> data: <hex>` over the encoded
    /// advertisement.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let adv = self.encode();
        write!(f, "bytes: {} data: ", adv.len())?;
        for byte in &adv {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl From<AltBeacon> for BeaconRecord {
    fn from(beacon: AltBeacon) -> Self {
        BeaconRecord::AltBeacon(beacon)
    }
}

impl From<IBeacon> for BeaconRecord {
    fn from(beacon: IBeacon) -> Self {
        BeaconRecord::IBeacon(beacon)
    }
}

impl From<EddystoneUid> for BeaconRecord {
    fn from(beacon: EddystoneUid) -> Self {
        BeaconRecord::EddystoneUid(beacon)
    }
}

impl From<EddystoneUrl> for BeaconRecord {
    fn from(beacon: EddystoneUrl) -> Self {
        BeaconRecord::EddystoneUrl(beacon)
    }
}

impl From<LinTechBeacon> for BeaconRecord {
    fn from(beacon: LinTechBeacon) -> Self {
        BeaconRecord::LinTech(beacon)
    }
}

impl From<RuuviTag> for BeaconRecord {
    fn from(beacon: RuuviTag) -> Self {
        BeaconRecord::RuuviTag(beacon)
    }
}

impl From<MikroTik> for BeaconRecord {
    fn from(beacon: MikroTik) -> Self {
        BeaconRecord::MikroTik(beacon)
    }
}
