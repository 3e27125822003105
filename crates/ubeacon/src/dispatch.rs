//! Format dispatch over raw advertisement buffers.

use crate::altbeacon::{self, AltBeacon};
use crate::eddystone::{EddystoneUid, EddystoneUrl, EDDYSTONE_UUID, FRAME_TYPE_UID, FRAME_TYPE_URL};
use crate::ibeacon::{self, IBeacon};
use crate::lintech::{self, LinTechBeacon};
use crate::mikrotik::{self, MikroTik};
use crate::record::BeaconRecord;
use crate::ruuvitag::{self, RuuviTag};
use crate::{strip_flags, ADV_TYPE_MFG_DATA, ADV_TYPE_SERVICE_UUID16};

/// Inspects a raw advertisement buffer and decodes it with the matching
/// format codec.
///
/// Eddystone is detected by the `AA FE` service UUID and branches on the
/// frame-type byte; everything else is matched by the manufacturer
/// company identifier, with the AltBeacon `BE AC` beacon code as a
/// company-independent fallback. Returns `None` when no format matches
/// or the matched candidate fails to decode - an unrelated advertisement
/// is a legitimate input, not an error.
pub fn recognize(adv_data: &[u8]) -> Option<BeaconRecord> {
    let data = strip_flags(adv_data);
    if data.len() < 6 {
        return None;
    }

    if data[1] == ADV_TYPE_SERVICE_UUID16 && data[2..4] == EDDYSTONE_UUID {
        return match data.get(8) {
            Some(&FRAME_TYPE_UID) => EddystoneUid::decode(adv_data)
                .ok()
                .map(BeaconRecord::EddystoneUid),
            Some(&FRAME_TYPE_URL) => EddystoneUrl::decode(adv_data)
                .ok()
                .map(BeaconRecord::EddystoneUrl),
            _ => None,
        };
    }

    if data[1] != ADV_TYPE_MFG_DATA {
        return None;
    }
    let company_id = u16::from_le_bytes([data[2], data[3]]);
    match company_id {
        lintech::COMPANY_ID => LinTechBeacon::decode(adv_data)
            .ok()
            .map(BeaconRecord::LinTech),
        ibeacon::COMPANY_ID => IBeacon::decode(adv_data).ok().map(BeaconRecord::IBeacon),
        ruuvitag::COMPANY_ID => RuuviTag::decode(adv_data).ok().map(BeaconRecord::RuuviTag),
        mikrotik::COMPANY_ID => MikroTik::decode(adv_data).ok().map(BeaconRecord::MikroTik),
        altbeacon::DEFAULT_COMPANY_ID => AltBeacon::decode(adv_data)
            .ok()
            .map(BeaconRecord::AltBeacon),
        _ if data[4..6] == altbeacon::BEACON_CODE => AltBeacon::decode(adv_data)
            .ok()
            .map(BeaconRecord::AltBeacon),
        _ => None,
    }
}
