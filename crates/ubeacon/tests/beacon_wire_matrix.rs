//! Wire-level matrix over every supported format: each case pins the
//! exact advertisement bytes produced for a known beacon and checks the
//! decoder reproduces the beacon from those bytes.

use ubeacon::{
    AltBeacon, EddystoneUid, EddystoneUrl, IBeacon, LinTechBeacon, MikroTik, RuuviTag, Uuid,
};

fn hex(s: &str) -> Vec<u8> {
    s.split_whitespace()
        .map(|byte| u8::from_str_radix(byte, 16).unwrap())
        .collect()
}

#[test]
fn altbeacon_wire_format() {
    let beacon = AltBeacon {
        company_id: 1337,
        uuid: Uuid::parse("3df93d5a-a1f2-47bb-a3cf-3e49e6a89bb6").unwrap(),
        major: 17,
        minor: 42,
        reference_rssi: -69,
        mfg_reserved: 35,
    };
    let adv = hex(
        "02 01 06 1b ff 39 05 be ac 3d f9 3d 5a a1 f2 47 bb \
         a3 cf 3e 49 e6 a8 9b b6 00 11 00 2a bb 23",
    );
    assert_eq!(beacon.encode(), adv);
    assert_eq!(AltBeacon::decode(&adv).unwrap(), beacon);
}

#[test]
fn ibeacon_wire_format() {
    let beacon = IBeacon {
        uuid: Uuid::parse("acbdf5ff-d272-45f5-8e45-01672fe51c47").unwrap(),
        major: 1337,
        minor: 21,
        reference_rssi: -65,
    };
    let adv = hex(
        "02 01 06 1a ff 4c 00 02 15 ac bd f5 ff d2 72 45 f5 \
         8e 45 01 67 2f e5 1c 47 05 39 00 15 bf",
    );
    assert_eq!(beacon.encode(), adv);
    assert_eq!(IBeacon::decode(&adv).unwrap(), beacon);
}

#[test]
fn lintech_wire_format() {
    let mut beacon = LinTechBeacon::new(
        Uuid::parse(ubeacon::lintech::PROXIMITY_UUID).unwrap(),
        1025,
        42,
    );
    beacon.reference_rssi = -69;
    let adv = hex(
        "02 01 06 1b ff 44 01 ff 03 be ff 10 20 29 20 ff 44 \
         01 03 ff 4a 40 0a bf d7 04 01 00 2a bb fc",
    );
    assert_eq!(beacon.encode(), adv);

    let decoded = LinTechBeacon::decode(&adv).unwrap();
    assert_eq!(decoded, beacon);
    assert_eq!(decoded.tx_power, 4);
    assert_eq!(decoded.battery_level, 31);
}

#[test]
fn eddystone_uid_wire_format() {
    let mut frame = EddystoneUid::new(
        [0x85, 0xB9, 0xAE, 0x95, 0x4B, 0x59, 0xC3, 0xD6, 0xF6, 0x9D],
        [0x00, 0x00, 0x00, 0x00, 0x13, 0x37],
    );
    frame.reference_rssi = -65;
    let adv = hex(
        "03 03 aa fe 17 16 aa fe 00 bf 85 b9 ae 95 4b 59 c3 \
         d6 f6 9d 00 00 00 00 13 37 00 00",
    );
    assert_eq!(frame.encode(), adv);
    assert_eq!(EddystoneUid::decode(&adv).unwrap(), frame);
}

#[test]
fn eddystone_url_wire_format() {
    let mut frame = EddystoneUrl::new("https://micropython.com");
    frame.reference_rssi = -68;
    let adv = hex(
        "03 03 aa fe 12 16 aa fe 10 bc 03 6d 69 63 72 6f 70 \
         79 74 68 6f 6e 07",
    );
    assert_eq!(frame.encode(), adv);
    assert_eq!(EddystoneUrl::decode(&adv).unwrap(), frame);
}

#[test]
fn eddystone_url_unknown_tld_stays_literal() {
    let mut frame = EddystoneUrl::new("https://micropython.de");
    frame.reference_rssi = -68;
    let adv = hex(
        "03 03 aa fe 14 16 aa fe 10 bc 03 6d 69 63 72 6f 70 \
         79 74 68 6f 6e 2e 64 65",
    );
    assert_eq!(frame.encode(), adv);
    assert_eq!(EddystoneUrl::decode(&adv).unwrap(), frame);
}

#[test]
fn ruuvitag_raw_v2_wire_format() {
    let tag = RuuviTag::RawV2 {
        temperature: 24.3,
        humidity: 53.49,
        pressure: 100_044,
        acceleration_x: 4,
        acceleration_y: -4,
        acceleration_z: 1036,
        battery_voltage: 2977,
        tx_power: 4,
        movement_counter: 66,
        measurement_sequence: 205,
        mac: [0xCB, 0xB8, 0x33, 0x4C, 0x88, 0x4F],
    };
    let adv = hex(
        "02 01 06 1b ff 99 04 05 12 fc 53 94 c3 7c 00 04 ff \
         fc 04 0c ac 36 42 00 cd cb b8 33 4c 88 4f",
    );
    assert_eq!(tag.encode(), adv);
    assert_eq!(RuuviTag::decode(&adv).unwrap(), tag);
}

#[test]
fn ruuvitag_raw_v1_bare_payload() {
    let payload = hex("03 29 1a 1e ce 1e fc 18 f9 42 02 ca 0b 53");
    let tag = RuuviTag::decode(&payload).unwrap();
    assert_eq!(
        tag,
        RuuviTag::RawV1 {
            humidity: 20.5,
            temperature: 26.3,
            pressure: 102_766,
            acceleration_x: -1000,
            acceleration_y: -1726,
            acceleration_z: 714,
            battery_voltage: 2899,
        }
    );

    // Re-encoding yields the full advertisement around the same payload.
    let adv = tag.encode();
    assert_eq!(&adv[..7], &hex("02 01 06 11 ff 99 04")[..]);
    assert_eq!(&adv[7..], &payload[..]);
}

#[test]
fn mikrotik_wire_format() {
    let tag = MikroTik {
        version: 1,
        encrypted: false,
        salt: 0xA6CE,
        acceleration_x: 0.0,
        acceleration_y: 0.0,
        acceleration_z: 2.0 / 256.0,
        temperature: Some(28.625),
        uptime: 5_703_825,
        trigger: 0,
        battery: 95,
    };
    let adv = hex(
        "02 01 06 15 ff 4f 09 01 00 ce a6 00 00 00 00 02 00 \
         a0 1c 91 08 57 00 00 5f",
    );
    assert_eq!(tag.encode(), adv);
    assert_eq!(MikroTik::decode(&adv).unwrap(), tag);
}

#[test]
fn decoders_accept_flagless_advertisements() {
    let beacon = IBeacon::new(Uuid::parse("acbdf5ff-d272-45f5-8e45-01672fe51c47").unwrap(), 1, 2);
    let adv = beacon.encode();
    assert_eq!(IBeacon::decode(&adv[3..]).unwrap(), beacon);
}
