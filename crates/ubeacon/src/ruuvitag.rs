//! RuuviTag environmental sensor advertisement codec.
//!
//! Protocol specification:
//! <https://docs.ruuvi.com/communication/bluetooth-advertisements>
//!
//! RuuviTag is the one format with an internal discriminant: the leading
//! data-format byte selects between the RAWv1 (format 3) and RAWv2
//! (format 5) sub-layouts, which differ in field sets, widths and
//! scaling.

use ubeacon_buffers::{Reader, Writer};

use crate::error::BeaconError;
use crate::{strip_flags, ADV_TYPE_MFG_DATA, FLAGS_DATA, FLAGS_LENGTH, FLAGS_TYPE};

/// Ruuvi Innovations' registered company identifier.
pub const COMPANY_ID: u16 = 0x0499;

const COMPANY_LE: [u8; 2] = [0x99, 0x04];

const DATA_FORMAT_3: u8 = 0x03;
const DATA_FORMAT_5: u8 = 0x05;

/// RAWv1 sensor payload length, data-format byte included.
const PAYLOAD_LEN_V1: usize = 14;
/// RAWv2 sensor payload length, data-format byte included.
const PAYLOAD_LEN_V2: usize = 24;

/// A decoded RuuviTag advertisement.
///
/// Physical quantities carry their natural units: degrees Celsius,
/// percent relative humidity, pascals, milli-g, millivolts and dBm.
#[derive(Debug, Clone, PartialEq)]
pub enum RuuviTag {
    /// Data format 3 (RAWv1): coarse single-byte and raw register values.
    RawV1 {
        humidity: f64,
        temperature: f64,
        pressure: u32,
        acceleration_x: i16,
        acceleration_y: i16,
        acceleration_z: i16,
        battery_voltage: u16,
    },
    /// Data format 5 (RAWv2): scaled 16-bit fields plus movement and
    /// sequence counters and the sender MAC.
    RawV2 {
        temperature: f64,
        humidity: f64,
        pressure: u32,
        acceleration_x: i16,
        acceleration_y: i16,
        acceleration_z: i16,
        battery_voltage: u16,
        tx_power: i8,
        movement_counter: u8,
        measurement_sequence: u16,
        mac: [u8; 6],
    },
}

impl RuuviTag {
    /// Returns the wire data-format discriminant (3 or 5).
    pub fn data_format(&self) -> u8 {
        match self {
            RuuviTag::RawV1 { .. } => 3,
            RuuviTag::RawV2 { .. } => 5,
        }
    }

    /// Assembles a full advertisement: flags, manufacturer AD header,
    /// sensor payload. Physical values are re-quantized to their raw
    /// wire representation (out-of-range values saturate).
    pub fn encode(&self) -> Vec<u8> {
        let payload = self.encode_payload();
        let mut writer = Writer::with_capacity(6 + payload.len());
        writer.buf(&[FLAGS_LENGTH, FLAGS_TYPE, FLAGS_DATA]);
        writer.u8(3 + payload.len() as u8);
        writer.u8(ADV_TYPE_MFG_DATA);
        writer.buf(&COMPANY_LE);
        writer.buf(&payload);
        writer.flush()
    }

    fn encode_payload(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(PAYLOAD_LEN_V2);
        match *self {
            RuuviTag::RawV1 {
                humidity,
                temperature,
                pressure,
                acceleration_x,
                acceleration_y,
                acceleration_z,
                battery_voltage,
            } => {
                writer.u8(DATA_FORMAT_3);
                writer.u8((humidity * 2.0).round() as u8);
                let (whole, frac) = split_sign_magnitude(temperature);
                writer.u8(whole);
                writer.u8(frac);
                writer.u16(pressure.saturating_sub(50_000) as u16);
                writer.i16(acceleration_x);
                writer.i16(acceleration_y);
                writer.i16(acceleration_z);
                writer.u16(battery_voltage);
            }
            RuuviTag::RawV2 {
                temperature,
                humidity,
                pressure,
                acceleration_x,
                acceleration_y,
                acceleration_z,
                battery_voltage,
                tx_power,
                movement_counter,
                measurement_sequence,
                mac,
            } => {
                writer.u8(DATA_FORMAT_5);
                writer.i16((temperature * 200.0).round() as i16);
                writer.u16((humidity * 400.0).round() as u16);
                writer.u16(pressure.saturating_sub(50_000) as u16);
                writer.i16(acceleration_x);
                writer.i16(acceleration_y);
                writer.i16(acceleration_z);
                let battery = battery_voltage.saturating_sub(1600).min(0x07FF);
                let tx = (((tx_power as i16 + 40) / 2).clamp(0, 0x1F)) as u16;
                writer.u16((battery << 5) | tx);
                writer.u8(movement_counter);
                writer.u16(measurement_sequence);
                writer.buf(&mac);
            }
        }
        writer.flush()
    }

    /// Decodes a received advertisement. Accepts a full advertisement
    /// (with or without the flags structure) as well as the bare sensor
    /// payload starting at the data-format byte.
    pub fn decode(adv_data: &[u8]) -> Result<Self, BeaconError> {
        let data = strip_flags(adv_data);
        let payload = if data.len() >= 4 && data[1] == ADV_TYPE_MFG_DATA && data[2..4] == COMPANY_LE
        {
            &data[4..]
        } else {
            data
        };
        match payload.first() {
            Some(&DATA_FORMAT_3) => Self::decode_v1(payload),
            Some(&DATA_FORMAT_5) => Self::decode_v2(payload),
            Some(&other) => Err(BeaconError::UnrecognizedDiscriminant(other)),
            None => Err(BeaconError::LengthMismatch {
                expected: PAYLOAD_LEN_V1,
                actual: 0,
            }),
        }
    }

    fn decode_v1(payload: &[u8]) -> Result<Self, BeaconError> {
        if payload.len() != PAYLOAD_LEN_V1 {
            return Err(BeaconError::LengthMismatch {
                expected: PAYLOAD_LEN_V1,
                actual: payload.len(),
            });
        }
        let mut reader = Reader::new(payload);
        reader.skip(1);
        let humidity = reader.u8() as f64 / 2.0;
        let whole = reader.u8();
        let frac = reader.u8();
        Ok(RuuviTag::RawV1 {
            humidity,
            temperature: join_sign_magnitude(whole, frac),
            pressure: reader.u16() as u32 + 50_000,
            acceleration_x: reader.i16(),
            acceleration_y: reader.i16(),
            acceleration_z: reader.i16(),
            battery_voltage: reader.u16(),
        })
    }

    fn decode_v2(payload: &[u8]) -> Result<Self, BeaconError> {
        if payload.len() != PAYLOAD_LEN_V2 {
            return Err(BeaconError::LengthMismatch {
                expected: PAYLOAD_LEN_V2,
                actual: payload.len(),
            });
        }
        let mut reader = Reader::new(payload);
        reader.skip(1);
        let temperature = reader.i16() as f64 * 0.005;
        let humidity = reader.u16() as f64 * 0.0025;
        let pressure = reader.u16() as u32 + 50_000;
        let acceleration_x = reader.i16();
        let acceleration_y = reader.i16();
        let acceleration_z = reader.i16();
        let power = reader.u16();
        let movement_counter = reader.u8();
        let measurement_sequence = reader.u16();
        let mut mac = [0u8; 6];
        mac.copy_from_slice(reader.buf(6));
        Ok(RuuviTag::RawV2 {
            temperature,
            humidity,
            pressure,
            acceleration_x,
            acceleration_y,
            acceleration_z,
            // 11-bit battery voltage and 5-bit TX power pack one word.
            battery_voltage: (power >> 5) + 1600,
            tx_power: ((power & 0x1F) as i16 * 2 - 40) as i8,
            movement_counter,
            measurement_sequence,
            mac,
        })
    }
}

/// RAWv1 temperature: integer byte with a sign flag at 0x80, plus a
/// centi-degree fraction byte.
fn join_sign_magnitude(whole: u8, frac: u8) -> f64 {
    let t = whole as f64 + frac as f64 / 100.0;
    if t > 128.0 {
        ((128.0 - t) * 100.0).round() / 100.0
    } else {
        t
    }
}

fn split_sign_magnitude(temperature: f64) -> (u8, u8) {
    // The sign bit leaves 7 bits for the whole part, so the layout
    // carries at most 127.99 degrees either side of zero.
    let magnitude = temperature.abs().min(127.99);
    let mut whole = magnitude.trunc() as u8;
    let mut frac = ((magnitude - magnitude.trunc()) * 100.0).round() as u8;
    if frac == 100 {
        whole += 1;
        frac = 0;
    }
    if temperature < 0.0 {
        whole += 128;
    }
    (whole, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_magnitude_round_trip() {
        for temperature in [0.0, 26.3, -0.5, -26.3, 127.99] {
            let (whole, frac) = split_sign_magnitude(temperature);
            assert_eq!(join_sign_magnitude(whole, frac), temperature);
        }
    }

    #[test]
    fn sign_magnitude_saturates_out_of_range_temperatures() {
        assert_eq!(split_sign_magnitude(-129.0), (255, 99));
        assert_eq!(split_sign_magnitude(200.0), (127, 99));

        let tag = RuuviTag::RawV1 {
            humidity: 0.0,
            temperature: -129.0,
            pressure: 100_000,
            acceleration_x: 0,
            acceleration_y: 0,
            acceleration_z: 0,
            battery_voltage: 3000,
        };
        match RuuviTag::decode(&tag.encode()).unwrap() {
            RuuviTag::RawV1 { temperature, .. } => assert_eq!(temperature, -127.99),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn unknown_data_format_is_rejected() {
        assert_eq!(
            RuuviTag::decode(&[0x04, 0x00, 0x00]),
            Err(BeaconError::UnrecognizedDiscriminant(0x04))
        );
    }

    #[test]
    fn truncated_payload_is_rejected() {
        assert!(matches!(
            RuuviTag::decode(&[0x03, 0x29, 0x1A]),
            Err(BeaconError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn power_word_packs_battery_and_tx() {
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
        let adv = tag.encode();
        // power word lives right after the acceleration block
        assert_eq!(&adv[20..22], &[0xAC, 0x36]);
        assert_eq!(RuuviTag::decode(&adv).unwrap(), tag);
    }
}
