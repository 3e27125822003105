//! Attribute filtering over decoded beacon records.
//!
//! A filter is a set of `(attribute, expected value)` predicates; a
//! record matches when every named attribute exists on its variant with
//! an equal value. Scanning consumers use this to pick the beacons they
//! care about out of a stream of decoded advertisements.

use crate::error::BeaconError;
use crate::record::BeaconRecord;
use crate::uuid::Uuid;

/// Attribute names any filter may reference. An unknown name is a
/// construction failure; typos should not turn into filters that never
/// match.
const KNOWN_KEYS: &[&str] = &[
    "acceleration_x",
    "acceleration_y",
    "acceleration_z",
    "battery",
    "battery_level",
    "battery_voltage",
    "company_id",
    "data_format",
    "encrypted",
    "humidity",
    "instance_id",
    "mac",
    "major",
    "measurement_sequence",
    "mfg_reserved",
    "minor",
    "movement_counter",
    "namespace_id",
    "pressure",
    "reference_rssi",
    "salt",
    "temperature",
    "trigger",
    "tx_power",
    "uptime",
    "url",
    "uuid",
    "version",
];

/// An attribute value, as carried by filter predicates and returned by
/// attribute lookup on records.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Bytes(Vec<u8>),
}

impl From<i64> for FilterValue {
    fn from(val: i64) -> Self {
        FilterValue::Int(val)
    }
}

impl From<f64> for FilterValue {
    fn from(val: f64) -> Self {
        FilterValue::Float(val)
    }
}

impl From<bool> for FilterValue {
    fn from(val: bool) -> Self {
        FilterValue::Bool(val)
    }
}

impl From<&str> for FilterValue {
    fn from(val: &str) -> Self {
        FilterValue::Text(val.to_owned())
    }
}

impl From<String> for FilterValue {
    fn from(val: String) -> Self {
        FilterValue::Text(val)
    }
}

impl From<Vec<u8>> for FilterValue {
    fn from(val: Vec<u8>) -> Self {
        FilterValue::Bytes(val)
    }
}

impl From<Uuid> for FilterValue {
    fn from(val: Uuid) -> Self {
        FilterValue::Text(val.to_string())
    }
}

/// A predicate set over beacon attributes.
#[derive(Debug, Clone)]
pub struct BeaconFilter {
    predicates: Vec<(String, FilterValue)>,
}

impl BeaconFilter {
    /// Builds a filter from `(attribute, expected value)` pairs.
    ///
    /// Fails with [`BeaconError::UnsupportedFilterKey`] if a name is not
    /// a known beacon attribute, and with [`BeaconError::Construction`]
    /// if no predicate is supplied at all.
    pub fn new<K, V, I>(predicates: I) -> Result<Self, BeaconError>
    where
        K: Into<String>,
        V: Into<FilterValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let predicates: Vec<(String, FilterValue)> = predicates
            .into_iter()
            .map(|(key, val)| (key.into(), val.into()))
            .collect();
        if predicates.is_empty() {
            return Err(BeaconError::Construction);
        }
        for (key, _) in &predicates {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                return Err(BeaconError::UnsupportedFilterKey(key.clone()));
            }
        }
        Ok(Self { predicates })
    }

    /// Returns `true` iff every predicate attribute exists on the
    /// record's variant with an equal value.
    pub fn matches(&self, record: &BeaconRecord) -> bool {
        self.predicates
            .iter()
            .all(|(key, expected)| attribute(record, key).as_ref() == Some(expected))
    }
}

/// Looks up a named attribute on whatever variant the record holds.
fn attribute(record: &BeaconRecord, key: &str) -> Option<FilterValue> {
    match record {
        BeaconRecord::AltBeacon(b) => match key {
            "company_id" => Some(FilterValue::Int(b.company_id as i64)),
            "uuid" => Some(b.uuid.into()),
            "major" => Some(FilterValue::Int(b.major as i64)),
            "minor" => Some(FilterValue::Int(b.minor as i64)),
            "reference_rssi" => Some(FilterValue::Int(b.reference_rssi as i64)),
            "mfg_reserved" => Some(FilterValue::Int(b.mfg_reserved as i64)),
            _ => None,
        },
        BeaconRecord::IBeacon(b) => match key {
            "uuid" => Some(b.uuid.into()),
            "major" => Some(FilterValue::Int(b.major as i64)),
            "minor" => Some(FilterValue::Int(b.minor as i64)),
            "reference_rssi" => Some(FilterValue::Int(b.reference_rssi as i64)),
            _ => None,
        },
        BeaconRecord::EddystoneUid(b) => match key {
            "namespace_id" => Some(FilterValue::Bytes(b.namespace_id.to_vec())),
            "instance_id" => Some(FilterValue::Bytes(b.instance_id.to_vec())),
            "reference_rssi" => Some(FilterValue::Int(b.reference_rssi as i64)),
            _ => None,
        },
        BeaconRecord::EddystoneUrl(b) => match key {
            "url" => Some(FilterValue::Text(b.url.clone())),
            "reference_rssi" => Some(FilterValue::Int(b.reference_rssi as i64)),
            _ => None,
        },
        BeaconRecord::LinTech(b) => match key {
            "uuid" => Some(b.uuid.into()),
            "major" => Some(FilterValue::Int(b.major as i64)),
            "minor" => Some(FilterValue::Int(b.minor as i64)),
            "reference_rssi" => Some(FilterValue::Int(b.reference_rssi as i64)),
            "tx_power" => Some(FilterValue::Int(b.tx_power as i64)),
            "battery_level" => Some(FilterValue::Int(b.battery_level as i64)),
            _ => None,
        },
        BeaconRecord::RuuviTag(tag) => ruuvitag_attribute(tag, key),
        BeaconRecord::MikroTik(b) => match key {
            "version" => Some(FilterValue::Int(b.version as i64)),
            "encrypted" => Some(FilterValue::Bool(b.encrypted)),
            "salt" => Some(FilterValue::Int(b.salt as i64)),
            "acceleration_x" => Some(FilterValue::Float(b.acceleration_x)),
            "acceleration_y" => Some(FilterValue::Float(b.acceleration_y)),
            "acceleration_z" => Some(FilterValue::Float(b.acceleration_z)),
            "temperature" => b.temperature.map(FilterValue::Float),
            "uptime" => Some(FilterValue::Int(b.uptime as i64)),
            "trigger" => Some(FilterValue::Int(b.trigger as i64)),
            "battery" => Some(FilterValue::Int(b.battery as i64)),
            _ => None,
        },
    }
}

fn ruuvitag_attribute(tag: &crate::ruuvitag::RuuviTag, key: &str) -> Option<FilterValue> {
    use crate::ruuvitag::RuuviTag;
    if key == "data_format" {
        return Some(FilterValue::Int(tag.data_format() as i64));
    }
    match tag {
        RuuviTag::RawV1 {
            humidity,
            temperature,
            pressure,
            acceleration_x,
            acceleration_y,
            acceleration_z,
            battery_voltage,
        } => match key {
            "humidity" => Some(FilterValue::Float(*humidity)),
            "temperature" => Some(FilterValue::Float(*temperature)),
            "pressure" => Some(FilterValue::Int(*pressure as i64)),
            "acceleration_x" => Some(FilterValue::Int(*acceleration_x as i64)),
            "acceleration_y" => Some(FilterValue::Int(*acceleration_y as i64)),
            "acceleration_z" => Some(FilterValue::Int(*acceleration_z as i64)),
            "battery_voltage" => Some(FilterValue::Int(*battery_voltage as i64)),
            _ => None,
        },
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
        } => match key {
            "temperature" => Some(FilterValue::Float(*temperature)),
            "humidity" => Some(FilterValue::Float(*humidity)),
            "pressure" => Some(FilterValue::Int(*pressure as i64)),
            "acceleration_x" => Some(FilterValue::Int(*acceleration_x as i64)),
            "acceleration_y" => Some(FilterValue::Int(*acceleration_y as i64)),
            "acceleration_z" => Some(FilterValue::Int(*acceleration_z as i64)),
            "battery_voltage" => Some(FilterValue::Int(*battery_voltage as i64)),
            "tx_power" => Some(FilterValue::Int(*tx_power as i64)),
            "movement_counter" => Some(FilterValue::Int(*movement_counter as i64)),
            "measurement_sequence" => Some(FilterValue::Int(*measurement_sequence as i64)),
            "mac" => Some(FilterValue::Bytes(mac.to_vec())),
            _ => None,
        },
    }
}
