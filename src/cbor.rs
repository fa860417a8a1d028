//! CBOR serialization support for SenML
//!
//! Records are CBOR maps keyed by the integer labels of RFC 8428 section 6.
//! Decoding also accepts the JSON text labels and integer-encoded numbers,
//! since both show up in the wild.

use ciborium::value::Value;

use crate::record::encode_data_value;
use crate::{Result, SenMLError, SenMLPack, SenMLRecord};

/// CBOR integer labels (RFC 8428 Table 6)
pub mod label {
    pub const BASE_VERSION: i64 = -1;
    pub const BASE_NAME: i64 = -2;
    pub const BASE_TIME: i64 = -3;
    pub const BASE_UNIT: i64 = -4;
    pub const BASE_VALUE: i64 = -5;
    pub const BASE_SUM: i64 = -6;
    pub const NAME: i64 = 0;
    pub const UNIT: i64 = 1;
    pub const VALUE: i64 = 2;
    pub const STRING_VALUE: i64 = 3;
    pub const BOOL_VALUE: i64 = 4;
    pub const SUM: i64 = 5;
    pub const TIME: i64 = 6;
    pub const UPDATE_TIME: i64 = 7;
    pub const DATA_VALUE: i64 = 8;

    /// Integer label for a JSON field name
    pub fn from_name(name: &str) -> Option<i64> {
        Some(match name {
            "bver" => BASE_VERSION,
            "bn" => BASE_NAME,
            "bt" => BASE_TIME,
            "bu" => BASE_UNIT,
            "bv" => BASE_VALUE,
            "bs" => BASE_SUM,
            "n" => NAME,
            "u" => UNIT,
            "v" => VALUE,
            "vs" => STRING_VALUE,
            "vb" => BOOL_VALUE,
            "s" => SUM,
            "t" => TIME,
            "ut" => UPDATE_TIME,
            "vd" => DATA_VALUE,
            _ => return None,
        })
    }
}

/// Serialize a pack to CBOR bytes
pub fn encode(pack: &SenMLPack) -> Result<Vec<u8>> {
    let value = Value::Array(pack.iter().map(record_to_value).collect());
    let mut buffer = Vec::new();
    ciborium::ser::into_writer(&value, &mut buffer)?;
    Ok(buffer)
}

/// Deserialize a pack from CBOR bytes
pub fn decode(bytes: &[u8]) -> Result<SenMLPack> {
    let value: Value = ciborium::de::from_reader(bytes)?;
    let Value::Array(items) = value else {
        return Err(SenMLError::deserialization("SenML CBOR must be an array"));
    };
    items
        .into_iter()
        .map(record_from_value)
        .collect::<Result<Vec<_>>>()
        .map(SenMLPack::from)
}

fn record_to_value(record: &SenMLRecord) -> Value {
    let mut entries: Vec<(Value, Value)> = Vec::new();
    let mut push = |key: i64, value: Value| entries.push((Value::Integer(key.into()), value));

    if let Some(bn) = &record.bn {
        push(label::BASE_NAME, Value::Text(bn.clone()));
    }
    if let Some(bt) = record.bt {
        push(label::BASE_TIME, Value::Float(bt));
    }
    if let Some(bu) = &record.bu {
        push(label::BASE_UNIT, Value::Text(bu.clone()));
    }
    if let Some(bver) = record.bver {
        push(label::BASE_VERSION, Value::Integer(bver.into()));
    }
    if let Some(bv) = record.bv {
        push(label::BASE_VALUE, Value::Float(bv));
    }
    if let Some(bs) = record.bs {
        push(label::BASE_SUM, Value::Float(bs));
    }
    if let Some(n) = &record.n {
        push(label::NAME, Value::Text(n.clone()));
    }
    if let Some(u) = &record.u {
        push(label::UNIT, Value::Text(u.clone()));
    }
    if let Some(t) = record.t {
        push(label::TIME, Value::Float(t));
    }
    if let Some(ut) = record.ut {
        push(label::UPDATE_TIME, Value::Float(ut));
    }
    if let Some(v) = record.v {
        push(label::VALUE, Value::Float(v));
    }
    if let Some(vs) = &record.vs {
        push(label::STRING_VALUE, Value::Text(vs.clone()));
    }
    if let Some(vd) = &record.vd {
        push(label::DATA_VALUE, Value::Text(vd.clone()));
    }
    if let Some(vb) = record.vb {
        push(label::BOOL_VALUE, Value::Bool(vb));
    }
    if let Some(s) = record.s {
        push(label::SUM, Value::Float(s));
    }

    Value::Map(entries)
}

fn record_from_value(value: Value) -> Result<SenMLRecord> {
    let Value::Map(entries) = value else {
        return Err(SenMLError::deserialization("SenML CBOR record must be a map"));
    };

    let mut record = SenMLRecord::default();
    for (key, value) in entries {
        let key = match key {
            Value::Integer(i) => i64::try_from(i).ok(),
            Value::Text(name) => label::from_name(&name),
            _ => None,
        };
        // Unknown labels are skipped
        let Some(key) = key else { continue };

        match key {
            label::BASE_NAME => record.bn = Some(text(key, value)?),
            label::BASE_TIME => record.bt = Some(number(key, value)?),
            label::BASE_UNIT => record.bu = Some(text(key, value)?),
            label::BASE_VERSION => record.bver = Some(version(value)?),
            label::BASE_VALUE => record.bv = Some(number(key, value)?),
            label::BASE_SUM => record.bs = Some(number(key, value)?),
            label::NAME => record.n = Some(text(key, value)?),
            label::UNIT => record.u = Some(text(key, value)?),
            label::TIME => record.t = Some(number(key, value)?),
            label::UPDATE_TIME => record.ut = Some(number(key, value)?),
            label::VALUE => record.v = Some(number(key, value)?),
            label::STRING_VALUE => record.vs = Some(text(key, value)?),
            label::DATA_VALUE => {
                record.vd = Some(match value {
                    Value::Bytes(bytes) => encode_data_value(&bytes),
                    other => text(key, other)?,
                })
            }
            label::BOOL_VALUE => match value {
                Value::Bool(b) => record.vb = Some(b),
                other => return Err(type_mismatch(key, &other)),
            },
            label::SUM => record.s = Some(number(key, value)?),
            _ => {}
        }
    }
    Ok(record)
}

fn number(key: i64, value: Value) -> Result<f64> {
    match value {
        Value::Float(f) => Ok(f),
        Value::Integer(i) => Ok(i128::from(i) as f64),
        other => Err(type_mismatch(key, &other)),
    }
}

fn text(key: i64, value: Value) -> Result<String> {
    match value {
        Value::Text(s) => Ok(s),
        other => Err(type_mismatch(key, &other)),
    }
}

fn version(value: Value) -> Result<i32> {
    match value {
        Value::Integer(i) => {
            let raw = i128::from(i);
            i32::try_from(raw).map_err(|_| SenMLError::invalid_field_value("bver", raw.to_string()))
        }
        other => Err(type_mismatch(label::BASE_VERSION, &other)),
    }
}

fn type_mismatch(key: i64, value: &Value) -> SenMLError {
    SenMLError::invalid_field_value(format!("label {}", key), format!("{:?}", value))
}

impl SenMLPack {
    /// Serialize to CBOR bytes
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        encode(self)
    }

    /// Deserialize from CBOR bytes
    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        decode(bytes)
    }

    /// Deserialize from CBOR and validate the result
    pub fn from_cbor_validated(bytes: &[u8]) -> Result<Self> {
        let pack = Self::from_cbor(bytes)?;
        pack.validate()?;
        Ok(pack)
    }
}
