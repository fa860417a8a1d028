//! SenML Record types and values

use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde::{Deserialize, Serialize};

/// Base64url engine used for `vd`: emits no padding, accepts either form.
const DATA_VALUE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A SenML Record represents a single sensor measurement or device parameter
///
/// Field names are the RFC 8428 short labels. Base fields (`b*`) apply to this
/// record and every following record of the pack until they are overridden.
/// Every field is optional so that "absent" stays distinguishable from zero,
/// which both validation and normalization depend on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SenMLRecord {
    /// Base Name - prepended to the names of this and following records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bn: Option<String>,

    /// Base Time - added to the time of this and following records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bt: Option<f64>,

    /// Base Unit - unit assumed when a record has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bu: Option<String>,

    /// Base Version - must not change within a pack, defaults to 10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bver: Option<i32>,

    /// Base Value - added to the value of this and following records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bv: Option<f64>,

    /// Base Sum - added to the sum of this and following records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bs: Option<f64>,

    /// Name - identifies the sensor or parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    /// Unit - SI unit or custom unit string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u: Option<String>,

    /// Time - timestamp relative to base time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<f64>,

    /// Update Time - maximum time before next update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ut: Option<f64>,

    /// Value - numeric measurement value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<f64>,

    /// String Value - textual measurement value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs: Option<String>,

    /// Data Value - base64url-encoded binary data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vd: Option<String>,

    /// Boolean Value - true/false measurement value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vb: Option<bool>,

    /// Sum - integrated sum of values over time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<f64>,
}

/// Union type for SenML values
#[derive(Debug, Clone, PartialEq)]
pub enum SenMLValue {
    /// Numeric value
    Number(f64),
    /// String value
    String(String),
    /// Boolean value
    Boolean(bool),
    /// Binary data
    Data(Vec<u8>),
}

impl SenMLRecord {
    /// Create a new empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record with a numeric value
    pub fn with_value<S: Into<String>>(name: S, value: f64) -> Self {
        Self {
            n: Some(name.into()),
            v: Some(value),
            ..Default::default()
        }
    }

    /// Create a record with a string value
    pub fn with_string_value<S: Into<String>, V: Into<String>>(name: S, value: V) -> Self {
        Self {
            n: Some(name.into()),
            vs: Some(value.into()),
            ..Default::default()
        }
    }

    /// Create a record with a boolean value
    pub fn with_bool_value<S: Into<String>>(name: S, value: bool) -> Self {
        Self {
            n: Some(name.into()),
            vb: Some(value),
            ..Default::default()
        }
    }

    /// Create a record with binary data, stored base64url-encoded
    pub fn with_data_value<S: Into<String>>(name: S, data: &[u8]) -> Self {
        Self {
            n: Some(name.into()),
            vd: Some(DATA_VALUE_ENGINE.encode(data)),
            ..Default::default()
        }
    }

    /// Set the name of this record
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.n = Some(name.into());
        self
    }

    /// Set the unit for this record
    pub fn with_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.u = Some(unit.into());
        self
    }

    /// Set the timestamp for this record
    pub fn with_time(mut self, time: f64) -> Self {
        self.t = Some(time);
        self
    }

    /// Set update time for this record
    pub fn with_update_time(mut self, ut: f64) -> Self {
        self.ut = Some(ut);
        self
    }

    /// Set the sum value for this record
    pub fn with_sum(mut self, sum: f64) -> Self {
        self.s = Some(sum);
        self
    }

    pub fn with_base_name<S: Into<String>>(mut self, base_name: S) -> Self {
        self.bn = Some(base_name.into());
        self
    }

    pub fn with_base_time(mut self, base_time: f64) -> Self {
        self.bt = Some(base_time);
        self
    }

    pub fn with_base_unit<S: Into<String>>(mut self, base_unit: S) -> Self {
        self.bu = Some(base_unit.into());
        self
    }

    pub fn with_base_version(mut self, version: i32) -> Self {
        self.bver = Some(version);
        self
    }

    pub fn with_base_value(mut self, base_value: f64) -> Self {
        self.bv = Some(base_value);
        self
    }

    pub fn with_base_sum(mut self, base_sum: f64) -> Self {
        self.bs = Some(base_sum);
        self
    }

    /// Get the primary value from this record
    ///
    /// A data value that is not valid base64url yields `None`.
    pub fn value(&self) -> Option<SenMLValue> {
        if let Some(v) = self.v {
            Some(SenMLValue::Number(v))
        } else if let Some(ref vs) = self.vs {
            Some(SenMLValue::String(vs.clone()))
        } else if let Some(vb) = self.vb {
            Some(SenMLValue::Boolean(vb))
        } else {
            self.data().map(SenMLValue::Data)
        }
    }

    /// Decode the data value, if present and valid base64url
    pub fn data(&self) -> Option<Vec<u8>> {
        self.vd
            .as_deref()
            .and_then(|vd| DATA_VALUE_ENGINE.decode(vd).ok())
    }

    /// Check if this record has a value
    pub fn has_value(&self) -> bool {
        self.v.is_some() || self.vs.is_some() || self.vb.is_some() || self.vd.is_some()
    }

    /// Check if any base field other than the version is set
    pub fn has_base_fields(&self) -> bool {
        self.bn.is_some()
            || self.bt.is_some()
            || self.bu.is_some()
            || self.bv.is_some()
            || self.bs.is_some()
    }

    /// Name of this record under the active base name
    ///
    /// An empty `base_name` means no base name is active. A missing `n` counts
    /// as the empty string, so the base name alone can name a record.
    pub fn resolved_name(&self, base_name: &str) -> String {
        let name = self.n.as_deref().unwrap_or_default();
        if base_name.is_empty() {
            name.to_string()
        } else {
            format!("{base_name}{name}")
        }
    }
}

impl From<SenMLValue> for SenMLRecord {
    fn from(value: SenMLValue) -> Self {
        match value {
            SenMLValue::Number(n) => Self {
                v: Some(n),
                ..Default::default()
            },
            SenMLValue::String(s) => Self {
                vs: Some(s),
                ..Default::default()
            },
            SenMLValue::Boolean(b) => Self {
                vb: Some(b),
                ..Default::default()
            },
            SenMLValue::Data(d) => Self {
                vd: Some(DATA_VALUE_ENGINE.encode(d)),
                ..Default::default()
            },
        }
    }
}

/// Encode raw bytes the way `vd` stores them
pub(crate) fn encode_data_value(data: &[u8]) -> String {
    DATA_VALUE_ENGINE.encode(data)
}
