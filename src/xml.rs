//! XML serialization support for SenML
//!
//! This module provides XML serialization and deserialization for SenML data
//! according to the XML representation defined in RFC 8428 section 7: a
//! `<sensml>` root holding one `<senml>` element per record, with every field
//! carried as an attribute.

use serde::{Deserialize, Serialize};

use crate::codec::Options;
use crate::{Result, SenMLError, SenMLPack, SenMLRecord};

/// XML namespace of SenML documents
pub const SENML_NAMESPACE: &str = "urn:ietf:params:xml:ns:senml";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "sensml")]
struct XmlPack {
    #[serde(rename = "@xmlns", default, skip_serializing_if = "Option::is_none")]
    xmlns: Option<String>,
    #[serde(rename = "senml", default)]
    records: Vec<XmlRecord>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct XmlRecord {
    #[serde(rename = "@bn", skip_serializing_if = "Option::is_none")]
    bn: Option<String>,
    #[serde(rename = "@bt", skip_serializing_if = "Option::is_none")]
    bt: Option<f64>,
    #[serde(rename = "@bu", skip_serializing_if = "Option::is_none")]
    bu: Option<String>,
    #[serde(rename = "@bver", skip_serializing_if = "Option::is_none")]
    bver: Option<i32>,
    #[serde(rename = "@bv", skip_serializing_if = "Option::is_none")]
    bv: Option<f64>,
    #[serde(rename = "@bs", skip_serializing_if = "Option::is_none")]
    bs: Option<f64>,
    #[serde(rename = "@n", skip_serializing_if = "Option::is_none")]
    n: Option<String>,
    #[serde(rename = "@u", skip_serializing_if = "Option::is_none")]
    u: Option<String>,
    #[serde(rename = "@t", skip_serializing_if = "Option::is_none")]
    t: Option<f64>,
    #[serde(rename = "@ut", skip_serializing_if = "Option::is_none")]
    ut: Option<f64>,
    #[serde(rename = "@v", skip_serializing_if = "Option::is_none")]
    v: Option<f64>,
    #[serde(rename = "@vs", skip_serializing_if = "Option::is_none")]
    vs: Option<String>,
    #[serde(rename = "@vd", skip_serializing_if = "Option::is_none")]
    vd: Option<String>,
    #[serde(rename = "@vb", skip_serializing_if = "Option::is_none")]
    vb: Option<bool>,
    #[serde(rename = "@s", skip_serializing_if = "Option::is_none")]
    s: Option<f64>,
}

impl From<&SenMLRecord> for XmlRecord {
    fn from(r: &SenMLRecord) -> Self {
        Self {
            bn: r.bn.clone(),
            bt: r.bt,
            bu: r.bu.clone(),
            bver: r.bver,
            bv: r.bv,
            bs: r.bs,
            n: r.n.clone(),
            u: r.u.clone(),
            t: r.t,
            ut: r.ut,
            v: r.v,
            vs: r.vs.clone(),
            vd: r.vd.clone(),
            vb: r.vb,
            s: r.s,
        }
    }
}

impl From<XmlRecord> for SenMLRecord {
    fn from(r: XmlRecord) -> Self {
        Self {
            bn: r.bn,
            bt: r.bt,
            bu: r.bu,
            bver: r.bver,
            bv: r.bv,
            bs: r.bs,
            n: r.n,
            u: r.u,
            t: r.t,
            ut: r.ut,
            v: r.v,
            vs: r.vs,
            vd: r.vd,
            vb: r.vb,
            s: r.s,
        }
    }
}

/// Serialize a pack to XML bytes
pub fn encode(pack: &SenMLPack, options: &Options) -> Result<Vec<u8>> {
    let document = XmlPack {
        xmlns: Some(SENML_NAMESPACE.to_string()),
        records: pack.iter().map(XmlRecord::from).collect(),
    };

    let mut buffer = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    if options.pretty {
        serializer.indent(' ', 2);
    }
    document
        .serialize(serializer)
        .map_err(|e| SenMLError::serialization(e.to_string()))?;
    Ok(buffer.into_bytes())
}

/// Deserialize a pack from XML bytes
pub fn decode(bytes: &[u8]) -> Result<SenMLPack> {
    let text = std::str::from_utf8(bytes).map_err(|e| SenMLError::deserialization(e.to_string()))?;
    let document: XmlPack = quick_xml::de::from_str(text)?;
    Ok(document.records.into_iter().map(SenMLRecord::from).collect())
}

impl SenMLPack {
    /// Serialize this SenML pack to XML format
    ///
    /// # Example
    ///
    /// ```rust
    /// # use senml::{SenMLBuilder, Result};
    /// # fn example() -> Result<()> {
    /// let pack = SenMLBuilder::new()
    ///     .base_name("urn:dev:sensor1:")
    ///     .add_value("temperature", 22.5)
    ///     .build();
    ///
    /// let xml = pack.to_xml()?;
    /// assert!(xml.starts_with("<sensml"));
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn to_xml(&self) -> Result<String> {
        let bytes = encode(self, &Options::default())?;
        String::from_utf8(bytes).map_err(|e| SenMLError::serialization(e.to_string()))
    }

    /// Deserialize a SenML pack from XML format
    pub fn from_xml(xml: &str) -> Result<Self> {
        decode(xml.as_bytes())
    }
}
