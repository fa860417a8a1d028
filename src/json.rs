//! JSON serialization support for SenML

use crate::codec::Options;
use crate::{Result, SenMLError, SenMLPack};

/// Serialize a pack to JSON bytes
///
/// The pretty layout keeps each record compact on its own line, which reads
/// well for long packs.
pub fn encode(pack: &SenMLPack, options: &Options) -> Result<Vec<u8>> {
    if !options.pretty {
        return serde_json::to_vec(pack).map_err(|e| SenMLError::serialization(e.to_string()));
    }

    let mut buffer = b"[\n  ".to_vec();
    for (i, record) in pack.iter().enumerate() {
        if i != 0 {
            buffer.extend_from_slice(b",\n  ");
        }
        serde_json::to_writer(&mut buffer, record)
            .map_err(|e| SenMLError::serialization(e.to_string()))?;
    }
    buffer.extend_from_slice(b"\n]\n");
    Ok(buffer)
}

/// Deserialize a pack from JSON bytes
pub fn decode(bytes: &[u8]) -> Result<SenMLPack> {
    Ok(serde_json::from_slice(bytes)?)
}

impl SenMLPack {
    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| SenMLError::serialization(e.to_string()))
    }

    /// Serialize to JSON with one record per line
    pub fn to_json_pretty(&self) -> Result<String> {
        let bytes = encode(self, &Options::new().pretty(true))?;
        String::from_utf8(bytes).map_err(|e| SenMLError::serialization(e.to_string()))
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        decode(json.as_bytes())
    }

    /// Serialize SenML pack to JSON bytes
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        encode(self, &Options::default())
    }

    /// Deserialize SenML pack from JSON bytes
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        decode(bytes)
    }
}
