//! Format-independent encode/decode entry points
//!
//! Each wire format lives in its own module and maps the record fields one to
//! one. This module selects the format from a [`Format`] value or a media type
//! string.

use std::fmt;
use std::str::FromStr;

use crate::media_type::{self, content_format};
use crate::{Result, SenMLError, SenMLPack};

/// Wire formats supported by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Cbor,
    Xml,
    Csv,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Json, Format::Cbor, Format::Xml, Format::Csv];

    /// SenML media type of this format
    pub fn media_type(self) -> &'static str {
        match self {
            Format::Json => media_type::SENML_JSON,
            Format::Cbor => media_type::SENML_CBOR,
            Format::Xml => media_type::SENML_XML,
            Format::Csv => media_type::SENML_CSV,
        }
    }

    /// SenSML (streaming) media type of this format
    pub fn sensml_media_type(self) -> &'static str {
        match self {
            Format::Json => media_type::SENSML_JSON,
            Format::Cbor => media_type::SENSML_CBOR,
            Format::Xml => media_type::SENSML_XML,
            Format::Csv => media_type::SENSML_CSV,
        }
    }

    /// CoAP content format number, where one is registered
    pub fn content_format(self) -> Option<u16> {
        match self {
            Format::Json => Some(content_format::SENML_JSON),
            Format::Cbor => Some(content_format::SENML_CBOR),
            Format::Xml => Some(content_format::SENML_XML),
            Format::Csv => None,
        }
    }

    /// Look up the format for a SenML or SenSML media type.
    /// Parameters after `;` are ignored.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type::essence(media_type);
        Format::ALL.into_iter().find(|format| {
            essence.eq_ignore_ascii_case(format.media_type())
                || essence.eq_ignore_ascii_case(format.sensml_media_type())
        })
    }

    /// Look up the format for a CoAP content format number
    pub fn from_content_format(id: u16) -> Option<Self> {
        match id {
            content_format::SENML_JSON | content_format::SENSML_JSON => Some(Format::Json),
            content_format::SENML_CBOR | content_format::SENSML_CBOR => Some(Format::Cbor),
            content_format::SENML_XML | content_format::SENSML_XML => Some(Format::Xml),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Cbor => "cbor",
            Format::Xml => "xml",
            Format::Csv => "csv",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = SenMLError;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .into_iter()
            .find(|format| s.eq_ignore_ascii_case(format.name()))
            .or_else(|| Format::from_media_type(s))
            .ok_or_else(|| SenMLError::unsupported_media_type(s))
    }
}

/// Encoding and decoding options shared by all formats
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// JSON: one record per line. XML: two-space indentation.
    pub pretty: bool,
    /// CSV: write a header row when encoding, require it when decoding.
    pub csv_header: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn csv_header(mut self, header: bool) -> Self {
        self.csv_header = header;
        self
    }
}

/// Serialize a pack in the given format
#[cfg_attr(
    not(any(feature = "json", feature = "xml", feature = "csv")),
    allow(unused_variables)
)]
pub fn encode(format: Format, pack: &SenMLPack, options: &Options) -> Result<Vec<u8>> {
    let bytes = match format {
        #[cfg(feature = "json")]
        Format::Json => crate::json::encode(pack, options),
        #[cfg(feature = "cbor")]
        Format::Cbor => crate::cbor::encode(pack),
        #[cfg(feature = "xml")]
        Format::Xml => crate::xml::encode(pack, options),
        #[cfg(feature = "csv")]
        Format::Csv => crate::csv::encode(pack, options),
        #[allow(unreachable_patterns)]
        other => Err(SenMLError::format_disabled(other.to_string())),
    }?;

    tracing::debug!(%format, records = pack.len(), bytes = bytes.len(), "encoded pack");
    Ok(bytes)
}

/// Deserialize a pack from the given format
#[cfg_attr(not(feature = "csv"), allow(unused_variables))]
pub fn decode(format: Format, bytes: &[u8], options: &Options) -> Result<SenMLPack> {
    let pack = match format {
        #[cfg(feature = "json")]
        Format::Json => crate::json::decode(bytes),
        #[cfg(feature = "cbor")]
        Format::Cbor => crate::cbor::decode(bytes),
        #[cfg(feature = "xml")]
        Format::Xml => crate::xml::decode(bytes),
        #[cfg(feature = "csv")]
        Format::Csv => crate::csv::decode(bytes, options),
        #[allow(unreachable_patterns)]
        other => Err(SenMLError::format_disabled(other.to_string())),
    }?;

    tracing::debug!(%format, records = pack.len(), bytes = bytes.len(), "decoded pack");
    Ok(pack)
}

/// Decode, then reject the pack if it fails validation
pub fn decode_validated(format: Format, bytes: &[u8], options: &Options) -> Result<SenMLPack> {
    let pack = decode(format, bytes, options)?;
    pack.validate()?;
    Ok(pack)
}

/// Serialize a pack for the given media type
pub fn encode_media_type(media_type: &str, pack: &SenMLPack, options: &Options) -> Result<Vec<u8>> {
    let format = Format::from_media_type(media_type)
        .ok_or_else(|| SenMLError::unsupported_media_type(media_type))?;
    encode(format, pack, options)
}

/// Deserialize a pack sent with the given media type
pub fn decode_media_type(media_type: &str, bytes: &[u8], options: &Options) -> Result<SenMLPack> {
    let format = Format::from_media_type(media_type)
        .ok_or_else(|| SenMLError::unsupported_media_type(media_type))?;
    decode(format, bytes, options)
}
