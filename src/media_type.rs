//! SenML media types (RFC 8428 section 12.3) and CoAP content formats

/// application/senml+json
pub const SENML_JSON: &str = "application/senml+json";
/// application/senml+cbor
pub const SENML_CBOR: &str = "application/senml+cbor";
/// application/senml+xml
pub const SENML_XML: &str = "application/senml+xml";
/// application/senml-exi
pub const SENML_EXI: &str = "application/senml-exi";
/// Vendor CSV rendering of a resolved pack
pub const SENML_CSV: &str = "text/vnd.senml.v2+csv";

/// application/sensml+json
pub const SENSML_JSON: &str = "application/sensml+json";
/// application/sensml+cbor
pub const SENSML_CBOR: &str = "application/sensml+cbor";
/// application/sensml+xml
pub const SENSML_XML: &str = "application/sensml+xml";
/// application/sensml-exi
pub const SENSML_EXI: &str = "application/sensml-exi";
/// Vendor CSV rendering of a resolved stream
pub const SENSML_CSV: &str = "text/vnd.sensml.v2+csv";

/// SenML Content-Format identifiers for CoAP
pub mod content_format {
    /// application/senml+json
    pub const SENML_JSON: u16 = 110;
    /// application/sensml+json
    pub const SENSML_JSON: u16 = 111;
    /// application/senml+cbor
    pub const SENML_CBOR: u16 = 112;
    /// application/sensml+cbor
    pub const SENSML_CBOR: u16 = 113;
    /// application/senml-exi
    pub const SENML_EXI: u16 = 114;
    /// application/sensml-exi
    pub const SENSML_EXI: u16 = 115;
    /// application/senml+xml
    pub const SENML_XML: u16 = 310;
    /// application/sensml+xml
    pub const SENSML_XML: u16 = 311;
}

/// Strip parameters (`; charset=...`) and surrounding whitespace
pub fn essence(media_type: &str) -> &str {
    media_type.split(';').next().unwrap_or_default().trim()
}
