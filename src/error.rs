//! Error types for SenML operations

use thiserror::Error;

/// Result type alias for SenML operations
pub type Result<T> = std::result::Result<T, SenMLError>;

/// Structural problems found while validating a pack.
///
/// Every per-record variant carries the index of the offending record so the
/// caller can locate it. Validation stops at the first violation.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    /// Resolved name (base name + name) is empty
    #[error("record {index}: empty name")]
    EmptyName { index: usize },

    /// Resolved name does not match the SenML name grammar
    #[error(
        "record {index}: invalid name: must begin with alphanumeric and contain alphanumeric or one of - : . / _"
    )]
    InvalidNameFormat { index: usize, name: String },

    /// A record declares a version different from the one fixed for the pack
    #[error("record {index}: unallowed version change (expected {expected}, found {found})")]
    VersionMismatch {
        index: usize,
        expected: i32,
        found: i32,
    },

    /// Base version must be a non-negative integer
    #[error("record {index}: negative base version {version}")]
    NegativeVersion { index: usize, version: i32 },

    /// More than one value kind in a record
    #[error("record {index}: too many values in single record")]
    TooManyValues { index: usize },

    /// Sum or base sum next to a string, boolean or data value
    #[error("record {index}: sum together with non-float value in a single record")]
    SumWithNonFloatValue { index: usize },

    /// Record carries neither a value nor a sum
    #[error("record {index}: no value or sum")]
    NoValueOrSum { index: usize },

    /// Pack has no records and the validator does not allow that
    #[error("empty pack not allowed")]
    EmptyPack,

    /// Resolved unit is not part of the SenML units registry
    #[error("record {index}: unit '{unit}' is not a registered SenML unit")]
    UnregisteredUnit { index: usize, unit: String },
}

impl ValidationError {
    /// Index of the record that failed validation, if the error is tied to one
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::EmptyName { index }
            | Self::InvalidNameFormat { index, .. }
            | Self::VersionMismatch { index, .. }
            | Self::NegativeVersion { index, .. }
            | Self::TooManyValues { index }
            | Self::SumWithNonFloatValue { index }
            | Self::NoValueOrSum { index }
            | Self::UnregisteredUnit { index, .. } => Some(*index),
            Self::EmptyPack => None,
        }
    }
}

/// Errors that can occur during SenML operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SenMLError {
    /// Pack failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization error
    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    /// Deserialization error
    #[error("Deserialization error: {message}")]
    DeserializationError { message: String },

    /// Invalid field value in a decoded payload
    #[error("Invalid value for field '{field}': {value}")]
    InvalidFieldValue { field: String, value: String },

    /// Media type is not a known SenML media type
    #[error("Unsupported media type: {media_type}")]
    UnsupportedMediaType { media_type: String },

    /// Format is known but its cargo feature is not enabled
    #[error("Format '{format}' is not enabled in this build")]
    FormatDisabled { format: String },

    /// CSV input was expected to start with a header
    #[error("Missing CSV header or no input")]
    MissingCsvHeader,

    /// CSV header does not match the fixed column layout
    #[error("Unexpected CSV header: {found}")]
    UnexpectedCsvHeader { found: String },
}

impl SenMLError {
    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a deserialization error
    pub fn deserialization<S: Into<String>>(message: S) -> Self {
        Self::DeserializationError {
            message: message.into(),
        }
    }

    /// Create an invalid field value error
    pub fn invalid_field_value<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an unsupported media type error
    pub fn unsupported_media_type<S: Into<String>>(media_type: S) -> Self {
        Self::UnsupportedMediaType {
            media_type: media_type.into(),
        }
    }

    /// Create a disabled format error
    pub fn format_disabled<S: Into<String>>(format: S) -> Self {
        Self::FormatDisabled {
            format: format.into(),
        }
    }

    /// The validation error wrapped by this error, if any
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for SenMLError {
    fn from(err: serde_json::Error) -> Self {
        Self::DeserializationError {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "cbor")]
impl From<ciborium::de::Error<std::io::Error>> for SenMLError {
    fn from(err: ciborium::de::Error<std::io::Error>) -> Self {
        Self::DeserializationError {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "cbor")]
impl From<ciborium::ser::Error<std::io::Error>> for SenMLError {
    fn from(err: ciborium::ser::Error<std::io::Error>) -> Self {
        Self::SerializationError {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "xml")]
impl From<quick_xml::DeError> for SenMLError {
    fn from(err: quick_xml::DeError) -> Self {
        Self::DeserializationError {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for SenMLError {
    fn from(err: csv::Error) -> Self {
        Self::DeserializationError {
            message: err.to_string(),
        }
    }
}
