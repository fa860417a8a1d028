//! # SenML - Sensor Measurement Lists for Rust
//!
//! A Rust implementation of [RFC 8428](https://tools.ietf.org/html/rfc8428) - Sensor Measurement Lists (SenML).
//!
//! SenML represents simple sensor measurements and device parameters as an
//! ordered list of records. This crate provides the record and pack model,
//! validation of packs against the RFC rules, normalization into resolved
//! form, and adapters for the JSON, CBOR, XML and CSV representations.
//!
//! ## Features
//!
//! - **RFC 8428 Compliant**: Base field inheritance, relative times, versioning
//! - **Multiple Formats**: JSON, CBOR, XML and CSV, each behind a cargo feature
//! - **Validation**: Fail-fast checks that report the offending record index
//! - **Normalization**: Convert SenML packs to resolved form with an injectable clock
//! - **Builder Pattern**: Ergonomic API for creating SenML data
//!
//! ## Quick Start
//!
//! ```rust
//! use senml::{SenMLBuilder, Result};
//!
//! fn example() -> Result<()> {
//!     let pack = SenMLBuilder::new()
//!         .base_name("urn:dev:ow:10e2073a01080063:")
//!         .base_unit("Cel")
//!         .add_value("temperature", 22.5)
//!         .build();
//!
//!     pack.validate()?;
//!
//!     let resolved = pack.normalized();
//!     assert_eq!(
//!         resolved.records[0].n.as_deref(),
//!         Some("urn:dev:ow:10e2073a01080063:temperature")
//!     );
//!
//!     let json = pack.to_json()?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## SenML Data Model
//!
//! SenML represents sensor data as an array of records, where each record can contain:
//! - **Base fields**: Apply to the record and every later one (bn, bt, bu, bv, bs, bver)
//! - **Record fields**: Individual measurements (n, u, v, vs, vb, vd, s, t, ut)
//!
//! Every field is optional. A field that is absent is distinct from a field
//! set to zero, `false` or the empty string.

pub mod builder;
pub mod clock;
pub mod codec;
pub mod error;
pub mod media_type;
pub mod normalize;
pub mod pack;
pub mod record;
pub mod units;
pub mod validation;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "cbor")]
pub mod cbor;

#[cfg(feature = "xml")]
pub mod xml;

#[cfg(feature = "csv")]
pub mod csv;

// Re-export main types
pub use builder::{SenMLBuilder, TimeSeriesBuilder};
pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{Format, Options};
pub use error::{Result, SenMLError, ValidationError};
pub use normalize::BaseContext;
pub use pack::SenMLPack;
pub use record::{SenMLRecord, SenMLValue};
pub use validation::{PackValidator, Validate, is_valid_name};

/// Version assumed when a pack carries no `bver`
pub const DEFAULT_BASE_VERSION: i32 = 10;

/// Times below 2^28 seconds are relative to the current time
pub const RELATIVE_TIME_PIVOT: f64 = 268_435_456.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_senml_creation() {
        let pack = SenMLBuilder::new()
            .base_name("urn:dev:sensor1:")
            .add_value("temperature", 22.5)
            .build();

        assert_eq!(pack.records.len(), 1);
        assert_eq!(pack.records[0].bn.as_deref(), Some("urn:dev:sensor1:"));
        assert_eq!(pack.records[0].n.as_deref(), Some("temperature"));
        assert_eq!(pack.records[0].v, Some(22.5));
        assert!(pack.validate().is_ok());
    }

    #[test]
    fn test_relative_time_pivot() {
        assert_eq!(RELATIVE_TIME_PIVOT, (1u64 << 28) as f64);
    }
}
