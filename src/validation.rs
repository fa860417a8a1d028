//! Validation support for SenML data according to RFC 8428
//!
//! The core checks run over the pack in order, carrying the active base name
//! and the version fixed for the pack. Validation never mutates the pack and
//! stops at the first violation.

use crate::error::ValidationError;
use crate::{DEFAULT_BASE_VERSION, SenMLPack, SenMLRecord, units};

/// Trait for validating SenML data structures
pub trait Validate {
    /// Validate this item according to RFC 8428 rules
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for SenMLPack {
    fn validate(&self) -> Result<(), ValidationError> {
        PackValidator::default().validate_pack(self)
    }
}

impl SenMLPack {
    /// Validate this pack according to RFC 8428
    pub fn validate(&self) -> Result<(), ValidationError> {
        Validate::validate(self)
    }
}

/// Check if a string is a valid resolved SenML name
///
/// Names must start with an ASCII letter or digit and may continue with
/// letters, digits and `- : . / _`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.' | '/' | '_'))
        }
        _ => false,
    }
}

/// Validation settings for SenML packs
#[derive(Debug, Clone)]
pub struct PackValidator {
    /// Whether to allow empty packs (default: true)
    pub allow_empty: bool,
    /// Reject units missing from the SenML units registry (default: false)
    pub registered_units_only: bool,
}

impl Default for PackValidator {
    fn default() -> Self {
        Self {
            allow_empty: true,
            registered_units_only: false,
        }
    }
}

impl PackValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    pub fn registered_units_only(mut self, strict: bool) -> Self {
        self.registered_units_only = strict;
        self
    }

    /// Validate a SenML pack with these settings
    pub fn validate_pack(&self, pack: &SenMLPack) -> Result<(), ValidationError> {
        if !self.allow_empty && pack.is_empty() {
            return Err(ValidationError::EmptyPack);
        }

        let mut state = ValidationState::default();
        for (index, record) in pack.iter().enumerate() {
            if let Err(err) = self.validate_record(&mut state, index, record) {
                tracing::debug!(index, error = %err, "pack rejected");
                return Err(err);
            }
        }
        Ok(())
    }

    fn validate_record(
        &self,
        state: &mut ValidationState,
        index: usize,
        record: &SenMLRecord,
    ) -> Result<(), ValidationError> {
        state.check_version(index, record)?;
        state.check_name(index, record)?;
        check_values(index, record)?;
        if self.registered_units_only {
            state.check_unit(index, record)?;
        }
        Ok(())
    }
}

/// Running state of a validation pass
#[derive(Debug, Default)]
struct ValidationState {
    base_name: String,
    base_unit: String,
    version: Option<i32>,
}

impl ValidationState {
    /// The first record fixes the version: its own `bver` or the default.
    /// Records without `bver` never conflict.
    fn check_version(&mut self, index: usize, record: &SenMLRecord) -> Result<(), ValidationError> {
        let Some(found) = record.bver else {
            self.version.get_or_insert(DEFAULT_BASE_VERSION);
            return Ok(());
        };

        if found < 0 {
            return Err(ValidationError::NegativeVersion {
                index,
                version: found,
            });
        }

        match self.version {
            None => self.version = Some(found),
            Some(expected) if expected != found => {
                return Err(ValidationError::VersionMismatch {
                    index,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        Ok(())
    }

    fn check_name(&mut self, index: usize, record: &SenMLRecord) -> Result<(), ValidationError> {
        if let Some(bn) = record.bn.as_deref().filter(|bn| !bn.is_empty()) {
            self.base_name = bn.to_string();
        }

        let name = record.resolved_name(&self.base_name);
        if name.is_empty() {
            return Err(ValidationError::EmptyName { index });
        }
        if !is_valid_name(&name) {
            return Err(ValidationError::InvalidNameFormat { index, name });
        }
        Ok(())
    }

    fn check_unit(&mut self, index: usize, record: &SenMLRecord) -> Result<(), ValidationError> {
        if let Some(bu) = record.bu.as_deref().filter(|bu| !bu.is_empty()) {
            self.base_unit = bu.to_string();
        }

        let unit = record
            .u
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(&self.base_unit);
        if !unit.is_empty() && !units::is_registered(unit) {
            return Err(ValidationError::UnregisteredUnit {
                index,
                unit: unit.to_string(),
            });
        }
        Ok(())
    }
}

/// Value kinds are mutually exclusive; a sum may only accompany a float value.
fn check_values(index: usize, record: &SenMLRecord) -> Result<(), ValidationError> {
    let has_float = record.v.is_some() || record.bv.is_some();
    let has_sum = record.s.is_some() || record.bs.is_some();
    let non_float = [
        record.vb.is_some(),
        record.vd.as_deref().is_some_and(|vd| !vd.is_empty()),
        record.vs.as_deref().is_some_and(|vs| !vs.is_empty()),
    ]
    .into_iter()
    .filter(|present| *present)
    .count();

    if usize::from(has_float) + non_float > 1 {
        return Err(ValidationError::TooManyValues { index });
    }
    if non_float == 1 {
        if has_sum {
            return Err(ValidationError::SumWithNonFloatValue { index });
        }
    } else if !has_float && !has_sum {
        return Err(ValidationError::NoValueOrSum { index });
    }
    Ok(())
}
