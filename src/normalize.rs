//! SenML normalization - converting packs to resolved form
//!
//! Resolution folds the base fields of each record into the record itself and
//! carries them forward to the following records, as described in RFC 8428
//! section 4.6. Relative times are turned into absolute ones using a single
//! sample of the clock per call.
//!
//! Normalization expects a pack that has already passed validation. Feeding it
//! an invalid pack does not panic but the output is not meaningful.

use crate::clock::{Clock, SystemClock};
use crate::{DEFAULT_BASE_VERSION, RELATIVE_TIME_PIVOT, SenMLPack, SenMLRecord};

/// Base values active at a given position in a pack.
///
/// Each base field, once seen, stays active for every following record until
/// another record sets it again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseContext {
    pub name: String,
    pub time: f64,
    pub unit: String,
    pub version: Option<i32>,
    pub value: f64,
    pub sum: f64,
}

impl BaseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve one record in place and update the active base values.
    pub fn resolve(&mut self, record: &mut SenMLRecord, now: f64) {
        self.resolve_time(record, now);
        self.resolve_version(record);
        self.resolve_value(record);
        self.resolve_sum(record);
        self.resolve_unit(record);
        self.resolve_name(record);
    }

    /// Apply base time, then map times below 2^28 onto `now`.
    pub fn resolve_time(&mut self, record: &mut SenMLRecord, now: f64) {
        if let Some(bt) = record.bt.take() {
            if bt != 0.0 {
                self.time = bt;
            }
        }

        let mut time = self.time + record.t.unwrap_or(0.0);
        if time < RELATIVE_TIME_PIVOT {
            time += now;
        }
        record.t = Some(time);
    }

    /// Drop the default version, propagate any other one.
    pub fn resolve_version(&mut self, record: &mut SenMLRecord) {
        match record.bver {
            None => record.bver = self.version,
            Some(DEFAULT_BASE_VERSION) => record.bver = None,
            Some(version) => self.version = Some(version),
        }
    }

    pub fn resolve_value(&mut self, record: &mut SenMLRecord) {
        if let Some(bv) = record.bv.take() {
            self.value = bv;
        }
        if self.value != 0.0 {
            record.v = Some(record.v.unwrap_or(0.0) + self.value);
        }
    }

    pub fn resolve_sum(&mut self, record: &mut SenMLRecord) {
        if let Some(bs) = record.bs.take() {
            self.sum = bs;
        }
        if self.sum != 0.0 {
            record.s = Some(record.s.unwrap_or(0.0) + self.sum);
        }
    }

    pub fn resolve_unit(&mut self, record: &mut SenMLRecord) {
        if let Some(bu) = record.bu.take().filter(|bu| !bu.is_empty()) {
            self.unit = bu;
        }
        let has_unit = record.u.as_deref().is_some_and(|u| !u.is_empty());
        if !has_unit && !self.unit.is_empty() {
            record.u = Some(self.unit.clone());
        }
    }

    pub fn resolve_name(&mut self, record: &mut SenMLRecord) {
        if let Some(bn) = record.bn.take().filter(|bn| !bn.is_empty()) {
            self.name = bn;
        }
        if !self.name.is_empty() {
            record.n = Some(record.resolved_name(&self.name));
        }
    }
}

impl SenMLPack {
    /// Convert this pack to resolved form in place, using the system clock
    /// for relative times.
    pub fn normalize(&mut self) {
        self.normalize_with(&SystemClock);
    }

    /// Convert this pack to resolved form in place.
    ///
    /// `clock` is read once; every relative time in the pack is resolved
    /// against that same instant.
    pub fn normalize_with<C: Clock + ?Sized>(&mut self, clock: &C) {
        let now = clock.now();
        tracing::trace!(records = self.records.len(), now, "normalizing pack");

        let mut base = BaseContext::new();
        for record in self.records.iter_mut() {
            base.resolve(record, now);
        }
    }

    /// Resolved copy of this pack, using the system clock.
    pub fn normalized(&self) -> Self {
        let mut pack = self.clone();
        pack.normalize();
        pack
    }

    /// Resolved copy of this pack.
    pub fn normalized_with<C: Clock + ?Sized>(&self, clock: &C) -> Self {
        let mut pack = self.clone();
        pack.normalize_with(clock);
        pack
    }
}
