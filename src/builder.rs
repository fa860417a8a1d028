//! Fluent construction of SenML packs

use crate::{SenMLPack, SenMLRecord};

/// Builder for creating SenML packs with a fluent API
///
/// Base fields are attached to the first record of the built pack, which is
/// where RFC 8428 examples place them. A builder with base fields but no
/// records produces a single record carrying only the base fields.
#[derive(Debug, Default)]
pub struct SenMLBuilder {
    /// Pending base fields; only the `b*` fields are ever set
    base: SenMLRecord,
    records: Vec<SenMLRecord>,
}

impl SenMLBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix for the names of all records
    pub fn base_name<S: Into<String>>(mut self, name: S) -> Self {
        self.base.bn = Some(name.into());
        self
    }

    /// Time that record times are relative to
    pub fn base_time(mut self, time: f64) -> Self {
        self.base.bt = Some(time);
        self
    }

    /// Unit for records that carry none
    pub fn base_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.base.bu = Some(unit.into());
        self
    }

    /// SenML version of the pack
    pub fn base_version(mut self, version: i32) -> Self {
        self.base.bver = Some(version);
        self
    }

    /// Offset added to every numeric value
    pub fn base_value(mut self, value: f64) -> Self {
        self.base.bv = Some(value);
        self
    }

    /// Offset added to every sum
    pub fn base_sum(mut self, sum: f64) -> Self {
        self.base.bs = Some(sum);
        self
    }

    pub fn add_value<S: Into<String>>(self, name: S, value: f64) -> Self {
        self.add_record(SenMLRecord::with_value(name, value))
    }

    pub fn add_string_value<S: Into<String>, V: Into<String>>(self, name: S, value: V) -> Self {
        self.add_record(SenMLRecord::with_string_value(name, value))
    }

    pub fn add_bool_value<S: Into<String>>(self, name: S, value: bool) -> Self {
        self.add_record(SenMLRecord::with_bool_value(name, value))
    }

    /// Add a data value; `data` is stored base64url-encoded
    pub fn add_data_value<S: Into<String>>(self, name: S, data: &[u8]) -> Self {
        self.add_record(SenMLRecord::with_data_value(name, data))
    }

    /// Add a numeric value taken at `time`
    pub fn add_measurement<S: Into<String>>(self, name: S, value: f64, time: f64) -> Self {
        self.add_record(SenMLRecord::with_value(name, value).with_time(time))
    }

    /// Add a numeric value with its own unit, taken at `time`
    pub fn add_measurement_with_unit<S: Into<String>, U: Into<String>>(
        self,
        name: S,
        value: f64,
        unit: U,
        time: f64,
    ) -> Self {
        self.add_record(
            SenMLRecord::with_value(name, value)
                .with_unit(unit)
                .with_time(time),
        )
    }

    /// Add an integrated sum without a current value
    pub fn add_sum<S: Into<String>>(self, name: S, sum: f64, time: f64) -> Self {
        self.add_record(SenMLRecord {
            n: Some(name.into()),
            s: Some(sum),
            t: Some(time),
            ..Default::default()
        })
    }

    pub fn add_record(mut self, record: SenMLRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn add_records<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = SenMLRecord>,
    {
        self.records.extend(records);
        self
    }

    /// Build the SenML pack
    ///
    /// Base fields already present on the first record are kept unless the
    /// builder sets the same field.
    pub fn build(self) -> SenMLPack {
        let Self { base, mut records } = self;
        if !base.has_base_fields() && base.bver.is_none() {
            return SenMLPack::from(records);
        }

        if records.is_empty() {
            records.push(SenMLRecord::new());
        }
        let first = &mut records[0];
        first.bn = base.bn.or(first.bn.take());
        first.bt = base.bt.or(first.bt);
        first.bu = base.bu.or(first.bu.take());
        first.bver = base.bver.or(first.bver);
        first.bv = base.bv.or(first.bv);
        first.bs = base.bs.or(first.bs);

        SenMLPack::from(records)
    }
}

/// Builder for a time series of a single sensor
///
/// The sensor name becomes the base name and each measurement is a nameless
/// record holding a time offset from the base time.
#[derive(Debug)]
pub struct TimeSeriesBuilder {
    inner: SenMLBuilder,
}

impl TimeSeriesBuilder {
    pub fn new<S: Into<String>>(base_name: S, base_time: f64) -> Self {
        Self {
            inner: SenMLBuilder::new().base_name(base_name).base_time(base_time),
        }
    }

    /// Set the unit for all measurements
    pub fn unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.inner = self.inner.base_unit(unit);
        self
    }

    /// Add a measurement at a time relative to the base time
    pub fn measurement(mut self, relative_time: f64, value: f64) -> Self {
        self.inner = self.inner.add_record(SenMLRecord {
            t: Some(relative_time),
            v: Some(value),
            ..Default::default()
        });
        self
    }

    /// Add `(relative_time, value)` pairs
    pub fn measurements<I>(self, measurements: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        measurements
            .into_iter()
            .fold(self, |series, (time, value)| series.measurement(time, value))
    }

    pub fn build(self) -> SenMLPack {
        self.inner.build()
    }
}
