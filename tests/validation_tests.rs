//! Validation tests over whole packs

use senml::{PackValidator, SenMLBuilder, SenMLPack, SenMLRecord, Validate, ValidationError};

fn record(f: impl FnOnce(&mut SenMLRecord)) -> SenMLRecord {
    let mut record = SenMLRecord::default();
    f(&mut record);
    record
}

#[test]
fn test_reference_pack_is_valid() {
    let pack = SenMLPack::from(vec![
        record(|r| {
            r.bn = Some("dev123".into());
            r.bt = Some(-45.67);
            r.bu = Some("degC".into());
            r.bver = Some(5);
            r.n = Some("temp".into());
            r.u = Some("degC".into());
            r.t = Some(-1.0);
            r.ut = Some(10.0);
            r.v = Some(22.1);
            r.s = Some(0.0);
        }),
        SenMLRecord::with_string_value("room", "kitchen").with_time(-1.0),
        record(|r| {
            r.n = Some("data".into());
            r.vd = Some("abc".into());
        }),
        SenMLRecord::with_bool_value("ok", true),
    ]);

    assert_eq!(pack.validate(), Ok(()));
}

#[test]
fn test_too_many_values() {
    let pack = SenMLPack::from(vec![record(|r| {
        r.n = Some("dev".into());
        r.v = Some(1.0);
        r.vs = Some("on".into());
    })]);

    assert_eq!(
        pack.validate(),
        Err(ValidationError::TooManyValues { index: 0 })
    );
}

#[test]
fn test_version_drift() {
    let pack = SenMLPack::from(vec![
        SenMLRecord::with_value("a", 1.0),
        SenMLRecord::with_value("b", 1.0).with_base_version(5),
    ]);

    assert_eq!(
        pack.validate(),
        Err(ValidationError::VersionMismatch {
            index: 1,
            expected: 10,
            found: 5
        })
    );
}

#[test]
fn test_records_without_version_are_compatible() {
    let pack = SenMLPack::from(vec![
        SenMLRecord::with_value("a", 1.0).with_base_version(5),
        SenMLRecord::with_value("b", 1.0),
        SenMLRecord::with_value("c", 1.0).with_base_version(5),
    ]);
    assert!(pack.validate().is_ok());
}

#[test]
fn test_empty_name() {
    let pack = SenMLPack::from(vec![record(|r| r.v = Some(1.0))]);
    assert_eq!(
        pack.validate(),
        Err(ValidationError::EmptyName { index: 0 })
    );
}

#[test]
fn test_invalid_name_reports_resolved_name() {
    let pack = SenMLPack::from(vec![
        SenMLRecord::with_value("ok", 1.0),
        SenMLRecord::with_value("temp", 1.0).with_base_name("bad name/"),
    ]);

    assert_eq!(
        pack.validate(),
        Err(ValidationError::InvalidNameFormat {
            index: 1,
            name: "bad name/temp".into()
        })
    );
}

#[test]
fn test_sum_with_non_float_value() {
    let pack = SenMLPack::from(vec![
        SenMLRecord::with_bool_value("door", true).with_sum(1.0),
    ]);
    assert_eq!(
        pack.validate(),
        Err(ValidationError::SumWithNonFloatValue { index: 0 })
    );
}

#[test]
fn test_no_value_or_sum() {
    let pack = SenMLPack::from(vec![
        SenMLRecord::with_value("a", 1.0),
        record(|r| r.n = Some("b".into())),
    ]);
    assert_eq!(
        pack.validate(),
        Err(ValidationError::NoValueOrSum { index: 1 })
    );
}

#[test]
fn test_sum_alone_is_a_value() {
    let pack = SenMLBuilder::new().add_sum("energy", 1024.0, 0.0).build();
    assert!(pack.validate().is_ok());
}

#[test]
fn test_stops_at_first_violation() {
    let pack = SenMLPack::from(vec![
        record(|r| r.n = Some("no-value".into())),
        record(|r| r.v = Some(1.0)),
    ]);

    let err = pack.validate().unwrap_err();
    assert_eq!(err.index(), Some(0));
}

#[test]
fn test_validation_does_not_mutate() {
    let pack = SenMLBuilder::new()
        .base_name("dev/")
        .base_time(1_600_000_000.0)
        .add_value("temp", 1.0)
        .build();
    let before = pack.clone();

    pack.validate().unwrap();
    assert_eq!(pack, before);
}

#[test]
fn test_empty_pack_policy() {
    let pack = SenMLPack::new();
    assert!(pack.validate().is_ok());
    assert_eq!(
        PackValidator::new().allow_empty(false).validate_pack(&pack),
        Err(ValidationError::EmptyPack)
    );
}

#[test]
fn test_registered_units_policy() {
    let pack = SenMLPack::from(vec![
        SenMLRecord::with_value("temp", 21.0).with_unit("Cel"),
        SenMLRecord::with_value("temp", 70.0).with_unit("degF"),
    ]);

    assert!(pack.validate().is_ok());
    assert_eq!(
        PackValidator::new()
            .registered_units_only(true)
            .validate_pack(&pack),
        Err(ValidationError::UnregisteredUnit {
            index: 1,
            unit: "degF".into()
        })
    );
}

#[test]
fn test_validate_trait_object() {
    let pack = SenMLPack::from(vec![SenMLRecord::with_value("a", 1.0)]);
    let item: &dyn Validate = &pack;
    assert!(item.validate().is_ok());
}
