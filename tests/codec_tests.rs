//! Cross-format codec tests
//!
//! Resolved packs must survive every format that keeps field optionality.
//! CSV is checked separately because it always resolves before writing.

use proptest::prelude::*;
use senml::codec::{self, Format, Options};
use senml::media_type;
use senml::{FixedClock, SenMLError, SenMLPack, SenMLRecord, ValidationError};

const NOW: f64 = 1_700_000_000.0;

fn resolved_pack() -> SenMLPack {
    SenMLPack::from(vec![
        SenMLRecord::with_value("urn:dev:ow:10e2073a01080063:temp", 23.1)
            .with_unit("Cel")
            .with_time(1_276_020_076.305)
            .with_update_time(60.0),
        SenMLRecord::with_value("urn:dev:ow:10e2073a01080063:zero", 0.0)
            .with_time(1_276_020_077.0),
        SenMLRecord::with_value("urn:dev:ow:10e2073a01080063:energy", 12.5)
            .with_sum(1024.0)
            .with_time(1_276_020_078.0),
        SenMLRecord::with_string_value("urn:dev:ow:10e2073a01080063:room", "kitchen")
            .with_time(1_276_020_079.0),
        SenMLRecord::with_bool_value("urn:dev:ow:10e2073a01080063:door", false)
            .with_time(1_276_020_080.0),
        SenMLRecord::with_data_value("urn:dev:ow:10e2073a01080063:blob", &[0x00, 0xfb, 0xff])
            .with_time(1_276_020_081.0),
        SenMLRecord::with_value("urn:dev:ow:10e2073a01080063:offset", -4.25)
            .with_time(1_276_020_082.0),
    ])
}

#[test]
fn test_resolved_pack_roundtrips() {
    let pack = resolved_pack();
    pack.validate().unwrap();

    for format in [Format::Json, Format::Cbor, Format::Xml] {
        for pretty in [false, true] {
            let options = Options::new().pretty(pretty);
            let bytes = codec::encode(format, &pack, &options).unwrap();
            let decoded = codec::decode(format, &bytes, &options).unwrap();
            assert_eq!(decoded, pack, "{format} (pretty: {pretty})");
        }
    }
}

#[test]
fn test_base_fields_roundtrip_unresolved() {
    let pack = SenMLPack::from(vec![
        SenMLRecord::with_value("temp", 21.0)
            .with_base_name("dev123/")
            .with_base_time(1_600_000_000.0)
            .with_base_unit("Cel")
            .with_base_value(0.5)
            .with_base_sum(0.0)
            .with_base_version(10),
        SenMLRecord::with_value("temp", 22.0).with_time(10.0),
    ]);

    for format in [Format::Json, Format::Cbor, Format::Xml] {
        let bytes = codec::encode(format, &pack, &Options::default()).unwrap();
        let decoded = codec::decode(format, &bytes, &Options::default()).unwrap();
        assert_eq!(decoded, pack, "{format}");
    }
}

#[test]
fn test_csv_is_resolved_on_encode() {
    let pack = SenMLPack::from(vec![
        SenMLRecord::with_value("temp", 21.0)
            .with_base_name("dev123/")
            .with_base_time(1_600_000_000.0)
            .with_base_unit("Cel")
            .with_base_value(0.5),
        SenMLRecord::with_value("temp", 22.0).with_time(10.0),
    ]);

    let bytes =
        senml::csv::encode_with_clock(&pack, &Options::new().csv_header(true), &FixedClock(NOW))
            .unwrap();
    assert_eq!(
        String::from_utf8(bytes.clone()).unwrap(),
        "Time,Update Time,Name,Unit,Value,String Value,Boolean Value,Data Value,Sum\n\
         1600000000,,dev123/temp,Cel,21.5,,,,\n\
         1600000010,,dev123/temp,Cel,22.5,,,,\n"
    );

    let decoded = codec::decode(Format::Csv, &bytes, &Options::new().csv_header(true)).unwrap();
    assert_eq!(decoded, pack.normalized_with(&FixedClock(NOW)));
}

#[test]
fn test_csv_header_required_when_enabled() {
    let rows = b"1600000000,,dev123/temp,Cel,21.5,,,,\n";
    let err = codec::decode(Format::Csv, rows, &Options::new().csv_header(true)).unwrap_err();
    assert!(matches!(err, SenMLError::UnexpectedCsvHeader { .. }));

    let pack = codec::decode(Format::Csv, rows, &Options::default()).unwrap();
    assert_eq!(pack.records[0].v, Some(21.5));
}

#[test]
fn test_media_type_dispatch() {
    let pack = resolved_pack();

    let json = codec::encode_media_type(media_type::SENML_JSON, &pack, &Options::default())
        .unwrap();
    assert_eq!(json, pack.to_json().unwrap().into_bytes());

    let cbor = codec::encode_media_type(media_type::SENSML_CBOR, &pack, &Options::default())
        .unwrap();
    assert_eq!(cbor, pack.to_cbor().unwrap());

    let decoded = codec::decode_media_type(
        "application/senml+cbor; charset=binary",
        &cbor,
        &Options::default(),
    )
    .unwrap();
    assert_eq!(decoded, pack);

    assert!(matches!(
        codec::decode_media_type(media_type::SENML_EXI, &cbor, &Options::default()),
        Err(SenMLError::UnsupportedMediaType { .. })
    ));
}

#[test]
fn test_content_format_dispatch() {
    let pack = resolved_pack();
    for format in [Format::Json, Format::Cbor, Format::Xml] {
        let id = format.content_format().unwrap();
        assert_eq!(Format::from_content_format(id), Some(format));

        let bytes = codec::encode(format, &pack, &Options::default()).unwrap();
        assert_eq!(Format::from_media_type(format.media_type()), Some(format));
        assert_eq!(
            codec::decode(format, &bytes, &Options::default()).unwrap(),
            pack
        );
    }
}

#[test]
fn test_decode_validated_rejects_invalid_pack() {
    let json = br#"[{"n":"dev","v":1,"vs":"on"}]"#;

    assert!(codec::decode(Format::Json, json, &Options::default()).is_ok());

    let err = codec::decode_validated(Format::Json, json, &Options::default()).unwrap_err();
    assert_eq!(
        err.as_validation(),
        Some(&ValidationError::TooManyValues { index: 0 })
    );
}

#[test]
fn test_rfc_example_decodes() {
    let json = r#"[
        {"bn":"urn:dev:ow:10e2073a01080063:","bt":1.320067464e+09,"bu":"%RH","v":20},
        {"u":"lon","v":24.30621},
        {"u":"lat","v":50.747459},
        {"n":"temp","u":"Cel","v":23.1},
        {"t":60,"v":20.3}
    ]"#;

    let pack = SenMLPack::from_json(json).unwrap();
    pack.validate().unwrap();

    let resolved = pack.normalized_with(&FixedClock(NOW));
    assert_eq!(
        resolved.records[3].n.as_deref(),
        Some("urn:dev:ow:10e2073a01080063:temp")
    );
    assert_eq!(resolved.records[4].t, Some(1_320_067_524.0));
    assert_eq!(resolved.records[4].u.as_deref(), Some("%RH"));
}

proptest! {
    /// Decoders reject garbage with an error, never a panic.
    #[test]
    fn decoders_never_panic(data: Vec<u8>) {
        for format in Format::ALL {
            let _ = codec::decode(format, &data, &Options::default());
            let _ = codec::decode(format, &data, &Options::new().csv_header(true));
        }
    }

    /// Arbitrary JSON-ish text never panics the decode, validate, normalize chain.
    #[test]
    fn json_pipeline_never_panics(text in r#"\[(\{("n"|"bn"|"v"|"bv"|"t"|"bt"|"vs"|"bver"):("[a-z]{0,4}"|-?[0-9]{1,10}|true)\},?){0,6}\]"#) {
        if let Ok(mut pack) = SenMLPack::from_json(&text) {
            if pack.validate().is_ok() {
                pack.normalize_with(&FixedClock(NOW));
            }
        }
    }
}
