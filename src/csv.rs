//! CSV rendering of resolved SenML packs
//!
//! CSV has no way to express base fields, so encoding always resolves a copy
//! of the pack first. Each row holds one record in a fixed column order:
//!
//! ```text
//! Time,Update Time,Name,Unit,Value,String Value,Boolean Value,Data Value,Sum
//! ```
//!
//! Empty cells stand for absent fields.

use crate::clock::{Clock, SystemClock};
use crate::codec::Options;
use crate::{Result, SenMLError, SenMLPack, SenMLRecord};

/// Header row written and expected when [`Options::csv_header`] is set
pub const CSV_HEADER: &str =
    "Time,Update Time,Name,Unit,Value,String Value,Boolean Value,Data Value,Sum";

const COLUMNS: usize = 9;

/// Resolve a copy of the pack against the system clock and write it as CSV
pub fn encode(pack: &SenMLPack, options: &Options) -> Result<Vec<u8>> {
    encode_with_clock(pack, options, &SystemClock)
}

/// Resolve a copy of the pack against `clock` and write it as CSV
pub fn encode_with_clock<C: Clock + ?Sized>(
    pack: &SenMLPack,
    options: &Options,
    clock: &C,
) -> Result<Vec<u8>> {
    let resolved = pack.normalized_with(clock);

    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    if options.csv_header {
        writer.write_record(CSV_HEADER.split(','))?;
    }
    for record in resolved.iter() {
        writer.write_record(row(record))?;
    }

    writer
        .into_inner()
        .map_err(|e| SenMLError::serialization(e.to_string()))
}

fn row(record: &SenMLRecord) -> [String; COLUMNS] {
    fn float(value: Option<f64>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    [
        float(record.t),
        float(record.ut),
        record.n.clone().unwrap_or_default(),
        record.u.clone().unwrap_or_default(),
        float(record.v),
        record.vs.clone().unwrap_or_default(),
        record.vb.map(|vb| vb.to_string()).unwrap_or_default(),
        record.vd.clone().unwrap_or_default(),
        float(record.s),
    ]
}

/// Read a pack from CSV rows
pub fn decode(bytes: &[u8], options: &Options) -> Result<SenMLPack> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut rows = reader.records();

    if options.csv_header {
        let header = rows.next().ok_or(SenMLError::MissingCsvHeader)??;
        let found = header.iter().collect::<Vec<_>>().join(",");
        if found != CSV_HEADER {
            return Err(SenMLError::UnexpectedCsvHeader { found });
        }
    }

    let mut pack = SenMLPack::new();
    for row in rows {
        pack.add_record(parse_row(&row?)?);
    }
    Ok(pack)
}

fn parse_row(row: &::csv::StringRecord) -> Result<SenMLRecord> {
    if row.len() != COLUMNS {
        return Err(SenMLError::invalid_field_value(
            "row",
            format!("expected {COLUMNS} columns, found {}", row.len()),
        ));
    }

    Ok(SenMLRecord {
        t: parse_float("t", &row[0])?,
        ut: parse_float("ut", &row[1])?,
        n: text(&row[2]),
        u: text(&row[3]),
        v: parse_float("v", &row[4])?,
        vs: text(&row[5]),
        vb: parse_bool(&row[6])?,
        vd: text(&row[7]),
        s: parse_float("s", &row[8])?,
        ..Default::default()
    })
}

fn text(cell: &str) -> Option<String> {
    (!cell.is_empty()).then(|| cell.to_string())
}

fn parse_float(field: &str, cell: &str) -> Result<Option<f64>> {
    if cell.is_empty() {
        return Ok(None);
    }
    cell.trim()
        .parse()
        .map(Some)
        .map_err(|_| SenMLError::invalid_field_value(field, cell))
}

fn parse_bool(cell: &str) -> Result<Option<bool>> {
    match cell {
        "" => Ok(None),
        "true" | "TRUE" | "True" | "1" => Ok(Some(true)),
        "false" | "FALSE" | "False" | "0" => Ok(Some(false)),
        other => Err(SenMLError::invalid_field_value("vb", other)),
    }
}

impl SenMLPack {
    /// Resolve this pack and render it as CSV rows, without a header
    pub fn to_csv(&self) -> Result<String> {
        let bytes = encode(self, &Options::default())?;
        String::from_utf8(bytes).map_err(|e| SenMLError::serialization(e.to_string()))
    }

    /// Read a pack from CSV rows without a header
    pub fn from_csv(csv: &str) -> Result<Self> {
        decode(csv.as_bytes(), &Options::default())
    }
}
