//! Maps heterogeneous attendance exports onto the canonical schema
//! {`ID`, `Nama`, `Tanggal_Waktu`, `Lokasi_ID`} and drops unusable rows.

use crate::core::timestamp::parse_timestamp;
use crate::errors::{AppError, AppResult};
use crate::models::record::{AttendanceRecord, Discard, DiscardReason, RawTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalField {
    Id,
    Name,
    DateTime,
    Location,
}

impl CanonicalField {
    pub fn column_name(&self) -> &'static str {
        match self {
            CanonicalField::Id => "ID",
            CanonicalField::Name => "Nama",
            CanonicalField::DateTime => "Tanggal_Waktu",
            CanonicalField::Location => "Lokasi_ID",
        }
    }
}

/// Header spellings seen in scanner exports. Matching is exact and
/// case-sensitive on the trimmed header; new spellings go here.
pub const COLUMN_SYNONYMS: &[(&str, CanonicalField)] = &[
    ("ID", CanonicalField::Id),
    ("No.ID", CanonicalField::Id),
    ("No ID", CanonicalField::Id),
    ("No. ID", CanonicalField::Id),
    ("NIP", CanonicalField::Id),
    ("No", CanonicalField::Id),
    ("NO", CanonicalField::Id),
    ("Tanggal_Waktu", CanonicalField::DateTime),
    ("Tgl/Waktu", CanonicalField::DateTime),
    ("Tgl / Waktu", CanonicalField::DateTime),
    ("Tanggal", CanonicalField::DateTime),
    ("TANGGAL", CanonicalField::DateTime),
    ("Waktu", CanonicalField::DateTime),
    ("WAKTU", CanonicalField::DateTime),
    ("Lokasi_ID", CanonicalField::Location),
    ("Lokasi ID", CanonicalField::Location),
    ("Lokasi", CanonicalField::Location),
    ("LokasiID", CanonicalField::Location),
    ("Nama", CanonicalField::Name),
    ("Karyawan", CanonicalField::Name),
    ("KARYAWAN", CanonicalField::Name),
    ("NAMA", CanonicalField::Name),
];

/// Look up the canonical field for a raw header.
pub fn canonical_field(header: &str) -> Option<CanonicalField> {
    let h = header.trim();
    COLUMN_SYNONYMS
        .iter()
        .find(|(spelling, _)| *spelling == h)
        .map(|(_, field)| *field)
}

/// Column positions of the canonical fields in a raw table.
/// When several headers map to one field the leftmost wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub id: Option<usize>,
    pub name: usize,
    pub datetime: usize,
    pub location: Option<usize>,
}

impl ColumnMap {
    pub fn resolve(headers: &[String]) -> AppResult<Self> {
        let find = |field: CanonicalField| {
            headers
                .iter()
                .position(|h| canonical_field(h) == Some(field))
        };

        let name = find(CanonicalField::Name).ok_or(AppError::MissingColumn {
            field: CanonicalField::Name.column_name(),
        })?;
        let datetime = find(CanonicalField::DateTime).ok_or(AppError::MissingColumn {
            field: CanonicalField::DateTime.column_name(),
        })?;

        Ok(Self {
            id: find(CanonicalField::Id),
            name,
            datetime,
            location: find(CanonicalField::Location),
        })
    }
}

/// Output of the cleaning stage.
#[derive(Debug, Clone, Default)]
pub struct CleanedData {
    pub records: Vec<AttendanceRecord>,
    pub discards: Vec<Discard>,
    /// Whether the export carried a location column at all.
    pub has_location_column: bool,
}

/// Parse a gate code. Spreadsheet exports often render integers as `2.0`.
pub fn parse_location_code(raw: &str) -> Option<i64> {
    let v = raw.trim();
    if v.is_empty() {
        return None;
    }
    if let Ok(code) = v.parse::<i64>() {
        return Some(code);
    }
    v.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i64)
}

/// Clean a raw attendance table.
///
/// Fails with [`AppError::MissingColumn`] when the name or timestamp column
/// cannot be found, and with [`AppError::EmptyData`] when no row survives.
/// Rows with a blank name or an unparseable timestamp are listed in
/// [`CleanedData::discards`].
pub fn clean(table: &RawTable) -> AppResult<CleanedData> {
    let columns = ColumnMap::resolve(&table.headers)?;

    fn cell(row: &[String], idx: usize) -> &str {
        row.get(idx).map(String::as_str).unwrap_or("")
    }

    let mut out = CleanedData {
        has_location_column: columns.location.is_some(),
        ..Default::default()
    };

    for (i, row) in table.rows.iter().enumerate() {
        let row_no = i + 1;

        let name = cell(row, columns.name).trim();
        if name.is_empty() {
            out.discards.push(Discard {
                row: row_no,
                reason: DiscardReason::MissingName,
            });
            continue;
        }

        let raw_ts = cell(row, columns.datetime);
        let Some(timestamp) = parse_timestamp(raw_ts) else {
            out.discards.push(Discard {
                row: row_no,
                reason: DiscardReason::UnparseableTimestamp(raw_ts.trim().to_string()),
            });
            continue;
        };

        out.records.push(AttendanceRecord {
            name: name.to_string(),
            id: columns
                .id
                .map(|idx| cell(row, idx).trim().to_string())
                .unwrap_or_default(),
            timestamp,
            location_code: columns
                .location
                .and_then(|idx| parse_location_code(cell(row, idx))),
        });
    }

    if out.records.is_empty() {
        return Err(AppError::EmptyData {
            discarded: out.discards.len(),
        });
    }

    Ok(out)
}
