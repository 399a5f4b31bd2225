//! Read-only view of the master roster used to enrich attendance rows.

use crate::errors::{AppError, AppResult};
use crate::models::record::RawTable;
use crate::models::roster::RosterEntry;
use crate::utils::formatting::{normalize_id, normalize_name};
use std::collections::HashMap;

const ID_HEADERS: &[&str] = &["ID", "NIP"];
const NAME_HEADERS: &[&str] = &["NAMA", "NAME"];
const STATUS_HEADERS: &[&str] = &["STATUS"];
const ACTIVITY_HEADERS: &[&str] = &["KEGIATAN", "ACTIVITY", "UNIT"];

#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

fn find_header(headers: &[String], accepted: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| accepted.contains(&h.trim().to_uppercase().as_str()))
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();

        for (i, e) in entries.iter().enumerate() {
            let id = normalize_id(&e.id);
            if !id.is_empty() {
                by_id.entry(id).or_insert(i);
            }
            let name = normalize_name(&e.name);
            if !name.is_empty() {
                by_name.entry(name).or_insert(i);
            }
        }

        Self {
            entries,
            by_id,
            by_name,
        }
    }

    /// Build a roster from a raw table. Header matching is trimmed and
    /// case-insensitive; the ID and name columns are required.
    pub fn from_table(table: &RawTable) -> AppResult<Self> {
        let id_col = find_header(&table.headers, ID_HEADERS)
            .ok_or_else(|| AppError::RosterFormat("'ID' or 'NIP'".into()))?;
        let name_col = find_header(&table.headers, NAME_HEADERS)
            .ok_or_else(|| AppError::RosterFormat("'NAMA' or 'NAME'".into()))?;
        let status_col = find_header(&table.headers, STATUS_HEADERS);
        let activity_col = find_header(&table.headers, ACTIVITY_HEADERS);

        let cell = |row: &[String], idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        let entries = table
            .rows
            .iter()
            .map(|row| RosterEntry {
                id: normalize_id(&cell(row, Some(id_col))),
                name: cell(row, Some(name_col)),
                status: cell(row, status_col),
                activity: cell(row, activity_col),
            })
            .filter(|e| !e.id.is_empty() || !e.name.is_empty())
            .collect();

        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the roster entry for a person: by id first, then by the
    /// upper-cased trimmed name.
    pub fn lookup(&self, id: &str, name: &str) -> Option<&RosterEntry> {
        let id = normalize_id(id);
        let idx = (!id.is_empty())
            .then(|| self.by_id.get(&id))
            .flatten()
            .or_else(|| self.by_name.get(&normalize_name(name)))?;
        self.entries.get(*idx)
    }
}
