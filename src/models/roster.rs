use serde::Serialize;

/// One row of the externally maintained master data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub status: String,
    pub activity: String,
}
