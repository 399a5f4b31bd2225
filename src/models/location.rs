use super::scan_kind::ScanKind;
use serde::Serialize;

/// Gate codes carried by the `Lokasi_ID` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationConvention {
    pub entry_code: i64,
    pub exit_code: i64,
}

impl Default for LocationConvention {
    fn default() -> Self {
        Self {
            entry_code: 2,
            exit_code: 1,
        }
    }
}

impl LocationConvention {
    /// Convert a gate code into a scan direction. Unknown codes yield `None`.
    pub fn kind_of(&self, code: i64) -> Option<ScanKind> {
        if code == self.entry_code {
            Some(ScanKind::Entry)
        } else if code == self.exit_code {
            Some(ScanKind::Exit)
        } else {
            None
        }
    }
}

/// How check-in/check-out were derived for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LocationMode {
    /// Entry and exit scans are told apart by gate code.
    Gated,
    /// No usable gate code: every scan is both a check-in and a check-out
    /// candidate.
    Ambiguous,
}

impl LocationMode {
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, LocationMode::Ambiguous)
    }
}
