use serde::Serialize;

/// Direction of a gated scan.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ScanKind {
    Entry,
    Exit,
}
