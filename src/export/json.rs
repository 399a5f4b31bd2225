use crate::errors::AppResult;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON export.
pub fn write_json<T: Serialize + ?Sized>(data: &T, path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(data)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}
