use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write any serializable log collection as pretty JSON.
pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> AppResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, records)
        .map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}
