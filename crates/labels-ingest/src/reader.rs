use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use labels_model::{AddressRow, LabelsError};

use crate::headers::normalize_headers;

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a mailing-list CSV into address rows.
///
/// The first record is the header row; its columns are normalized into the
/// fixed field vocabulary and map positionally onto each data row. Cells
/// beyond the header width are dropped; short rows leave the remaining
/// fields empty. A file with no header row at all is an input error.
pub fn read_mailing_list(path: &Path) -> Result<Vec<AddressRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut records = reader.records();
    let header_record = match records.next() {
        Some(record) => record.with_context(|| format!("read header: {}", path.display()))?,
        None => {
            return Err(LabelsError::EmptyInput {
                path: path.to_path_buf(),
            }
            .into());
        }
    };
    let fields = normalize_headers(header_record.iter());

    let mut rows = Vec::new();
    for record in records {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let mut row = AddressRow::default();
        for (idx, value) in record.iter().take(fields.len()).enumerate() {
            row.set(&fields[idx], normalize_cell(value));
        }
        rows.push(row);
    }
    debug!(path = %path.display(), row_count = rows.len(), "mailing list read");
    Ok(rows)
}
