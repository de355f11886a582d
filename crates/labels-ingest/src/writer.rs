use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::debug;

use labels_model::{LABEL_HEADER, LabelRecord};

/// Write label records to the fixed 9-column output CSV.
pub fn write_labels(path: &Path, records: &[LabelRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create csv: {}", path.display()))?;
    writer
        .write_record(LABEL_HEADER)
        .with_context(|| format!("write header: {}", path.display()))?;
    for record in records {
        writer
            .write_record(record.fields())
            .with_context(|| format!("write record: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    debug!(path = %path.display(), record_count = records.len(), "labels written");
    Ok(())
}
