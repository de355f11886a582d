//! Per-row orchestration: filter, resolve, render, compact, assemble.

use tracing::debug;

use labels_model::{AddressRow, LabelRecord, Result, TemplateSet};

use crate::compact::compact_lines;
use crate::country::resolve_country;
use crate::lines::build_address_lines;

/// Transform mailing-list rows into label records.
///
/// Rows with no street address and no city are skipped entirely. Failures
/// here are template errors; messy field values never fail a row.
pub fn transform_rows(rows: &[AddressRow], templates: &TemplateSet) -> Result<Vec<LabelRecord>> {
    let mut output = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for row in rows {
        if row.is_empty_address() {
            skipped += 1;
            continue;
        }
        let resolution = resolve_country(row);
        let lines = build_address_lines(row, templates, &resolution)?;
        let lines = compact_lines(&resolution.code, lines, row);
        output.push(LabelRecord {
            prefix: row.prefix.clone(),
            first_name: row.first_name.clone(),
            last_name: row.last_name.clone(),
            country: resolution.display_name,
            lines,
        });
    }
    if skipped > 0 {
        debug!(skipped, "empty rows skipped");
    }
    Ok(output)
}
