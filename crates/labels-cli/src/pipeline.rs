//! Label-building pipeline with explicit stages.
//!
//! 1. **Load**: read the address templates.
//! 2. **Ingest**: read the mailing-list CSV into rows.
//! 3. **Transform**: resolve countries, render and compact lines.
//! 4. **Output**: write the 9-column labels CSV.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use labels_ingest::{read_mailing_list, write_labels};
use labels_model::LabelsError;
use labels_templates::{Paths, YamlTemplateParser, ensure_dir, load_templates};
use labels_transform::transform_rows;

/// Default file name of the processed output.
pub const OUTPUT_FILE_NAME: &str = "labels_for_mailmerge.csv";

/// Build the labels CSV from `in_csv`.
///
/// With no explicit output the target is
/// `<processed>/<year>/labels_for_mailmerge.csv`, where the year comes
/// from the input file's parent directory name; a non-numeric parent is a
/// fatal error since the default location cannot be derived.
pub fn build_labels(in_csv: &Path, out_csv: Option<PathBuf>, paths: &Paths) -> Result<PathBuf> {
    let span = info_span!("build_labels", input = %in_csv.display());
    let _guard = span.enter();

    let templates = load_templates(&paths.templates, &YamlTemplateParser)
        .with_context(|| format!("load templates: {}", paths.templates.display()))?;
    let rows = read_mailing_list(in_csv)?;
    let records = transform_rows(&rows, &templates)?;

    let out_csv = match out_csv {
        Some(path) => {
            if let Some(parent) = path.parent() {
                ensure_dir(parent).with_context(|| format!("create {}", parent.display()))?;
            }
            path
        }
        None => {
            let year = infer_year(in_csv)?;
            let target_dir = paths.processed_dir(year);
            ensure_dir(&target_dir)
                .with_context(|| format!("create {}", target_dir.display()))?;
            target_dir.join(OUTPUT_FILE_NAME)
        }
    };

    write_labels(&out_csv, &records)?;
    info!(
        input_rows = rows.len(),
        label_count = records.len(),
        output = %out_csv.display(),
        "labels built"
    );
    Ok(out_csv)
}

/// Deduce the year from the input file's parent directory name.
fn infer_year(in_csv: &Path) -> Result<i32> {
    in_csv
        .parent()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str())
        .and_then(|name| name.parse::<i32>().ok())
        .ok_or_else(|| {
            LabelsError::YearInference {
                path: in_csv.to_path_buf(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_year_reads_the_parent_directory() {
        assert_eq!(infer_year(Path::new("data/raw/2025/mailing_list.csv")).unwrap(), 2025);
        assert!(infer_year(Path::new("data/raw/latest/mailing_list.csv")).is_err());
    }
}
