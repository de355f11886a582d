use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::warn;

use labels_templates::load_paths;

use labels_cli::backup::attempt_encrypted_backup;
use labels_cli::download::download_sheet;
use labels_cli::pipeline::{OUTPUT_FILE_NAME, build_labels};

use crate::cli::{BuildLabelsArgs, DownloadArgs};

pub fn run_download(args: &DownloadArgs) -> Result<()> {
    let paths = load_paths();
    let out_path = args.out.clone().map(|out| resolve_out(out, "mailing_list.csv"));
    let path = download_sheet(args.year, args.url.as_deref(), out_path, &paths)?;
    println!("Saved CSV to {}", path.display());
    attempt_encrypted_backup(Some(args.year));
    Ok(())
}

pub fn run_build_labels(args: &BuildLabelsArgs) -> Result<()> {
    let paths = load_paths();

    let in_csv = match &args.input {
        Some(input) => input.clone(),
        None => {
            let Some(year) = args.year else {
                bail!("--year is required when --input is not provided");
            };
            paths.raw_dir(year).join("mailing_list.csv")
        }
    };
    if !in_csv.exists() {
        bail!("input CSV not found at {}", in_csv.display());
    }

    if args.dry_run {
        let preview_path = std::env::temp_dir().join(OUTPUT_FILE_NAME);
        let out_path = build_labels(&in_csv, Some(preview_path), &paths)?;
        print_preview(&out_path);
        if let Err(error) = std::fs::remove_file(&out_path) {
            warn!(%error, path = %out_path.display(), "could not delete preview file");
        }
        return Ok(());
    }

    let out_csv = args.out.clone().map(|out| resolve_out(out, OUTPUT_FILE_NAME));
    let written = build_labels(&in_csv, out_csv, &paths)?;
    println!("Wrote labels CSV: {}", written.display());
    Ok(())
}

/// Treat a `.csv` argument as the target file, anything else as a directory.
fn resolve_out(out: PathBuf, file_name: &str) -> PathBuf {
    let is_csv = out
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv { out } else { out.join(file_name) }
}

/// Show the first few output lines after a dry run.
fn print_preview(path: &std::path::Path) {
    match read_first_lines(path, 6) {
        Ok(preview) => println!("{preview}"),
        Err(error) => warn!(%error, "unable to show dry-run preview"),
    }
}

fn read_first_lines(path: &std::path::Path, count: usize) -> Result<String> {
    let mut text = String::new();
    std::fs::File::open(path)
        .and_then(|mut file| file.read_to_string(&mut text))
        .with_context(|| format!("read {}", path.display()))?;
    Ok(text.lines().take(count).collect::<Vec<_>>().join("\n"))
}
