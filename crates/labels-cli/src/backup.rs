//! Best-effort encrypted backup through the external `age` binary.
//!
//! Archives the raw and processed data directories into a gzipped tar,
//! encrypts it to the configured recipients, and removes the plaintext
//! archive. Every failure path degrades to a logged note; the calling
//! command never fails because a backup did not happen.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};
use flate2::Compression;
use flate2::write::GzEncoder;
use tracing::{info, warn};

use labels_templates::{ensure_dir, load_paths};

const RECIPIENT_ENV: &str = "AGE_RECIPIENT";
const RECIPIENTS_FILE_ENV: &str = "AGE_RECIPIENTS_FILE";
const BACKUPS_DIR: &str = "backups";

/// Attempt an encrypted backup of the data directories. Never fails.
pub fn attempt_encrypted_backup(year: Option<i32>) {
    let _ = dotenvy::dotenv();

    let recipient = non_empty_env(RECIPIENT_ENV);
    let recipients_file = non_empty_env(RECIPIENTS_FILE_ENV);
    if recipient.is_none() && recipients_file.is_none() {
        warn!(
            "skipping encrypted backup; set {RECIPIENT_ENV} or {RECIPIENTS_FILE_ENV} to enable"
        );
        return;
    }
    if !age_available() {
        warn!("'age' not found in PATH; skipping encrypted backup");
        return;
    }

    let paths = load_paths();
    let sources: Vec<PathBuf> = [paths.raw_base.clone(), paths.processed_base.clone()]
        .into_iter()
        .filter(|path| path.exists())
        .collect();
    if sources.is_empty() {
        return;
    }

    let backups_dir = match year {
        Some(year) => Path::new(BACKUPS_DIR).join(year.to_string()),
        None => PathBuf::from(BACKUPS_DIR),
    };
    if let Err(error) = ensure_dir(&backups_dir) {
        warn!(%error, "encrypted backup failed");
        return;
    }

    // Microsecond stamp keeps rapid consecutive invocations from colliding.
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S-%6f");
    let tmp_tar = backups_dir.join(format!("addresses-{stamp}.tgz"));
    let out_age = backups_dir.join(format!("addresses-{stamp}.tgz.age"));

    let result = run_backup(
        &sources,
        &tmp_tar,
        &out_age,
        recipient.as_deref(),
        recipients_file.as_deref(),
    );
    match result {
        Ok(()) => info!(path = %out_age.display(), "encrypted backup written"),
        Err(error) => warn!(%error, "encrypted backup failed"),
    }
    let _ = std::fs::remove_file(&tmp_tar);
}

fn run_backup(
    sources: &[PathBuf],
    tmp_tar: &Path,
    out_age: &Path,
    recipient: Option<&str>,
    recipients_file: Option<&str>,
) -> Result<()> {
    write_archive(sources, tmp_tar)?;

    let mut recipients = Vec::new();
    if let Some(recipient) = recipient {
        recipients.push(recipient.to_string());
    }
    if let Some(file) = recipients_file
        && Path::new(file).exists()
    {
        let text =
            std::fs::read_to_string(file).with_context(|| format!("read recipients: {file}"))?;
        for line in text.lines() {
            let line = line.trim();
            if !line.is_empty() {
                recipients.push(line.to_string());
            }
        }
    }
    if recipients.is_empty() {
        bail!("no usable age recipients configured");
    }

    let mut command = Command::new("age");
    for recipient in &recipients {
        command.arg("-r").arg(recipient);
    }
    let status = command
        .arg("-o")
        .arg(out_age)
        .arg(tmp_tar)
        .status()
        .context("run age")?;
    if !status.success() {
        bail!("age exited with {status}");
    }
    Ok(())
}

fn write_archive(sources: &[PathBuf], tmp_tar: &Path) -> Result<()> {
    let file = std::fs::File::create(tmp_tar)
        .with_context(|| format!("create {}", tmp_tar.display()))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for source in sources {
        let name = source
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("data");
        builder
            .append_dir_all(name, source)
            .with_context(|| format!("archive {}", source.display()))?;
    }
    builder
        .into_inner()
        .context("finish archive")?
        .finish()
        .context("finish gzip stream")?;
    Ok(())
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn age_available() -> bool {
    Command::new("age")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}
