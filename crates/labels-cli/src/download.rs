//! Sheet download: a thin HTTP wrapper over the spreadsheet export URL.
//!
//! Authentication stays delegated: when `GOOGLE_ACCESS_TOKEN` is set it is
//! sent as a bearer token, otherwise the export URL is fetched as-is
//! (sufficient for link-shared sheets). No retry policy.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use reqwest::Url;
use tracing::info;

use labels_templates::{Paths, ensure_dir, paths::SHEET_URL_ENV};

const ACCESS_TOKEN_ENV: &str = "GOOGLE_ACCESS_TOKEN";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Extract the spreadsheet id and worksheet gid from a sheet URL.
///
/// The gid usually lives in the fragment, sometimes in the query; it
/// defaults to `"0"` (the first worksheet) when absent.
pub fn extract_sheet_ids(sheet_url: &str) -> Result<(String, String)> {
    let url = Url::parse(sheet_url).with_context(|| format!("parse sheet url: {sheet_url}"))?;

    let mut segments = url
        .path_segments()
        .ok_or_else(|| anyhow!("could not extract spreadsheet id from sheet URL"))?;
    let mut spreadsheet_id = None;
    while let Some(segment) = segments.next() {
        if segment == "spreadsheets"
            && segments.next() == Some("d")
            && let Some(id) = segments.next()
        {
            spreadsheet_id = Some(id.to_string());
            break;
        }
    }
    let spreadsheet_id = spreadsheet_id
        .filter(|id| {
            !id.is_empty()
                && id
                    .chars()
                    .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
        })
        .ok_or_else(|| anyhow!("could not extract spreadsheet id from sheet URL"))?;

    let gid = [url.fragment(), url.query()]
        .into_iter()
        .flatten()
        .find_map(gid_from_pairs)
        .unwrap_or_else(|| "0".to_string());

    Ok((spreadsheet_id, gid))
}

fn gid_from_pairs(part: &str) -> Option<String> {
    part.split('&')
        .find_map(|pair| pair.strip_prefix("gid="))
        .filter(|gid| !gid.is_empty())
        .map(str::to_string)
}

/// Download the sheet export CSV for `year`.
///
/// Saves to `<raw>/<year>/mailing_list.csv` unless `out_path` is given.
pub fn download_sheet(
    year: i32,
    sheet_url: Option<&str>,
    out_path: Option<PathBuf>,
    paths: &Paths,
) -> Result<PathBuf> {
    let sheet_url = match sheet_url {
        Some(url) => url.to_string(),
        None => std::env::var(SHEET_URL_ENV)
            .map_err(|_| anyhow!("{SHEET_URL_ENV} is not set (provide --url or set it in .env)"))?,
    };
    let (spreadsheet_id, gid) = extract_sheet_ids(&sheet_url)?;
    let export_url = format!(
        "https://docs.google.com/spreadsheets/d/{spreadsheet_id}/export?format=csv&gid={gid}"
    );

    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("build http client")?;
    let mut request = client.get(&export_url);
    if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
        request = request.bearer_auth(token);
    }
    let response = request.send().context("fetch sheet export")?;
    if !response.status().is_success() {
        bail!("sheet export failed with status {}", response.status());
    }
    let body = response.bytes().context("read sheet export body")?;

    let out_path = match out_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                ensure_dir(parent).with_context(|| format!("create {}", parent.display()))?;
            }
            path
        }
        None => {
            let target_dir = paths.raw_dir(year);
            ensure_dir(&target_dir)
                .with_context(|| format!("create {}", target_dir.display()))?;
            target_dir.join("mailing_list.csv")
        }
    };
    std::fs::write(&out_path, &body)
        .with_context(|| format!("write {}", out_path.display()))?;
    info!(year, bytes = body.len(), path = %out_path.display(), "sheet downloaded");
    Ok(out_path)
}
