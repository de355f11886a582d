//! Data-directory layout, overridable through `.env` / the environment.

use std::path::{Path, PathBuf};

const DEFAULT_RAW_DIR: &str = "data/raw";
const DEFAULT_PROCESSED_DIR: &str = "data/processed";
const DEFAULT_TEMPLATES_PATH: &str = "config/address_formats.yml";

pub const RAW_DIR_ENV: &str = "RAW_DATA_DIR";
pub const PROCESSED_DIR_ENV: &str = "PROCESSED_DATA_DIR";
pub const TEMPLATES_ENV: &str = "ADDRESS_TEMPLATES";
pub const SHEET_URL_ENV: &str = "SHEET_URL";

/// Base locations for raw downloads, processed outputs, and the template
/// configuration file.
#[derive(Debug, Clone)]
pub struct Paths {
    pub raw_base: PathBuf,
    pub processed_base: PathBuf,
    pub templates: PathBuf,
}

impl Paths {
    pub fn raw_dir(&self, year: i32) -> PathBuf {
        self.raw_base.join(year.to_string())
    }

    pub fn processed_dir(&self, year: i32) -> PathBuf {
        self.processed_base.join(year.to_string())
    }
}

/// Load base paths from the environment, with `.env` applied first.
pub fn load_paths() -> Paths {
    // Missing .env is the normal case, not an error.
    let _ = dotenvy::dotenv();
    Paths {
        raw_base: env_path(RAW_DIR_ENV, DEFAULT_RAW_DIR),
        processed_base: env_path(PROCESSED_DIR_ENV, DEFAULT_PROCESSED_DIR),
        templates: env_path(TEMPLATES_ENV, DEFAULT_TEMPLATES_PATH),
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    std::env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

/// Create a directory and its parents if missing.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}
