use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("address templates file must be a mapping")]
    TemplatesNotMapping,

    #[error("failed to parse address templates: {message}")]
    TemplateParse { message: String },

    #[error("address template missing 'lines'")]
    TemplateMissingLines,

    #[error("input CSV is empty: {path}")]
    EmptyInput { path: PathBuf },

    #[error("cannot infer year from input path {path}; provide an output path")]
    YearInference { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, LabelsError>;
