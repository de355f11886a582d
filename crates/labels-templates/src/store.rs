use std::path::Path;

use tracing::debug;

use labels_model::{LabelsError, Result, TemplateSet};

use crate::parser::TemplateParser;

/// Load the address templates from `path` using the given parsing strategy.
pub fn load_templates(path: &Path, parser: &dyn TemplateParser) -> Result<TemplateSet> {
    let text = std::fs::read_to_string(path).map_err(|source| LabelsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parser.parse(&text)?;
    debug!(path = %path.display(), template_count = set.templates.len(), "templates loaded");
    Ok(set)
}
