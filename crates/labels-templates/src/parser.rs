//! Template-file parsing strategies.
//!
//! The full grammar is YAML. `YamlTemplateParser` handles it completely;
//! `RestrictedTemplateParser` understands only the subset the shipped
//! configuration actually uses (top-level keys, a `lines:` block of quoted
//! items, an `uppercase_last_n_lines` scalar) and is the choice when the
//! full grammar is not wanted. Both produce the same `TemplateSet` for
//! files inside the restricted subset.

use std::collections::BTreeMap;

use labels_model::{AddressTemplate, LabelsError, Result, TemplateSet};

/// A parsing strategy for the address-template configuration file.
pub trait TemplateParser {
    fn parse(&self, text: &str) -> Result<TemplateSet>;
}

/// Full-grammar parser backed by `serde_yaml`.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlTemplateParser;

impl TemplateParser for YamlTemplateParser {
    fn parse(&self, text: &str) -> Result<TemplateSet> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|error| LabelsError::TemplateParse {
                message: error.to_string(),
            })?;
        let Some(mapping) = value.as_mapping() else {
            return Err(LabelsError::TemplatesNotMapping);
        };
        let mut templates = BTreeMap::new();
        for (key, entry) in mapping {
            let Some(key) = key.as_str() else {
                continue;
            };
            templates.insert(key.to_string(), template_from_value(entry));
        }
        Ok(TemplateSet::new(templates))
    }
}

/// Convert one template entry leniently.
///
/// Scalars of the wrong type degrade to the defaults (an unparseable
/// `uppercase_last_n_lines` leaves the default in force); a null or
/// non-mapping entry yields an empty template. Structural problems
/// surface at template selection, not at load time.
fn template_from_value(value: &serde_yaml::Value) -> AddressTemplate {
    let mut template = AddressTemplate::default();
    if let Some(items) = value.get("lines").and_then(serde_yaml::Value::as_sequence) {
        for item in items {
            if let Some(line) = item.as_str() {
                template.lines.push(line.to_string());
            }
        }
    }
    template.uppercase_last_n_lines = value
        .get("uppercase_last_n_lines")
        .and_then(serde_yaml::Value::as_i64);
    template
}

/// Restricted line-oriented parser.
///
/// Recognizes only:
/// - unindented `KEY:` lines opening a template entry,
/// - a `lines:` block of `- item` entries (optionally quoted),
/// - `uppercase_last_n_lines: <int>` scalars.
///
/// Any other construct is silently ignored. A malformed integer leaves the
/// uppercase default in force rather than failing.
#[derive(Debug, Default, Clone, Copy)]
pub struct RestrictedTemplateParser;

impl TemplateParser for RestrictedTemplateParser {
    fn parse(&self, text: &str) -> Result<TemplateSet> {
        let mut templates: BTreeMap<String, AddressTemplate> = BTreeMap::new();
        let mut current: Option<String> = None;
        let mut in_lines = false;

        for raw in text.lines() {
            let line = raw.trim_end();
            if line.trim().is_empty() {
                continue;
            }
            if !line.starts_with(' ') && line.ends_with(':') {
                let key = line[..line.len() - 1].to_string();
                templates.insert(key.clone(), AddressTemplate::default());
                current = Some(key);
                in_lines = false;
                continue;
            }
            let Some(key) = current.as_deref() else {
                continue;
            };
            let stripped = line.trim();
            if stripped == "lines:" {
                in_lines = true;
                continue;
            }
            if in_lines && let Some(item) = stripped.strip_prefix("- ") {
                let item = unquote(item.trim());
                if let Some(template) = templates.get_mut(key) {
                    template.lines.push(item.to_string());
                }
                continue;
            }
            if let Some(value) = stripped.strip_prefix("uppercase_last_n_lines:")
                && let Ok(count) = value.trim().parse::<i64>()
                && let Some(template) = templates.get_mut(key)
            {
                template.uppercase_last_n_lines = Some(count);
            }
        }
        Ok(TemplateSet::new(templates))
    }
}

fn unquote(item: &str) -> &str {
    let bytes = item.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &item[1..item.len() - 1];
        }
    }
    item
}
