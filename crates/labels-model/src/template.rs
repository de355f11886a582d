use std::collections::BTreeMap;

/// Default number of trailing lines to uppercase when a template does not
/// say otherwise (the country line).
pub const DEFAULT_UPPERCASE_LAST_N: i64 = 1;

/// Key under which the fallback template is stored.
pub const DEFAULT_TEMPLATE_KEY: &str = "default";

/// Per-country address layout: ordered line patterns with `{field}`
/// placeholders plus an uppercasing preference for the trailing lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressTemplate {
    pub lines: Vec<String>,
    pub uppercase_last_n_lines: Option<i64>,
}

impl AddressTemplate {
    /// Trailing-line uppercase count, applying the default when absent.
    pub fn uppercase_count(&self) -> i64 {
        self.uppercase_last_n_lines
            .unwrap_or(DEFAULT_UPPERCASE_LAST_N)
    }
}

/// Loaded template mapping, keyed by country code or `default`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    pub templates: BTreeMap<String, AddressTemplate>,
}

impl TemplateSet {
    pub fn new(templates: BTreeMap<String, AddressTemplate>) -> Self {
        Self { templates }
    }

    /// Look up a country code, falling back to the `default` entry.
    pub fn select(&self, code: &str) -> Option<&AddressTemplate> {
        self.templates
            .get(code)
            .or_else(|| self.templates.get(DEFAULT_TEMPLATE_KEY))
    }
}
