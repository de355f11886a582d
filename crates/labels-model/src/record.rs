/// Result of mapping free-text country input to a canonical code.
///
/// When no code could be determined, `code` and `display_name` both hold
/// the raw input text verbatim (possibly empty) so unknown countries pass
/// through consistently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryResolution {
    pub code: String,
    pub display_name: String,
}

impl CountryResolution {
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }

    /// Passthrough resolution for text no tier recognized.
    pub fn passthrough(raw: &str) -> Self {
        Self::new(raw, raw)
    }
}

/// Column header of the output CSV, in order.
pub const LABEL_HEADER: [&str; 9] = [
    "Prefix",
    "FirstName",
    "LastName",
    "Country",
    "Line1",
    "Line2",
    "Line3",
    "Line4",
    "Line5",
];

/// One print-ready label: the fixed 9-column output schema.
///
/// `country` holds the display name, never the short code. The five line
/// slots are always present; unused trailing slots are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelRecord {
    pub prefix: String,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub lines: [String; 5],
}

impl LabelRecord {
    /// Field values in output column order.
    pub fn fields(&self) -> [&str; 9] {
        [
            &self.prefix,
            &self.first_name,
            &self.last_name,
            &self.country,
            &self.lines[0],
            &self.lines[1],
            &self.lines[2],
            &self.lines[3],
            &self.lines[4],
        ]
    }
}
