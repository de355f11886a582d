//! Render a template's line patterns against one row.

use labels_model::{
    AddressRow, CountryResolution, LabelsError, Result, TemplateSet, collapse_whitespace,
};

/// Placeholder names the substitution context knows about.
const CONTEXT_FIELDS: [&str; 9] = [
    "prefix",
    "first_name",
    "last_name",
    "address1",
    "address2",
    "city",
    "state",
    "zip",
    "country",
];

fn context_value<'a>(row: &'a AddressRow, resolution: &'a CountryResolution, name: &str) -> &'a str {
    match name {
        "prefix" => row.prefix.trim(),
        "first_name" => row.first_name.trim(),
        "last_name" => row.last_name.trim(),
        "address1" => row.address1.trim(),
        "address2" => row.address2.trim(),
        "city" => row.city.trim(),
        "state" => row.state.trim(),
        "zip" => row.zip.trim(),
        // display name, never the raw country text
        "country" => &resolution.display_name,
        _ => "",
    }
}

/// Substitute `{name}` placeholders from the row context.
///
/// Known fields render their (possibly empty) value. A placeholder name
/// the context does not know leaves the whole pattern unformatted: the
/// line comes back exactly as written, braces and all, with no other
/// placeholder substituted either. A `{` without a closing brace is
/// ordinary text.
fn substitute(pattern: &str, row: &AddressRow, resolution: &CountryResolution) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                if !CONTEXT_FIELDS.contains(&name) {
                    return pattern.to_string();
                }
                out.push_str(context_value(row, resolution, name));
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Render the matching template for one row into non-empty address lines.
///
/// The template is selected by country code with `default` as fallback;
/// no usable template, or one whose `lines` sequence is empty, fails with
/// a validation error. Rendered lines are whitespace-collapsed, empties
/// dropped, and the configured number of trailing lines uppercased.
pub fn build_address_lines(
    row: &AddressRow,
    templates: &TemplateSet,
    resolution: &CountryResolution,
) -> Result<Vec<String>> {
    let template = templates
        .select(&resolution.code)
        .ok_or(LabelsError::TemplateMissingLines)?;
    if template.lines.is_empty() {
        return Err(LabelsError::TemplateMissingLines);
    }

    let mut out: Vec<String> = Vec::with_capacity(template.lines.len());
    for pattern in &template.lines {
        let rendered = collapse_whitespace(&substitute(pattern, row, resolution));
        if !rendered.is_empty() {
            out.push(rendered);
        }
    }

    let uppercase_last = template.uppercase_count();
    if uppercase_last > 0 && !out.is_empty() {
        let count = usize::try_from(uppercase_last)
            .unwrap_or(usize::MAX)
            .min(out.len());
        let start = out.len() - count;
        for line in &mut out[start..] {
            *line = line.to_uppercase();
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(code: &str, display: &str) -> CountryResolution {
        CountryResolution::new(code, display)
    }

    #[test]
    fn unknown_placeholder_leaves_the_whole_pattern_unformatted() {
        let mut row = AddressRow::default();
        row.city = "Kyiv".to_string();
        let rendered = substitute("{city} {unknown}", &row, &resolution("UA", "Ukraine"));
        assert_eq!(rendered, "{city} {unknown}");
    }

    #[test]
    fn known_but_empty_field_renders_empty() {
        let row = AddressRow::default();
        let rendered = substitute("{address2}", &row, &resolution("", ""));
        assert_eq!(rendered, "");
    }

    #[test]
    fn unclosed_brace_is_plain_text() {
        let row = AddressRow::default();
        let rendered = substitute("abc {city", &row, &resolution("", ""));
        assert_eq!(rendered, "abc {city");
    }
}
