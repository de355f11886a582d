//! Integration tests for template loading.

use std::fs;

use labels_model::LabelsError;
use labels_templates::{
    RestrictedTemplateParser, TemplateParser, YamlTemplateParser, load_templates,
};

const CONFIG: &str = "\
default:
  lines:
    - \"{prefix} {first_name} {last_name}\"
    - \"{address1}\"
    - \"{address2}\"
    - \"{city} {state} {zip}\"
    - \"{country}\"
DE:
  lines:
    - \"{prefix} {first_name} {last_name}\"
    - \"{address1}\"
    - \"{zip} {city}\"
    - \"{country}\"
  uppercase_last_n_lines: 0
";

#[test]
fn loads_yaml_config_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("address_formats.yml");
    fs::write(&path, CONFIG).unwrap();

    let set = load_templates(&path, &YamlTemplateParser).unwrap();
    assert_eq!(set.templates.len(), 2);
    let de = set.select("DE").unwrap();
    assert_eq!(de.lines[2], "{zip} {city}");
    assert_eq!(de.uppercase_count(), 0);
    // unknown code falls back to default
    let fallback = set.select("PF").unwrap();
    assert_eq!(fallback.lines.len(), 5);
}

#[test]
fn restricted_parser_loads_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("address_formats.yml");
    fs::write(&path, CONFIG).unwrap();

    let yaml = load_templates(&path, &YamlTemplateParser).unwrap();
    let restricted = load_templates(&path, &RestrictedTemplateParser).unwrap();
    assert_eq!(yaml, restricted);
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yml");
    let error = load_templates(&path, &YamlTemplateParser).unwrap_err();
    assert!(matches!(error, LabelsError::Io { .. }));
}

#[test]
fn non_mapping_file_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yml");
    fs::write(&path, "just a scalar\n").unwrap();
    let error = load_templates(&path, &YamlTemplateParser).unwrap_err();
    assert!(matches!(error, LabelsError::TemplatesNotMapping));
}

#[test]
fn parser_strategy_is_object_safe() {
    let parsers: Vec<Box<dyn TemplateParser>> =
        vec![Box::new(YamlTemplateParser), Box::new(RestrictedTemplateParser)];
    for parser in &parsers {
        let set = parser.parse(CONFIG).unwrap();
        assert!(set.select("DE").is_some());
    }
}
