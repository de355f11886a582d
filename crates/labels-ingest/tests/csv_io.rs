//! Integration tests for mailing-list reading and label writing.

use std::fs;

use labels_ingest::{read_mailing_list, write_labels};
use labels_model::{LabelRecord, LabelsError};

#[test]
fn reads_rows_with_normalized_headers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mailing_list.csv");
    fs::write(
        &path,
        "Prefix,First Name,Last Name,Address 1,City,Zip Code,Country\n\
         Fam.,Frank,Prager,Satower Str. 26,Stäbelow,18198,Germany\n\
         , Brian ,Vary,5669 W. 6th St.,Los Angeles,90036,\n",
    )
    .unwrap();

    let rows = read_mailing_list(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].first_name, "Frank");
    assert_eq!(rows[0].zip, "18198");
    assert_eq!(rows[0].country, "Germany");
    // cells are trimmed
    assert_eq!(rows[1].first_name, "Brian");
    assert_eq!(rows[1].country, "");
}

#[test]
fn unrecognized_columns_land_in_extras() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mailing_list.csv");
    fs::write(
        &path,
        "First Name,City,E-Mail Address\nAnna,Kyiv,anna@example.com\n",
    )
    .unwrap();

    let rows = read_mailing_list(&path).unwrap();
    assert_eq!(
        rows[0].extras.get("e mail address").map(String::as_str),
        Some("anna@example.com")
    );
}

#[test]
fn short_rows_leave_fields_empty_and_long_rows_are_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mailing_list.csv");
    fs::write(
        &path,
        "First Name,Last Name,City\nGuillaume\nAnna,Kovalenko,Kyiv,EXTRA\n",
    )
    .unwrap();

    let rows = read_mailing_list(&path).unwrap();
    assert_eq!(rows[0].first_name, "Guillaume");
    assert_eq!(rows[0].city, "");
    assert_eq!(rows[1].city, "Kyiv");
    assert!(rows[1].extras.is_empty());
}

#[test]
fn empty_file_is_an_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();

    let error = read_mailing_list(&path).unwrap_err();
    assert!(matches!(
        error.downcast_ref::<LabelsError>(),
        Some(LabelsError::EmptyInput { .. })
    ));
}

#[test]
fn writes_fixed_header_and_five_line_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels.csv");
    let record = LabelRecord {
        prefix: String::new(),
        first_name: "Guillaume".to_string(),
        last_name: "Martin".to_string(),
        country: "France".to_string(),
        lines: [
            "Guillaume Martin".to_string(),
            "919 Chemin de Bigau".to_string(),
            "13210 Saint Rémy de Provence".to_string(),
            "France".to_string(),
            String::new(),
        ],
    };
    write_labels(&path, &[record]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Prefix,FirstName,LastName,Country,Line1,Line2,Line3,Line4,Line5"
    );
    let data = lines.next().unwrap();
    assert!(data.contains(",France,"));
    assert!(data.ends_with(','));
}
