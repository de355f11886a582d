//! Schema compaction: padding, the UA merge, and the truncation fallback.

use labels_model::AddressRow;
use labels_transform::compact_lines;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn ua_row() -> AddressRow {
    let mut row = AddressRow::default();
    row.city = "Kharkiv".to_string();
    row.zip = "61000".to_string();
    row
}

#[test]
fn pads_short_lists_with_empty_slots() {
    let row = AddressRow::default();
    assert_eq!(
        compact_lines("DE", strings(&["a", "b", "c"]), &row),
        ["a", "b", "c", "", ""]
    );
    assert_eq!(compact_lines("DE", Vec::new(), &row), ["", "", "", "", ""]);
}

#[test]
fn compaction_is_a_no_op_besides_padding_for_five_lines() {
    let row = ua_row();
    let five = strings(&["a", "b", "c", "d", "e"]);
    assert_eq!(compact_lines("UA", five.clone(), &row), five.as_slice());
}

#[test]
fn ua_merges_city_then_zip_in_city_first_order() {
    let row = ua_row();
    let lines = strings(&[
        "Kovalenko Anna",
        "вул. Сумська 12",
        "кв. 4",
        "Kharkiv",
        "61000",
        "UKRAINE",
    ]);
    assert_eq!(
        compact_lines("UA", lines, &row),
        [
            "Kovalenko Anna",
            "вул. Сумська 12",
            "кв. 4",
            "Kharkiv 61000",
            "UKRAINE",
        ]
    );
}

#[test]
fn ua_merge_keeps_zip_first_when_zip_precedes_city() {
    let row = ua_row();
    let lines = strings(&[
        "Kovalenko Anna",
        "вул. Сумська 12",
        "кв. 4",
        "61000",
        "Kharkiv",
        "UKRAINE",
    ]);
    let compacted = compact_lines("UA", lines, &row);
    assert_eq!(compacted[3], "61000 Kharkiv");
    assert_eq!(compacted[4], "UKRAINE");
}

#[test]
fn ua_without_matching_values_falls_back_to_truncation() {
    let mut row = ua_row();
    row.city = "elsewhere".to_string();
    let lines = strings(&["1", "2", "3", "4", "5", "UKRAINE"]);
    assert_eq!(
        compact_lines("UA", lines, &row),
        ["1", "2", "3", "4", "UKRAINE"]
    );
}

#[test]
fn non_ua_overflow_keeps_first_four_and_last() {
    let row = AddressRow::default();
    let lines = strings(&["1", "2", "3", "4", "5", "6", "GERMANY"]);
    assert_eq!(
        compact_lines("DE", lines, &row),
        ["1", "2", "3", "4", "GERMANY"]
    );
}
