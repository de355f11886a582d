//! Header normalization into the fixed field vocabulary.
//!
//! Spreadsheet exports name their columns inconsistently ("Zip Code",
//! "postcode", "ZIP"). Each raw header is canonicalized and looked up in
//! the alias table; headers the table does not know keep their canonical
//! form so unrecognized columns still pass through.

use labels_model::canonicalize;

/// Canonical header → internal field name.
const HEADER_ALIASES: &[(&str, &str)] = &[
    ("prefix", "prefix"),
    ("first name", "first_name"),
    ("firstname", "first_name"),
    ("first", "first_name"),
    ("last name", "last_name"),
    ("lastname", "last_name"),
    ("last", "last_name"),
    ("surname", "last_name"),
    ("address 1", "address1"),
    ("address1", "address1"),
    ("street", "address1"),
    ("line1", "address1"),
    ("address 2", "address2"),
    ("address2", "address2"),
    ("line2", "address2"),
    ("city", "city"),
    ("town", "city"),
    ("state", "state"),
    ("province", "state"),
    ("region", "state"),
    ("zip code", "zip"),
    ("zipcode", "zip"),
    ("postal code", "zip"),
    ("postcode", "zip"),
    ("country", "country"),
];

/// Map one raw header to its field name.
pub fn normalize_header(raw: &str) -> String {
    let canonical = canonicalize(raw);
    for (alias, field) in HEADER_ALIASES {
        if *alias == canonical {
            return (*field).to_string();
        }
    }
    canonical
}

/// Map a header row to field names, preserving length and order.
pub fn normalize_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    headers.into_iter().map(normalize_header).collect()
}
