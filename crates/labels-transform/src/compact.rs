//! Reduce a rendered line list to the fixed five output slots.

use labels_model::AddressRow;

const SLOT_COUNT: usize = 5;

/// Compact `lines` to exactly five slots.
///
/// Five or fewer lines are padded with empty strings. For longer lists a
/// Ukraine-specific pass first merges the city and zip lines into one
/// (their template splits them, which is what overflows the schema); any
/// remaining overflow keeps the first four lines plus the last, on the
/// assumption the last line is the country and must survive for postal
/// routing. Other countries' templates are not known to overflow; they
/// get only the generic truncation.
pub fn compact_lines(code: &str, mut lines: Vec<String>, row: &AddressRow) -> [String; 5] {
    if lines.len() > SLOT_COUNT {
        if code == "UA" {
            merge_city_zip(&mut lines, row);
        }
        if lines.len() > SLOT_COUNT {
            let last = lines.pop().unwrap_or_default();
            lines.truncate(SLOT_COUNT - 1);
            lines.push(last);
        }
    }
    let mut slots = lines.into_iter();
    std::array::from_fn(|_| slots.next().unwrap_or_default())
}

/// Merge the lines matching the row's city and zip values, by value match
/// rather than template knowledge, into one line at the earlier position.
fn merge_city_zip(lines: &mut Vec<String>, row: &AddressRow) {
    let city = row.city.trim();
    let zip = row.zip.trim();
    let city_idx = lines.iter().position(|line| line.as_str() == city);
    let zip_idx = lines.iter().position(|line| line.as_str() == zip);
    let (Some(city_idx), Some(zip_idx)) = (city_idx, zip_idx) else {
        return;
    };
    if city_idx == zip_idx {
        return;
    }
    let merged = if city_idx < zip_idx {
        format!("{city} {zip}")
    } else {
        format!("{zip} {city}")
    };
    let merged = merged.trim().to_string();
    let first_idx = city_idx.min(zip_idx);
    let second_idx = city_idx.max(zip_idx);
    lines.remove(second_idx);
    lines.remove(first_idx);
    lines.insert(first_idx, merged);
}
