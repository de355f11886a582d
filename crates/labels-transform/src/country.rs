//! Country resolution for hand-entered mailing-list data.
//!
//! Resolution runs in tiers, each trading specificity for coverage: a US
//! state fallback for blank countries, a Unicode-aware alias table (the
//! list holds entries in non-Latin scripts), then canonicalized name
//! variants. Text that survives every tier passes through verbatim.

use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use labels_model::{AddressRow, CountryResolution, canonicalize};

/// US state and territory abbreviations (50 states plus DC).
const US_STATE_ABBR: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC",
];

/// Alias table keyed by NFC-composed, casefolded country text.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("ukraine", "UA"),
    ("україна", "UA"),
    ("french polynesia", "PF"),
    ("polynésie française", "PF"),
    ("polynesie francaise", "PF"),
    ("pf", "PF"),
];

fn display_name(code: &str) -> Option<&'static str> {
    match code {
        "DE" => Some("Germany"),
        "FR" => Some("France"),
        "US" => Some("United States"),
        "UA" => Some("Ukraine"),
        "PF" => Some("French Polynesia"),
        _ => None,
    }
}

fn is_us_state(state: &str) -> bool {
    US_STATE_ABBR.contains(&state)
}

/// Resolve a row's country text to `(code, display name)`.
pub fn resolve_country(row: &AddressRow) -> CountryResolution {
    let raw = row.country.trim();
    let state = row.state.trim().to_uppercase();
    if raw.is_empty() && is_us_state(&state) {
        return CountryResolution::new("US", "United States");
    }

    let alias_key: String = raw.nfc().collect::<String>().to_lowercase();
    for (alias, code) in COUNTRY_ALIASES {
        if *alias == alias_key {
            let display = display_name(code)
                .map(str::to_string)
                .unwrap_or_else(|| if raw.is_empty() { (*code).to_string() } else { raw.to_string() });
            return CountryResolution::new(*code, display);
        }
    }

    let key = canonicalize(raw);
    match key.as_str() {
        "germany" | "de" | "deutschland" => {
            return CountryResolution::new("DE", "Germany");
        }
        "france" | "fr" | "francaise" => {
            return CountryResolution::new("FR", "France");
        }
        "united states" | "usa" | "us" | "united states of america" => {
            return CountryResolution::new("US", "United States");
        }
        _ => {}
    }

    if !raw.is_empty() {
        debug!(country = %raw, "unrecognized country text, passing through");
    }
    CountryResolution::passthrough(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_abbreviation_set_has_fifty_one_entries() {
        let mut sorted = US_STATE_ABBR;
        sorted.sort_unstable();
        for window in sorted.windows(2) {
            assert_ne!(window[0], window[1]);
        }
        assert!(is_us_state("NY"));
        assert!(!is_us_state("ZZ"));
    }
}
