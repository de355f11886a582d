//! Text canonicalization shared by header and country-name matching.

/// Canonical matching form: trimmed, lowercased, runs of anything outside
/// ASCII `a-z0-9` collapsed to a single space. Accented letters fall in
/// the collapsed class, so they act as separators rather than matchable
/// text. Idempotent.
pub fn canonicalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}

/// Collapse internal whitespace runs to single spaces and trim.
pub fn collapse_whitespace(raw: &str) -> String {
    let mut parts = raw.split_whitespace();
    let mut out = String::with_capacity(raw.len());
    if let Some(first) = parts.next() {
        out.push_str(first);
        for part in parts {
            out.push(' ');
            out.push_str(part);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_collapses_punctuation_runs() {
        assert_eq!(canonicalize("  Zip -- Code  "), "zip code");
        assert_eq!(canonicalize("First Name"), "first name");
        assert_eq!(canonicalize("FIRSTNAME"), "firstname");
        assert_eq!(canonicalize("***"), "");
    }

    #[test]
    fn canonicalize_treats_accented_letters_as_separators() {
        assert_eq!(canonicalize("Français"), "fran ais");
        assert_eq!(canonicalize("République Française"), "r publique fran aise");
        assert_eq!(canonicalize("U.S.A."), "u s a");
    }

    #[test]
    fn canonicalize_is_idempotent() {
        for raw in ["  Postal / Code ", "Äddress-1", "united   states", ""] {
            let once = canonicalize(raw);
            assert_eq!(canonicalize(&once), once);
        }
    }

    #[test]
    fn collapse_whitespace_trims_and_joins() {
        assert_eq!(collapse_whitespace("  a  \t b  "), "a b");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
