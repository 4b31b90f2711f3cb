use regex::Regex;
use std::sync::LazyLock;

const GENERIC_SUFFIXES: [&str; 7] = ["jr", "sr", "ii", "iii", "iv", "v", "vi"];

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid punctuation pattern"));

/// Provider slugs to try for a free-text player name, most specific first.
///
/// "Nick Chubb Jr." yields `["nick-chubb-jr", "nick-chubb"]`.
pub fn slug_candidates(name: &str) -> Vec<String> {
    let cleaned = PUNCTUATION.replace_all(name, "").trim().to_lowercase();
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let mut candidates = Vec::new();
    if !tokens.is_empty() {
        candidates.push(tokens.join("-"));
    }

    let without_suffix: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|t| !GENERIC_SUFFIXES.contains(t))
        .collect();
    if !without_suffix.is_empty() && without_suffix.len() != tokens.len() {
        candidates.push(without_suffix.join("-"));
    }

    candidates.dedup();
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_yields_second_candidate() {
        assert_eq!(slug_candidates("Nick Chubb Jr."), vec!["nick-chubb-jr", "nick-chubb"]);
        assert_eq!(slug_candidates("Marvin Harrison Jr"), vec!["marvin-harrison-jr", "marvin-harrison"]);
    }

    #[test]
    fn test_plain_name_has_single_candidate() {
        assert_eq!(slug_candidates("  Ja'Marr   Chase "), vec!["jamarr-chase"]);
        assert_eq!(slug_candidates("Amon-Ra St. Brown"), vec!["amon-ra-st-brown"]);
    }

    #[test]
    fn test_degenerate_names() {
        assert!(slug_candidates("").is_empty());
        assert!(slug_candidates("...").is_empty());
        // a name made only of suffix tokens keeps just the primary slug
        assert_eq!(slug_candidates("V"), vec!["v"]);
    }
}
