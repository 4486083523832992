//! Word-boundary-aware case conversion.
//!
//! The dispatcher derives method names through a single seam, [`casify`]:
//! a token sequence goes in, one identifier in the requested
//! [`CaseStyle`] comes out. Tokens are split into words on whitespace
//! runs and on lower-to-upper case boundaries, so `"all Applications"`
//! and `"allApplications"` produce the same words.
//!
//! Swapping in an external case-conversion library later only touches
//! this module.

use convoke_core::CaseStyle;

/// Convert a token sequence into a single identifier under `style`.
///
/// Empty tokens and repeated whitespace contribute no words.
pub fn casify(tokens: &[&str], style: CaseStyle) -> String {
    let words = split_words(tokens);
    match style {
        CaseStyle::Camel => {
            let mut out = String::new();
            for (i, word) in words.iter().enumerate() {
                if i == 0 {
                    out.push_str(word);
                } else {
                    out.push_str(&capitalize(word));
                }
            }
            out
        }
        CaseStyle::Pascal => words.iter().map(|word| capitalize(word)).collect(),
        CaseStyle::Snake => words.join("_"),
        CaseStyle::Dot => words.join("."),
    }
}

/// Split tokens into lower-cased words on whitespace and case boundaries.
fn split_words(tokens: &[&str]) -> Vec<String> {
    let mut words = Vec::new();
    for token in tokens {
        for chunk in token.split_whitespace() {
            let mut current = String::new();
            let mut prev_lower = false;
            for ch in chunk.chars() {
                if ch.is_uppercase() && prev_lower {
                    words.push(current.to_lowercase());
                    current.clear();
                }
                current.push(ch);
                prev_lower = ch.is_lowercase();
            }
            if !current.is_empty() {
                words.push(current.to_lowercase());
            }
        }
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::casify;
    use convoke_core::CaseStyle;

    #[test]
    fn camel_joins_tokens() {
        assert_eq!(casify(&["find", "all"], CaseStyle::Camel), "findAll");
    }

    #[test]
    fn pascal_capitalizes_every_word() {
        assert_eq!(casify(&["find", "all"], CaseStyle::Pascal), "FindAll");
    }

    #[test]
    fn splits_on_embedded_whitespace() {
        assert_eq!(
            casify(&["find", "all applications"], CaseStyle::Camel),
            "findAllApplications"
        );
    }

    #[test]
    fn splits_on_case_boundaries() {
        assert_eq!(
            casify(&["find", "allApplications"], CaseStyle::Snake),
            "find_all_applications"
        );
    }

    #[test]
    fn dot_lowercases_and_joins() {
        assert_eq!(
            casify(&["find", "all Applications"], CaseStyle::Dot),
            "find.all.applications"
        );
    }

    #[test]
    fn single_token_passes_through() {
        assert_eq!(casify(&["find"], CaseStyle::Camel), "find");
        assert_eq!(casify(&["find"], CaseStyle::Pascal), "Find");
    }

    #[test]
    fn empty_tokens_and_whitespace_runs_vanish() {
        assert_eq!(casify(&["", "  find   all  "], CaseStyle::Camel), "findAll");
        assert_eq!(casify(&[], CaseStyle::Snake), "");
    }
}
