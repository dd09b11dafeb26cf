//! Tokenization shared by the indexer and the query side. Both must agree on
//! what a term is, or index lookups silently miss.

/// Splits free text into lowercase alphanumeric terms. Punctuation and
/// whitespace separate terms; accented letters are kept as-is.
pub fn tokenize(value: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    for ch in value.chars() {
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                current.push(lower);
            }
        } else if !current.is_empty() {
            terms.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        terms.push(current);
    }
    terms
}

/// Query-side variant: tokenized, deduplicated, order preserved.
pub fn query_terms(value: &str) -> Vec<String> {
    let mut terms = tokenize(value);
    let mut seen = std::collections::HashSet::new();
    terms.retain(|term| seen.insert(term.clone()));
    terms
}

#[cfg(test)]
mod tests {
    use super::{query_terms, tokenize};

    #[test]
    fn splits_on_punctuation_and_lowercases() {
        assert_eq!(
            tokenize("Guns N' Roses"),
            vec!["guns".to_string(), "n".to_string(), "roses".to_string()]
        );
        assert_eq!(tokenize("OK Computer"), vec!["ok", "computer"]);
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(tokenize("Selected Ambient Works 85"), vec![
            "selected", "ambient", "works", "85"
        ]);
    }

    #[test]
    fn empty_and_symbol_only_input_yields_no_terms() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  --- !!! ").is_empty());
    }

    #[test]
    fn query_terms_dedup() {
        assert_eq!(query_terms("blue Blue BLUE note"), vec!["blue", "note"]);
    }
}
