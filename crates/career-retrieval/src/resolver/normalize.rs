//! Query text normalization shared by matching and intent classification.

/// Case-fold, drop apostrophes, turn other punctuation into separators,
/// collapse whitespace.
///
/// `"What's a BI-Engineer?"` becomes `"whats a bi engineer"`.
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\'' | '\u{2019}' | '`') {
            continue;
        }
        if c.is_alphanumeric() {
            folded.extend(c.to_lowercase());
        } else {
            folded.push(' ');
        }
    }
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tokens of already normalized text.
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_becomes_separator() {
        assert_eq!(normalize("What's a BI-Engineer?"), "whats a bi engineer");
        assert_eq!(normalize("  SQL,\tPython;;  "), "sql python");
    }

    #[test]
    fn punctuation_only_is_empty() {
        assert_eq!(normalize("?!... --"), "");
        assert!(tokens(&normalize("   ")).is_empty());
    }

    #[test]
    fn unicode_is_case_folded() {
        assert_eq!(normalize("ÉTUDE Données"), "étude données");
    }
}
