//! Identifier normalization for generated variants

use unicode_xid::UnicodeXID;

/// Rust keywords, strict and reserved, that can never name a variant or a type
const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Characters that separate words in a record name
pub fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

/// Convert a word-separated name to PascalCase.
///
/// Words are split on underscores, hyphens and whitespace; the first
/// character of each word is upper-cased and the rest kept as written, so
/// names that are already PascalCase come back unchanged. Case is never
/// lowered: `NOT_FOUND` becomes `NOTFOUND`, not `NotFound`.
pub fn pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name.split(is_separator).filter(|word| !word.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Why a string cannot be used as a Rust identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentError {
    Empty,
    InvalidStart(char),
    InvalidChar(char),
    Keyword,
}

impl std::fmt::Display for IdentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "it is empty"),
            Self::InvalidStart(c) => write!(f, "it cannot start with `{}`", c.escape_debug()),
            Self::InvalidChar(c) => write!(f, "it cannot contain `{}`", c.escape_debug()),
            Self::Keyword => write!(f, "it is a reserved keyword"),
        }
    }
}

/// Check that `ident` is a valid, non-keyword Rust identifier
pub fn check_identifier(ident: &str) -> Result<(), IdentError> {
    let mut chars = ident.chars();
    let first = chars.next().ok_or(IdentError::Empty)?;
    if !(first == '_' || first.is_xid_start()) {
        return Err(IdentError::InvalidStart(first));
    }
    if let Some(bad) = chars.find(|c| !c.is_xid_continue()) {
        return Err(IdentError::InvalidChar(bad));
    }
    if ident == "_" || KEYWORDS.contains(&ident) {
        return Err(IdentError::Keyword);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(pascal_case("bar_baz"), "BarBaz");
        assert_eq!(pascal_case("client_identifier_missing"), "ClientIdentifierMissing");
        assert_eq!(pascal_case("foo"), "Foo");
    }

    #[test]
    fn test_other_separators() {
        assert_eq!(pascal_case("over-rate limit"), "OverRateLimit");
        assert_eq!(pascal_case("__leading__and__trailing__"), "LeadingAndTrailing");
        assert_eq!(pascal_case("mfa\tnot\nenabled"), "MfaNotEnabled");
    }

    #[test]
    fn test_identity_on_pascal_case() {
        assert_eq!(pascal_case("FooBar"), "FooBar");
        assert_eq!(pascal_case("Foo"), "Foo");
        assert_eq!(pascal_case("camelCase"), "CamelCase");
    }

    #[test]
    fn test_upper_case_words_keep_their_case() {
        assert_eq!(pascal_case("NOT_FOUND"), "NOTFOUND");
        assert_eq!(pascal_case("HTTP_error"), "HTTPError");
    }

    #[test]
    fn test_only_separators() {
        assert_eq!(pascal_case(""), "");
        assert_eq!(pascal_case("_-_"), "");
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(pascal_case("élan_vital"), "ÉlanVital");
    }

    #[test]
    fn test_check_identifier() {
        assert_eq!(check_identifier("NotFound"), Ok(()));
        assert_eq!(check_identifier("_Private"), Ok(()));
        assert_eq!(check_identifier(""), Err(IdentError::Empty));
        assert_eq!(check_identifier("404NotFound"), Err(IdentError::InvalidStart('4')));
        assert_eq!(check_identifier("Not.Found"), Err(IdentError::InvalidChar('.')));
        assert_eq!(check_identifier("Self"), Err(IdentError::Keyword));
        assert_eq!(check_identifier("_"), Err(IdentError::Keyword));
    }

    proptest! {
        #[test]
        fn prop_pascal_case_is_deterministic(name in ".*") {
            prop_assert_eq!(pascal_case(&name), pascal_case(&name));
        }

        #[test]
        fn prop_pascal_case_removes_separators(name in "[a-z_ -]{0,32}") {
            prop_assert!(!pascal_case(&name).chars().any(is_separator));
        }

        #[test]
        fn prop_pascal_case_is_idempotent(name in "[a-zA-Z0-9_ -]{0,32}") {
            let once = pascal_case(&name);
            prop_assert_eq!(pascal_case(&once), once.clone());
        }

        #[test]
        fn prop_snake_words_become_valid_identifiers(words in proptest::collection::vec("[a-z][a-z0-9]{0,8}", 1..5)) {
            let name = words.join("_");
            let ident = pascal_case(&name);
            prop_assume!(ident != "Self");
            prop_assert!(check_identifier(&ident).is_ok(), "{} -> {}", name, ident);
        }
    }
}
