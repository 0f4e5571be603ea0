//! Splitting a free-text personal name into vCard name parts.
//!
//! This is a heuristic over space-separated tokens, not a name parser in any
//! linguistic sense.

/// Family name slot of a [`ParsedName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilyName {
    /// Names with up to three tokens.
    Single(String),
    /// Names with more than three tokens keep every token after the
    /// additional name, unjoined.
    Remainder(Vec<String>),
}

impl FamilyName {
    pub fn is_empty(&self) -> bool {
        match self {
            FamilyName::Single(s) => s.is_empty(),
            FamilyName::Remainder(tokens) => tokens.is_empty(),
        }
    }

    /// Literal value for `vcard:familyName`. Remainder tokens are joined with
    /// single spaces.
    pub fn literal_value(&self) -> String {
        match self {
            FamilyName::Single(s) => s.clone(),
            FamilyName::Remainder(tokens) => tokens.join(" "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub given_name: String,
    pub additional_name: String,
    pub family_name: FamilyName,
}

/// Splits `name` on single spaces.
///
/// | tokens | given | additional | family |
/// |--------|-------|------------|--------|
/// | 1      | `""`  | `""`       | t0     |
/// | 2      | t0    | `""`       | t1     |
/// | 3      | t0    | t1         | t2     |
/// | >3     | t0    | t1         | t2..   |
///
/// Returns `None` for an empty string. Consecutive spaces produce empty
/// tokens, which count towards the total.
pub fn parse_name(name: &str) -> Option<ParsedName> {
    if name.is_empty() {
        return None;
    }

    let parts: Vec<&str> = name.split(' ').collect();
    let parsed = match parts.as_slice() {
        [family] => ParsedName {
            given_name: String::new(),
            additional_name: String::new(),
            family_name: FamilyName::Single(family.to_string()),
        },
        [given, family] => ParsedName {
            given_name: given.to_string(),
            additional_name: String::new(),
            family_name: FamilyName::Single(family.to_string()),
        },
        [given, additional, family] => ParsedName {
            given_name: given.to_string(),
            additional_name: additional.to_string(),
            family_name: FamilyName::Single(family.to_string()),
        },
        [given, additional, rest @ ..] => ParsedName {
            given_name: given.to_string(),
            additional_name: additional.to_string(),
            family_name: FamilyName::Remainder(rest.iter().map(|s| s.to_string()).collect()),
        },
        // split always yields at least one item
        [] => return None,
    };
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_name(""), None);
    }

    #[test]
    fn test_parse_single_token() {
        let parsed = parse_name("Smith").unwrap();
        assert_eq!(parsed.given_name, "");
        assert_eq!(parsed.additional_name, "");
        assert_eq!(parsed.family_name, FamilyName::Single("Smith".to_string()));
    }

    #[test]
    fn test_parse_two_tokens() {
        let parsed = parse_name("Jane Smith").unwrap();
        assert_eq!(parsed.given_name, "Jane");
        assert_eq!(parsed.additional_name, "");
        assert_eq!(parsed.family_name, FamilyName::Single("Smith".to_string()));
    }

    #[test]
    fn test_parse_three_tokens() {
        let parsed = parse_name("Jane Q Smith").unwrap();
        assert_eq!(parsed.given_name, "Jane");
        assert_eq!(parsed.additional_name, "Q");
        assert_eq!(parsed.family_name, FamilyName::Single("Smith".to_string()));
    }

    #[test]
    fn test_parse_more_than_three_tokens_keeps_remainder() {
        let parsed = parse_name("Maria de la Cruz").unwrap();
        assert_eq!(parsed.given_name, "Maria");
        assert_eq!(parsed.additional_name, "de");
        assert_eq!(
            parsed.family_name,
            FamilyName::Remainder(vec!["la".to_string(), "Cruz".to_string()])
        );
        assert_eq!(parsed.family_name.literal_value(), "la Cruz");
    }

    #[test]
    fn test_parse_double_space_yields_empty_token() {
        let parsed = parse_name("Jane  Smith").unwrap();
        assert_eq!(parsed.given_name, "Jane");
        assert_eq!(parsed.additional_name, "");
        assert_eq!(parsed.family_name, FamilyName::Single("Smith".to_string()));
    }

    #[test]
    fn test_parse_trailing_space_yields_empty_family() {
        let parsed = parse_name("Smith ").unwrap();
        assert_eq!(parsed.given_name, "Smith");
        assert!(parsed.family_name.is_empty());
    }
}
