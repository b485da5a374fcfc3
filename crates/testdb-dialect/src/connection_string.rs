//! ADO.NET-style connection strings.
//!
//! A connection string is an ordered `Key=Value;` list:
//!
//! ```text
//! Server=localhost;Database=mydb;User Id=sa;Password=secret
//! ```
//!
//! Parsing is reversible: [`Display`](std::fmt::Display) re-serializes the
//! pairs in their original order with their original key spellings, so
//! rewriting one parameter never loses, reorders or renames the others,
//! including parameters this crate knows nothing about.

use std::fmt;
use std::str::FromStr;

use crate::error::DialectError;

/// Keys naming the database parameter, compared case-insensitively.
const DATABASE_KEYS: [&str; 2] = ["database", "initial catalog"];

/// A parsed connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionString {
    pairs: Vec<(String, String)>,
}

impl ConnectionString {
    /// Look up a parameter, matching the key case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// The database this connection string points at, if any.
    ///
    /// Recognizes both the `Database` and `Initial Catalog` spellings;
    /// the first such pair wins, matching [`with_database`](Self::with_database).
    #[must_use]
    pub fn database(&self) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| DATABASE_KEYS.iter().any(|d| k.eq_ignore_ascii_case(d)))
            .map(|(_, v)| v.as_str())
    }

    /// A copy of this connection string pointing at `database`.
    ///
    /// Overwrites the first `Database`/`Initial Catalog` pair in place,
    /// keeping its key spelling and position, or appends a `Database`
    /// pair when none is present. Every other parameter is untouched, and
    /// rewriting is idempotent: applying the same name twice yields the
    /// same string.
    #[must_use]
    pub fn with_database(&self, database: &str) -> Self {
        let mut pairs = self.pairs.clone();
        let existing = pairs
            .iter_mut()
            .find(|(k, _)| DATABASE_KEYS.iter().any(|d| k.eq_ignore_ascii_case(d)));

        match existing {
            Some((_, value)) => *value = database.to_string(),
            None => pairs.push(("Database".to_string(), database.to_string())),
        }

        Self { pairs }
    }

    /// The parameters, in serialization order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl FromStr for ConnectionString {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pairs = Vec::new();

        for part in s.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (key, value) = part.split_once('=').ok_or_else(|| {
                DialectError::MalformedConnectionString(format!("invalid key-value: {part}"))
            })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(DialectError::MalformedConnectionString(format!(
                    "empty key in: {part}"
                )));
            }

            pairs.push((key.to_string(), value.trim().to_string()));
        }

        if pairs.is_empty() {
            return Err(DialectError::MalformedConnectionString(
                "no parameters".to_string(),
            ));
        }

        Ok(Self { pairs })
    }
}

impl fmt::Display for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(s: &str) -> ConnectionString {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_basic() {
        let cs = parse("Server=localhost;Database=test;User Id=sa;Password=secret;");
        assert_eq!(cs.get("server"), Some("localhost"));
        assert_eq!(cs.get("database"), Some("test"));
        assert_eq!(cs.get("user id"), Some("sa"));
        assert_eq!(cs.get("missing"), None);
    }

    #[test]
    fn test_display_preserves_order_and_spelling() {
        let cs = parse("Server=localhost;MultipleActiveResultSets=true;Database=test");
        assert_eq!(
            cs.to_string(),
            "Server=localhost;MultipleActiveResultSets=true;Database=test"
        );
    }

    #[test]
    fn test_with_database_overwrites_in_place() {
        let cs = parse("Server=localhost;Database=old;User Id=sa");
        let rewritten = cs.with_database("TestDb1");
        assert_eq!(
            rewritten.to_string(),
            "Server=localhost;Database=TestDb1;User Id=sa"
        );
    }

    #[test]
    fn test_with_database_keeps_initial_catalog_spelling() {
        let cs = parse("Server=localhost;Initial Catalog=old;User Id=sa");
        let rewritten = cs.with_database("TestDb1");
        assert_eq!(
            rewritten.to_string(),
            "Server=localhost;Initial Catalog=TestDb1;User Id=sa"
        );
        assert_eq!(rewritten.database(), Some("TestDb1"));
    }

    #[test]
    fn test_with_database_appends_when_absent() {
        let cs = parse("Server=localhost;Port=3306;User Id=root");
        let rewritten = cs.with_database("TestDb1");
        assert_eq!(
            rewritten.to_string(),
            "Server=localhost;Port=3306;User Id=root;Database=TestDb1"
        );
    }

    #[test]
    fn test_with_database_preserves_unknown_parameters() {
        let cs = parse("Server=h;SomeVendorKnob=7;Database=old;AnotherKnob=yes");
        let rewritten = cs.with_database("New");
        assert_eq!(rewritten.get("somevendorknob"), Some("7"));
        assert_eq!(rewritten.get("anotherknob"), Some("yes"));
    }

    #[test]
    fn test_rewrite_is_idempotent_and_order_independent() {
        let cs = parse("Server=localhost;User Id=sa");
        let via_a = cs.with_database("A").with_database("B");
        let direct = cs.with_database("B");
        assert_eq!(via_a, direct);
        assert_eq!(via_a.to_string(), direct.to_string());
        assert_eq!(direct.with_database("B"), direct);
    }

    #[test]
    fn test_parse_rejects_segment_without_equals() {
        let err = "Server=localhost;garbage".parse::<ConnectionString>().unwrap_err();
        assert!(matches!(err, DialectError::MalformedConnectionString(_)));
    }

    #[test]
    fn test_parse_rejects_empty_key() {
        assert!("=value".parse::<ConnectionString>().is_err());
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!("".parse::<ConnectionString>().is_err());
        assert!(" ; ; ".parse::<ConnectionString>().is_err());
    }

    #[test]
    fn test_value_may_contain_equals() {
        let cs = parse("Server=localhost;Password=a=b=c");
        assert_eq!(cs.get("password"), Some("a=b=c"));
    }

    mod properties {
        use proptest::prelude::*;

        use super::parse;

        proptest! {
            #[test]
            fn rewrite_twice_equals_rewrite_once(
                keys in proptest::collection::vec("[A-Za-z][A-Za-z0-9 ]{0,10}[A-Za-z0-9]", 1..6),
                values in proptest::collection::vec("[A-Za-z0-9!._]{1,12}", 1..6),
                name_a in "[A-Za-z][A-Za-z0-9_]{0,20}",
                name_b in "[A-Za-z][A-Za-z0-9_]{0,20}",
            ) {
                let raw: String = keys
                    .iter()
                    .zip(values.iter())
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join(";");
                let cs = parse(&raw);

                let chained = cs.with_database(&name_a).with_database(&name_b);
                let direct = cs.with_database(&name_b);
                prop_assert_eq!(&chained, &direct);
                prop_assert_eq!(chained.to_string(), direct.to_string());

                // A rewritten string reparses to an equal value.
                let reparsed = parse(&direct.to_string());
                prop_assert_eq!(reparsed, direct);
            }
        }
    }
}
