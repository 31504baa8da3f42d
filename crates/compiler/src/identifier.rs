//! Identifier quoting and formatting.

use crate::query::ast::{
    common::TableRef,
    schema::{Constraint, Sequence},
};
use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref HANA_RESERVED_WORDS: HashSet<&'static str> = [
        "all", "alter", "and", "any", "as", "asc", "before", "begin", "between", "both", "by",
        "case", "char", "check", "column", "condition", "connect", "constraint", "create",
        "cross", "cube", "current_connection", "current_date", "current_schema",
        "current_time", "current_timestamp", "current_transaction_isolation_level",
        "current_user", "current_utcdate", "current_utctime", "current_utctimestamp",
        "currval", "cursor", "declare", "default", "delete", "desc", "distinct", "drop",
        "else", "elseif", "end", "except", "exception", "exec", "exists", "false", "for",
        "foreign", "from", "full", "grant", "group", "having", "if", "in", "inner", "inout",
        "insert", "intersect", "into", "is", "join", "key", "lateral", "leading", "left",
        "like", "limit", "loop", "minus", "natural", "nchar", "nextval", "not", "null", "of",
        "on", "or", "order", "out", "primary", "prior", "references", "return", "returns",
        "reverse", "revoke", "right", "rollup", "rowid", "select", "session_user", "set",
        "sql", "start", "sysuuid", "table", "tablesample", "then", "to", "top", "trailing",
        "true", "union", "unique", "unknown", "update", "user", "using", "utctimestamp",
        "values", "view", "when", "where", "while", "with",
    ]
    .into_iter()
    .collect();
}

/// Quotes and formats identifiers for a dialect.
///
/// The provided methods implement the generic rules; a dialect overrides the
/// ones it treats differently.
pub trait IdentifierPreparer: Send + Sync {
    /// Lower-cased reserved words that must always be quoted.
    fn reserved_words(&self) -> &HashSet<&'static str>;

    fn quote_char(&self) -> char {
        '"'
    }

    /// True when `value` cannot be emitted bare: it collides with a reserved
    /// word, starts with a digit or `$`, contains characters outside
    /// `[A-Za-z0-9_$]`, or is not all lower case.
    fn requires_quotes(&self, value: &str) -> bool {
        let Some(first) = value.chars().next() else {
            return true;
        };
        let lower = value.to_lowercase();
        self.reserved_words().contains(lower.as_str())
            || first.is_ascii_digit()
            || first == '$'
            || !value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
            || lower != value
    }

    /// Unconditionally wraps `value` in quotes, doubling embedded quote chars.
    fn quote_identifier(&self, value: &str) -> String {
        let q = self.quote_char();
        let escaped = value.replace(q, &format!("{q}{q}"));
        format!("{q}{escaped}{q}")
    }

    /// Quotes `ident` only if it requires quoting.
    fn quote(&self, ident: &str) -> String {
        if self.requires_quotes(ident) {
            self.quote_identifier(ident)
        } else {
            ident.to_string()
        }
    }

    fn format_schema_object(&self, schema: Option<&str>, name: &str) -> String {
        match schema {
            Some(schema) => format!("{}.{}", self.quote(schema), self.quote(name)),
            None => self.quote(name),
        }
    }

    fn format_table(&self, table: &TableRef) -> String {
        self.format_schema_object(table.schema.as_deref(), &table.name)
    }

    fn format_sequence(&self, sequence: &Sequence) -> String {
        self.format_schema_object(sequence.schema.as_deref(), &sequence.name)
    }

    fn format_column(&self, name: &str) -> String {
        self.quote(name)
    }

    /// The name a constraint is emitted under, or `None` to emit it unnamed.
    fn format_constraint(&self, constraint: &dyn Constraint) -> Option<String> {
        constraint.name().map(|name| self.quote(name))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HanaIdentifierPreparer;

impl IdentifierPreparer for HanaIdentifierPreparer {
    fn reserved_words(&self) -> &HashSet<&'static str> {
        &HANA_RESERVED_WORDS
    }

    // Constraints are always emitted without a name.
    fn format_constraint(&self, _constraint: &dyn Constraint) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ast::schema::{CheckConstraint, UniqueConstraint};

    #[test]
    fn test_requires_quotes() {
        let p = HanaIdentifierPreparer;
        assert!(!p.requires_quotes("users"));
        assert!(!p.requires_quotes("order_id"));
        assert!(!p.requires_quotes("a$b"));
        assert!(p.requires_quotes("Users"));
        assert!(p.requires_quotes("USERS"));
        assert!(p.requires_quotes("order"));
        assert!(p.requires_quotes("1col"));
        assert!(p.requires_quotes("$col"));
        assert!(p.requires_quotes("my col"));
        assert!(p.requires_quotes(""));
    }

    #[test]
    fn test_quote() {
        let p = HanaIdentifierPreparer;
        assert_eq!(p.quote("users"), "users");
        assert_eq!(p.quote("MixedCase"), r#""MixedCase""#);
        assert_eq!(p.quote("select"), r#""select""#);
        assert_eq!(p.quote(r#"we"ird"#), r#""we""ird""#);
    }

    #[test]
    fn test_format_sequence() {
        let p = HanaIdentifierPreparer;
        assert_eq!(p.format_sequence(&Sequence::new("S1")), r#""S1""#);
        assert_eq!(
            p.format_sequence(&Sequence::new("user_seq").with_schema("app")),
            "app.user_seq"
        );
    }

    #[test]
    fn test_format_constraint_is_always_unnamed() {
        let p = HanaIdentifierPreparer;
        let named_unique = UniqueConstraint {
            name: Some("uq_email".into()),
            columns: vec!["email".into()],
            ..Default::default()
        };
        let named_check = CheckConstraint {
            name: Some("ck_age".into()),
            sqltext: "age > 0".into(),
        };
        let unnamed = UniqueConstraint::default();

        assert_eq!(p.format_constraint(&named_unique), None);
        assert_eq!(p.format_constraint(&named_check), None);
        assert_eq!(p.format_constraint(&unnamed), None);
    }
}
