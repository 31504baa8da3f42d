//! Defines the `Dialect` trait for database-specific SQL syntax.

use crate::{
    capabilities::{DialectCapabilities, HANA_CAPABILITIES},
    error::CompileError,
    identifier::{HanaIdentifierPreparer, IdentifierPreparer},
    query::ast::schema::{CheckConstraint, Constraint, Sequence, UniqueConstraint},
    types::{HanaTypeCompiler, TypeCompiler},
};
use model::core::data_type::DataType;
use tracing::debug;

pub trait Dialect: Send + Sync {
    fn name(&self) -> &'static str {
        self.capabilities().name
    }

    fn capabilities(&self) -> &DialectCapabilities;

    fn preparer(&self) -> &dyn IdentifierPreparer;

    fn type_compiler(&self) -> &dyn TypeCompiler;

    /// Quotes an identifier when the dialect's rules require it.
    fn quote_identifier(&self, ident: &str) -> String {
        self.preparer().quote(ident)
    }

    /// Returns the placeholder for a parameterized query.
    fn get_placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn render_data_type(&self, data_type: &DataType) -> Result<String, CompileError> {
        self.type_compiler().process(data_type)
    }

    /// The expression yielding a sequence's next value.
    fn visit_sequence(&self, sequence: &Sequence) -> String {
        format!(
            "NEXT VALUE FOR {}",
            self.preparer().format_sequence(sequence)
        )
    }

    /// Appended to a SELECT that has no table source.
    fn default_from(&self) -> &'static str {
        ""
    }

    /// DDL for a CHECK constraint, or `None` to omit it.
    fn visit_check_constraint(&self, constraint: &CheckConstraint) -> Option<String>;

    fn visit_unique_constraint(&self, constraint: &UniqueConstraint) -> String {
        if constraint.is_empty() {
            return String::new();
        }

        let mut text = String::new();
        if constraint.name.is_some()
            && let Some(formatted) = self.preparer().format_constraint(constraint)
        {
            text.push_str(&format!("CONSTRAINT {formatted} "));
        }
        let columns: Vec<String> = constraint
            .columns
            .iter()
            .map(|c| self.preparer().quote(c))
            .collect();
        text.push_str(&format!("UNIQUE ({})", columns.join(", ")));
        text.push_str(&define_constraint_deferrability(constraint));
        text
    }
}

/// The generic `[NOT] DEFERRABLE [INITIALLY x]` suffix.
pub fn define_constraint_deferrability(constraint: &dyn Constraint) -> String {
    let mut text = String::new();
    match constraint.deferrable() {
        Some(true) => text.push_str(" DEFERRABLE"),
        Some(false) => text.push_str(" NOT DEFERRABLE"),
        None => {}
    }
    if let Some(initially) = constraint.initially() {
        text.push_str(&format!(" INITIALLY {initially}"));
    }
    text
}

#[derive(Debug, Clone)]
pub struct Hana {
    capabilities: &'static DialectCapabilities,
    preparer: HanaIdentifierPreparer,
    type_compiler: HanaTypeCompiler,
}

impl Hana {
    pub fn new() -> Self {
        Hana {
            capabilities: &HANA_CAPABILITIES,
            preparer: HanaIdentifierPreparer,
            type_compiler: HanaTypeCompiler,
        }
    }
}

impl Default for Hana {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for Hana {
    fn capabilities(&self) -> &DialectCapabilities {
        self.capabilities
    }

    fn preparer(&self) -> &dyn IdentifierPreparer {
        &self.preparer
    }

    fn type_compiler(&self) -> &dyn TypeCompiler {
        &self.type_compiler
    }

    fn visit_sequence(&self, sequence: &Sequence) -> String {
        format!("{}.NEXTVAL", self.preparer.format_sequence(sequence))
    }

    fn default_from(&self) -> &'static str {
        " FROM DUMMY"
    }

    // Check constraints are unsupported; the DDL is dropped without error.
    fn visit_check_constraint(&self, constraint: &CheckConstraint) -> Option<String> {
        debug!("Omitting CHECK ({}) from DDL", constraint.sqltext);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_sequence() {
        let hana = Hana::new();
        assert_eq!(hana.visit_sequence(&Sequence::new("S1")), r#""S1".NEXTVAL"#);
        assert_eq!(hana.visit_sequence(&Sequence::new("s1")), "s1.NEXTVAL");
        assert_eq!(
            hana.visit_sequence(&Sequence::new("id_seq").with_schema("App")),
            r#""App".id_seq.NEXTVAL"#
        );
    }

    #[test]
    fn test_default_from() {
        assert_eq!(Hana::new().default_from(), " FROM DUMMY");
    }

    #[test]
    fn test_check_constraint_suppressed() {
        let check = CheckConstraint {
            name: Some("positive".into()),
            sqltext: "qty > 0".into(),
        };
        assert_eq!(Hana::new().visit_check_constraint(&check), None);
    }

    #[test]
    fn test_unique_constraint_empty() {
        assert_eq!(
            Hana::new().visit_unique_constraint(&UniqueConstraint::default()),
            ""
        );
    }

    #[test]
    fn test_unique_constraint_unnamed() {
        let unique = UniqueConstraint {
            columns: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        assert_eq!(Hana::new().visit_unique_constraint(&unique), "UNIQUE (a, b)");
    }

    #[test]
    fn test_unique_constraint_name_dropped() {
        let unique = UniqueConstraint {
            name: Some("uq_ab".into()),
            columns: vec!["a".into(), "Mixed".into()],
            deferrable: Some(true),
            initially: Some("DEFERRED".into()),
        };
        assert_eq!(
            Hana::new().visit_unique_constraint(&unique),
            r#"UNIQUE (a, "Mixed") DEFERRABLE INITIALLY DEFERRED"#
        );
    }
}
