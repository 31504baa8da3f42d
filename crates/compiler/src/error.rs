use thiserror::Error;

/// Errors raised while turning an AST into SQL text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    /// The type has no DDL representation (e.g. the untyped placeholder).
    #[error("Can't generate DDL for type {0}")]
    UnrenderableType(String),

    /// The statement needs a feature the dialect lacks.
    #[error("The '{dialect}' dialect does not support {feature}")]
    Unsupported {
        dialect: &'static str,
        feature: &'static str,
    },

    /// The statement is structurally incomplete.
    #[error("Invalid statement: {0}")]
    InvalidStatement(String),
}
