//! Defines the AST for SQL expressions.

use crate::query::ast::schema::Sequence;
use model::core::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `users` or `users.id`.
    Identifier(Ident),

    /// A bound parameter value.
    Value(Value),

    /// A comparison, e.g. `id = ?`.
    BinaryOp(Box<BinaryOp>),

    /// The next value of a sequence.
    NextValue(Sequence),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,
}
