use crate::query::ast::expr::{Expr, Ident};

pub mod ast;
pub mod dialect;
pub mod renderer;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}
