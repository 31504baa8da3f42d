use crate::{
    error::CompileError,
    query::{
        ast::expr::{BinaryOp, BinaryOperator, Expr, Ident},
        renderer::{Render, Renderer},
    },
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        match self {
            Expr::Identifier(ident) => ident.render(r)?,
            Expr::Value(val) => r.add_param(val.clone()),
            Expr::BinaryOp(op) => op.render(r)?,
            Expr::NextValue(sequence) => {
                let next = r.dialect.visit_sequence(sequence);
                r.sql.push_str(&next);
            }
        }
        Ok(())
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(&r.dialect.quote_identifier(qualifier));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
        Ok(())
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        r.sql.push('(');
        self.left.render(r)?;

        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
        };
        r.sql.push_str(op_str);

        self.right.render(r)?;
        r.sql.push(')');
        Ok(())
    }
}
