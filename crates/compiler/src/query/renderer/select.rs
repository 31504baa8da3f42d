use crate::{
    error::CompileError,
    query::{
        ast::{
            common::OrderDir,
            select::{FromClause, OrderByExpr, Select},
        },
        renderer::{Render, Renderer},
    },
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        if self.columns.is_empty() {
            return Err(CompileError::InvalidStatement(
                "SELECT requires at least one column".into(),
            ));
        }

        r.sql.push_str("SELECT ");
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            col.render(r)?;
        }

        match &self.from {
            Some(from) => {
                r.sql.push(' ');
                from.render(r)?;
            }
            None => {
                let default_from = r.dialect.default_from();
                r.sql.push_str(default_from);
            }
        }

        if let Some(where_clause) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            where_clause.render(r)?;
        }

        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                order.render(r)?;
            }
        }

        if let Some(limit) = &self.limit {
            r.sql.push_str(" LIMIT ");
            limit.render(r)?;
        }

        if let Some(offset) = &self.offset {
            r.sql.push_str(" OFFSET ");
            offset.render(r)?;
        }

        Ok(())
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        r.sql.push_str("FROM ");
        r.render_table_ref(&self.table);
        if let Some(alias) = &self.alias {
            r.sql.push_str(" AS ");
            r.sql.push_str(&r.dialect.quote_identifier(alias));
        }
        Ok(())
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        self.expr.render(r)?;
        match self.direction {
            Some(OrderDir::Asc) => r.sql.push_str(" ASC"),
            Some(OrderDir::Desc) => r.sql.push_str(" DESC"),
            None => {}
        }
        Ok(())
    }
}
