use crate::{
    error::CompileError,
    query::{
        ast::insert::Insert,
        renderer::{Render, Renderer},
    },
};

impl Render for Insert {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        // Neither DEFAULT VALUES nor an empty column list is accepted by HANA.
        if self.columns.is_empty() {
            return Err(CompileError::Unsupported {
                dialect: r.dialect.name(),
                feature: "empty inserts",
            });
        }

        if self.values.is_empty() {
            return Err(CompileError::InvalidStatement(
                "INSERT has columns but no values".into(),
            ));
        }

        r.sql.push_str("INSERT INTO ");
        r.render_table_ref(&self.table);
        r.sql.push_str(" (");
        let quoted_columns = r.quote_list(&self.columns);
        r.sql.push_str(&quoted_columns);
        r.sql.push(')');

        r.sql.push_str(" VALUES ");
        for (i, row) in self.values.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(CompileError::InvalidStatement(format!(
                    "row {i} has {} values for {} columns",
                    row.len(),
                    self.columns.len()
                )));
            }
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.sql.push('(');
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    r.sql.push_str(", ");
                }
                val.render(r)?;
            }
            r.sql.push(')');
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use model::core::value::Value;

    use crate::{
        error::CompileError,
        query::{
            ast::{common::TableRef, expr::Expr, insert::Insert, schema::Sequence},
            dialect::Hana,
            renderer::compile,
        },
    };

    #[test]
    fn test_render_insert() {
        let ast = Insert {
            table: TableRef::new("users"),
            columns: vec!["id".to_string(), "name".to_string()],
            values: vec![vec![
                Expr::NextValue(Sequence::new("user_seq")),
                Expr::Value(Value::String("Alice".to_string())),
            ]],
        };

        let (sql, params) = compile(&ast, &Hana::new()).unwrap();
        assert_eq!(
            sql,
            "INSERT INTO users (id, name) VALUES (user_seq.NEXTVAL, ?)"
        );
        assert_eq!(params, vec![Value::String("Alice".to_string())]);
    }

    #[test]
    fn test_empty_insert_unsupported() {
        let ast = Insert::new(TableRef::new("users"));
        assert_eq!(
            compile(&ast, &Hana::new()).unwrap_err(),
            CompileError::Unsupported {
                dialect: "hana",
                feature: "empty inserts"
            }
        );
    }

    #[test]
    fn test_push_column() {
        let mut ast = Insert::new(TableRef::new("users"));
        ast.push_column("id", Expr::Value(Value::Int(5)));
        let (sql, params) = compile(&ast, &Hana::new()).unwrap();
        assert_eq!(sql, "INSERT INTO users (id) VALUES (?)");
        assert_eq!(params, vec![Value::Int(5)]);
    }
}
