use crate::query::ast::{common::TableRef, expr::Expr};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    pub table: TableRef,
    pub columns: Vec<String>,
    pub values: Vec<Vec<Expr>>,
}

impl Insert {
    pub fn new(table: TableRef) -> Self {
        Insert {
            table,
            ..Default::default()
        }
    }

    /// Appends a column and its value to every row of the statement.
    pub fn push_column(&mut self, column: impl Into<String>, value: Expr) {
        self.columns.push(column.into());
        if self.values.is_empty() {
            self.values.push(Vec::new());
        }
        for row in &mut self.values {
            row.push(value.clone());
        }
    }
}
