//! DDL rendering: tables, constraints and sequences.

use crate::{
    error::CompileError,
    query::{
        ast::{
            create_table::{ColumnDef, CreateTable},
            drop_table::DropTable,
            schema::TableConstraint,
            sequence::{CreateSequence, DropSequence},
        },
        dialect::Dialect,
        renderer::{Render, Renderer},
    },
};

impl Render for CreateTable {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        if self.columns.is_empty() {
            return Err(CompileError::InvalidStatement(format!(
                "table {} has no columns",
                self.table.name
            )));
        }

        r.sql.push_str("CREATE TABLE ");
        r.render_table_ref(&self.table);
        r.sql.push_str(" (");

        let mut entries = Vec::with_capacity(self.columns.len() + self.constraints.len());
        for col in &self.columns {
            entries.push(column_specification(r.dialect, col)?);
        }
        // Constraints the dialect cannot express render to nothing and are dropped.
        entries.extend(
            self.constraints
                .iter()
                .filter_map(|c| constraint_ddl(r.dialect, c))
                .filter(|text| !text.is_empty()),
        );

        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                r.sql.push(',');
            }
            r.sql.push_str("\n\t");
            r.sql.push_str(entry);
        }

        r.sql.push_str("\n)");
        Ok(())
    }
}

impl Render for ColumnDef {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        let spec = column_specification(r.dialect, self)?;
        r.sql.push_str(&spec);
        Ok(())
    }
}

impl Render for DropTable {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        r.sql.push_str("DROP TABLE ");
        r.render_table_ref(&self.table);
        Ok(())
    }
}

impl Render for CreateSequence {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        if !r.dialect.capabilities().supports_sequences {
            return Err(CompileError::Unsupported {
                dialect: r.dialect.name(),
                feature: "sequences",
            });
        }

        let name = r.dialect.preparer().format_sequence(&self.sequence);
        r.sql.push_str("CREATE SEQUENCE ");
        r.sql.push_str(&name);
        if let Some(increment) = self.sequence.increment {
            r.sql.push_str(&format!(" INCREMENT BY {increment}"));
        }
        if let Some(start) = self.sequence.start {
            r.sql.push_str(&format!(" START WITH {start}"));
        }
        Ok(())
    }
}

impl Render for DropSequence {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        let name = r.dialect.preparer().format_sequence(&self.sequence);
        r.sql.push_str("DROP SEQUENCE ");
        r.sql.push_str(&name);
        Ok(())
    }
}

fn column_specification(dialect: &dyn Dialect, col: &ColumnDef) -> Result<String, CompileError> {
    let mut spec = format!(
        "{} {}",
        dialect.preparer().format_column(&col.name),
        dialect.render_data_type(&col.data_type)?
    );
    if let Some(default) = &col.server_default {
        spec.push_str(" DEFAULT ");
        spec.push_str(default);
    }
    if !col.is_nullable {
        spec.push_str(" NOT NULL");
    }
    Ok(spec)
}

fn named_prefix(dialect: &dyn Dialect, constraint: &TableConstraint) -> String {
    match dialect.preparer().format_constraint(constraint) {
        Some(name) => format!("CONSTRAINT {name} "),
        None => String::new(),
    }
}

fn constraint_ddl(dialect: &dyn Dialect, constraint: &TableConstraint) -> Option<String> {
    let preparer = dialect.preparer();
    let quote_all = |cols: &[String]| {
        cols.iter()
            .map(|c| preparer.quote(c))
            .collect::<Vec<_>>()
            .join(", ")
    };

    match constraint {
        TableConstraint::PrimaryKey(pk) => {
            if pk.columns.is_empty() {
                return None;
            }
            Some(format!(
                "{}PRIMARY KEY ({})",
                named_prefix(dialect, constraint),
                quote_all(&pk.columns)
            ))
        }
        TableConstraint::ForeignKey(fk) => Some(format!(
            "{}FOREIGN KEY ({}) REFERENCES {} ({})",
            named_prefix(dialect, constraint),
            quote_all(&fk.columns),
            preparer.format_table(&fk.references),
            quote_all(&fk.referenced_columns)
        )),
        TableConstraint::Unique(unique) => Some(dialect.visit_unique_constraint(unique)),
        TableConstraint::Check(check) => dialect.visit_check_constraint(check),
    }
}
