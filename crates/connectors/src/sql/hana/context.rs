//! Per-statement execution helpers: scalar reads, sequence firing and inserts
//! that prefetch sequence defaults.

use crate::sql::{
    base::{adapter::SqlAdapter, error::DbError},
    hana::dialect::HanaDialect,
};
use compiler::query::{
    ast::{expr::Expr, insert::Insert, schema::Sequence, select::Select},
    renderer::compile,
};
use model::core::{data_type::DataType, value::Value};
use tracing::debug;

/// A column whose value comes from a sequence when the insert omits it.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceDefault {
    pub column: String,
    pub sequence: Sequence,
    pub data_type: DataType,
}

impl SequenceDefault {
    pub fn new(column: impl Into<String>, sequence: Sequence, data_type: DataType) -> Self {
        Self {
            column: column.into(),
            sequence,
            data_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertOutcome {
    pub rowcount: usize,
    /// Sequence values fired before the insert, in row order.
    pub prefetched: Vec<(String, Value)>,
}

pub struct HanaExecutionContext<'a> {
    dialect: &'a HanaDialect,
    conn: &'a dyn SqlAdapter,
}

impl<'a> HanaExecutionContext<'a> {
    pub fn new(dialect: &'a HanaDialect, conn: &'a dyn SqlAdapter) -> Self {
        Self { dialect, conn }
    }

    /// Runs `sql` and returns the first column of the first row coerced to
    /// `data_type`. An empty result yields `Value::Null`.
    pub async fn execute_scalar(&self, sql: &str, data_type: &DataType) -> Result<Value, DbError> {
        debug!("Executing scalar: {}", sql);
        let rows = self.conn.query_rows(sql).await?;
        let value = match rows.first() {
            Some(row) => row.get(0)?.clone(),
            None => Value::Null,
        };
        Ok(value.coerce_to(data_type)?)
    }

    /// `SELECT <seq>.NEXTVAL FROM DUMMY`, coerced to `data_type`.
    pub async fn fire_sequence(
        &self,
        sequence: &Sequence,
        data_type: &DataType,
    ) -> Result<Value, DbError> {
        let select = Select {
            columns: vec![Expr::NextValue(sequence.clone())],
            ..Default::default()
        };
        let (sql, _) = compile(&select, self.dialect.sql())?;
        self.execute_scalar(&sql, data_type).await
    }

    /// Executes `insert`, first firing the sequence of every defaulted column
    /// the statement does not name. There is no RETURNING, so the fired values
    /// are reported back to the caller.
    pub async fn execute_insert(
        &self,
        insert: &Insert,
        sequence_defaults: &[SequenceDefault],
    ) -> Result<InsertOutcome, DbError> {
        let mut insert = insert.clone();
        let mut prefetched = Vec::new();

        let missing: Vec<&SequenceDefault> = sequence_defaults
            .iter()
            .filter(|d| !insert.columns.iter().any(|c| c == &d.column))
            .collect();
        for default in missing {
            if insert.values.is_empty() {
                insert.values.push(Vec::new());
            }
            insert.columns.push(default.column.clone());
            for row in insert.values.iter_mut() {
                let value = self
                    .fire_sequence(&default.sequence, &default.data_type)
                    .await?;
                prefetched.push((default.column.clone(), value.clone()));
                row.push(Expr::Value(value));
            }
        }

        let (sql, params) = compile(&insert, self.dialect.sql())?;
        debug!("Executing insert: {}", sql);
        let rowcount = self.conn.exec_params(&sql, params).await?;

        Ok(InsertOutcome {
            rowcount,
            prefetched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::base::mock::{MockAdapter, s};
    use compiler::{error::CompileError, query::ast::common::TableRef};

    #[tokio::test]
    async fn test_fire_sequence() {
        let conn = MockAdapter::new("app").with_rows(vec![vec![Value::Int(42)]]);
        let dialect = HanaDialect::new();
        let ctx = HanaExecutionContext::new(&dialect, &conn);

        let value = ctx
            .fire_sequence(&Sequence::new("S1"), &DataType::BigInt)
            .await
            .unwrap();
        assert_eq!(value, Value::Int(42));
        assert_eq!(
            conn.last_statement(),
            (r#"SELECT "S1".NEXTVAL FROM DUMMY"#.to_string(), vec![])
        );
    }

    #[tokio::test]
    async fn test_fire_sequence_coerces_decimal_result() {
        let conn = MockAdapter::new("app").with_rows(vec![vec![s("7")]]);
        let dialect = HanaDialect::new();
        let ctx = HanaExecutionContext::new(&dialect, &conn);

        let value = ctx
            .fire_sequence(&Sequence::new("seq").with_schema("app"), &DataType::Integer)
            .await
            .unwrap();
        assert_eq!(value, Value::Int(7));
        assert_eq!(conn.last_statement().0, "SELECT app.seq.NEXTVAL FROM DUMMY");
    }

    #[tokio::test]
    async fn test_execute_scalar_empty_result() {
        let conn = MockAdapter::new("app");
        let dialect = HanaDialect::new();
        let ctx = HanaExecutionContext::new(&dialect, &conn);
        let value = ctx
            .execute_scalar("SELECT 1 FROM DUMMY WHERE 1 = 0", &DataType::Integer)
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_execute_insert_prefetches_sequence() {
        let conn = MockAdapter::new("app").with_rows(vec![vec![Value::Int(100)]]);
        let dialect = HanaDialect::new();
        let ctx = HanaExecutionContext::new(&dialect, &conn);

        let mut insert = Insert::new(TableRef::new("users"));
        insert.push_column("name", Expr::Value(s("alice")));

        let defaults = [SequenceDefault::new(
            "id",
            Sequence::new("user_seq"),
            DataType::Integer,
        )];
        let outcome = ctx.execute_insert(&insert, &defaults).await.unwrap();

        assert_eq!(outcome.rowcount, 1);
        assert_eq!(outcome.prefetched, vec![("id".to_string(), Value::Int(100))]);

        let statements = conn.statements();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].0, "SELECT user_seq.NEXTVAL FROM DUMMY");
        assert_eq!(statements[1].0, "INSERT INTO users (name, id) VALUES (?, ?)");
        assert_eq!(statements[1].1, vec![s("alice"), Value::Int(100)]);
    }

    #[tokio::test]
    async fn test_multi_row_insert_fires_once_per_row() {
        let conn = MockAdapter::new("app")
            .with_rows(vec![vec![Value::Int(1)]])
            .with_rows(vec![vec![Value::Int(2)]]);
        let dialect = HanaDialect::new();
        let ctx = HanaExecutionContext::new(&dialect, &conn);

        let mut insert = Insert::new(TableRef::new("users"));
        insert.columns.push("name".into());
        insert.values.push(vec![Expr::Value(s("alice"))]);
        insert.values.push(vec![Expr::Value(s("bob"))]);

        let defaults = [SequenceDefault::new(
            "id",
            Sequence::new("user_seq"),
            DataType::Integer,
        )];
        let outcome = ctx.execute_insert(&insert, &defaults).await.unwrap();

        assert_eq!(
            outcome.prefetched,
            vec![
                ("id".to_string(), Value::Int(1)),
                ("id".to_string(), Value::Int(2)),
            ]
        );
        let (sql, params) = conn.last_statement();
        assert_eq!(sql, "INSERT INTO users (name, id) VALUES (?, ?), (?, ?)");
        assert_eq!(
            params,
            vec![s("alice"), Value::Int(1), s("bob"), Value::Int(2)]
        );
    }

    #[tokio::test]
    async fn test_columnless_insert_fills_every_sequence_default() {
        let conn = MockAdapter::new("app")
            .with_rows(vec![vec![Value::Int(10)]])
            .with_rows(vec![vec![Value::Int(20)]]);
        let dialect = HanaDialect::new();
        let ctx = HanaExecutionContext::new(&dialect, &conn);

        let defaults = [
            SequenceDefault::new("id", Sequence::new("id_seq"), DataType::Integer),
            SequenceDefault::new("audit_id", Sequence::new("audit_seq"), DataType::BigInt),
        ];
        let outcome = ctx
            .execute_insert(&Insert::new(TableRef::new("events")), &defaults)
            .await
            .unwrap();

        assert_eq!(
            outcome.prefetched,
            vec![
                ("id".to_string(), Value::Int(10)),
                ("audit_id".to_string(), Value::Int(20)),
            ]
        );
        let statements = conn.statements();
        assert_eq!(statements.len(), 3);
        assert_eq!(statements[0].0, "SELECT id_seq.NEXTVAL FROM DUMMY");
        assert_eq!(statements[1].0, "SELECT audit_seq.NEXTVAL FROM DUMMY");
        assert_eq!(
            statements[2],
            (
                "INSERT INTO events (id, audit_id) VALUES (?, ?)".to_string(),
                vec![Value::Int(10), Value::Int(20)]
            )
        );
    }

    #[tokio::test]
    async fn test_execute_insert_keeps_explicit_column() {
        let conn = MockAdapter::new("app");
        let dialect = HanaDialect::new();
        let ctx = HanaExecutionContext::new(&dialect, &conn);

        let mut insert = Insert::new(TableRef::new("users"));
        insert.push_column("id", Expr::Value(Value::Int(5)));

        let defaults = [SequenceDefault::new(
            "id",
            Sequence::new("user_seq"),
            DataType::Integer,
        )];
        let outcome = ctx.execute_insert(&insert, &defaults).await.unwrap();
        assert!(outcome.prefetched.is_empty());
        assert_eq!(conn.statements().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_empty_insert_rejected() {
        let conn = MockAdapter::new("app");
        let dialect = HanaDialect::new();
        let ctx = HanaExecutionContext::new(&dialect, &conn);

        let err = ctx
            .execute_insert(&Insert::new(TableRef::new("t")), &[])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DbError::Compile(CompileError::Unsupported { .. })
        ));
        assert!(conn.statements().is_empty());
    }
}
