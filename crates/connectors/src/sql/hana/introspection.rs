//! Catalog reflection against the HANA system views.
//!
//! Each operation issues one parameterised read. The schema defaults to the
//! connection's default schema; names are denormalised when bound and
//! normalised when returned.

use crate::sql::{
    base::{adapter::SqlAdapter, error::DbError},
    hana::{data_type::resolve_column_type, dialect::HanaDialect},
};
use model::{
    core::value::Value,
    records::{
        catalog::{
            ReflectedColumn, ReflectedForeignKey, ReflectedIndex, ReflectedPrimaryKey,
            TableMetadata,
        },
        row::Row,
    },
};
use tracing::debug;

const HAS_TABLE_SQL: &str = include_str!("sql/has_table.sql");
const HAS_SEQUENCE_SQL: &str = include_str!("sql/has_sequence.sql");
const SCHEMA_NAMES_SQL: &str = include_str!("sql/schema_names.sql");
const TABLE_NAMES_SQL: &str = include_str!("sql/table_names.sql");
const VIEW_NAMES_SQL: &str = include_str!("sql/view_names.sql");
const SEQUENCE_NAMES_SQL: &str = include_str!("sql/sequence_names.sql");
const COLUMNS_SQL: &str = include_str!("sql/columns.sql");
const FOREIGN_KEYS_SQL: &str = include_str!("sql/foreign_keys.sql");
const INDEXES_SQL: &str = include_str!("sql/indexes.sql");
const PK_CONSTRAINT_SQL: &str = include_str!("sql/pk_constraint.sql");

/// Index names HANA generates for its own constraints.
const SYSTEM_INDEX_PREFIX: &str = "_SYS";

impl HanaDialect {
    /// The catalog-form schema to bind: the requested one, else the default.
    fn lookup_schema(&self, conn: &dyn SqlAdapter, schema: Option<&str>) -> String {
        match schema {
            Some(schema) => self.denormalize(schema),
            None => self.denormalize(&self.default_schema_name(conn)),
        }
    }

    fn schema_and_name(
        &self,
        conn: &dyn SqlAdapter,
        name: &str,
        schema: Option<&str>,
    ) -> Vec<Value> {
        vec![
            Value::String(self.lookup_schema(conn, schema)),
            Value::String(self.denormalize(name)),
        ]
    }

    fn normalized_names(&self, rows: &[Row]) -> Result<Vec<String>, DbError> {
        rows.iter()
            .map(|row| Ok(self.normalize(&row.get_string(0)?)))
            .collect()
    }

    pub async fn has_table(
        &self,
        conn: &dyn SqlAdapter,
        table: &str,
        schema: Option<&str>,
    ) -> Result<bool, DbError> {
        let params = self.schema_and_name(conn, table, schema);
        let rows = conn.query_params(HAS_TABLE_SQL, params).await?;
        Ok(!rows.is_empty())
    }

    pub async fn has_sequence(
        &self,
        conn: &dyn SqlAdapter,
        sequence: &str,
        schema: Option<&str>,
    ) -> Result<bool, DbError> {
        let params = self.schema_and_name(conn, sequence, schema);
        let rows = conn.query_params(HAS_SEQUENCE_SQL, params).await?;
        Ok(!rows.is_empty())
    }

    pub async fn get_schema_names(&self, conn: &dyn SqlAdapter) -> Result<Vec<String>, DbError> {
        let rows = conn.query_rows(SCHEMA_NAMES_SQL).await?;
        self.normalized_names(&rows)
    }

    pub async fn get_table_names(
        &self,
        conn: &dyn SqlAdapter,
        schema: Option<&str>,
    ) -> Result<Vec<String>, DbError> {
        self.names_in_schema(conn, TABLE_NAMES_SQL, schema).await
    }

    pub async fn get_view_names(
        &self,
        conn: &dyn SqlAdapter,
        schema: Option<&str>,
    ) -> Result<Vec<String>, DbError> {
        self.names_in_schema(conn, VIEW_NAMES_SQL, schema).await
    }

    pub async fn get_sequence_names(
        &self,
        conn: &dyn SqlAdapter,
        schema: Option<&str>,
    ) -> Result<Vec<String>, DbError> {
        self.names_in_schema(conn, SEQUENCE_NAMES_SQL, schema).await
    }

    async fn names_in_schema(
        &self,
        conn: &dyn SqlAdapter,
        sql: &str,
        schema: Option<&str>,
    ) -> Result<Vec<String>, DbError> {
        let params = vec![Value::String(self.lookup_schema(conn, schema))];
        let rows = conn.query_params(sql, params).await?;
        self.normalized_names(&rows)
    }

    pub async fn get_columns(
        &self,
        conn: &dyn SqlAdapter,
        table: &str,
        schema: Option<&str>,
    ) -> Result<Vec<ReflectedColumn>, DbError> {
        let params = self.schema_and_name(conn, table, schema);
        let rows = conn.query_params(COLUMNS_SQL, params).await?;

        let mut columns = Vec::with_capacity(rows.len());
        for row in rows {
            let name = self.normalize(&row.get_string(0)?);
            let type_name = row.get_string(1)?;
            let data_type =
                resolve_column_type(&type_name, &name, row.get_opt_u32(4)?, row.get_opt_u32(5)?);

            columns.push(ReflectedColumn {
                data_type,
                default: row.get_opt_string(2)?,
                nullable: row.get_opt_string(3)?.as_deref() == Some("TRUE"),
                name,
            });
        }
        Ok(columns)
    }

    /// One record per catalog row; constraint names are not reported.
    pub async fn get_foreign_keys(
        &self,
        conn: &dyn SqlAdapter,
        table: &str,
        schema: Option<&str>,
    ) -> Result<Vec<ReflectedForeignKey>, DbError> {
        let params = self.schema_and_name(conn, table, schema);
        let rows = conn.query_params(FOREIGN_KEYS_SQL, params).await?;
        let default_schema = self.default_schema_name(conn);

        let mut foreign_keys = Vec::with_capacity(rows.len());
        for row in rows {
            let referred_schema = row.get_opt_string(1)?;
            let referred_schema = match referred_schema {
                Some(raw) if schema.is_some() || raw != default_schema => {
                    Some(self.normalize(&raw))
                }
                _ => None,
            };

            foreign_keys.push(ReflectedForeignKey {
                name: None,
                constrained_columns: vec![self.normalize(&row.get_string(0)?)],
                referred_schema,
                referred_table: self.normalize(&row.get_string(2)?),
                referred_columns: vec![self.normalize(&row.get_string(3)?)],
            });
        }
        Ok(foreign_keys)
    }

    /// Groups index columns by index name in first-seen order. System
    /// generated indexes are skipped.
    pub async fn get_indexes(
        &self,
        conn: &dyn SqlAdapter,
        table: &str,
        schema: Option<&str>,
    ) -> Result<Vec<ReflectedIndex>, DbError> {
        let params = self.schema_and_name(conn, table, schema);
        let rows = conn.query_params(INDEXES_SQL, params).await?;

        let mut indexes: Vec<ReflectedIndex> = Vec::new();
        for row in rows {
            let raw_name = row.get_string(0)?;
            if raw_name.starts_with(SYSTEM_INDEX_PREFIX) {
                debug!("Skipping system index {}", raw_name);
                continue;
            }

            let name = self.normalize(&raw_name);
            let column = self.normalize(&row.get_string(1)?);

            match indexes.iter_mut().find(|idx| idx.name == name) {
                Some(index) => index.column_names.push(column),
                None => {
                    let unique = row
                        .get_opt_string(2)?
                        .is_some_and(|marker| marker.to_uppercase().contains("UNIQUE"));
                    indexes.push(ReflectedIndex {
                        name,
                        unique,
                        column_names: vec![column],
                    });
                }
            }
        }
        Ok(indexes)
    }

    pub async fn get_pk_constraint(
        &self,
        conn: &dyn SqlAdapter,
        table: &str,
        schema: Option<&str>,
    ) -> Result<ReflectedPrimaryKey, DbError> {
        let params = self.schema_and_name(conn, table, schema);
        let rows = conn.query_params(PK_CONSTRAINT_SQL, params).await?;

        let mut pk = ReflectedPrimaryKey::default();
        for row in rows {
            pk.name = self.normalize_name(row.get_opt_string(0)?.as_deref());
            pk.constrained_columns
                .push(self.normalize(&row.get_string(1)?));
        }
        Ok(pk)
    }

    /// Collects columns, primary key, foreign keys and indexes of one table.
    pub async fn reflect_table(
        &self,
        conn: &dyn SqlAdapter,
        table: &str,
        schema: Option<&str>,
    ) -> Result<TableMetadata, DbError> {
        debug!("Reflecting table {}", table);
        Ok(TableMetadata {
            schema: schema.map(str::to_string),
            name: table.to_string(),
            columns: self.get_columns(conn, table, schema).await?,
            primary_key: self.get_pk_constraint(conn, table, schema).await?,
            foreign_keys: self.get_foreign_keys(conn, table, schema).await?,
            indexes: self.get_indexes(conn, table, schema).await?,
        })
    }
}
