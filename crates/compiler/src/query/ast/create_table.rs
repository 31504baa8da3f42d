//! Defines the AST for a CREATE TABLE statement.

use crate::query::ast::{common::TableRef, schema::TableConstraint};
use model::core::data_type::DataType;

#[derive(Debug, Clone, Default)]
pub struct CreateTable {
    pub table: TableRef,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    pub is_nullable: bool,
    /// Server-side default, emitted verbatim after `DEFAULT`.
    pub server_default: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        ColumnDef {
            name: name.into(),
            data_type,
            is_nullable: true,
            server_default: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.server_default = Some(default.into());
        self
    }
}
