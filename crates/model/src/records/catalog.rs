//! Records produced by catalog reflection. Built fresh per call and handed to
//! the caller; nothing here is cached.

use crate::core::data_type::DataType;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReflectedColumn {
    pub name: String,
    pub data_type: DataType,
    pub default: Option<String>,
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReflectedForeignKey {
    /// Always `None`: HANA does not expose foreign-key names for reflection.
    pub name: Option<String>,
    pub constrained_columns: Vec<String>,
    pub referred_schema: Option<String>,
    pub referred_table: String,
    pub referred_columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReflectedIndex {
    pub name: String,
    pub unique: bool,
    pub column_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReflectedPrimaryKey {
    pub name: Option<String>,
    pub constrained_columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableMetadata {
    pub schema: Option<String>,
    pub name: String,
    pub columns: Vec<ReflectedColumn>,
    pub primary_key: ReflectedPrimaryKey,
    pub foreign_keys: Vec<ReflectedForeignKey>,
    pub indexes: Vec<ReflectedIndex>,
}

impl TableMetadata {
    pub fn column(&self, name: &str) -> Option<&ReflectedColumn> {
        self.columns.iter().find(|c| c.name == name)
    }
}
