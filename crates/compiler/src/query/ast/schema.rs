//! Schema objects referenced by statements and DDL: sequences and table
//! constraints.

use crate::query::ast::common::TableRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    pub schema: Option<String>,
    pub name: String,
    pub start: Option<i64>,
    pub increment: Option<i64>,
}

impl Sequence {
    pub fn new(name: impl Into<String>) -> Self {
        Sequence {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn increment(mut self, increment: i64) -> Self {
        self.increment = Some(increment);
        self
    }
}

/// Common view over table constraints.
pub trait Constraint {
    fn name(&self) -> Option<&str>;

    fn deferrable(&self) -> Option<bool> {
        None
    }

    fn initially(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimaryKeyConstraint {
    pub name: Option<String>,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForeignKeyConstraint {
    pub name: Option<String>,
    pub columns: Vec<String>,
    pub references: TableRef,
    pub referenced_columns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniqueConstraint {
    pub name: Option<String>,
    pub columns: Vec<String>,
    pub deferrable: Option<bool>,
    pub initially: Option<String>,
}

impl UniqueConstraint {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckConstraint {
    pub name: Option<String>,
    pub sqltext: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraint {
    PrimaryKey(PrimaryKeyConstraint),
    ForeignKey(ForeignKeyConstraint),
    Unique(UniqueConstraint),
    Check(CheckConstraint),
}

impl Constraint for PrimaryKeyConstraint {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Constraint for ForeignKeyConstraint {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Constraint for UniqueConstraint {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn deferrable(&self) -> Option<bool> {
        self.deferrable
    }

    fn initially(&self) -> Option<&str> {
        self.initially.as_deref()
    }
}

impl Constraint for CheckConstraint {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Constraint for TableConstraint {
    fn name(&self) -> Option<&str> {
        match self {
            TableConstraint::PrimaryKey(c) => c.name(),
            TableConstraint::ForeignKey(c) => c.name(),
            TableConstraint::Unique(c) => c.name(),
            TableConstraint::Check(c) => c.name(),
        }
    }

    fn deferrable(&self) -> Option<bool> {
        match self {
            TableConstraint::Unique(c) => c.deferrable(),
            _ => None,
        }
    }

    fn initially(&self) -> Option<&str> {
        match self {
            TableConstraint::Unique(c) => c.initially(),
            _ => None,
        }
    }
}
