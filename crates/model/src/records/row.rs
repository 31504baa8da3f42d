use crate::core::value::Value;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A positional result row as handed back by a catalog or scalar query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<Value>,
}

#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("Column index {index} out of range for row of width {width}")]
    OutOfRange { index: usize, width: usize },

    #[error("Column {index} holds {found}, expected {expected}")]
    UnexpectedValue {
        index: usize,
        found: String,
        expected: &'static str,
    },
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Row { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Value, RowError> {
        self.values.get(index).ok_or(RowError::OutOfRange {
            index,
            width: self.values.len(),
        })
    }

    pub fn get_opt_string(&self, index: usize) -> Result<Option<String>, RowError> {
        match self.get(index)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            other => Err(RowError::UnexpectedValue {
                index,
                found: other.to_string(),
                expected: "string",
            }),
        }
    }

    pub fn get_string(&self, index: usize) -> Result<String, RowError> {
        self.get_opt_string(index)?
            .ok_or(RowError::UnexpectedValue {
                index,
                found: Value::Null.to_string(),
                expected: "string",
            })
    }

    pub fn get_opt_u32(&self, index: usize) -> Result<Option<u32>, RowError> {
        let value = self.get(index)?;
        if value.is_null() {
            return Ok(None);
        }
        value
            .as_i64()
            .and_then(|v| u32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| RowError::UnexpectedValue {
                index,
                found: value.to_string(),
                expected: "unsigned integer",
            })
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Row::new(values)
    }
}
