//! Renders column types into dialect type keywords.

use crate::error::CompileError;
use model::core::data_type::DataType;

fn with_length(keyword: &str, length: Option<u32>) -> String {
    match length {
        Some(len) => format!("{keyword}({len})"),
        None => keyword.to_string(),
    }
}

/// Type-keyword dispatch. Provided methods emit the generic ANSI keywords;
/// dialects override the visits they spell differently.
pub trait TypeCompiler: Send + Sync {
    fn process(&self, data_type: &DataType) -> Result<String, CompileError> {
        let rendered = match data_type {
            DataType::Boolean => self.visit_boolean(),
            DataType::TinyInt => self.visit_tinyint(),
            DataType::SmallInt => self.visit_smallint(),
            DataType::Integer => self.visit_integer(),
            DataType::BigInt => self.visit_bigint(),
            DataType::Numeric { precision, scale } => self.visit_numeric(*precision, *scale),
            DataType::Decimal { precision, scale } => self.visit_decimal(*precision, *scale),
            DataType::Float(precision) => with_length("FLOAT", *precision),
            DataType::Real => "REAL".to_string(),
            DataType::Double => self.visit_double(),
            DataType::Char(len) => with_length("CHAR", *len),
            DataType::NChar(len) => with_length("NCHAR", *len),
            DataType::VarChar(len) => with_length("VARCHAR", *len),
            DataType::NVarChar(len) => with_length("NVARCHAR", *len),
            DataType::AlphaNum(len) => with_length("ALPHANUM", *len),
            DataType::ShortText(len) => with_length("SHORTTEXT", *len),
            DataType::Text => "TEXT".to_string(),
            DataType::Clob => "CLOB".to_string(),
            DataType::NClob => "NCLOB".to_string(),
            DataType::Binary(len) => with_length("BINARY", *len),
            DataType::VarBinary(len) => with_length("VARBINARY", *len),
            DataType::Blob => "BLOB".to_string(),
            DataType::Date => "DATE".to_string(),
            DataType::Time => "TIME".to_string(),
            DataType::DateTime => self.visit_datetime(),
            DataType::Timestamp => "TIMESTAMP".to_string(),
            DataType::SecondDate => "SECONDDATE".to_string(),
            DataType::Null => {
                return Err(CompileError::UnrenderableType(data_type.to_string()));
            }
        };
        Ok(rendered)
    }

    fn visit_boolean(&self) -> String {
        "BOOLEAN".to_string()
    }

    fn visit_tinyint(&self) -> String {
        "TINYINT".to_string()
    }

    fn visit_smallint(&self) -> String {
        "SMALLINT".to_string()
    }

    fn visit_integer(&self) -> String {
        "INTEGER".to_string()
    }

    fn visit_bigint(&self) -> String {
        "BIGINT".to_string()
    }

    fn visit_double(&self) -> String {
        "DOUBLE PRECISION".to_string()
    }

    fn visit_datetime(&self) -> String {
        "DATETIME".to_string()
    }

    fn visit_numeric(&self, precision: Option<u32>, scale: Option<u32>) -> String {
        format_fixed_point("NUMERIC", precision, scale)
    }

    fn visit_decimal(&self, precision: Option<u32>, scale: Option<u32>) -> String {
        format_fixed_point("DECIMAL", precision, scale)
    }
}

fn format_fixed_point(keyword: &str, precision: Option<u32>, scale: Option<u32>) -> String {
    match (precision, scale) {
        (None, _) => keyword.to_string(),
        (Some(p), None) => format!("{keyword}({p})"),
        (Some(p), Some(s)) => format!("{keyword}({p}, {s})"),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HanaTypeCompiler;

impl TypeCompiler for HanaTypeCompiler {
    // No native boolean: stored in the smallest integer type.
    fn visit_boolean(&self) -> String {
        self.visit_tinyint()
    }

    fn visit_numeric(&self, precision: Option<u32>, scale: Option<u32>) -> String {
        self.visit_decimal(precision, scale)
    }

    fn visit_double(&self) -> String {
        "DOUBLE".to_string()
    }

    fn visit_datetime(&self) -> String {
        "TIMESTAMP".to_string()
    }
}
