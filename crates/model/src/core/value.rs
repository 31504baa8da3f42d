use crate::core::data_type::DataType;
use bigdecimal::{BigDecimal, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Decimal(BigDecimal),
    String(String),
    Boolean(bool),
    Bytes(Vec<u8>),
    Null,
}

#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("Cannot convert {value} to {target}")]
    Conversion { value: String, target: String },
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Integral view of the value. Fractional floats and decimals yield
    /// `None` rather than being truncated.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Float(v) => {
                let in_range = *v >= i64::MIN as f64 && *v < i64::MAX as f64;
                (v.fract() == 0.0 && in_range).then_some(*v as i64)
            }
            Value::Decimal(v) if v.is_integer() => v.to_i64(),
            Value::Decimal(_) => None,
            Value::String(v) => v.trim().parse().ok(),
            Value::Boolean(v) => Some(i64::from(*v)),
            Value::Bytes(_) | Value::Null => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Decimal(v) => v.to_f64(),
            Value::String(v) => v.trim().parse().ok(),
            Value::Boolean(v) => Some(if *v { 1.0 } else { 0.0 }),
            Value::Bytes(_) | Value::Null => None,
        }
    }

    pub fn as_decimal(&self) -> Option<BigDecimal> {
        match self {
            Value::Int(v) => Some(BigDecimal::from(*v)),
            Value::Float(v) => BigDecimal::from_str(&v.to_string()).ok(),
            Value::Decimal(v) => Some(v.clone()),
            Value::String(v) => BigDecimal::from_str(v.trim()).ok(),
            Value::Boolean(_) | Value::Bytes(_) | Value::Null => None,
        }
    }

    /// Coerces a scalar returned by the driver into the representation the
    /// column type calls for. `Null` stays `Null`.
    pub fn coerce_to(self, data_type: &DataType) -> Result<Value, ValueError> {
        if self.is_null() {
            return Ok(Value::Null);
        }

        let converted = match data_type {
            DataType::Boolean => self.as_i64().map(|v| Value::Boolean(v != 0)),
            t if t.is_integer() => self.as_i64().map(Value::Int),
            t if t.is_fixed_point() => self.as_decimal().map(Value::Decimal),
            t if t.is_floating_point() => self.as_f64().map(Value::Float),
            t if t.is_character() => Some(Value::String(self.to_string())),
            _ => Some(self.clone()),
        };

        converted.ok_or_else(|| ValueError::Conversion {
            value: self.to_string(),
            target: data_type.to_string(),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Value::Null => write!(f, "NULL"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_sequence_value_to_integer() {
        let raw = Value::Decimal(BigDecimal::from(42));
        assert_eq!(raw.coerce_to(&DataType::BigInt).unwrap(), Value::Int(42));
    }

    #[test]
    fn test_coerce_tinyint_to_boolean() {
        assert_eq!(
            Value::Int(1).coerce_to(&DataType::Boolean).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            Value::Int(0).coerce_to(&DataType::Boolean).unwrap(),
            Value::Boolean(false)
        );
    }

    #[test]
    fn test_fractional_numbers_are_not_truncated() {
        assert_eq!(Value::Float(12.0).as_i64(), Some(12));
        assert_eq!(Value::Float(12.5).as_i64(), None);
        assert_eq!(Value::Float(f64::NAN).as_i64(), None);
        assert_eq!(
            Value::Decimal(BigDecimal::from_str("3.75").unwrap()).as_i64(),
            None
        );
        assert!(Value::Float(7.9).coerce_to(&DataType::Integer).is_err());
    }

    #[test]
    fn test_coerce_null_passthrough() {
        assert_eq!(Value::Null.coerce_to(&DataType::Integer).unwrap(), Value::Null);
    }

    #[test]
    fn test_coerce_failure() {
        let err = Value::String("abc".into())
            .coerce_to(&DataType::Integer)
            .unwrap_err();
        assert_eq!(
            err,
            ValueError::Conversion {
                value: "abc".into(),
                target: "INTEGER".into()
            }
        );
    }
}
