use bigdecimal::BigDecimal;
use hdbconnect::HdbValue;
use model::core::value::Value;
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// Binds a [`Value`] as a prepared-statement parameter.
///
/// `hdbconnect` takes parameters through serde, so each value serializes as
/// the closest primitive. Decimals travel as strings to keep their scale.
pub struct HdbParam(Value);

impl HdbParam {
    pub fn from_value(value: Value) -> Self {
        HdbParam(value)
    }
}

impl Serialize for HdbParam {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Decimal(v) => serializer.serialize_str(&v.to_string()),
            Value::String(v) => serializer.serialize_str(v),
            Value::Boolean(v) => serializer.serialize_bool(*v),
            Value::Bytes(v) => serializer.serialize_bytes(v),
            Value::Null => serializer.serialize_none(),
        }
    }
}

pub struct HdbParamStore {
    pub params: Vec<HdbParam>,
}

impl HdbParamStore {
    pub fn from_values(values: Vec<Value>) -> Self {
        Self {
            params: values.into_iter().map(HdbParam::from_value).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Converts a driver value into a toolkit value. Types without a direct
/// counterpart (dates, LOB handles, spatial) keep their textual form.
pub fn from_hdb_value(value: &HdbValue<'_>) -> Value {
    match value {
        HdbValue::NULL => Value::Null,
        HdbValue::TINYINT(v) => Value::Int(i64::from(*v)),
        HdbValue::SMALLINT(v) => Value::Int(i64::from(*v)),
        HdbValue::INT(v) => Value::Int(i64::from(*v)),
        HdbValue::BIGINT(v) => Value::Int(*v),
        HdbValue::DECIMAL(v) => BigDecimal::from_str(&v.to_string())
            .map(Value::Decimal)
            .unwrap_or_else(|_| Value::String(v.to_string())),
        HdbValue::REAL(v) => Value::Float(f64::from(*v)),
        HdbValue::DOUBLE(v) => Value::Float(*v),
        HdbValue::STRING(v) => Value::String(v.clone()),
        HdbValue::BINARY(v) => Value::Bytes(v.clone()),
        HdbValue::BOOLEAN(v) => Value::Boolean(*v),
        other => Value::String(other.to_string()),
    }
}
