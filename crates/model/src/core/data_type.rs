use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, collections::HashMap, fmt};

/// Column types known to the toolkit.
///
/// Length, precision and scale travel with the variant that accepts them;
/// `None` means "unspecified" and renders as the bare keyword.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DataType {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Numeric {
        precision: Option<u32>,
        scale: Option<u32>,
    },
    Decimal {
        precision: Option<u32>,
        scale: Option<u32>,
    },
    Float(Option<u32>),
    Real,
    Double,
    Char(Option<u32>),
    NChar(Option<u32>),
    VarChar(Option<u32>),
    NVarChar(Option<u32>),
    AlphaNum(Option<u32>),
    ShortText(Option<u32>),
    Text,
    Clob,
    NClob,
    Binary(Option<u32>),
    VarBinary(Option<u32>),
    Blob,
    Date,
    Time,
    DateTime,
    Timestamp,
    SecondDate,
    /// Placeholder for a type the registry could not resolve.
    Null,
}

/// Which registry resolved a catalog type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeTier {
    Generic,
    Hana,
}

lazy_static! {
    static ref GENERIC_TYPE_MAP: HashMap<&'static str, DataType> = build_generic_type_map();
    static ref HANA_TYPE_MAP: HashMap<&'static str, DataType> = build_hana_type_map();
}

impl DataType {
    /// Resolves a catalog type name, checking the generic registry before the
    /// HANA-specific one.
    pub fn lookup(type_name: &str) -> Option<(Self, TypeTier)> {
        let normalized = Self::normalize_type_name(type_name);
        if let Some(data_type) = GENERIC_TYPE_MAP.get(normalized.as_str()) {
            return Some((data_type.clone(), TypeTier::Generic));
        }
        HANA_TYPE_MAP
            .get(normalized.as_str())
            .map(|data_type| (data_type.clone(), TypeTier::Hana))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DataType::Null)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DataType::TinyInt | DataType::SmallInt | DataType::Integer | DataType::BigInt
        )
    }

    pub fn is_fixed_point(&self) -> bool {
        matches!(self, DataType::Numeric { .. } | DataType::Decimal { .. })
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(self, DataType::Float(_) | DataType::Real | DataType::Double)
    }

    pub fn is_character(&self) -> bool {
        matches!(
            self,
            DataType::Char(_)
                | DataType::NChar(_)
                | DataType::VarChar(_)
                | DataType::NVarChar(_)
                | DataType::AlphaNum(_)
                | DataType::ShortText(_)
                | DataType::Text
                | DataType::Clob
                | DataType::NClob
        )
    }

    /// The bare type keyword, without length or precision.
    pub fn type_name(&self) -> Cow<'static, str> {
        let name = match self {
            DataType::Boolean => "BOOLEAN",
            DataType::TinyInt => "TINYINT",
            DataType::SmallInt => "SMALLINT",
            DataType::Integer => "INTEGER",
            DataType::BigInt => "BIGINT",
            DataType::Numeric { .. } => "NUMERIC",
            DataType::Decimal { .. } => "DECIMAL",
            DataType::Float(_) => "FLOAT",
            DataType::Real => "REAL",
            DataType::Double => "DOUBLE",
            DataType::Char(_) => "CHAR",
            DataType::NChar(_) => "NCHAR",
            DataType::VarChar(_) => "VARCHAR",
            DataType::NVarChar(_) => "NVARCHAR",
            DataType::AlphaNum(_) => "ALPHANUM",
            DataType::ShortText(_) => "SHORTTEXT",
            DataType::Text => "TEXT",
            DataType::Clob => "CLOB",
            DataType::NClob => "NCLOB",
            DataType::Binary(_) => "BINARY",
            DataType::VarBinary(_) => "VARBINARY",
            DataType::Blob => "BLOB",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::DateTime => "DATETIME",
            DataType::Timestamp => "TIMESTAMP",
            DataType::SecondDate => "SECONDDATE",
            DataType::Null => "NULL",
        };
        Cow::Borrowed(name)
    }

    fn normalize_type_name(type_name: &str) -> String {
        type_name.trim().to_uppercase()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.type_name();
        match self {
            DataType::Numeric {
                precision: Some(p),
                scale: Some(s),
            }
            | DataType::Decimal {
                precision: Some(p),
                scale: Some(s),
            } => write!(f, "{name}({p}, {s})"),
            DataType::Numeric {
                precision: Some(p),
                scale: None,
            }
            | DataType::Decimal {
                precision: Some(p),
                scale: None,
            } => write!(f, "{name}({p})"),
            DataType::Float(Some(len))
            | DataType::Char(Some(len))
            | DataType::NChar(Some(len))
            | DataType::VarChar(Some(len))
            | DataType::NVarChar(Some(len))
            | DataType::AlphaNum(Some(len))
            | DataType::ShortText(Some(len))
            | DataType::Binary(Some(len))
            | DataType::VarBinary(Some(len)) => write!(f, "{name}({len})"),
            _ => write!(f, "{name}"),
        }
    }
}

fn build_generic_type_map() -> HashMap<&'static str, DataType> {
    use DataType::*;

    let entries = [
        ("BIGINT", BigInt),
        ("BINARY", Binary(None)),
        ("BLOB", Blob),
        ("BOOLEAN", Boolean),
        ("CHAR", Char(None)),
        ("CLOB", Clob),
        ("DATE", Date),
        ("DATETIME", DateTime),
        (
            "DECIMAL",
            Decimal {
                precision: None,
                scale: None,
            },
        ),
        ("FLOAT", Float(None)),
        ("INT", Integer),
        ("INTEGER", Integer),
        ("NCHAR", NChar(None)),
        (
            "NUMERIC",
            Numeric {
                precision: None,
                scale: None,
            },
        ),
        ("NVARCHAR", NVarChar(None)),
        ("REAL", Real),
        ("SMALLINT", SmallInt),
        ("TEXT", Text),
        ("TIME", Time),
        ("TIMESTAMP", Timestamp),
        ("VARBINARY", VarBinary(None)),
        ("VARCHAR", VarChar(None)),
    ];

    entries.into_iter().collect()
}

fn build_hana_type_map() -> HashMap<&'static str, DataType> {
    use DataType::*;

    let entries = [
        ("ALPHANUM", AlphaNum(None)),
        ("BOOLEAN", Boolean),
        ("DATE", Date),
        ("DOUBLE", Double),
        ("NCLOB", NClob),
        ("SECONDDATE", SecondDate),
        ("SHORTTEXT", ShortText(None)),
        ("TIME", Time),
        ("TIMESTAMP", Timestamp),
        ("TINYINT", TinyInt),
    ];

    entries.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_tier_wins() {
        let (data_type, tier) = DataType::lookup("TIMESTAMP").unwrap();
        assert_eq!(data_type, DataType::Timestamp);
        assert_eq!(tier, TypeTier::Generic);
    }

    #[test]
    fn test_hana_tier_fallback() {
        let (data_type, tier) = DataType::lookup("TINYINT").unwrap();
        assert_eq!(data_type, DataType::TinyInt);
        assert_eq!(tier, TypeTier::Hana);

        let (data_type, tier) = DataType::lookup("seconddate").unwrap();
        assert_eq!(data_type, DataType::SecondDate);
        assert_eq!(tier, TypeTier::Hana);
    }

    #[test]
    fn test_unknown_type() {
        assert!(DataType::lookup("ST_GEOMETRY").is_none());
    }

    #[test]
    fn test_display_with_arguments() {
        let decimal = DataType::Decimal {
            precision: Some(10),
            scale: Some(2),
        };
        assert_eq!(decimal.to_string(), "DECIMAL(10, 2)");
        assert_eq!(DataType::VarChar(Some(32)).to_string(), "VARCHAR(32)");
        assert_eq!(DataType::VarChar(None).to_string(), "VARCHAR");
    }
}
