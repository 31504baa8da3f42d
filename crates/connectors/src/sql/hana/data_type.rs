use model::core::data_type::{DataType, TypeTier};
use tracing::{trace, warn};

/// Resolves a `TABLE_COLUMNS.DATA_TYPE_NAME` into a column type.
///
/// The generic tier is consulted before the HANA tier. Unknown names never
/// fail: a warning is emitted and the `Null` placeholder returned. DECIMAL
/// picks up the catalog `(LENGTH, SCALE)` pair and VARCHAR its `LENGTH`.
pub fn resolve_column_type(
    type_name: &str,
    column: &str,
    length: Option<u32>,
    scale: Option<u32>,
) -> DataType {
    let Some((data_type, tier)) = DataType::lookup(type_name) else {
        warn!("Did not recognize type '{}' of column '{}'", type_name, column);
        return DataType::Null;
    };

    if tier == TypeTier::Hana {
        trace!("Column '{}' uses HANA type '{}'", column, type_name);
    }

    match data_type {
        DataType::Decimal { .. } => DataType::Decimal {
            precision: length,
            scale,
        },
        DataType::VarChar(_) => DataType::VarChar(length),
        other => other,
    }
}
