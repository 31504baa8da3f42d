//! The HANA dialect: capability flags, connection handling and name casing.
//!
//! Catalog reflection lives in [`super::introspection`]; statement rendering
//! is delegated to the `compiler` crate's [`Hana`] dialect.

use crate::sql::{
    base::{
        adapter::SqlAdapter,
        error::{ConnectorError, DbError},
    },
    hana::connect::ConnectArgs,
};
use compiler::{
    capabilities::{DialectCapabilities, HANA_CAPABILITIES},
    query::dialect::{Dialect, Hana},
};
use std::sync::OnceLock;
use tracing::debug;

/// Callback run on every freshly opened connection.
pub type OnConnect = fn(&dyn SqlAdapter);

#[derive(Debug, Default)]
pub struct HanaDialect {
    sql: Hana,
    default_schema_name: OnceLock<String>,
}

impl HanaDialect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capabilities(&self) -> &'static DialectCapabilities {
        &HANA_CAPABILITIES
    }

    /// The statement-level dialect used to compile ASTs.
    pub fn sql(&self) -> &dyn Dialect {
        &self.sql
    }

    /// Caches the default schema of the first connection seen.
    pub fn initialize(&self, conn: &dyn SqlAdapter) {
        let schema = self
            .default_schema_name
            .get_or_init(|| Self::query_default_schema_name(conn));
        debug!("Default schema resolved to {}", schema);
    }

    /// The connecting user's name, upper-cased.
    pub fn default_schema_name(&self, conn: &dyn SqlAdapter) -> String {
        match self.default_schema_name.get() {
            Some(schema) => schema.clone(),
            None => Self::query_default_schema_name(conn),
        }
    }

    fn query_default_schema_name(conn: &dyn SqlAdapter) -> String {
        conn.user().to_uppercase()
    }

    pub fn create_connect_args(&self, url: &str) -> Result<ConnectArgs, ConnectorError> {
        ConnectArgs::from_url(url)
    }

    /// Only the connection's closed flag decides; the error is not inspected.
    pub fn is_disconnect(&self, _error: &DbError, conn: &dyn SqlAdapter) -> bool {
        conn.is_closed()
    }

    pub fn on_connect(&self) -> Option<OnConnect> {
        None
    }

    /// Version probing is not performed.
    pub fn server_version_info(&self, _conn: &dyn SqlAdapter) -> Option<Vec<u32>> {
        None
    }

    pub fn check_unicode_returns(&self, _conn: &dyn SqlAdapter) -> bool {
        self.capabilities().returns_unicode_strings
    }

    pub fn check_unicode_description(&self, _conn: &dyn SqlAdapter) -> bool {
        self.capabilities().description_encoding_unicode
    }

    /// Catalog form to canonical form: an all-upper identifier that would
    /// not need quoting once lower-cased becomes lower case.
    pub fn normalize_name(&self, name: Option<&str>) -> Option<String> {
        let name = name?;
        let lower = name.to_lowercase();
        if name.to_uppercase() == name && !self.requires_quotes(&lower) {
            Some(lower)
        } else {
            Some(name.to_string())
        }
    }

    /// Canonical form to catalog form: the inverse of [`Self::normalize_name`].
    pub fn denormalize_name(&self, name: Option<&str>) -> Option<String> {
        let name = name?;
        if name.to_lowercase() == name && !self.requires_quotes(name) {
            Some(name.to_uppercase())
        } else {
            Some(name.to_string())
        }
    }

    pub(crate) fn normalize(&self, name: &str) -> String {
        self.normalize_name(Some(name)).unwrap_or_default()
    }

    pub(crate) fn denormalize(&self, name: &str) -> String {
        self.denormalize_name(Some(name)).unwrap_or_default()
    }

    fn requires_quotes(&self, name: &str) -> bool {
        self.sql.preparer().requires_quotes(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::base::mock::MockAdapter;

    #[test]
    fn test_capability_flags() {
        let caps = HanaDialect::new().capabilities();
        assert_eq!(caps.name, "hana");
        assert_eq!(caps.encoding, "cesu-8");
        assert!(caps.supports_sequences);
        assert!(caps.supports_native_decimal);
        assert!(caps.requires_name_normalize);
        assert!(!caps.supports_native_boolean);
        assert!(!caps.supports_empty_insert);
        assert!(!caps.supports_default_values);
        assert!(!caps.implicit_returning);
        assert!(!caps.postfetch_lastrowid);
        assert!(!caps.supports_named_constraints);
        assert!(!caps.supports_check_constraints);
    }

    #[test]
    fn test_normalize_name() {
        let d = HanaDialect::new();
        assert_eq!(d.normalize_name(Some("MY_TABLE")).as_deref(), Some("my_table"));
        assert_eq!(d.normalize_name(Some("MyTable")).as_deref(), Some("MyTable"));
        // Reserved once lower-cased.
        assert_eq!(d.normalize_name(Some("ORDER")).as_deref(), Some("ORDER"));
        assert_eq!(d.normalize_name(Some("MY TABLE")).as_deref(), Some("MY TABLE"));
        assert_eq!(d.normalize_name(None), None);
    }

    #[test]
    fn test_denormalize_name() {
        let d = HanaDialect::new();
        assert_eq!(d.denormalize_name(Some("my_table")).as_deref(), Some("MY_TABLE"));
        assert_eq!(d.denormalize_name(Some("MyTable")).as_deref(), Some("MyTable"));
        assert_eq!(d.denormalize_name(Some("user")).as_deref(), Some("user"));
        assert_eq!(d.denormalize_name(Some("1abc")).as_deref(), Some("1abc"));
        assert_eq!(d.denormalize_name(None), None);
    }

    #[test]
    fn test_normalize_round_trip() {
        let d = HanaDialect::new();
        for name in ["CUSTOMERS", "ORDER_LINES", "T1", "A$B"] {
            let once = d.normalize(name);
            assert_eq!(d.normalize(&d.denormalize(&once)), once);
            assert_eq!(d.denormalize(&once), name);
        }
        for quoted in ["MixedCase", "select", "has space", "2fast"] {
            assert_eq!(d.normalize(quoted), quoted);
            assert_eq!(d.denormalize(quoted), quoted);
        }
    }

    #[test]
    fn test_default_schema_from_user() {
        let d = HanaDialect::new();
        let conn = MockAdapter::new("dev_user");
        assert_eq!(d.default_schema_name(&conn), "DEV_USER");

        d.initialize(&conn);
        let other = MockAdapter::new("someone_else");
        assert_eq!(d.default_schema_name(&other), "DEV_USER");
    }

    #[tokio::test]
    async fn test_is_disconnect_uses_closed_flag() {
        let d = HanaDialect::new();
        let conn = MockAdapter::new("u");
        let err = DbError::Unknown("connection reset".into());
        assert!(!d.is_disconnect(&err, &conn));

        conn.close().await.unwrap();
        assert!(d.is_disconnect(&DbError::Closed, &conn));
    }

    #[test]
    fn test_connection_hooks() {
        let d = HanaDialect::new();
        let conn = MockAdapter::new("u");
        assert!(d.on_connect().is_none());
        assert!(d.server_version_info(&conn).is_none());
        assert!(d.check_unicode_returns(&conn));
        assert!(d.check_unicode_description(&conn));

        let args = d.create_connect_args("hana://u:p@host").unwrap();
        assert_eq!(args.port, 30015);
    }
}
