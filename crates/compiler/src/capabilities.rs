use serde::Serialize;

/// What a SQL dialect supports. Built once per dialect and shared by
/// reference; never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialectCapabilities {
    pub name: &'static str,
    pub driver: &'static str,
    pub encoding: &'static str,
    pub convert_unicode: bool,
    pub supports_unicode_statements: bool,
    pub supports_unicode_binds: bool,
    pub returns_unicode_strings: bool,
    pub description_encoding_unicode: bool,
    pub requires_name_normalize: bool,
    pub supports_sequences: bool,
    pub supports_native_decimal: bool,
    pub supports_native_boolean: bool,
    pub supports_empty_insert: bool,
    pub supports_default_values: bool,
    pub postfetch_lastrowid: bool,
    pub implicit_returning: bool,
    pub supports_sane_multi_rowcount: bool,
    pub supports_named_constraints: bool,
    pub supports_check_constraints: bool,
    pub default_port: u16,
}

pub static HANA_CAPABILITIES: DialectCapabilities = DialectCapabilities {
    name: "hana",
    driver: "hdbconnect",
    encoding: "cesu-8",
    convert_unicode: true,
    supports_unicode_statements: true,
    supports_unicode_binds: true,
    returns_unicode_strings: true,
    description_encoding_unicode: true,
    requires_name_normalize: true,
    supports_sequences: true,
    supports_native_decimal: true,
    supports_native_boolean: false,
    supports_empty_insert: false,
    supports_default_values: false,
    postfetch_lastrowid: false,
    implicit_returning: false,
    supports_sane_multi_rowcount: false,
    supports_named_constraints: false,
    supports_check_constraints: false,
    default_port: 30015,
};
