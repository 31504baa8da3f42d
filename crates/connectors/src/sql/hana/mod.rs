pub mod adapter;
pub mod connect;
pub mod context;
pub mod data_type;
pub mod dialect;
pub mod introspection;
pub mod params;
