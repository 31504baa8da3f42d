pub mod capabilities;
pub mod error;
pub mod identifier;
pub mod query;
pub mod types;
