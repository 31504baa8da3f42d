pub mod common;
pub mod create_table;
pub mod drop_table;
pub mod expr;
pub mod insert;
pub mod schema;
pub mod select;
pub mod sequence;
