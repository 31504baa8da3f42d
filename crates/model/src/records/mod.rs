pub mod catalog;
pub mod row;
