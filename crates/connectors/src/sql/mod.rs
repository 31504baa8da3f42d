pub mod base;
pub mod hana;
