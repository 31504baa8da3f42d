pub mod adapter;
pub mod error;

#[cfg(test)]
pub(crate) mod mock;
