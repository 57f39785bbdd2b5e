pub mod batch;
pub mod defaults;
pub mod errors;
pub mod index_layout;
pub mod row;

pub use batch::InsertBatch;
pub use defaults::DefaultValues;
pub use errors::InsertError;
pub use index_layout::IndexLayout;
pub use row::InsertRow;

#[cfg(test)]
mod defaults_test;
