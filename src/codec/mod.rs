pub mod errors;
pub mod format;
pub mod row_builder;
pub mod row_view;

pub use errors::CodecError;
pub use format::{EMPTY_TOKEN, NONE_TOKEN, NULL_TOKEN, RowLayout};
pub use row_builder::RowBuilder;
pub use row_view::RowView;
