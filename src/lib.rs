pub mod codec;
pub mod insert;
pub mod logging;
pub mod schema;
pub mod types;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
