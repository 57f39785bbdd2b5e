pub mod scalar_value;

pub use scalar_value::ScalarValue;
