use crate::insert::DefaultValues;
use crate::types::ScalarValue;

pub struct DefaultValuesFactory {
    values: Vec<(u32, ScalarValue)>,
}

impl DefaultValuesFactory {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn with(mut self, pos: u32, value: ScalarValue) -> Self {
        self.values.push((pos, value));
        self
    }

    pub fn with_null(mut self, pos: u32) -> Self {
        self.values.push((pos, ScalarValue::Null));
        self
    }

    pub fn create(self) -> DefaultValues {
        let mut defaults = DefaultValues::new();
        for (pos, value) in self.values {
            defaults.insert(pos, value);
        }
        defaults
    }
}
