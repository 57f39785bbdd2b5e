use crate::schema::{ColumnSchema, ColumnType, IndexSpec, TableSchema};

pub struct TableSchemaFactory {
    name: String,
    columns: Vec<ColumnSchema>,
    indexes: Vec<IndexSpec>,
}

impl TableSchemaFactory {
    pub fn new() -> Self {
        Self {
            name: "rides".to_string(),
            columns: Vec::new(),
            indexes: Vec::new(),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with(mut self, name: &str, col_type: &str) -> Self {
        self.columns.push(ColumnSchema::new(name, parse(col_type)));
        self
    }

    pub fn with_indexed(mut self, name: &str, col_type: &str) -> Self {
        let mut col = ColumnSchema::new(name, parse(col_type));
        col.indexed = true;
        self.columns.push(col);
        self
    }

    pub fn with_time(mut self, name: &str, col_type: &str) -> Self {
        let mut col = ColumnSchema::new(name, parse(col_type));
        col.is_time = true;
        self.columns.push(col);
        self
    }

    pub fn with_indexed_time(mut self, name: &str, col_type: &str) -> Self {
        let mut col = ColumnSchema::new(name, parse(col_type));
        col.indexed = true;
        col.is_time = true;
        self.columns.push(col);
        self
    }

    pub fn with_index(mut self, name: &str, columns: &[&str]) -> Self {
        self.indexes.push(IndexSpec {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    pub fn create(self) -> TableSchema {
        TableSchema {
            name: self.name,
            columns: self.columns,
            indexes: self.indexes,
        }
    }
}

fn parse(col_type: &str) -> ColumnType {
    ColumnType::from_primitive_str(col_type).unwrap_or(ColumnType::String)
}
