use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use crate::codec::format;
use crate::schema::{SchemaError, TableSchema};

/// Index-group layout derived once per batch: group id -> ordered member
/// positions. Explicit index definitions take exclusive precedence over
/// legacy per-column flags; the two schemes are never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexLayout {
    groups: BTreeMap<u32, Vec<u32>>,
    indexed: HashSet<u32>,
}

impl IndexLayout {
    pub fn derive(schema: &TableSchema) -> Result<Self, SchemaError> {
        let mut groups = BTreeMap::new();
        if schema.indexes.is_empty() {
            // Legacy path: every flagged column is its own singleton
            // group, ids in ascending column position order.
            let mut next_group = 0u32;
            for (pos, col) in schema.columns.iter().enumerate() {
                if col.indexed {
                    groups.insert(next_group, vec![pos as u32]);
                    next_group += 1;
                }
            }
        } else {
            let positions = schema.position_map();
            for (group, index) in schema.indexes.iter().enumerate() {
                let mut members = Vec::with_capacity(index.columns.len());
                for column in &index.columns {
                    let pos = positions.get(column.as_str()).copied().ok_or_else(|| {
                        SchemaError::UnknownIndexColumn {
                            index: index.name.clone(),
                            column: column.clone(),
                        }
                    })?;
                    members.push(pos);
                }
                groups.insert(group as u32, members);
            }
        }
        let indexed = groups.values().flatten().copied().collect();
        debug!(target: "insert::layout", table = %schema.name, groups = groups.len(), "Derived index layout");
        Ok(Self { groups, indexed })
    }

    pub fn groups(&self) -> &BTreeMap<u32, Vec<u32>> {
        &self.groups
    }

    pub fn is_indexed(&self, pos: u32) -> bool {
        self.indexed.contains(&pos)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Initial dimension-source map: every indexed position starts at
    /// the "never appended" sentinel, so columns skipped entirely still
    /// contribute a deterministic placeholder to their group's key.
    pub fn seed_sources(&self) -> HashMap<u32, String> {
        self.indexed
            .iter()
            .map(|pos| (*pos, format::NONE_TOKEN.to_string()))
            .collect()
    }
}
