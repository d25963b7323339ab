// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Index catalog
//!
//! One secondary index exists for every non-empty subset of
//! `{source, property, target}` - seven in total. An index maps the
//! sub-tuple of an edge's values on those fields to the set of edges
//! agreeing on them. Index names are derived deterministically from the
//! subset: field names in fixed order, comma-joined.
//!
//! Entry key layout: `encode(sub-tuple) || encode(full triple)`. Buckets
//! sort by value order on the sub-tuple; entries within a bucket sort by
//! the full triple. The triple determines both parts, so replacing an edge
//! rewrites the same keys - bucket membership never changes on upsert.

use crate::storage::keys::encode_value;
use crate::storage::persistent::{StorageDriver, StorageResult, StorageTree};
use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{Edge, Field};
use log::debug;
use std::fmt;

/// A subset of the three indexed fields, tracked as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldSet(u8);

impl FieldSet {
    const BITS: [(Field, u8); 3] = [
        (Field::Source, 0b001),
        (Field::Property, 0b010),
        (Field::Target, 0b100),
    ];

    /// All seven non-empty subsets, singletons first
    pub const ALL_NON_EMPTY: [FieldSet; 7] = [
        FieldSet(0b001),
        FieldSet(0b010),
        FieldSet(0b100),
        FieldSet(0b011),
        FieldSet(0b101),
        FieldSet(0b110),
        FieldSet(0b111),
    ];

    /// The empty subset
    pub fn empty() -> Self {
        FieldSet(0)
    }

    /// Build a subset from a list of fields (duplicates collapse)
    pub fn from_fields(fields: &[Field]) -> Self {
        let mut set = FieldSet::empty();
        for &field in fields {
            set.insert(field);
        }
        set
    }

    /// Add a field to the subset
    pub fn insert(&mut self, field: Field) {
        self.0 |= Self::bit(field);
    }

    /// Whether the subset contains a field
    pub fn contains(&self, field: Field) -> bool {
        self.0 & Self::bit(field) != 0
    }

    /// Whether the subset is empty
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of fields in the subset
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// The subset's fields in fixed order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(|&f| self.contains(f))
    }

    /// Canonical index name: comma-joined field names in fixed order
    pub fn index_name(&self) -> String {
        self.fields()
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Tree name in the engine's namespace
    pub(crate) fn tree_name(&self) -> String {
        format!("idx_{}", self.index_name())
    }

    fn bit(field: Field) -> u8 {
        Self::BITS
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, b)| *b)
            .unwrap_or(0)
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.index_name())
    }
}

/// The seven secondary indexes, maintained write-synchronously with the
/// primary tree
pub(crate) struct IndexCatalog {
    indexes: Vec<(FieldSet, Box<dyn StorageTree>)>,
}

impl IndexCatalog {
    /// Open all seven index trees through the driver
    pub fn open(
        driver: &dyn StorageDriver<Tree = Box<dyn StorageTree>>,
    ) -> StorageResult<Self> {
        let mut indexes = Vec::with_capacity(FieldSet::ALL_NON_EMPTY.len());
        for set in FieldSet::ALL_NON_EMPTY {
            let tree = driver.open_tree(&set.tree_name())?;
            debug!("opened index tree '{}'", set.tree_name());
            indexes.push((set, tree));
        }
        Ok(Self { indexes })
    }

    /// The index for exactly this field subset
    ///
    /// Fails with `NoSuchIndex` if the subset is not one of the seven valid
    /// non-empty subsets.
    pub fn index_for(&self, fields: FieldSet) -> StoreResult<&dyn StorageTree> {
        self.indexes
            .iter()
            .find(|(set, _)| *set == fields)
            .map(|(_, tree)| tree.as_ref())
            .ok_or_else(|| StoreError::NoSuchIndex(fields.index_name()))
    }

    /// Entry key for an edge in the index for `fields`
    pub fn entry_key(fields: FieldSet, edge: &Edge) -> Vec<u8> {
        let mut key = Vec::new();
        for field in fields.fields() {
            encode_value(&mut key, edge.field(field));
        }
        for value in edge.triple() {
            encode_value(&mut key, value);
        }
        key
    }

    /// Insert an edge's record into all seven indexes
    ///
    /// Called in the same logical write as the primary upsert. Each key is
    /// fully determined by the triple, so re-applying is idempotent.
    pub fn apply_upsert(&self, edge: &Edge, record: &[u8]) -> StorageResult<()> {
        for (set, tree) in &self.indexes {
            tree.insert(&Self::entry_key(*set, edge), record)?;
        }
        Ok(())
    }
}
