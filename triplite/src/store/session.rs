// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Sessions
//!
//! Every store operation goes through an explicit `Session` value holding
//! the open tree handles and an access mode. Callers acquire a session,
//! thread it through their calls, and drop it when done - there is no
//! ambient transaction inferred from hidden request state, and nothing
//! expires on a timer.

use crate::storage::keys::encode_tuple;
use crate::storage::persistent::{StorageDriver, StorageResult, StorageTree};
use crate::store::catalog::{FieldSet, IndexCatalog};
use crate::store::cursor::EdgeCursor;
use crate::store::error::{StoreError, StoreResult};
use crate::store::groupby::GroupByCursor;
use crate::store::planner::{self, PlanTarget};
use crate::store::types::{Edge, EdgeTemplate, Field};
use log::warn;
use parking_lot::Mutex;
use std::sync::Arc;

/// Name of the primary tree holding one record per distinct triple
pub(crate) const PRIMARY_TREE: &str = "edges";

/// Access mode of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Queries only; upserts are rejected
    ReadOnly,
    /// Queries and upserts
    #[default]
    ReadWrite,
}

/// An explicit session over the store
///
/// Holds the primary tree, the seven index trees, and the store's write
/// gate. Cursors borrow the session, so it must outlive any iteration
/// started through it.
pub struct Session {
    mode: SessionMode,
    primary: Box<dyn StorageTree>,
    catalog: IndexCatalog,
    write_gate: Arc<Mutex<()>>,
}

impl Session {
    pub(crate) fn open(
        driver: &dyn StorageDriver<Tree = Box<dyn StorageTree>>,
        mode: SessionMode,
        write_gate: Arc<Mutex<()>>,
    ) -> StoreResult<Self> {
        let primary = driver.open_tree(PRIMARY_TREE)?;
        let catalog = IndexCatalog::open(driver)?;
        Ok(Self {
            mode,
            primary,
            catalog,
            write_gate,
        })
    }

    /// The session's access mode
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Insert or replace the edge with this triple
    ///
    /// The primary record and all seven index entries are written as one
    /// logical write under the store's write gate. The triple defines every
    /// key involved, so replacing an edge rewrites the same entries in
    /// place - only the carried record changes, never bucket membership.
    /// A failed engine write is retried once transparently before the
    /// error surfaces.
    pub fn upsert(&self, edge: Edge) -> StoreResult<()> {
        if self.mode == SessionMode::ReadOnly {
            return Err(StoreError::ReadOnly);
        }
        for field in Field::ALL {
            if edge.field(field).is_null() {
                return Err(StoreError::NullTripleField(field));
            }
        }

        let record = bincode::serialize(&edge)?;
        let triple_key = encode_tuple(edge.triple());

        let _guard = self.write_gate.lock();
        if let Err(first) = self.write_edge(&triple_key, &edge, &record) {
            warn!("upsert write failed, retrying once: {}", first);
            self.write_edge(&triple_key, &edge, &record)?;
        }
        Ok(())
    }

    fn write_edge(&self, triple_key: &[u8], edge: &Edge, record: &[u8]) -> StorageResult<()> {
        self.primary.insert(triple_key, record)?;
        self.catalog.apply_upsert(edge, record)
    }

    /// Lazily iterate the edges matching the template, in index order
    ///
    /// The scan is bounded to exact equality with the planned key: only
    /// edges whose sub-tuple equals the template's values are yielded. An
    /// empty template scans the whole primary tree in store order. No
    /// match is an empty cursor, not an error.
    pub fn find(&self, template: &EdgeTemplate) -> StoreResult<EdgeCursor<'_>> {
        let plan = planner::plan(template);
        let inner = match plan.target {
            PlanTarget::Primary => self.primary.iter()?,
            PlanTarget::Index(set) => {
                let tree = self.catalog.index_for(set)?;
                let key = plan.key.ok_or(StoreError::InvalidTemplate)?;
                tree.scan_prefix(&key)?
            }
        };
        Ok(EdgeCursor::new(inner))
    }

    /// Exact number of edges matching the template
    ///
    /// Counts at the planned key via a key-only scan; no edge record is
    /// decoded or materialized.
    pub fn count(&self, template: &EdgeTemplate) -> StoreResult<u64> {
        let plan = planner::plan(template);
        match plan.target {
            PlanTarget::Primary => Ok(self.primary.len()?),
            PlanTarget::Index(set) => {
                let tree = self.catalog.index_for(set)?;
                let key = plan.key.ok_or(StoreError::InvalidTemplate)?;
                let mut n = 0u64;
                for entry in tree.scan_keys(&key)? {
                    entry.map_err(StoreError::cursor)?;
                    n += 1;
                }
                Ok(n)
            }
        }
    }

    /// Materialize all matches of the template into an ordered list
    ///
    /// If the underlying cursor fails before exhaustion, the partial
    /// accumulation is discarded and the error returned.
    pub fn lookup_all(&self, template: &EdgeTemplate) -> StoreResult<Vec<Edge>> {
        self.find(template)?.collect()
    }

    /// Count edges grouped by each distinct combination of the given
    /// fields' values
    ///
    /// Scans the entire index for the field subset (values never bound a
    /// group-by scan) and counts runs of equal keys. The resulting stream
    /// yields one row per distinct key followed by the end-of-stream
    /// sentinel. An empty field list scans the primary tree, where every
    /// triple is its own group.
    pub fn group_by(&self, fields: &[Field]) -> StoreResult<GroupByCursor<'_>> {
        let set = FieldSet::from_fields(fields);
        let (tree, arity): (&dyn StorageTree, usize) = match planner::plan_scan(set) {
            PlanTarget::Primary => (self.primary.as_ref(), Field::ALL.len()),
            PlanTarget::Index(set) => (self.catalog.index_for(set)?, set.len()),
        };
        Ok(GroupByCursor::new(tree.scan_keys(&[])?, arity))
    }
}
