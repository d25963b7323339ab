// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Lazy edge cursors
//!
//! A cursor is a pull-based iterator over the matches of a planned lookup,
//! in the selected tree's sort order. It is finite, produced once, and not
//! restartable; an engine error mid-scan ends the cursor after yielding the
//! error. No match yields an empty cursor, not an error.

use crate::storage::persistent::StorageResult;
use crate::store::error::{StoreError, StoreResult};
use crate::store::types::Edge;
use log::warn;

/// Lazy, ordered traversal of matching edges
///
/// Yields `Err` at most once: the first engine or decode failure fuses the
/// cursor.
pub struct EdgeCursor<'a> {
    inner: Box<dyn Iterator<Item = StorageResult<(Vec<u8>, Vec<u8>)>> + 'a>,
    done: bool,
}

impl<'a> EdgeCursor<'a> {
    pub(crate) fn new(
        inner: Box<dyn Iterator<Item = StorageResult<(Vec<u8>, Vec<u8>)>> + 'a>,
    ) -> Self {
        Self { inner, done: false }
    }
}

impl Iterator for EdgeCursor<'_> {
    type Item = StoreResult<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            None => {
                self.done = true;
                None
            }
            Some(Err(e)) => {
                self.done = true;
                warn!("cursor failed mid-scan: {}", e);
                Some(Err(StoreError::cursor(e)))
            }
            Some(Ok((_key, record))) => match bincode::deserialize::<Edge>(&record) {
                Ok(edge) => Some(Ok(edge)),
                Err(e) => {
                    self.done = true;
                    Some(Err(StoreError::Serialization(e)))
                }
            },
        }
    }
}
