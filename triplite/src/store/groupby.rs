// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Grouped counting over a sorted index scan
//!
//! Computes, for a list of grouping fields, how many edges share each
//! distinct combination of values on those fields - GROUP BY / COUNT(*)
//! without a hash table. The selected index is already sorted by the
//! grouping key, so equal keys are contiguous and one linear pass with a
//! run-length counter suffices: O(1) auxiliary state, keys compared by
//! structural value equality.
//!
//! The stream ends with an explicit sentinel row whose key is `None` and
//! whose count is 0. Consumers must treat the sentinel as end-of-stream,
//! never as a real group.

use crate::storage::keys::decode_tuple;
use crate::storage::persistent::StorageResult;
use crate::storage::value::Value;
use crate::store::error::{StoreError, StoreResult};
use log::warn;

/// One group: the distinct key and the number of edges carrying it
///
/// The terminal sentinel is `GroupRow { key: None, count: 0 }`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRow {
    pub key: Option<Vec<Value>>,
    pub count: u64,
}

impl GroupRow {
    /// Whether this row is the end-of-stream sentinel
    pub fn is_sentinel(&self) -> bool {
        self.key.is_none()
    }
}

enum State {
    Scanning,
    Sentinel,
    Done,
}

/// Run-length group counter over a key-only scan of an entire tree
pub struct GroupByCursor<'a> {
    inner: Box<dyn Iterator<Item = StorageResult<Vec<u8>>> + 'a>,
    /// How many leading values of each key form the grouping key
    arity: usize,
    last_key: Option<Vec<Value>>,
    run_count: u64,
    state: State,
}

impl<'a> GroupByCursor<'a> {
    pub(crate) fn new(
        inner: Box<dyn Iterator<Item = StorageResult<Vec<u8>>> + 'a>,
        arity: usize,
    ) -> Self {
        Self {
            inner,
            arity,
            last_key: None,
            run_count: 0,
            state: State::Scanning,
        }
    }
}

impl Iterator for GroupByCursor<'_> {
    type Item = StoreResult<GroupRow>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => return None,
            State::Sentinel => {
                self.state = State::Done;
                return Some(Ok(GroupRow {
                    key: None,
                    count: 0,
                }));
            }
            State::Scanning => {}
        }

        loop {
            match self.inner.next() {
                None => {
                    return match self.last_key.take() {
                        Some(last) => {
                            self.state = State::Sentinel;
                            Some(Ok(GroupRow {
                                key: Some(last),
                                count: self.run_count,
                            }))
                        }
                        None => {
                            // Empty tree: nothing but the sentinel
                            self.state = State::Done;
                            Some(Ok(GroupRow {
                                key: None,
                                count: 0,
                            }))
                        }
                    };
                }
                Some(Err(e)) => {
                    self.state = State::Done;
                    warn!("group-by scan failed: {}", e);
                    return Some(Err(StoreError::cursor(e)));
                }
                Some(Ok(bytes)) => {
                    let key = match decode_tuple(&bytes, self.arity) {
                        Ok(key) => key,
                        Err(e) => {
                            self.state = State::Done;
                            return Some(Err(StoreError::Corrupt(e)));
                        }
                    };
                    match self.last_key.take() {
                        None => {
                            self.last_key = Some(key);
                            self.run_count = 1;
                        }
                        Some(last) if last == key => {
                            self.last_key = Some(last);
                            self.run_count += 1;
                        }
                        Some(last) => {
                            // Run boundary: emit the finished group. The key
                            // that opened the new run counts itself.
                            self.last_key = Some(key);
                            let count = self.run_count;
                            self.run_count = 1;
                            return Some(Ok(GroupRow {
                                key: Some(last),
                                count,
                            }));
                        }
                    }
                }
            }
        }
    }
}
