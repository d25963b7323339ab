// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory storage driver implementation for testing
//!
//! Backed by a BTreeMap so that iteration and prefix scans visit keys in
//! ascending byte order, matching the sled driver.

use super::traits::{StorageDriver, StorageTree};
use super::types::{StorageResult, StorageType};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

/// In-memory storage driver for testing
pub struct MemoryStorageDriver {
    trees: Arc<RwLock<HashMap<String, Arc<MemoryTree>>>>,
}

/// In-memory key-ordered tree implementation
pub struct MemoryTree {
    data: Arc<RwLock<BTreeMap<Vec<u8>, Vec<u8>>>>,
}

impl MemoryStorageDriver {
    /// Create a new memory storage driver
    pub fn new() -> Self {
        Self {
            trees: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryStorageDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper bound of the key range starting with `prefix`: the prefix with its
/// last non-0xFF byte incremented. None means the range is unbounded above.
fn prefix_upper_bound(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut end = prefix.to_vec();
    while let Some(last) = end.last_mut() {
        if *last < u8::MAX {
            *last += 1;
            return Some(end);
        }
        end.pop();
    }
    None
}

impl MemoryTree {
    fn collect_range(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
        let data = self.data.read();
        let range: Vec<(Vec<u8>, Vec<u8>)> = match prefix_upper_bound(prefix) {
            Some(end) => data
                .range(prefix.to_vec()..end)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            None => data
                .range(prefix.to_vec()..)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        };
        range
    }
}

impl StorageTree for MemoryTree {
    fn insert(&self, key: &[u8], value: &[u8]) -> StorageResult<()> {
        self.data.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn len(&self) -> StorageResult<u64> {
        Ok(self.data.read().len() as u64)
    }

    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.data.read().is_empty())
    }

    fn iter(
        &self,
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<(Vec<u8>, Vec<u8>)>> + '_>> {
        let data = self.data.read();
        let items: Vec<_> = data.iter().map(|(k, v)| Ok((k.clone(), v.clone()))).collect();
        Ok(Box::new(items.into_iter()))
    }

    fn scan_prefix(
        &self,
        prefix: &[u8],
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<(Vec<u8>, Vec<u8>)>> + '_>> {
        let items: Vec<_> = self.collect_range(prefix).into_iter().map(Ok).collect();
        Ok(Box::new(items.into_iter()))
    }

    fn scan_keys(
        &self,
        prefix: &[u8],
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<Vec<u8>>> + '_>> {
        let items: Vec<_> = self
            .collect_range(prefix)
            .into_iter()
            .map(|(k, _)| Ok(k))
            .collect();
        Ok(Box::new(items.into_iter()))
    }

    fn flush(&self) -> StorageResult<()> {
        // No-op for memory storage
        Ok(())
    }
}

impl StorageDriver for MemoryStorageDriver {
    type Tree = Box<dyn StorageTree>;

    fn open<P: AsRef<Path>>(_path: P) -> StorageResult<Self> {
        Ok(Self::new())
    }

    fn open_tree(&self, name: &str) -> StorageResult<Self::Tree> {
        let mut trees = self.trees.write();

        let tree = trees
            .entry(name.to_string())
            .or_insert_with(|| {
                Arc::new(MemoryTree {
                    data: Arc::new(RwLock::new(BTreeMap::new())),
                })
            })
            .clone();

        Ok(Box::new(MemoryTree {
            data: tree.data.clone(),
        }) as Box<dyn StorageTree>)
    }

    fn flush(&self) -> StorageResult<()> {
        // No-op for memory storage
        Ok(())
    }

    fn storage_type(&self) -> StorageType {
        StorageType::Memory
    }
}
