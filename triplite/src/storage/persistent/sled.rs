// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Sled storage driver implementation

use super::traits::{StorageDriver, StorageTree};
use super::types::{StorageDriverError, StorageResult, StorageType};
use std::path::Path;

/// Sled driver implementation
pub struct SledDriver {
    db: sled::Db,
}

/// Sled tree wrapper that implements StorageTree trait
pub struct SledTree {
    tree: sled::Tree,
}

impl StorageTree for SledTree {
    fn insert(&self, key: &[u8], value: &[u8]) -> StorageResult<()> {
        self.tree
            .insert(key, value)
            .map_err(|e| StorageDriverError::BackendSpecific(e.to_string()))?;
        Ok(())
    }

    fn get(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>> {
        self.tree
            .get(key)
            .map_err(|e| StorageDriverError::BackendSpecific(e.to_string()))
            .map(|opt| opt.map(|v| v.to_vec()))
    }

    fn len(&self) -> StorageResult<u64> {
        Ok(self.tree.len() as u64)
    }

    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.tree.is_empty())
    }

    fn iter(
        &self,
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<(Vec<u8>, Vec<u8>)>> + '_>> {
        let iter = self.tree.iter().map(|result| {
            result
                .map(|(k, v)| (k.to_vec(), v.to_vec()))
                .map_err(|e| StorageDriverError::BackendSpecific(e.to_string()))
        });
        Ok(Box::new(iter))
    }

    fn scan_prefix(
        &self,
        prefix: &[u8],
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<(Vec<u8>, Vec<u8>)>> + '_>> {
        let iter = self.tree.scan_prefix(prefix).map(|result| {
            result
                .map(|(k, v)| (k.to_vec(), v.to_vec()))
                .map_err(|e| StorageDriverError::BackendSpecific(e.to_string()))
        });
        Ok(Box::new(iter))
    }

    fn scan_keys(
        &self,
        prefix: &[u8],
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<Vec<u8>>> + '_>> {
        let iter = self.tree.scan_prefix(prefix).keys().map(|result| {
            result
                .map(|k| k.to_vec())
                .map_err(|e| StorageDriverError::BackendSpecific(e.to_string()))
        });
        Ok(Box::new(iter))
    }

    fn flush(&self) -> StorageResult<()> {
        self.tree
            .flush()
            .map_err(|e| StorageDriverError::BackendSpecific(e.to_string()))?;
        Ok(())
    }
}

impl StorageDriver for SledDriver {
    type Tree = Box<dyn StorageTree>;

    fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let db =
            sled::open(path).map_err(|e| StorageDriverError::BackendSpecific(e.to_string()))?;
        Ok(SledDriver { db })
    }

    fn open_tree(&self, name: &str) -> StorageResult<Self::Tree> {
        let tree = self
            .db
            .open_tree(name)
            .map_err(|e| StorageDriverError::BackendSpecific(e.to_string()))?;
        Ok(Box::new(SledTree { tree }) as Box<dyn StorageTree>)
    }

    fn flush(&self) -> StorageResult<()> {
        self.db
            .flush()
            .map_err(|e| StorageDriverError::BackendSpecific(e.to_string()))?;
        Ok(())
    }

    fn storage_type(&self) -> StorageType {
        StorageType::Sled
    }
}
