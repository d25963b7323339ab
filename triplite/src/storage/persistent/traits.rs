// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Storage driver traits
//!
//! Defines the core traits for storage drivers and trees. A driver opens
//! named trees; a tree is a key-ordered collection of key-value pairs.
//! Iteration and prefix scans visit keys in ascending byte order - the
//! store's index layout depends on that guarantee.

use super::types::{StorageResult, StorageType};
use std::path::Path;

/// Trait for a tree/column family in the storage driver
///
/// Represents a named, key-ordered collection of key-value pairs within a
/// storage driver.
pub trait StorageTree: Send + Sync {
    /// Insert a key-value pair, replacing any existing value
    fn insert(&self, key: &[u8], value: &[u8]) -> StorageResult<()>;

    /// Get a value by key
    fn get(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>>;

    /// Number of entries in the tree
    fn len(&self) -> StorageResult<u64>;

    /// Check if the tree is empty
    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Iterate over all key-value pairs in ascending key order
    fn iter(
        &self,
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<(Vec<u8>, Vec<u8>)>> + '_>>;

    /// Scan key-value pairs whose key starts with `prefix`, in ascending
    /// key order
    fn scan_prefix(
        &self,
        prefix: &[u8],
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<(Vec<u8>, Vec<u8>)>> + '_>>;

    /// Key-only scan with a key prefix, in ascending key order
    ///
    /// An empty prefix visits every key in the tree.
    fn scan_keys(
        &self,
        prefix: &[u8],
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<Vec<u8>>> + '_>>;

    /// Flush any pending writes to disk
    fn flush(&self) -> StorageResult<()>;
}

/// Main storage driver trait
///
/// Defines the interface that all storage drivers must implement.
pub trait StorageDriver: Send + Sync {
    /// Type of tree/column family used by this driver
    type Tree: StorageTree;

    /// Open or create a storage driver at the given path
    fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self>
    where
        Self: Sized;

    /// Open or create a named tree/column family
    fn open_tree(&self, name: &str) -> StorageResult<Self::Tree>;

    /// Flush all pending writes to disk
    fn flush(&self) -> StorageResult<()>;

    /// Get storage type
    fn storage_type(&self) -> StorageType;
}

// Helper implementation for Box<dyn StorageTree>
// This allows us to use boxed trait objects seamlessly
impl StorageTree for Box<dyn StorageTree> {
    fn insert(&self, key: &[u8], value: &[u8]) -> StorageResult<()> {
        (**self).insert(key, value)
    }

    fn get(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn len(&self) -> StorageResult<u64> {
        (**self).len()
    }

    fn is_empty(&self) -> StorageResult<bool> {
        (**self).is_empty()
    }

    fn iter(
        &self,
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<(Vec<u8>, Vec<u8>)>> + '_>> {
        (**self).iter()
    }

    fn scan_prefix(
        &self,
        prefix: &[u8],
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<(Vec<u8>, Vec<u8>)>> + '_>> {
        (**self).scan_prefix(prefix)
    }

    fn scan_keys(
        &self,
        prefix: &[u8],
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<Vec<u8>>> + '_>> {
        (**self).scan_keys(prefix)
    }

    fn flush(&self) -> StorageResult<()> {
        (**self).flush()
    }
}
