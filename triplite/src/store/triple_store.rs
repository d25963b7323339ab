// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! The store handle
//!
//! `TripleStore` owns the storage driver and the write gate that serializes
//! upserts across sessions. It hands out explicit `Session` values; all
//! reads and writes go through a session.

use crate::storage::persistent::{MemoryStorageDriver, StorageDriver, StorageTree};
#[cfg(feature = "sled-backend")]
use crate::storage::persistent::SledDriver;
use crate::store::error::StoreResult;
use crate::store::session::{Session, SessionMode};
#[cfg(feature = "sled-backend")]
use log::info;
use parking_lot::Mutex;
#[cfg(feature = "sled-backend")]
use std::path::Path;
use std::sync::Arc;

/// An embedded triple store over a key-ordered storage engine
pub struct TripleStore {
    driver: Arc<dyn StorageDriver<Tree = Box<dyn StorageTree>>>,
    write_gate: Arc<Mutex<()>>,
}

impl TripleStore {
    /// Open or create a persistent store at the given path (sled)
    #[cfg(feature = "sled-backend")]
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let driver = SledDriver::open(path.as_ref())?;
        info!(
            "opened {} triple store at {}",
            driver.storage_type(),
            path.as_ref().display()
        );
        Ok(Self::with_driver(Arc::new(driver)))
    }

    /// Create a transient in-memory store
    pub fn in_memory() -> Self {
        Self::with_driver(Arc::new(MemoryStorageDriver::new()))
    }

    /// Build a store over any storage driver
    pub fn with_driver(driver: Arc<dyn StorageDriver<Tree = Box<dyn StorageTree>>>) -> Self {
        Self {
            driver,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Open a session with the given access mode
    ///
    /// Fails with `StorageUnavailable` if the engine cannot open the
    /// primary or index trees.
    pub fn session(&self, mode: SessionMode) -> StoreResult<Session> {
        Session::open(self.driver.as_ref(), mode, self.write_gate.clone())
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> StoreResult<()> {
        self.driver.flush()?;
        Ok(())
    }
}
