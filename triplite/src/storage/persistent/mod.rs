// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Pluggable storage drivers
//!
//! The store talks to the underlying engine exclusively through the
//! `StorageDriver` / `StorageTree` traits. Two drivers are provided:
//! sled (persistent, default feature) and an in-memory ordered driver.

pub mod memory;
#[cfg(feature = "sled-backend")]
pub mod sled;
pub mod traits;
pub mod types;

pub use memory::MemoryStorageDriver;
#[cfg(feature = "sled-backend")]
pub use sled::SledDriver;
pub use traits::{StorageDriver, StorageTree};
pub use types::{StorageDriverError, StorageResult, StorageType};
