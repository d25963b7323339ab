// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Storage layer
//!
//! This module provides:
//! - Value type system for edge fields, with the total order that defines
//!   index sort order
//! - Order-preserving tuple key encoding
//! - Pluggable storage driver trait for key-ordered KV engines (sled,
//!   in-memory)

pub mod keys;
pub mod persistent;
pub mod value;

pub use keys::KeyError;
pub use persistent::{StorageDriver, StorageDriverError, StorageResult, StorageTree, StorageType};
pub use value::Value;
