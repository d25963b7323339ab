// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Storage driver types and error handling
//!
//! Defines the types, enums, and errors used throughout the storage
//! driver layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage driver type configuration
///
/// Specifies which underlying storage technology to use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum StorageType {
    /// Sled - Pure Rust embedded key-ordered database
    /// Best for: persistent embedded use
    #[default]
    Sled,

    /// Memory - In-memory ordered storage
    /// Best for: unit testing, development
    Memory,
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StorageType::Sled => "sled",
            StorageType::Memory => "memory",
        };
        write!(f, "{}", name)
    }
}

/// Error type for storage driver operations
///
/// Covers the failure modes of the underlying storage engine. Designed to
/// be easily converted from engine-specific errors.
#[derive(Error, Debug)]
pub enum StorageDriverError {
    /// I/O related errors (file system, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Driver-specific error (sled, etc.)
    #[error("Storage driver error: {0}")]
    BackendSpecific(String),
}

impl From<bincode::Error> for StorageDriverError {
    fn from(e: bincode::Error) -> Self {
        StorageDriverError::Serialization(e.to_string())
    }
}

/// Result type for storage driver operations
pub type StorageResult<T> = Result<T, StorageDriverError>;
