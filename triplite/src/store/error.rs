// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for store operations

use crate::storage::keys::KeyError;
use crate::storage::persistent::StorageDriverError;
use crate::store::types::Field;
use thiserror::Error;

/// Errors that can occur during store operations
///
/// Nothing here is fatal to the process; every failure is scoped to the
/// operation that produced it.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The template names a field subset with no matching index. Cannot
    /// happen through the public template type, but checked defensively.
    #[error("template has no matching index")]
    InvalidTemplate,

    /// Catalog lookup for an index that does not exist
    #[error("no such index: '{0}'")]
    NoSuchIndex(String),

    /// The backing engine could not open a session/tree, or a write failed
    /// after the single transparent retry
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The underlying cursor reported an error mid-traversal
    #[error("cursor error: {0}")]
    Cursor(String),

    /// A stored index key failed to decode
    #[error("corrupt index key: {0}")]
    Corrupt(#[from] KeyError),

    /// A write was attempted through a read-only session
    #[error("session is read-only")]
    ReadOnly,

    /// An edge's triple field was null
    #[error("edge field '{0}' must not be null")]
    NullTripleField(Field),

    /// Stored edge record failed to encode or decode
    #[error("record serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

impl From<StorageDriverError> for StoreError {
    fn from(e: StorageDriverError) -> Self {
        StoreError::StorageUnavailable(e.to_string())
    }
}

impl StoreError {
    /// Create a cursor error from an engine error surfaced mid-scan
    pub(crate) fn cursor(e: StorageDriverError) -> Self {
        StoreError::Cursor(e.to_string())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
