// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! The triple store core
//!
//! This module provides:
//! - Edge and template data structures
//! - The seven-index catalog and its write-synchronous maintenance
//! - Exact-subset query planning
//! - Lazy cursors for find/count/lookup_all
//! - Run-length group-by over sorted index scans
//! - Explicit sessions and the store handle

pub mod catalog;
pub mod cursor;
pub mod error;
pub mod groupby;
pub(crate) mod planner;
pub mod session;
pub mod triple_store;
pub mod types;

pub use catalog::FieldSet;
pub use cursor::EdgeCursor;
pub use error::{StoreError, StoreResult};
pub use groupby::{GroupByCursor, GroupRow};
pub use session::{Session, SessionMode};
pub use triple_store::TripleStore;
pub use types::{Edge, EdgeTemplate, Field};
