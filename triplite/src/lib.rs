// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! triplite - a minimal embedded triple store
//!
//! triplite stores labeled edges `source --[property]--> target` and answers
//! arbitrary partial patterns over them. One secondary index exists per
//! non-empty subset of the three fields; a query's present fields pick the
//! exactly-matching index, and grouped counts come from a single run-length
//! pass over a sorted index scan.
//!
//! # Features
//!
//! - **Partial-pattern queries**: find, count, and materialize edges by any
//!   combination of fixed field values
//! - **Seven-index catalog**: every field subset has its own key-ordered
//!   index, maintained synchronously with writes
//! - **Run-length group-by**: GROUP BY / COUNT(*) without a hash table
//! - **Explicit sessions**: a session value is threaded through every call
//! - **Pluggable storage**: sled (persistent, default) or in-memory
//!
//! # Usage
//!
//! ```rust,no_run
//! use triplite::{Edge, EdgeTemplate, Field, SessionMode, TripleStore};
//!
//! let store = TripleStore::open("./celebs")?;
//! let session = store.session(SessionMode::ReadWrite)?;
//!
//! session.upsert(Edge::new("Bob Dylan", "born_in", "Duluth"))?;
//! session.upsert(Edge::new("Steve Foucault", "born_in", "Duluth"))?;
//! session.upsert(Edge::new("Duluth", "contained_by", "MN"))?;
//!
//! // Who was born in Duluth?
//! for edge in session.find(&EdgeTemplate::new().property("born_in").target("Duluth"))? {
//!     println!("born in Duluth: {}", edge?.source);
//! }
//!
//! // How many edges per property?
//! for row in session.group_by(&[Field::Property])? {
//!     let row = row?;
//!     if !row.is_sentinel() {
//!         println!("{:?}: {}", row.key, row.count);
//!     }
//! }
//! # Ok::<(), triplite::StoreError>(())
//! ```

pub mod storage;
pub mod store;

// Re-export the public API
pub use storage::value::Value;
pub use storage::{StorageDriver, StorageTree, StorageType};
pub use store::{
    Edge, EdgeCursor, EdgeTemplate, Field, FieldSet, GroupByCursor, GroupRow, Session,
    SessionMode, StoreError, StoreResult, TripleStore,
};

/// triplite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
