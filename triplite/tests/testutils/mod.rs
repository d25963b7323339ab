//! Shared helpers for triplite integration tests
//!
//! Tests run against a private in-memory store each; the sled driver is
//! exercised separately in the persistence tests.

use triplite::{Edge, EdgeTemplate, Field, Session, SessionMode, TripleStore, Value};

/// A fresh in-memory store
pub fn memory_store() -> TripleStore {
    let _ = env_logger::builder().is_test(true).try_init();
    TripleStore::in_memory()
}

/// A read-write session over a fresh in-memory store
pub fn rw_session() -> Session {
    memory_store()
        .session(SessionMode::ReadWrite)
        .expect("Failed to open session")
}

/// The example dataset from the store's documentation: two people born in
/// Duluth, and Duluth contained by MN
pub fn seed_duluth(session: &Session) {
    for edge in [
        Edge::new("Bob Dylan", "born_in", "Duluth"),
        Edge::new("Steve Foucault", "born_in", "Duluth"),
        Edge::new("Duluth", "contained_by", "MN"),
    ] {
        session.upsert(edge).expect("Failed to upsert seed edge");
    }
}

/// Build a template constraining `fields` to `values` (parallel slices)
pub fn template_for(fields: &[Field], values: &[Value]) -> EdgeTemplate {
    assert_eq!(fields.len(), values.len());
    let mut template = EdgeTemplate::new();
    for (&field, value) in fields.iter().zip(values) {
        template = match field {
            Field::Source => template.source(value.clone()),
            Field::Property => template.property(value.clone()),
            Field::Target => template.target(value.clone()),
        };
    }
    template
}
