//! Upsert semantics
//!
//! The store is a set of distinct triples: writing an existing triple
//! replaces the stored record, and a duplicate upsert leaves the store and
//! every index unchanged.

mod testutils;

use testutils::rw_session;
use triplite::{Edge, EdgeTemplate, Field, SessionMode, StoreError, TripleStore, Value};

#[test]
fn upsert_is_idempotent() {
    let session = rw_session();
    let edge = Edge::new("Bob Dylan", "born_in", "Duluth");

    session.upsert(edge.clone()).unwrap();
    session.upsert(edge.clone()).unwrap();

    assert_eq!(session.count(&EdgeTemplate::new()).unwrap(), 1);

    // All seven indexes hold exactly one entry for the triple
    let subsets: [&[Field]; 7] = [
        &[Field::Source],
        &[Field::Property],
        &[Field::Target],
        &[Field::Source, Field::Property],
        &[Field::Source, Field::Target],
        &[Field::Property, Field::Target],
        &[Field::Source, Field::Property, Field::Target],
    ];
    for fields in subsets {
        let values: Vec<Value> = fields.iter().map(|&f| edge.field(f).clone()).collect();
        let template = testutils::template_for(fields, &values);
        assert_eq!(session.count(&template).unwrap(), 1, "subset {:?}", fields);
    }
}

#[test]
fn upsert_replaces_carried_extra_fields() {
    let session = rw_session();

    session
        .upsert(Edge::new("Duluth", "contained_by", "MN").with_extra("confidence", 0.5))
        .unwrap();
    session
        .upsert(Edge::new("Duluth", "contained_by", "MN").with_extra("confidence", 0.9))
        .unwrap();

    let edges = session.lookup_all(&EdgeTemplate::new()).unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(
        edges[0].extra.get("confidence"),
        Some(&Value::Number(0.9))
    );

    // Replacement is visible through index lookups too, not just the
    // primary tree
    let via_index = session
        .lookup_all(&EdgeTemplate::new().property("contained_by"))
        .unwrap();
    assert_eq!(
        via_index[0].extra.get("confidence"),
        Some(&Value::Number(0.9))
    );
}

#[test]
fn null_triple_fields_are_rejected() {
    let session = rw_session();
    let err = session
        .upsert(Edge::new(Value::Null, "born_in", "Duluth"))
        .unwrap_err();
    assert!(matches!(err, StoreError::NullTripleField(Field::Source)));
    assert_eq!(session.count(&EdgeTemplate::new()).unwrap(), 0);
}

#[test]
fn read_only_sessions_reject_upserts() {
    let store = TripleStore::in_memory();
    let ro = store.session(SessionMode::ReadOnly).unwrap();
    let err = ro
        .upsert(Edge::new("Bob Dylan", "born_in", "Duluth"))
        .unwrap_err();
    assert!(matches!(err, StoreError::ReadOnly));

    // The same store accepts the write through a read-write session, and
    // the read-only session sees it
    let rw = store.session(SessionMode::ReadWrite).unwrap();
    rw.upsert(Edge::new("Bob Dylan", "born_in", "Duluth"))
        .unwrap();
    assert_eq!(ro.count(&EdgeTemplate::new()).unwrap(), 1);
}

#[test]
fn distinct_triples_are_distinct_edges() {
    let session = rw_session();
    session.upsert(Edge::new("a", "p", "x")).unwrap();
    session.upsert(Edge::new("a", "p", "y")).unwrap();
    session.upsert(Edge::new("a", "q", "x")).unwrap();
    session.upsert(Edge::new("b", "p", "x")).unwrap();

    assert_eq!(session.count(&EdgeTemplate::new()).unwrap(), 4);
    assert_eq!(
        session.count(&EdgeTemplate::new().source("a")).unwrap(),
        3
    );
    assert_eq!(
        session
            .count(&EdgeTemplate::new().source("a").property("p"))
            .unwrap(),
        2
    );
}
