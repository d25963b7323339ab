//! Sled driver persistence
//!
//! The store and all seven indexes survive a close/reopen cycle.

#![cfg(feature = "sled-backend")]

use triplite::{Edge, EdgeTemplate, Field, GroupRow, SessionMode, TripleStore, Value};

#[test]
fn data_and_indexes_survive_reopen() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("triples");

    {
        let store = TripleStore::open(&db_path).expect("Failed to create store");
        let session = store.session(SessionMode::ReadWrite).unwrap();
        session
            .upsert(Edge::new("Bob Dylan", "born_in", "Duluth"))
            .unwrap();
        session
            .upsert(Edge::new("Steve Foucault", "born_in", "Duluth"))
            .unwrap();
        session
            .upsert(Edge::new("Duluth", "contained_by", "MN"))
            .unwrap();
        store.flush().unwrap();
    }

    let store = TripleStore::open(&db_path).expect("Failed to reopen store");
    let session = store.session(SessionMode::ReadOnly).unwrap();

    assert_eq!(session.count(&EdgeTemplate::new()).unwrap(), 3);

    let born_in_duluth = session
        .lookup_all(&EdgeTemplate::new().property("born_in").target("Duluth"))
        .unwrap();
    let sources: Vec<&Value> = born_in_duluth.iter().map(|e| &e.source).collect();
    assert_eq!(
        sources,
        vec![
            &Value::String("Bob Dylan".into()),
            &Value::String("Steve Foucault".into())
        ]
    );

    let rows: Vec<GroupRow> = session
        .group_by(&[Field::Property])
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(
        rows,
        vec![
            GroupRow {
                key: Some(vec![Value::String("born_in".into())]),
                count: 2
            },
            GroupRow {
                key: Some(vec![Value::String("contained_by".into())]),
                count: 1
            },
            GroupRow { key: None, count: 0 },
        ]
    );
}

#[test]
fn replacement_persists_across_reopen() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("triples");

    {
        let store = TripleStore::open(&db_path).unwrap();
        let session = store.session(SessionMode::ReadWrite).unwrap();
        session
            .upsert(Edge::new("Duluth", "contained_by", "MN").with_extra("since", 1856.0))
            .unwrap();
        session
            .upsert(Edge::new("Duluth", "contained_by", "MN").with_extra("since", 1857.0))
            .unwrap();
        store.flush().unwrap();
    }

    let store = TripleStore::open(&db_path).unwrap();
    let session = store.session(SessionMode::ReadOnly).unwrap();
    let edges = session.lookup_all(&EdgeTemplate::new()).unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].extra.get("since"), Some(&Value::Number(1857.0)));
}
