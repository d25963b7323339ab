// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Edge and template data structures
//!
//! An edge is a labeled relation `source --[property]--> target`. The three
//! triple fields are arbitrary values; identity is the triple itself. An
//! edge may carry extra application-defined fields that are stored with the
//! record but never indexed.

use crate::storage::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The three indexed fields of an edge, in fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Source,
    Property,
    Target,
}

impl Field {
    /// All fields in the fixed order used for index names and lookup keys
    pub const ALL: [Field; 3] = [Field::Source, Field::Property, Field::Target];

    /// Canonical field name
    pub fn name(&self) -> &'static str {
        match self {
            Field::Source => "source",
            Field::Property => "property",
            Field::Target => "target",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A stored edge: the triple plus carried extra fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: Value,
    pub property: Value,
    pub target: Value,
    /// Application-defined fields carried with the record, not indexed.
    /// Two edges with equal triples are the same logical edge even when
    /// these differ; an upsert replaces them.
    #[serde(default)]
    pub extra: HashMap<String, Value>,
}

impl Edge {
    /// Create a new edge from its triple
    pub fn new(
        source: impl Into<Value>,
        property: impl Into<Value>,
        target: impl Into<Value>,
    ) -> Self {
        Self {
            source: source.into(),
            property: property.into(),
            target: target.into(),
            extra: HashMap::new(),
        }
    }

    /// Attach a carried extra field
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The value of an indexed field
    pub fn field(&self, field: Field) -> &Value {
        match field {
            Field::Source => &self.source,
            Field::Property => &self.property,
            Field::Target => &self.target,
        }
    }

    /// The triple in fixed field order
    pub fn triple(&self) -> [&Value; 3] {
        [&self.source, &self.property, &self.target]
    }
}

/// A partial edge pattern: an explicit option per field
///
/// Presence is a property of the option, not of key enumeration - a field
/// is part of the pattern iff its option is `Some`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeTemplate {
    pub source: Option<Value>,
    pub property: Option<Value>,
    pub target: Option<Value>,
}

impl EdgeTemplate {
    /// The empty template, matching every edge
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the source field
    pub fn source(mut self, value: impl Into<Value>) -> Self {
        self.source = Some(value.into());
        self
    }

    /// Constrain the property field
    pub fn property(mut self, value: impl Into<Value>) -> Self {
        self.property = Some(value.into());
        self
    }

    /// Constrain the target field
    pub fn target(mut self, value: impl Into<Value>) -> Self {
        self.target = Some(value.into());
        self
    }

    /// The constraint on an indexed field, if present
    pub fn field(&self, field: Field) -> Option<&Value> {
        match field {
            Field::Source => self.source.as_ref(),
            Field::Property => self.property.as_ref(),
            Field::Target => self.target.as_ref(),
        }
    }

    /// Whether an edge satisfies every present constraint
    pub fn matches(&self, edge: &Edge) -> bool {
        Field::ALL
            .iter()
            .all(|&f| self.field(f).map_or(true, |v| v == edge.field(f)))
    }
}
