// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Query planner
//!
//! Index choice is exact-subset matching, fully determined by which fields
//! the template specifies: the plan selects the index named by the present
//! subset and encodes the lookup key from the template's values in fixed
//! field order. A template specifying `{property}` never consults the
//! `{property,target}` index. There is no fallback and no cost model. The
//! empty template selects the primary tree with no key - a full scan in
//! store order.

use crate::storage::keys::encode_value;
use crate::store::catalog::FieldSet;
use crate::store::types::{EdgeTemplate, Field};
use log::debug;

/// Which tree a query reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlanTarget {
    /// The primary tree, in store order
    Primary,
    /// The index for exactly this field subset
    Index(FieldSet),
}

/// A planned lookup: the tree to read and the encoded key bound, if any
#[derive(Debug)]
pub(crate) struct Plan {
    pub target: PlanTarget,
    /// Encoded sub-tuple to bound the scan to exact equality; None means
    /// an unbounded scan
    pub key: Option<Vec<u8>>,
}

/// Plan a lookup for a partial edge pattern
pub(crate) fn plan(template: &EdgeTemplate) -> Plan {
    let mut present = FieldSet::empty();
    let mut key = Vec::new();
    for field in Field::ALL {
        if let Some(value) = template.field(field) {
            present.insert(field);
            encode_value(&mut key, value);
        }
    }

    if present.is_empty() {
        debug!("planned full scan of primary tree");
        return Plan {
            target: PlanTarget::Primary,
            key: None,
        };
    }

    debug!("planned lookup on index '{}'", present.index_name());
    Plan {
        target: PlanTarget::Index(present),
        key: Some(key),
    }
}

/// Plan an unbounded scan for a grouping field subset
///
/// Group-by cares only about field presence; there are no values to bound
/// the scan with. The empty subset scans the primary tree.
pub(crate) fn plan_scan(fields: FieldSet) -> PlanTarget {
    if fields.is_empty() {
        PlanTarget::Primary
    } else {
        PlanTarget::Index(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::keys::{decode_tuple, encode_tuple};
    use crate::storage::value::Value;

    #[test]
    fn empty_template_plans_primary_full_scan() {
        let p = plan(&EdgeTemplate::new());
        assert_eq!(p.target, PlanTarget::Primary);
        assert!(p.key.is_none());
    }

    #[test]
    fn present_fields_select_the_exact_index() {
        let p = plan(&EdgeTemplate::new().property("born_in"));
        assert_eq!(
            p.target,
            PlanTarget::Index(FieldSet::from_fields(&[Field::Property]))
        );

        let p = plan(&EdgeTemplate::new().target("Duluth").property("born_in"));
        assert_eq!(
            p.target,
            PlanTarget::Index(FieldSet::from_fields(&[Field::Property, Field::Target]))
        );
    }

    #[test]
    fn key_values_follow_fixed_field_order() {
        // target set before property; the key must still be (property, target)
        let p = plan(&EdgeTemplate::new().target("Duluth").property("born_in"));
        let key = p.key.unwrap();
        assert_eq!(
            decode_tuple(&key, 2).unwrap(),
            vec![
                Value::String("born_in".into()),
                Value::String("Duluth".into())
            ]
        );
    }

    #[test]
    fn full_triple_template_keys_the_three_field_index() {
        let p = plan(
            &EdgeTemplate::new()
                .source("Duluth")
                .property("contained_by")
                .target("MN"),
        );
        assert_eq!(
            p.target,
            PlanTarget::Index(FieldSet::from_fields(&Field::ALL))
        );
        let expected = encode_tuple([
            &Value::String("Duluth".into()),
            &Value::String("contained_by".into()),
            &Value::String("MN".into()),
        ]);
        assert_eq!(p.key.unwrap(), expected);
    }
}
