//! Property-based tests for field-set invariants.
//!
//! Uses `proptest` to verify that arbitrary assignment sequences maintain the
//! lookup and idempotence invariants the harness depends on: a populated
//! field re-queried by any selector returns the last assigned value, and the
//! payload key set never drifts from the declared fields.

use proptest::prelude::*;

use super::field::FieldSet;

fn declared() -> FieldSet {
    FieldSet::new(
        "editor",
        [("title", "Title"), ("content", "Content"), ("tags", "Tags")],
    )
}

fn arb_field_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("title"), Just("content"), Just("tags")]
}

proptest! {
    #[test]
    fn last_assignment_wins(
        assignments in proptest::collection::vec((arb_field_name(), ".{0,16}"), 1..16)
    ) {
        let mut fields = declared();
        for (name, value) in &assignments {
            fields.by_name_mut(name).unwrap().set_value(value.clone());
        }
        for name in ["title", "content", "tags"] {
            let expected = assignments
                .iter()
                .rev()
                .find(|(n, _)| *n == name)
                .map_or("", |(_, v)| v.as_str());
            prop_assert_eq!(fields.by_name(name).unwrap().value(), expected);
        }
    }

    #[test]
    fn requery_is_idempotent(name in arb_field_name(), value in ".{0,32}") {
        let mut fields = declared();
        fields.by_name_mut(name).unwrap().set_value(value.clone());
        let first = fields.by_name(name).unwrap().value().to_string();
        let second = fields.by_name(name).unwrap().value().to_string();
        prop_assert_eq!(&first, &value);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn payload_keys_match_declared_fields(
        assignments in proptest::collection::vec((arb_field_name(), ".{0,16}"), 0..8)
    ) {
        let mut fields = declared();
        for (name, value) in assignments {
            fields.by_name_mut(name).unwrap().set_value(value);
        }
        let payload = fields.payload();
        prop_assert_eq!(payload.len(), 3);
        for name in ["title", "content", "tags"] {
            prop_assert!(payload.get(name).is_some(), "missing key {}", name);
        }
    }

    #[test]
    fn label_lookup_matches_name_lookup(name in arb_field_name(), value in ".{0,16}") {
        let mut fields = declared();
        fields.by_name_mut(name).unwrap().set_value(value);
        let label = fields.by_name(name).unwrap().label().to_string();
        prop_assert_eq!(
            fields.by_label(&label).unwrap().value(),
            fields.by_name(name).unwrap().value()
        );
        prop_assert_eq!(
            fields.by_label(&label.to_lowercase()).unwrap().value(),
            fields.by_name(name).unwrap().value()
        );
    }
}
