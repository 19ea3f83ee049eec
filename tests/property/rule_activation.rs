//! Rule activation laws: emptiness, no-op for inactive rules, idempotence.

use loop_params::rules::rule_names;
use loop_params::{ParamGenerator, StaticContext};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn empty_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!(false)),
        Just(json!(0)),
        Just(json!(0.0)),
        Just(json!("")),
        Just(json!("0")),
        Just(json!([])),
        Just(json!({})),
    ]
}

fn active_payload() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!(true)),
        (1u64..1000).prop_map(Value::from),
        "[a-z]{1,8}".prop_map(Value::from),
        Just(json!(["page", "event"])),
        Just(json!([{"key": "color", "value": "red"}, {"taxonomy": "category", "terms": [1]}])),
        Just(json!({"range": "six-months", "relation": "after", "date_primary": "current"})),
        Just(json!("my-theme//my-template")),
    ]
}

fn custom_params() -> impl Strategy<Value = Map<String, Value>> {
    let names = rule_names();
    let count = names.len();
    prop::collection::vec(prop::option::of(active_payload()), count).prop_map(move |payloads| {
        names
            .iter()
            .zip(payloads)
            .filter_map(|(name, payload)| payload.map(|p| (name.to_string(), p)))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_empty_values_never_activate(index in 0usize..8, value in empty_value()) {
        let name = rule_names()[index];
        let generator = ParamGenerator::new(json!({}), json!({ name: value }));
        prop_assert!(!generator.has_custom_param(name));
        prop_assert!(generator.get_custom_param(name).is_none());
    }

    #[test]
    fn prop_inactive_rules_write_nothing(index in 0usize..8, value in empty_value()) {
        let name = rule_names()[index];
        let mut generator = ParamGenerator::new(json!({"post_type": "post"}), json!({ name: value }))
            .with_context(StaticContext::for_item(42));
        generator.process_all();
        prop_assert!(generator.query_args().is_empty());
    }

    #[test]
    fn prop_process_all_idempotent(custom in custom_params()) {
        let mut generator = ParamGenerator::new(json!({"post_type": "post"}), Value::Object(custom))
            .with_context(StaticContext::for_item(42));
        generator.process_all();
        let first = generator.query_args().clone();
        generator.process_all();
        prop_assert_eq!(generator.query_args(), &first);
    }

    #[test]
    fn prop_generation_is_deterministic(custom in custom_params()) {
        let context = StaticContext::for_item(7);
        let mut a = ParamGenerator::new(json!({}), Value::Object(custom.clone()))
            .with_context(context.clone());
        let mut b = ParamGenerator::new(json!({}), Value::Object(custom))
            .with_context(context);
        a.process_all();
        b.process_all();
        prop_assert_eq!(a.query_args(), b.query_args());
    }
}
