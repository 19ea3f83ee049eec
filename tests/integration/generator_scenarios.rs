//! End-to-end scenarios through the public generator API.

use chrono::NaiveDate;
use loop_params::identity::is_content_identifier;
use loop_params::{generate_query_args, ParamGenerator, StaticContext};
use serde_json::json;

fn render_context(item_id: u64) -> StaticContext {
    StaticContext::new(Some(item_id), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
}

#[test]
fn test_exclude_current_uses_rendered_item() {
    let args = generate_query_args(json!({}), json!({"exclude_current": true}), render_context(42));
    assert_eq!(args["post__not_in"], json!([42]));
    assert_eq!(args.len(), 1);
}

#[test]
fn test_disable_pagination_flags() {
    let args = generate_query_args(
        json!({"posts_per_page": 10}),
        json!({"disable_pagination": "1"}),
        render_context(1),
    );
    assert_eq!(args["nopaging"], json!(true));
    assert_eq!(args["posts_per_page"], json!(-1));
    assert_eq!(args["no_found_rows"], json!(true));
}

#[test]
fn test_post_parent_template_reference() {
    let value = json!("my-theme//my-template");
    assert!(!is_content_identifier(&value));

    let args = generate_query_args(json!({}), json!({"post_parent": value}), render_context(77));
    assert_eq!(args["post_parent"], json!(77));
}

#[test]
fn test_meta_query_defaults_to_and() {
    let args = generate_query_args(
        json!({}),
        json!({"meta_query": [
            {"key": "color", "value": "red", "compare": "="},
            {"key": "size", "value": "L", "compare": "="}
        ]}),
        render_context(1),
    );
    assert_eq!(args["meta_query"]["relation"], json!("AND"));
    assert_eq!(args["meta_query"]["0"]["key"], json!("color"));
    assert_eq!(args["meta_query"]["1"]["key"], json!("size"));
}

#[test]
fn test_every_rule_together() {
    let mut generator = ParamGenerator::new(
        json!({"post_type": "post", "posts_per_page": 6}),
        json!({
            "multiple_posts": ["page"],
            "exclude_current": true,
            "include_posts": [{"id": 3}, {"id": 4}],
            "meta_query": [{"key": "featured", "compare": "EXISTS"}],
            "date_query": {"range": "last-month", "inclusive": true},
            "disable_pagination": true,
            "tax_query": [{"taxonomy": "category", "terms": ["news"]}],
            "post_parent": 9
        }),
    )
    .with_context(render_context(42));
    generator.process_all();

    let keys: Vec<&str> = generator.query_args().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "post_type",
            "post__not_in",
            "post__in",
            "meta_query",
            "date_query",
            "nopaging",
            "posts_per_page",
            "no_found_rows",
            "tax_query",
            "post_parent",
        ]
    );
    assert_eq!(
        generator.query_args()["date_query"],
        json!([{"after": "2024-05-01", "before": "2024-05-31", "inclusive": true}])
    );
}

#[test]
fn test_unknown_custom_params_ignored() {
    let args = generate_query_args(
        json!({}),
        json!({"process_all": true, "search": "hello"}),
        render_context(1),
    );
    assert!(args.is_empty());
}

#[test]
fn test_defaults_never_mutated() {
    let defaults = json!({"post_type": "post", "posts_per_page": 3});
    let mut generator = ParamGenerator::new(
        defaults.clone(),
        json!({"multiple_posts": ["page"], "disable_pagination": true}),
    );
    generator.process_all();
    assert_eq!(json!(generator.default_params()), defaults);
}
