//! Tests for template rendering and placeholder inspection.

use super::*;
use crate::context::{Context, Row};
use serde_json::json;

fn ctx(value: serde_json::Value) -> Context {
    Context::from_json(value).unwrap()
}

const REBALANCE_CONTENT: &str = "策略名称：{{strategyName}}\n委托时间：{{orderTime}}\n{{#orders}}{{stock}}|{{quantity}}|{{orderType}}|{{price}}|{{action}}|{{position}}\n{{/orders}}";

#[test]
fn test_plain_text_is_unchanged() {
    let context = ctx(json!({"a": 1, "r": [{}]}));
    for template in ["", "hello", "多行\n文本", "{ single } braces", "}}{{"] {
        assert_eq!(render(template, &context), template);
    }
}

#[test]
fn test_missing_scalar_is_empty() {
    assert_eq!(render("{{missing}}", &Context::new()), "");
    assert_eq!(render("a{{missing}}b", &Context::new()), "ab");
}

#[test]
fn test_numeric_scalar() {
    assert_eq!(render("{{a}}", &ctx(json!({"a": 5}))), "5");
}

#[test]
fn test_null_scalar_is_empty() {
    assert_eq!(render("[{{a}}]", &ctx(json!({"a": null}))), "[]");
}

#[test]
fn test_block_repeats_per_row() {
    let context = ctx(json!({"r": [{}, {}, {}]}));
    assert_eq!(render("{{#r}}X{{/r}}", &context), "XXX");
}

#[test]
fn test_mismatched_block_is_dropped() {
    let context = ctx(json!({"a": [{}]}));
    assert_eq!(render("{{#a}}Y{{/a2}}", &context), "");
    assert_eq!(render("before{{#a}}Y{{/b}}after", &context), "beforeafter");
}

#[test]
fn test_row_fields_shadow_outer_fields() {
    let context = ctx(json!({"x": "outer", "r": [{"x": "inner"}]}));
    assert_eq!(render("{{#r}}{{x}}{{/r}}", &context), "inner");
    assert_eq!(render("{{x}}:{{#r}}{{x}}{{/r}}", &context), "outer:inner");
}

#[test]
fn test_row_does_not_fall_back_to_outer_scope() {
    let context = ctx(json!({"x": "outer", "r": [{}]}));
    assert_eq!(render("{{#r}}[{{x}}]{{/r}}", &context), "[]");
}

#[test]
fn test_block_on_scalar_field_is_empty() {
    let context = ctx(json!({"r": "not rows"}));
    assert_eq!(render("a{{#r}}X{{/r}}b", &context), "ab");
}

#[test]
fn test_block_on_missing_field_is_empty() {
    assert_eq!(render("a{{#r}}X{{/r}}b", &Context::new()), "ab");
}

#[test]
fn test_rows_as_scalar_is_empty() {
    let context = ctx(json!({"r": [{"x": 1}]}));
    assert_eq!(render("[{{r}}]", &context), "[]");
}

#[test]
fn test_empty_rows_keep_surrounding_text() {
    let context = ctx(json!({"strategyName": "S", "orders": []}));
    assert_eq!(
        render("名称：{{strategyName}}\n{{#orders}}{{stock}}\n{{/orders}}结束", &context),
        "名称：S\n结束"
    );
}

#[test]
fn test_rebalance_end_to_end() {
    let context = ctx(json!({
        "strategyName": "趋势增强策略",
        "orderTime": "09:35:20",
        "orders": [{
            "stock": "招商银行",
            "quantity": 2000,
            "orderType": "限价",
            "price": 33.58,
            "action": "买入",
            "position": "20%"
        }]
    }));

    assert_eq!(
        render(REBALANCE_CONTENT, &context),
        "策略名称：趋势增强策略\n委托时间：09:35:20\n招商银行|2000|限价|33.58|买入|20%\n"
    );
}

#[test]
fn test_rows_render_in_order() {
    let context = ctx(json!({"r": [{"n": 1}, {"n": 2}, {"n": 3}]}));
    assert_eq!(render("{{#r}}{{n}},{{/r}}", &context), "1,2,3,");
}

#[test]
fn test_block_body_is_non_greedy() {
    let context = ctx(json!({"a": [{"v": "1"}], "b": [{"v": "2"}, {"v": "3"}]}));
    assert_eq!(
        render("{{#a}}{{v}}{{/a}}-{{#b}}{{v}}{{/b}}", &context),
        "1-23"
    );
}

#[test]
fn test_first_close_tag_ends_block() {
    // The body stops at the first close tag, so the trailing `{{/a}}` is
    // left over and is not a scalar placeholder.
    let context = ctx(json!({"a": [{"v": "x"}]}));
    assert_eq!(render("{{#a}}{{v}}{{/b}}{{/a}}", &context), "{{/a}}");
}

#[test]
fn test_multiline_block_body() {
    let context = ctx(json!({"r": [{"a": "1"}, {"a": "2"}]}));
    assert_eq!(render("{{#r}}\n- {{a}}\n{{/r}}", &context), "\n- 1\n\n- 2\n");
}

#[test]
fn test_substituted_values_are_not_rescanned() {
    let context = ctx(json!({
        "a": "{{b}}",
        "b": "nope",
        "r": [{"x": "{{b}}"}]
    }));
    assert_eq!(render("{{a}}", &context), "{{b}}");
    assert_eq!(render("{{#r}}{{x}}{{/r}}", &context), "{{b}}");
}

#[test]
fn test_values_are_not_html_escaped() {
    let context = ctx(json!({"a": "<b>&amp;</b>"}));
    assert_eq!(render("{{a}}", &context), "<b>&amp;</b>");
}

#[test]
fn test_non_word_placeholders_are_literal() {
    let context = ctx(json!({"a": "x"}));
    assert_eq!(render("{{ a }}|{{a.b}}|{{}}|{{a-b}}", &context), "{{ a }}|{{a.b}}|{{}}|{{a-b}}");
}

#[test]
fn test_unclosed_block_is_literal() {
    let context = ctx(json!({"r": [{"a": "1"}], "a": "top"}));
    assert_eq!(render("{{#r}}{{a}}", &context), "{{#r}}top");
}

#[test]
fn test_non_object_rows_still_repeat() {
    let context = ctx(json!({"r": [1, 2]}));
    assert_eq!(render("{{#r}}[{{x}}]{{/r}}", &context), "[][]");
}

#[test]
fn test_render_is_idempotent() {
    let context = ctx(json!({"strategyName": "S", "orderTime": "t", "orders": [{"stock": "A"}]}));
    let first = render(REBALANCE_CONTENT, &context);
    let second = render(REBALANCE_CONTENT, &context);
    assert_eq!(first, second);
}

#[test]
fn test_render_with_built_context() {
    let mut row = Row::new();
    row.insert("stock".to_string(), "A".to_string());
    let context = Context::new().with_scalar("t", "T").with_rows("r", vec![row]);

    assert_eq!(render("{{t}}:{{#r}}{{stock}}{{/r}}", &context), "T:A");
}

#[test]
fn test_placeholders_of_rebalance_template() {
    let fields = placeholders(REBALANCE_CONTENT);

    assert_eq!(fields.scalars, vec!["strategyName", "orderTime"]);
    assert_eq!(fields.blocks.len(), 1);
    assert_eq!(fields.blocks[0].key, "orders");
    assert_eq!(
        fields.blocks[0].fields,
        vec!["stock", "quantity", "orderType", "price", "action", "position"]
    );
    assert!(fields.mismatched.is_empty());
}

#[test]
fn test_placeholders_dedupe_and_merge_blocks() {
    let fields = placeholders("{{a}}{{a}}{{#r}}{{x}}{{/r}}{{#r}}{{y}}{{x}}{{/r}}{{b}}");

    assert_eq!(fields.scalars, vec!["a", "b"]);
    assert_eq!(fields.blocks.len(), 1);
    assert_eq!(fields.blocks[0].fields, vec!["x", "y"]);
}

#[test]
fn test_placeholders_report_mismatched_blocks() {
    let fields = placeholders("{{#a}}{{x}}{{/a2}}");

    assert!(fields.blocks.is_empty());
    assert!(fields.scalars.is_empty());
    assert_eq!(fields.mismatched, vec![("a".to_string(), "a2".to_string())]);
}

#[test]
fn test_missing_fields() {
    let fields = placeholders("{{a}}{{b}}{{#r}}{{x}}{{/r}}{{#s}}{{/s}}");
    let context = ctx(json!({"a": 1, "s": [], "r": "scalar"}));

    assert_eq!(fields.missing(&context), vec!["b", "#r"]);
}

#[test]
fn test_builder_context_greeting() {
    let context = Context::new().with_scalar("name", "Alice");
    assert_eq!(render("Hello {{name}}!", &context), "Hello Alice!");
    assert_eq!(render("{{missing}}", &context), "");
}
