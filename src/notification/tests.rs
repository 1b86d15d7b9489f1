//! Tests for notification templates and composition.

use super::*;

#[test]
fn test_rebalance_default_composes_sample() {
    let template = NotificationTemplate::rebalance_default();
    let context = RebalanceContext::sample().to_context().unwrap();

    let rendered = template.compose(&context);

    assert_eq!(rendered.template_id, "rebalance");
    assert_eq!(rendered.subject, "【调仓通知】趋势增强策略 2024-01-15");
    assert_eq!(
        rendered.body,
        "策略名称：趋势增强策略\n委托时间：09:35:20\n招商银行|2000|限价|33.58|买入|20%\n"
    );
}

#[test]
fn test_sample_context_keys_are_camel_case() {
    let context = RebalanceContext::sample().to_context().unwrap();

    assert_eq!(context.scalar("strategyName"), Some("趋势增强策略"));
    assert_eq!(context.scalar("orderTime"), Some("09:35:20"));
    let rows = context.rows("orders").unwrap();
    assert_eq!(rows[0].get("orderType").map(String::as_str), Some("限价"));
    assert_eq!(rows[0].get("price").map(String::as_str), Some("33.58"));
}

#[test]
fn test_compose_with_empty_orders() {
    let mut data = RebalanceContext::sample();
    data.orders.clear();
    let context = data.to_context().unwrap();

    let rendered = NotificationTemplate::rebalance_default().compose(&context);
    assert_eq!(rendered.body, "策略名称：趋势增强策略\n委托时间：09:35:20\n");
}

#[test]
fn test_rebalance_context_parses_camel_case_json() {
    let json = r#"{
        "date": "2024-02-01",
        "strategyName": "S",
        "orderTime": "10:00:00",
        "orders": [{"stock": "A", "quantity": 100, "orderType": "市价", "price": 1.5, "action": "卖出", "position": "5%"}]
    }"#;
    let data: RebalanceContext = serde_json::from_str(json).unwrap();

    assert_eq!(data.orders[0].order_type, "市价");
    assert_eq!(data.orders[0].quantity, 100);
}

#[test]
fn test_default_template_is_valid() {
    NotificationTemplate::rebalance_default().validate().unwrap();
}

#[test]
fn test_validate_rejects_bad_id() {
    for id in ["", "Upper", "-lead", "has space", "点"] {
        let mut template = NotificationTemplate::rebalance_default();
        template.id = id.to_string();
        let err = template.validate().unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::VALIDATION_FAILURE);
    }
}

#[test]
fn test_validate_rejects_blank_fields() {
    let mut template = NotificationTemplate::rebalance_default();
    template.subject = "   ".to_string();

    let err = template.validate().unwrap_err();
    assert!(err.to_string().contains("subject must not be empty"));
}

#[test]
fn test_enabled_defaults_to_true_in_yaml() {
    let yaml = "id: a\nname: A\nsubject: s\ncontent: c\n";
    let template: NotificationTemplate = serde_yaml::from_str(yaml).unwrap();
    assert!(template.enabled);
}
