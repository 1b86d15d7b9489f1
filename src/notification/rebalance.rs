//! Rebalancing notice data.

use crate::context::Context;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One order in a rebalancing batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub stock: String,
    pub quantity: u64,
    pub order_type: String,
    pub price: f64,
    pub action: String,
    pub position: String,
}

/// Data for a rebalancing notice, keyed the way templates reference it
/// (`strategyName`, `orderTime`, `orders`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceContext {
    pub date: String,
    pub strategy_name: String,
    pub order_time: String,
    pub orders: Vec<Order>,
}

impl RebalanceContext {
    /// Sample data used for previews when no live context is supplied.
    pub fn sample() -> Self {
        Self {
            date: "2024-01-15".to_string(),
            strategy_name: "趋势增强策略".to_string(),
            order_time: "09:35:20".to_string(),
            orders: vec![Order {
                stock: "招商银行".to_string(),
                quantity: 2000,
                order_type: "限价".to_string(),
                price: 33.58,
                action: "买入".to_string(),
                position: "20%".to_string(),
            }],
        }
    }

    pub fn to_context(&self) -> Result<Context> {
        Context::from_serialize(self)
    }
}
