//! Shapes of the Admin GraphQL `orders` connection. Only the fields the report selects are modelled; a missing field
//! is a deserialization error, not a default.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrdersResponse {
    pub orders: OrderConnection,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderConnection {
    pub edges: Vec<OrderEdge>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderEdge {
    pub node: OrderNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderNode {
    /// The human-readable order number, e.g. "#1001"
    pub name: String,
    /// ISO-8601 timestamp, kept exactly as Shopify sent it
    pub created_at: String,
    pub requires_shipping: bool,
    pub total_price_set: MoneyBag,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyBag {
    pub shop_money: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount as a string, e.g. "19.99"
    pub amount: String,
    pub currency_code: String,
}

impl OrdersResponse {
    pub fn into_nodes(self) -> Vec<OrderNode> {
        self.orders.edges.into_iter().map(|e| e.node).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_orders() {
        let json = include_str!("./test_assets/orders_response.json");
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        let orders: OrdersResponse = serde_json::from_value(value["data"].clone()).unwrap();
        let nodes = orders.into_nodes();
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0].name, "#1001");
        assert_eq!(nodes[0].created_at, "2024-02-03T10:00:00Z");
        assert!(nodes[0].requires_shipping);
        assert_eq!(nodes[0].total_price_set.shop_money.amount, "19.99");
        assert_eq!(nodes[0].total_price_set.shop_money.currency_code, "USD");
        assert!(!nodes[1].requires_shipping);
    }

    #[test]
    fn missing_fields_are_rejected() {
        let json = r##"{"orders": {"edges": [{"node": {"name": "#1", "createdAt": "2024-02-01T00:00:00Z"}}]}}"##;
        let result = serde_json::from_str::<OrdersResponse>(json);
        assert!(result.is_err());
    }
}
