use shopify_tools::OrderNode;

/// An order as the report sees it. Orders only live for the duration of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Human-readable order number, e.g. "#1001"
    pub name: String,
    /// ISO-8601 creation timestamp, exactly as reported by the store
    pub created_at: String,
    pub requires_shipping: bool,
    /// Decimal total, e.g. "19.99"
    pub amount: String,
    pub currency_code: String,
}

impl Order {
    /// The line this order contributes to the report body.
    pub fn report_line(&self) -> String {
        format!("- {} | {} | {} {}", self.name, self.created_at, self.amount, self.currency_code)
    }
}

impl From<OrderNode> for Order {
    fn from(node: OrderNode) -> Self {
        let money = node.total_price_set.shop_money;
        Self {
            name: node.name,
            created_at: node.created_at,
            requires_shipping: node.requires_shipping,
            amount: money.amount,
            currency_code: money.currency_code,
        }
    }
}
