use chrono::NaiveDateTime;
use log::*;
use shopify_tools::{OrderNode, ShopifyApi, ShopifyApiError};

use crate::{DateWindow, Order, ReportError};

/// Anything that can list a store's orders created within a time range.
#[allow(async_fn_in_trait)]
pub trait OrderSource {
    /// Returns a single page of orders created between `start` and `end` (inclusive), in the order the store lists
    /// them.
    async fn orders_created_between(
        &self,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
    ) -> Result<Vec<OrderNode>, ShopifyApiError>;
}

impl OrderSource for ShopifyApi {
    async fn orders_created_between(
        &self,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
    ) -> Result<Vec<OrderNode>, ShopifyApiError> {
        self.fetch_orders_created_between(start, end).await
    }
}

/// Fetches the orders created in `window` and keeps the ones that need to be shipped, preserving the store's order.
///
/// There are no partial results: any failure while querying or parsing is returned as an error.
pub async fn fetch_physical_orders<S: OrderSource>(source: &S, window: &DateWindow) -> Result<Vec<Order>, ReportError> {
    debug!("Fetching orders created from {window}");
    let nodes = source.orders_created_between(window.start(), window.end()).await?;
    let total = nodes.len();
    let orders = physical_orders(nodes);
    info!("{} of {total} orders from {window} require shipping", orders.len());
    Ok(orders)
}

/// Keeps only the orders flagged as requiring shipment.
pub fn physical_orders(nodes: Vec<OrderNode>) -> Vec<Order> {
    nodes.into_iter().filter(|n| n.requires_shipping).map(Order::from).collect()
}

#[cfg(test)]
mod test {
    use shopify_tools::OrdersResponse;

    use super::*;

    fn fixture_nodes() -> Vec<OrderNode> {
        let json = include_str!("./test_assets/february_orders.json");
        let response: OrdersResponse = serde_json::from_str(json).unwrap();
        response.into_nodes()
    }

    #[test]
    fn only_shippable_orders_survive() {
        let nodes = fixture_nodes();
        assert_eq!(nodes.len(), 5);
        let orders = physical_orders(nodes);
        let names = orders.iter().map(|o| o.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["#1001", "#1004", "#1005"]);
        assert!(orders.iter().all(|o| o.requires_shipping));
    }

    #[test]
    fn nothing_shippable() {
        let nodes = fixture_nodes().into_iter().filter(|n| !n.requires_shipping).collect::<Vec<_>>();
        assert_eq!(nodes.len(), 2);
        assert!(physical_orders(nodes).is_empty());
    }
}
