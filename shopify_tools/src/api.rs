use std::sync::Arc;

use chrono::NaiveDateTime;
use graphql_parser::parse_query;
use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Method,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    config::ShopifyConfig,
    data_objects::{OrderNode, OrdersResponse},
    helpers::created_at_filter,
    ShopifyApiError,
};

/// The largest page the Admin API hands out for a single connection query.
pub const MAX_ORDERS_PER_PAGE: u64 = 250;

const ORDERS_QUERY: &str = r#"
query PhysicalOrderReport($first: Int!, $query: String) {
  orders(first: $first, query: $query) {
    edges {
      node {
        name
        createdAt
        requiresShipping
        totalPriceSet { shopMoney { amount currencyCode } }
      }
    }
  }
}"#;

#[derive(Clone)]
pub struct ShopifyApi {
    base_url: String,
    client: Arc<Client>,
}

impl ShopifyApi {
    pub fn new(config: ShopifyConfig) -> Result<Self, ShopifyApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let val = HeaderValue::from_str(config.admin_access_token.reveal().as_str())
            .map_err(|e| ShopifyApiError::Initialization(e.to_string()))?;
        headers.insert("X-Shopify-Access-Token", val);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ShopifyApiError::Initialization(e.to_string()))?;
        let base_url = format!("https://{}/admin/api/{}", config.shop, config.api_version);
        Ok(Self { base_url, client: Arc::new(client) })
    }

    /// Sends every request to `base_url` (e.g. `http://127.0.0.1:8080/admin/api/2024-10`) instead of the shop's
    /// Admin API root.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub async fn rest_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, ShopifyApiError> {
        let url = self.url(path);
        trace!("Sending REST query: {url}");
        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| ShopifyApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("REST query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| ShopifyApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| ShopifyApiError::RestResponseError(e.to_string()))?;
            Err(ShopifyApiError::QueryError { status, message })
        }
    }

    pub async fn graphql_query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<T, ShopifyApiError> {
        let body = graphql_body(query, variables)?;
        trace!("Sending GraphQL query: {body}");
        let result = self.rest_query::<Value, Value>(Method::POST, "/graphql.json", Some(body)).await?;
        extract_graphql_data(result)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fetches a single page of at most `count` orders matching the given search filter. Orders are returned in the
    /// order Shopify lists them. Nothing beyond the first page is requested.
    pub async fn fetch_orders(&self, filter: &str, count: u64) -> Result<Vec<OrderNode>, ShopifyApiError> {
        let count = count.min(MAX_ORDERS_PER_PAGE);
        let variables = serde_json::json!({ "first": count, "query": filter });
        debug!("Fetching up to {count} orders matching '{filter}'");
        let result = self.graphql_query::<OrdersResponse>(ORDERS_QUERY, Some(variables)).await?;
        let orders = result.into_nodes();
        info!("Fetched {} orders", orders.len());
        if orders.len() as u64 >= count {
            warn!("The order page is full ({count} orders). Later orders in this period were not fetched.");
        }
        Ok(orders)
    }

    /// Fetches the first page of orders created between `start` and `end` (both inclusive).
    pub async fn fetch_orders_created_between(
        &self,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
    ) -> Result<Vec<OrderNode>, ShopifyApiError> {
        let filter = created_at_filter(start, end);
        self.fetch_orders(&filter, MAX_ORDERS_PER_PAGE).await
    }
}

/// Validates the query document locally and wraps it, with its variables, into a GraphQL request body.
fn graphql_body(query: &str, variables: Option<Value>) -> Result<Value, ShopifyApiError> {
    let query = parse_query::<String>(query).map_err(|e| ShopifyApiError::InvalidGraphQL(e.to_string()))?;
    let mut body = serde_json::json!({
        "query": query.to_string(),
    });
    if let Some(vars) = variables {
        body["variables"] = vars;
    }
    Ok(body)
}

/// Unpacks the `data` member of a GraphQL response. A non-empty top-level `errors` list is a failure, even though
/// the transport reported success.
pub fn extract_graphql_data<T: DeserializeOwned>(mut response: Value) -> Result<T, ShopifyApiError> {
    if let Some(errors) = response["errors"].as_array() {
        if !errors.is_empty() {
            let e = errors.iter().map(|e| e.to_string()).collect::<Vec<String>>().join(", ");
            return Err(ShopifyApiError::GraphQLError(e));
        }
    }
    let data = response.get_mut("data").map(Value::take).unwrap_or(Value::Null);
    trace!("GraphQL response: {data}");
    trace!("GraphQL costs: {}", response["extensions"]["cost"]);
    if data.is_null() {
        return Err(ShopifyApiError::EmptyResponse);
    }
    serde_json::from_value(data).map_err(|e| ShopifyApiError::JsonError(e.to_string()))
}
