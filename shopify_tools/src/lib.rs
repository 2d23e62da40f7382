mod api;
mod config;
mod error;

pub mod data_objects;
pub mod helpers;

pub use api::{extract_graphql_data, ShopifyApi, MAX_ORDERS_PER_PAGE};
pub use config::ShopifyConfig;
pub use data_objects::{Money, OrderEdge, OrderNode, OrdersResponse};
pub use error::ShopifyApiError;
