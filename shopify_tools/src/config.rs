use log::*;
use report_common::{env_or_default, Secret};

pub const DEFAULT_API_VERSION: &str = "2024-10";

#[derive(Debug, Clone, Default)]
pub struct ShopifyConfig {
    /// The storefront domain, e.g. "my-shop.myshopify.com"
    pub shop: String,
    pub admin_access_token: Secret<String>,
    pub api_version: String,
}

impl ShopifyConfig {
    pub fn new(shop: &str, admin_access_token: &str) -> Self {
        Self {
            shop: shop.to_string(),
            admin_access_token: Secret::new(admin_access_token.to_string()),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Nothing is validated here. A bad shop or token only shows up once the first query fails.
    pub fn new_from_env_or_default() -> Self {
        let shop = env_or_default("SHOPIFY_STORE_DOMAIN", "example.myshopify.com");
        let api_version = std::env::var("SHOPIFY_API_VERSION").unwrap_or_else(|_| {
            debug!("SHOPIFY_API_VERSION not set, using {DEFAULT_API_VERSION} as default");
            DEFAULT_API_VERSION.to_string()
        });
        let admin_access_token = Secret::new(std::env::var("SHOPIFY_ACCESS_TOKEN").unwrap_or_else(|_| {
            warn!("SHOPIFY_ACCESS_TOKEN not set, using (probably useless) default");
            "shpat_00000000000000".to_string()
        }));
        Self { shop, admin_access_token, api_version }
    }
}
