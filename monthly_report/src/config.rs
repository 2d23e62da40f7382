//! Run configuration, read once at startup from the environment (after loading any `.env` file).
//!
//! | Variable                | Purpose                                           | Default                  |
//! |-------------------------|---------------------------------------------------|--------------------------|
//! | `SHOPIFY_STORE_DOMAIN`  | The store's domain, e.g. `my-shop.myshopify.com`  | `example.myshopify.com`  |
//! | `SHOPIFY_ACCESS_TOKEN`  | Admin API access token                            | placeholder              |
//! | `SHOPIFY_API_VERSION`   | Admin API version                                 | `2024-10`                |
//! | `SENDGRID_API_KEY`      | SendGrid API key                                  | empty                    |
//! | `EMAIL_TO`              | Report recipient                                  | empty                    |
//! | `EMAIL_FROM`            | Report sender                                     | empty                    |
//! | `REPORT_TITLE`          | Subject prefix                                    | `Shopify Monthly Report` |
//! | `REPORT_DRY_RUN`        | Build the report, but don't send it               | `false`                  |
//!
//! Missing values are logged but never rejected up front.
use std::env;

use log::*;
use report_common::{env_flag, env_or_default, Secret};
use shopify_tools::ShopifyConfig;

use crate::report::DEFAULT_REPORT_TITLE;

#[derive(Clone, Debug, Default)]
pub struct MailConfig {
    pub api_key: Secret<String>,
    pub from: String,
    pub to: String,
}

#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Prefix for the email subject
    pub title: String,
    /// When true, the report is built and printed, but not emailed.
    pub dry_run: bool,
    pub shopify: ShopifyConfig,
    pub mail: MailConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            dry_run: false,
            shopify: ShopifyConfig::default(),
            mail: MailConfig::default(),
        }
    }
}

impl ReportConfig {
    pub fn from_env_or_default() -> Self {
        let title = env::var("REPORT_TITLE").ok().unwrap_or_else(|| DEFAULT_REPORT_TITLE.to_string());
        let dry_run = env_flag("REPORT_DRY_RUN", false);
        if dry_run {
            info!("🪛️ REPORT_DRY_RUN is set. The report will not be emailed.");
        }
        let shopify = ShopifyConfig::new_from_env_or_default();
        let mail = MailConfig::from_env_or_default();
        Self { title, dry_run, shopify, mail }
    }
}

impl MailConfig {
    pub fn from_env_or_default() -> Self {
        let api_key = env::var("SENDGRID_API_KEY").ok().unwrap_or_else(|| {
            error!("🪛️ SENDGRID_API_KEY is not set. Please set it to the API key for your SendGrid account.");
            String::default()
        });
        let to = env_or_default("EMAIL_TO", "");
        let from = env_or_default("EMAIL_FROM", "");
        Self { api_key: Secret::new(api_key), from, to }
    }
}
