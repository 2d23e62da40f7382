use chrono::Utc;
use dotenvy::dotenv;
use log::*;
use monthly_report::{
    cli::handle_command_line_args,
    config::ReportConfig,
    run_monthly_report,
    DeliveryOutcome,
    SendGridMailer,
};
use shopify_tools::ShopifyApi;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    env_logger::init();
    if handle_command_line_args() {
        return;
    }
    let config = ReportConfig::from_env_or_default();

    let shopify = match ShopifyApi::new(config.shopify.clone()) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error creating Shopify API: {e}");
            std::process::exit(1);
        },
    };
    let mailer = SendGridMailer::new(&config.mail);

    info!("🚀️ Running the monthly report for {}", config.shopify.shop);
    match run_monthly_report(&shopify, &mailer, &config, Utc::now()).await {
        Ok(outcome) => {
            println!("Fetched {} physical orders.", outcome.order_count);
            match &outcome.delivery {
                DeliveryOutcome::Sent { .. } => println!("{}", outcome.delivery),
                DeliveryOutcome::Failed(_) => eprintln!("{}", outcome.delivery),
                DeliveryOutcome::Skipped => {
                    println!("{}\n\n{}\n\n{}", outcome.delivery, outcome.report.subject, outcome.report.body)
                },
            }
        },
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
