//! NIKONEKTI gateway CLI.
//!
//! Lists the properties matching an optional search term through whichever backend
//! the environment selects. `nikonekti ask <question>` asks the rental advisor instead.

use nikonekti_gateway::advisor::{recommended_rent_budget, Advisor};
use nikonekti_gateway::config::Config;
use nikonekti_gateway::models::{Language, PropertyFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NIKONEKTI gateway");
    tracing::info!("Store path: {:?}", config.store_path);

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("ask") {
        let advisor = Advisor::from_config(&config)?;
        let question = args[1..].join(" ");
        println!("{}", advisor.generate_advice(&question, Language::En).await);
        return Ok(());
    }

    if args.first().map(String::as_str) == Some("budget") {
        let income: u64 = args.get(1).map(|v| v.parse()).transpose()?.unwrap_or(0);
        println!("{} TZS", recommended_rent_budget(income));
        return Ok(());
    }

    let gateway = nikonekti_gateway::connect(&config).await?;
    tracing::info!("Backend: {}", gateway.backend_name());

    if let Some(user) = gateway.auth().current_user() {
        tracing::info!("Signed in as {} ({})", user.name, user.id);
    }

    let term = args.join(" ");
    let filter = PropertyFilter::default().term(term);
    let properties = gateway.properties().get_all(Some(&filter)).await?;

    tracing::info!("{} properties matched", properties.len());
    for property in &properties {
        println!(
            "{}  {} ({}, {}) - {} TZS",
            property.id,
            property.title,
            property.location,
            property.city.as_str(),
            property.price
        );
    }

    Ok(())
}
