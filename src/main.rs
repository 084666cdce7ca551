mod config;
mod error;
mod ai {
    pub mod client;
    pub mod prompts;
}
mod ui {
    pub mod form;
    pub mod presenter;
}
mod orchestrator;

use ai::client::ServingClient;
use config::{EnvCredentials, ServingConfig};
use dotenv::dotenv;
use orchestrator::Orchestrator;
use ui::form::FormCollector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let client = ServingClient::new(ServingConfig::default(), EnvCredentials);
    let endpoint_name = client.endpoint_name().to_string();
    log::info!("🤖 Serving endpoint: {endpoint_name}");

    let orchestrator = Orchestrator::new(client);
    let mut collector = FormCollector::new(std::io::stdin().lock(), std::io::stdout());

    orchestrator.run_interactive(&mut collector, &endpoint_name).await?;

    Ok(())
}
