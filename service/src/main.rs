use clap::Parser;
use country_routing_service::{init_tracing, run, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(&config.log_level);
    run(config).await
}
