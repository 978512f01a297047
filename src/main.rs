use anyhow::{Context, Result};
use clap::Parser;

use tripgen::cli::Cli;
use tripgen::{
    LocalPlanSynthesizer, PlanRequestOrchestrator, RemotePlanClient, TripGenConfig, collector,
    logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TripGenConfig::load_from_path(cli.config.clone())
        .with_context(|| "Failed to load configuration")?;
    if let Some(endpoint) = &cli.endpoint {
        config.remote.endpoint = endpoint.clone();
        config.validate()?;
    }

    logging::init(&config.logging, cli.verbose)?;
    tracing::debug!("Plan service endpoint: {}", config.remote.endpoint);

    let request = collector::collect(&cli.form());

    let client = RemotePlanClient::from_config(&config.remote)?;
    let synthesizer = LocalPlanSynthesizer::from_thread_rng()
        .with_destination_count(config.planner.destination_count);
    let orchestrator = PlanRequestOrchestrator::new(client, synthesizer);

    let outcome = if cli.offline {
        orchestrator.run_offline(request)
    } else {
        orchestrator.run(request).await
    };

    if let Some(notice) = outcome.notice() {
        println!("⚠️  {notice}");
        println!();
    }
    print!("{}", outcome.plan());

    if cli.json {
        let json = serde_json::to_string_pretty(outcome.plan())
            .with_context(|| "Failed to serialize plan")?;
        println!();
        println!("📋 JSON");
        println!("{json}");
    }

    Ok(())
}
