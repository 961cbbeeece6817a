//! Queuing Engine demo
//!
//! Evaluates the reference M/M/1 and M/M/2 scenarios and prints them as a
//! table followed by JSON. Log level comes from `RUST_LOG`.

use queuing_engine::{evaluate_all, reference_scenarios, render_table};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "queuing_engine=info,info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Queuing engine demo v{}", env!("CARGO_PKG_VERSION"));

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║  Queuing Engine: M/M/1 and M/M/c                         ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");

    let scenarios = reference_scenarios();
    for scenario in &scenarios {
        let request = &scenario.request;
        println!(
            "  {}: λ = {}, μ = {}, c = {}",
            scenario.label, request.arrival_rate, request.service_rate, request.server_count
        );
    }
    println!();

    let reports = evaluate_all(&scenarios);
    print!("{}", render_table(&reports));

    println!("\n{}", serde_json::to_string_pretty(&reports)?);

    Ok(())
}
