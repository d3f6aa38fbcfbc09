// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::env;

use hit_summary::config::consts::DEFAULT_INPUT;
use hit_summary::config::{load_config, AppConfig};
use hit_summary::engine::Application;
use hit_summary::modules::{DataBufferModule, Edm2ArrayModule, HitSummaryModule, JsonInputModule};
use hit_summary::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [config.yaml|config.toml]", args[0]);
        eprintln!("Example: {} configs/hit-summary.yaml", args[0]);
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => {
            load_config(path).with_context(|| format!("loading configuration from {}", path))?
        }
        None => AppConfig::default(),
    };
    init_tracing(config.log_level());

    let mut app = Application::new("Convert SimEvent to arrays and summarize hits", config);
    app.set_default_input(DEFAULT_INPUT);

    app.register(DataBufferModule)
        .register(JsonInputModule)
        .register(Edm2ArrayModule)
        .register(HitSummaryModule);

    tracing::info!(
        description = app.description(),
        modules = app.module_names().join(","),
        "Starting application"
    );

    let summary = app.run().await?;
    println!(
        "{} events processed, {} failed",
        summary.processed, summary.failed
    );

    Ok(())
}
