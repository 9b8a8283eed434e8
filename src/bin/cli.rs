// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geokernel CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geokernel::cli::Reporter;
use geokernel::{Kernel, KernelConfig, QueryBatch};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "geokernel")]
#[command(about = "Line and plane relation, intersection and distance queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to geokernel.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the classification tolerance
    #[arg(short, long, global = true)]
    epsilon: Option<f64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate queries from a JSON file
    Eval {
        /// JSON file holding one query or an array of queries
        input: PathBuf,

        /// Print answers as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config,

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &cli.command {
        Commands::Eval { input, json } => {
            let config = load_config(&cli)?;
            eval_command(input, *json, &Kernel::from_config(&config), cli.verbose)?;
        }
        Commands::Config => {
            let config = load_config(&cli)?;
            print!("{}", config.to_toml()?);
        }
        Commands::Version => {
            println!("Geokernel v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<KernelConfig> {
    let mut config = match &cli.config {
        Some(path) => KernelConfig::load_from(path, std::env::var(geokernel::config::EPSILON_ENV).ok())?,
        None => KernelConfig::load()?,
    };

    if let Some(epsilon) = cli.epsilon {
        config.apply_epsilon_override(&epsilon.to_string());
    }

    Ok(config)
}

fn eval_command(input: &Path, json: bool, kernel: &Kernel, verbose: bool) -> Result<()> {
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read query file: {:?}", input))?;
    let queries = serde_json::from_str::<QueryBatch>(&source)
        .with_context(|| format!("Failed to parse query file: {:?}", input))?
        .into_queries();

    if verbose && !json {
        Reporter::report_info(&format!(
            "Evaluating {} queries with epsilon {}",
            queries.len(),
            kernel.tolerance().epsilon
        ));
    }

    let mut failed = 0;
    let mut results = Vec::with_capacity(queries.len());

    for (index, query) in queries.iter().enumerate() {
        match kernel.evaluate(query) {
            Ok(answer) => {
                if json {
                    results.push(serde_json::json!({ "query": query.name(), "answer": answer }));
                } else {
                    Reporter::report_answer(index, query, &answer);
                }
            }
            Err(err) => {
                failed += 1;
                if json {
                    results.push(serde_json::json!({ "query": query.name(), "error": err.to_string() }));
                } else {
                    Reporter::report_failure(index, query, &err.to_string());
                }
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        Reporter::summary(queries.len(), failed);
    }

    if failed > 0 {
        Reporter::report_error(&format!("{} of {} queries failed", failed, queries.len()));
        std::process::exit(1);
    }

    Ok(())
}
