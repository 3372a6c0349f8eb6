use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;

use pagescan::cli::{Cli, OutputFormat};
use pagescan::config::Config;
use pagescan::coordinator::AnalysisCoordinator;
use pagescan::fetch::HttpContentFetcher;
use pagescan::logging::{init_tracing, LogTarget};
use pagescan::report::Report;
use pagescan::ui;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    init_tracing(if cli.once {
        LogTarget::Stderr
    } else {
        LogTarget::File
    });

    let config = load_config(&cli)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let fetcher = HttpContentFetcher::new(&config.fetch)?;
    let coordinator =
        AnalysisCoordinator::with_standard_analyzer(fetcher, runtime.handle().clone());

    let code = if cli.once {
        let state = runtime.block_on(async {
            coordinator.load_content().finished().await;
            coordinator.state()
        });
        let report = Report::from_state(&config.fetch.url, &state, config.ui.top_words);
        match cli.format {
            OutputFormat::Text => print!("{}", report.to_text()),
            OutputFormat::Json => println!("{}", report.to_json()?),
        }
        if state.error.is_some() {
            ExitCode::from(1)
        } else {
            ExitCode::SUCCESS
        }
    } else {
        ui::run(&coordinator, &config).context("Terminal UI failed")?;
        ExitCode::SUCCESS
    };

    coordinator.shutdown();
    Ok(code)
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' not found", path.display());
            }
            Config::load_from(path)?
        }
        None => Config::load()?,
    };
    Ok(config.with_overrides(&cli.overrides())?)
}
