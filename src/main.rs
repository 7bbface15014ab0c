use std::path::PathBuf;

use anyhow::{Context, Result};
use calcpad::{Calculator, Config, HttpEvaluationService, keypad, logging};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Keypad calculator backed by a remote calculation service.
///
/// Reads keypad input from stdin, one line at a time, and prints the
/// display after each line. Keys: digits, `.`, `+ - * /`, `=` to
/// evaluate, `C` to clear, `<` to delete the last character.
#[derive(Debug, Parser)]
#[command(name = "calcpad", version, about)]
struct Args {
    /// Path to a config file (defaults to the user config directory).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base url of the calculation service. Overrides the config file.
    #[arg(short = 'u', long)]
    service_url: Option<String>,

    /// Request timeout in seconds. Overrides the config file.
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Default log filter when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log);

    let mut config = Config::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(url) = args.service_url {
        config.service_url = url;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = Some(timeout);
    }

    let service = HttpEvaluationService::new(&config.service_url, config.timeout())
        .context("Failed to create calculation service client")?;
    tracing::info!(endpoint = %service.endpoint(), "calculator ready");

    let mut calculator = Calculator::new(service);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        for command in keypad::parse_line(&line) {
            calculator.dispatch(command).await;
        }

        stdout
            .write_all(format!("{}\n", calculator.display()).as_bytes())
            .await
            .context("Failed to write display")?;
        stdout.flush().await.context("Failed to flush stdout")?;
    }

    Ok(())
}
