use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use prognosis::{ClientConfig, FormController, PredictionClient, DEFAULT_ENDPOINT};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Prediction endpoint
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Health check URL (defaults to `health` next to the endpoint)
    #[arg(long)]
    health_url: Option<String>,

    /// Give up on the request after this many seconds (waits forever if unset)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// The 30 measurements, separated by commas or whitespace
    #[arg(short, long, conflicts_with_all = ["input", "interactive"])]
    values: Option<String>,

    /// Read the measurements from a file, separated by commas or whitespace
    #[arg(short, long, conflicts_with = "interactive")]
    input: Option<PathBuf>,

    /// Prompt for each measurement on the terminal
    #[arg(long)]
    interactive: bool,

    /// Print the form as an HTML fragment
    #[arg(long)]
    html: bool,

    /// Print the result area as JSON
    #[arg(long)]
    json: bool,

    /// Query the service health endpoint and exit
    #[arg(long)]
    health: bool,
}

fn split_values(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn prompt_values<P: prognosis::Predictor>(form: &FormController<P>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for control in form.fields().controls() {
        print!("{}: ", control.label());
        stdout.flush()?;
        let mut line = String::new();
        stdin.lock().read_line(&mut line).context("failed to read from stdin")?;
        form.set_value(control.feature(), line.trim())?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    prognosis::init_logger();
    let args = Args::parse();

    let config = ClientConfig {
        endpoint: args.endpoint.clone(),
        health_url: args.health_url.clone(),
        timeout: args.timeout_secs.map(Duration::from_secs),
        ..ClientConfig::default()
    };
    let client = PredictionClient::new(config).context("failed to create prediction client")?;

    if args.health {
        let health = client.health().await.context("health check failed")?;
        println!("{}", serde_json::to_string_pretty(&health)?);
        return Ok(ExitCode::SUCCESS);
    }

    let form = FormController::new(client);

    let values = match (&args.values, &args.input) {
        (Some(values), _) => Some(split_values(values)),
        (None, Some(path)) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Some(split_values(&text))
        }
        (None, None) => None,
    };

    match values {
        Some(values) => form.fill(values)?,
        None if args.interactive => prompt_values(&form)?,
        None if args.html => {
            print!("{}", form.render_html());
            return Ok(ExitCode::SUCCESS);
        }
        None => anyhow::bail!("no measurements given; use --values, --input or --interactive"),
    }

    info!("Submitting form to {}", args.endpoint);
    let outcome = form.submit().await;

    if args.html {
        print!("{}", form.render_html());
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&form.presentation())?);
    } else {
        println!("{}", form.presentation().text());
    }

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
