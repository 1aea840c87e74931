use anyhow::{Context, Result, bail};
use modelfront::config;
use modelfront::predict::{HttpPredictionClient, PredictionService};
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap()),
        )
        .json()
        .init();

    let mut args = std::env::args().skip(1);
    let (domain, input) = match (args.next(), args.next()) {
        (Some(domain), Some(input)) => (domain, input),
        _ => bail!("usage: modelfront <digit|sentiment|survival|iris> <input-json>"),
    };

    info!("Submitting {} prediction to {}", domain, config.api.base_url);

    let client = HttpPredictionClient::new(config.api);

    let rendered = match domain.as_str() {
        "digit" => {
            let request = serde_json::from_str(&input).context("invalid digit input")?;
            serde_json::to_string_pretty(&client.predict_digit(request).await?)?
        }
        "sentiment" => {
            let request = serde_json::from_str(&input).context("invalid sentiment input")?;
            serde_json::to_string_pretty(&client.predict_sentiment(request).await?)?
        }
        "survival" => {
            let request = serde_json::from_str(&input).context("invalid survival input")?;
            serde_json::to_string_pretty(&client.predict_survival(request).await?)?
        }
        "iris" => {
            let request = serde_json::from_str(&input).context("invalid iris input")?;
            serde_json::to_string_pretty(&client.predict_iris(request).await?)?
        }
        other => bail!("unknown domain: {other}"),
    };

    println!("{rendered}");

    Ok(())
}
