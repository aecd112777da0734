use std::io::Read;

use anyhow::{Context, Result};

use forecast_blend::engine;
use forecast_blend::model::request::ForecastRequest;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries nothing but the response line.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().expect("static filter")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .json()
        .init();

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read request from stdin")?;

    let line = match ForecastRequest::from_json(&raw) {
        Ok(request) => {
            tracing::info!(
                training_records = request.training_data.len(),
                feature_keys = request.feature_keys().len(),
                "running forecast"
            );
            let response = engine::run_forecast(&request);
            serde_json::to_string(&response).context("failed to serialize response")?
        }
        Err(e) => {
            tracing::warn!(error = %e, "rejecting request");
            serde_json::json!({ "error": e.tag() }).to_string()
        }
    };

    println!("{line}");
    Ok(())
}
