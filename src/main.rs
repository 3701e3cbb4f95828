//! Command-line entry point: scrape one product page and print the result.
//!
//! Run with: `FIRECRAWL_API_KEY=your-key firecrawl-product --url <product-page>`

use clap::Parser;
use firecrawl_product::{Client, Error};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "firecrawl-product")]
#[command(about = "Extract structured product data from an e-commerce page")]
#[command(version)]
struct Cli {
    /// Product page URL
    #[arg(long)]
    url: String,
}

/// Point the user at the credential source when configuration fails.
fn with_env_hint(err: Error) -> Error {
    match err {
        Error::Config(msg) => Error::Config(format!(
            "{msg}. Set the FIRECRAWL_API_KEY environment variable"
        )),
        other => other,
    }
}

async fn run(cli: Cli) -> firecrawl_product::Result<serde_json::Value> {
    let api_key = std::env::var("FIRECRAWL_API_KEY").unwrap_or_default();
    let client = Client::builder(api_key).build().map_err(with_env_hint)?;

    client.extract_product(&cli.url).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional; a missing file is not an error.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(product) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&product).unwrap_or_default()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&err.to_json()).unwrap_or_default()
            );
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_error_names_the_env_var() {
        let err = Client::builder("").build().map_err(with_env_hint).unwrap_err();
        let shape = err.to_json();

        assert_eq!(shape["error"]["kind"], "ConfigurationError");
        let message = shape["error"]["message"].as_str().unwrap();
        assert!(message.contains("API key is required"));
        assert!(message.contains("FIRECRAWL_API_KEY"));
    }

    #[test]
    fn test_env_hint_leaves_other_errors_alone() {
        let err = with_env_hint(Error::Timeout);
        assert!(matches!(err, Error::Timeout));
    }
}
