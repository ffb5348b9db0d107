//! caldotcom-tools entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod server;
mod tools;

use cli::{Cli, Command};
use error::{ToolError, ToolResult};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ToolResult<()> {
    match cli.command {
        Command::Serve => server::serve().await,
        Command::Invoke { tool, arguments } => {
            let arguments = match arguments {
                Some(raw) => serde_json::from_str(&raw)
                    .map_err(|e| ToolError::InvalidArguments(e.to_string()))?,
                None => serde_json::json!({}),
            };
            let result = tools::dispatch(&tool, arguments).await?;
            println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
            Ok(())
        }
    }
}
