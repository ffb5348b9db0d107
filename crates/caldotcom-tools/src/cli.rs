//! Command-line interface definition.

use clap::{Parser, Subcommand};

/// caldotcom-tools - Cal.com operations as callable tools
#[derive(Debug, Parser)]
#[command(name = "caldotcom-tools")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer tool requests over stdin/stdout, one JSON object per line
    Serve,

    /// Invoke a single tool and print its result
    Invoke {
        /// Tool name, e.g. `list_bookings`
        tool: String,

        /// Tool arguments as a JSON object (defaults to `{}`)
        arguments: Option<String>,
    },
}
