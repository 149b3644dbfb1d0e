use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use commission_ledger::application::dto::{ExportFormat, StoreBackend, ViewFormat};
use commission_ledger::ledger::domain::LineStatus;

/// Track wireless commission reports per line and summarize them
#[derive(Parser, Debug)]
#[command(name = "commission-ledger")]
#[command(version)]
#[command(
    about = "Track wireless commission reports per line and summarize them",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./commission-ledger.config.yml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ledger store: json, documents or remote
    #[arg(long, global = true)]
    pub store: Option<StoreBackend>,

    /// File of the json store or directory of the documents store
    #[arg(long, global = true, value_name = "PATH")]
    pub store_path: Option<PathBuf>,

    /// Base URL of the remote document collection service
    #[arg(long, global = true, value_name = "URL")]
    pub store_url: Option<String>,

    /// Collection name used by the remote store
    #[arg(long, global = true, value_name = "NAME")]
    pub collection: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import a carrier commission report (CSV) into the ledger
    Import {
        /// Path to the CSV report
        report: PathBuf,

        /// Replace the stored ledger instead of merging into it
        #[arg(long)]
        replace: bool,
    },

    /// Replace the ledger with a JSON export
    Restore {
        /// Path to a file produced by `export --format json`
        snapshot: PathBuf,
    },

    /// Show commission KPIs
    Summary {
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: ViewFormat,
    },

    /// List lines, optionally filtered
    Lines {
        /// Only lines whose service number contains this text
        #[arg(long)]
        search: Option<String>,

        /// Only lines with this status: active or inactive
        #[arg(long)]
        status: Option<LineStatus>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: ViewFormat,
    },

    /// Show one line with its transactions grouped by month
    Show {
        service_number: String,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: ViewFormat,
    },

    /// Show commission totals per month
    Monthly {
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: ViewFormat,
    },

    /// Export the ledger
    Export {
        /// Export format: csv, json or markdown (defaults to the config file, else csv)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete all saved data
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Serve the ledger views over HTTP (read-only)
    Serve {
        /// Listen address (defaults to the config file, else 127.0.0.1:8080)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
