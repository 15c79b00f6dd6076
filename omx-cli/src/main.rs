//! omx CLI: query and maintain data assets, glossaries and lineage held on an
//! open metadata server from the terminal.

mod commands;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// omx: exchange metadata with an open metadata server
#[derive(Parser, Debug)]
#[command(name = "omx", version, about, long_about = None)]
struct Cli {
    /// Workspace directory (looked up for .omx/config.toml)
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    /// Server name, overriding the configuration
    #[arg(short, long)]
    server: Option<String>,

    /// Platform root URL, overriding the configuration
    #[arg(short, long)]
    platform: Option<String>,

    /// User identifier, overriding the configuration
    #[arg(short, long)]
    user: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Paging flags shared by every list command.
#[derive(clap::Args, Debug, Clone, Copy, PartialEq, Eq)]
struct PageArgs {
    /// Index of the first result to return
    #[arg(long, default_value = "0")]
    start_from: usize,

    /// Maximum number of results (0 means the configured maximum)
    #[arg(long, default_value = "50")]
    page_size: usize,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Data assets
    Asset {
        #[command(subcommand)]
        action: AssetAction,
    },
    /// Glossaries, categories and terms
    Glossary {
        #[command(subcommand)]
        action: GlossaryAction,
    },
    /// Processes and their ports
    Process {
        #[command(subcommand)]
        action: ProcessAction,
    },
    /// Lineage relationships
    Lineage {
        #[command(subcommand)]
        action: LineageAction,
    },
}

#[derive(clap::Subcommand, Debug)]
enum ConfigAction {
    /// Create a default configuration file in the workspace
    Init,
    /// Show the effective configuration
    Show,
    /// Check the effective configuration for mistakes
    Validate,
}

#[derive(clap::Subcommand, Debug)]
enum AssetAction {
    /// Search data assets with a regular expression
    Find {
        search: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Retrieve one data asset
    Get { guid: String },
    /// Data assets with an exact name
    ByName {
        name: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Remove a data asset
    Remove { guid: String },
    /// Make a data asset visible to consumers
    Publish { guid: String },
    /// Hide a data asset from consumers
    Withdraw { guid: String },
}

#[derive(clap::Subcommand, Debug)]
enum GlossaryAction {
    /// Search glossaries with a regular expression
    Find {
        search: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Retrieve one glossary
    Get { guid: String },
    /// Terms in a glossary
    Terms {
        glossary_guid: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Categories in a glossary
    Categories {
        glossary_guid: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Retrieve one glossary term
    Term { term_guid: String },
    /// Search terms across all glossaries
    FindTerms {
        search: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(clap::Subcommand, Debug)]
enum ProcessAction {
    /// Search processes with a regular expression
    Find {
        search: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Retrieve one process
    Get { guid: String },
    /// Ports of a process
    Ports {
        process_guid: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Processes nested in a process
    Children {
        process_guid: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(clap::Subcommand, Debug)]
enum LineageAction {
    /// Data flows leaving a supplier
    Consumers {
        supplier_guid: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Data flows arriving at a consumer
    Suppliers {
        consumer_guid: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Control flows leaving a step
    NextSteps {
        guid: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Lineage mappings from a source element
    Mappings {
        source_guid: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(filter));

    // JSON file layer for structured logging
    let log_dir = directories::ProjectDirs::from("dev", "omx", "omx")
        .map(|d| d.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("."));
    let _ = std::fs::create_dir_all(&log_dir);
    let file_appender = tracing_appender::rolling::daily(&log_dir, "omx.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let workspace = cli
        .workspace
        .canonicalize()
        .unwrap_or_else(|_| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let overrides = commands::Overrides {
        server: cli.server,
        platform: cli.platform,
        user: cli.user,
    };

    if let Err(e) = commands::handle_command(cli.command, &workspace, &overrides).await {
        eprintln!("error: {:#}", e);
        // Flush the file log before exiting.
        drop(guard);
        std::process::exit(1);
    }
    Ok(())
}
