//! Bookclub CLI - Command-line view of the reading club's sheet

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookclub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where to read the sheet from
#[derive(Args, Debug, Clone)]
#[group(multiple = false)]
pub struct SourceArgs {
    /// Published CSV URL (defaults to the club's sheet)
    #[arg(long)]
    pub url: Option<String>,

    /// Local CSV export instead of the published sheet
    #[arg(long)]
    pub file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the book being read now and the reading history
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every book in the sheet
    Books {
        #[command(flatten)]
        source: SourceArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which column each field is read from
    Headers {
        #[command(flatten)]
        source: SourceArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose {
        "bookclub_cli=debug,bookclub_core=debug"
    } else {
        "bookclub_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Show { source, json } => commands::show(&source, json).await,

        Commands::Books { source, json } => commands::books(&source, json).await,

        Commands::Headers { source, json } => commands::headers(&source, json).await,
    }
}
