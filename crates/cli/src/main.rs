//! cryochat CLI — the main entry point.
//!
//! Commands:
//! - `chat`     — Interactive conversation with the thesis assistant
//! - `ask`      — Answer a single question and exit
//! - `sections` — List the thesis sections the assistant can cite
//! - `status`   — Show configuration and thesis details
//! - `onboard`  — Write a default config file

use clap::{Parser, Subcommand};
use cryochat_core::Complexity;

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "cryochat",
    about = "cryochat — ask questions about a thesis on cryogenic FDSOI transistor modeling",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the thesis assistant
    Chat {
        /// Starting complexity tier (simple or rigorous)
        #[arg(short, long)]
        complexity: Option<Complexity>,

        /// Reply immediately instead of simulating thinking time
        #[arg(long)]
        no_delay: bool,
    },

    /// Ask a single question
    Ask {
        /// The question to ask
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Complexity tier (simple or rigorous)
        #[arg(short, long)]
        complexity: Option<Complexity>,

        /// Print the reply as JSON
        #[arg(long)]
        json: bool,

        /// Print the ranked sections and their scores to stderr (as JSON with --json)
        #[arg(long)]
        explain: bool,

        /// Reply immediately instead of simulating thinking time
        #[arg(long)]
        no_delay: bool,
    },

    /// List the thesis sections
    Sections {
        /// Print the sections as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show configuration and thesis details
    Status,

    /// Write a default config file
    Onboard,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Chat {
            complexity,
            no_delay,
        } => commands::chat::run(complexity, no_delay).await?,
        Commands::Ask {
            question,
            complexity,
            json,
            explain,
            no_delay,
        } => {
            let options = commands::ask::AskOptions {
                complexity,
                json,
                explain,
                no_delay,
            };
            commands::ask::run(&question.join(" "), options).await?
        }
        Commands::Sections { json } => commands::sections::run(json)?,
        Commands::Status => commands::status::run()?,
        Commands::Onboard => commands::onboard::run()?,
    }

    Ok(())
}
