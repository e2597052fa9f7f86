//! FormStore CLI
//!
//! Command-line interface for inspecting and appending to a record file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use formstore::{Config, FormRecord, RecordStore};
use tracing_subscriber::{fmt, EnvFilter};

/// FormStore CLI
#[derive(Parser, Debug)]
#[command(name = "formstore-cli")]
#[command(about = "CLI for the FormStore record file")]
#[command(version)]
struct Args {
    /// Record file (defaults to FORMSTORE_DATA_FILE, then ./formstore_data/form_data.json)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append a record
    Add {
        name: String,
        full_name: String,
        location: String,
        date_of_birth: String,
    },

    /// List all records
    List {
        /// Print the projected records as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> formstore::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(path) = args.data_file {
        config.data_file = path;
    }

    tracing::debug!("Record file: {}", config.data_file.display());
    let store = RecordStore::open(config);

    match args.command {
        Commands::Add {
            name,
            full_name,
            location,
            date_of_birth,
        } => {
            store.append(FormRecord::new(name, full_name, location, date_of_birth))?;
            println!("Data saved successfully");
        }
        Commands::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&store.list_all()?)?);
            } else {
                for (i, r) in store.load()?.iter().enumerate() {
                    println!(
                        "{:>4}  {} | {} | {} | {}",
                        i + 1,
                        r.name,
                        r.full_name,
                        r.location,
                        r.date_of_birth
                    );
                }
            }
        }
    }

    Ok(())
}
