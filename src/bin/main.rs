use anyhow::Context;
use clap::{Parser, Subcommand};

use sales_pipeline::{MemoryStore, SalesPipeline, SqliteStore, Store};

/// A cli interface to the sales ingestion pipeline
#[derive(Debug, Parser)]
#[clap(version)]
struct Args {
    /// The SQLite database holding the sales records
    ///
    /// Without a database, records are only kept for the duration of the command.
    #[clap(long, env = "SALES_DB_PATH")]
    database: Option<std::path::PathBuf>,
    /// The log filter, e.g. `info` or `sales_pipeline=debug`
    #[clap(long, env = "RUST_LOG", default_value = "info")]
    log_level: String,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ingests a sales CSV file and prints the resulting aggregates
    Ingest {
        /// The path to the sales CSV file
        filename: std::path::PathBuf,
    },
    /// Prints all stored sales records
    Records,
    /// Prints the total sales per product and region
    Aggregates,
    /// Validates and stores a single sales record
    Add {
        // negative numbers reach the validator instead of being taken for flags
        #[clap(allow_hyphen_values = true)]
        id: String,
        date: String,
        #[clap(allow_hyphen_values = true)]
        amount: String,
        #[clap(allow_hyphen_values = true)]
        product_id: String,
        region: String,
    },
    /// Checks that the store can be opened
    Health,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .target(env_logger::Target::Stderr)
        .init();

    let store: Box<dyn Store> = match &args.database {
        Some(path) => Box::new(
            SqliteStore::open(path)
                .with_context(|| format!("failed to open the database at {}", path.display()))?,
        ),
        None => Box::new(MemoryStore::new()),
    };
    let pipeline = SalesPipeline::new(&*store);

    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(std::io::stdout());

    match args.command {
        Command::Ingest { filename } => {
            pipeline
                .ingest_path(&filename)
                .with_context(|| format!("failed to ingest {}", filename.display()))?;
            for aggregated in pipeline.list_aggregates()? {
                writer.serialize(aggregated)?;
            }
        }
        Command::Records => {
            for record in pipeline.list_records()? {
                writer.serialize(record)?;
            }
        }
        Command::Aggregates => {
            for aggregated in pipeline.list_aggregates()? {
                writer.serialize(aggregated)?;
            }
        }
        Command::Add { id, date, amount, product_id, region } => {
            let fields = csv::StringRecord::from(vec![id, date, amount, product_id, region]);
            let record = pipeline.add_record(&fields).context("failed to add the record")?;
            writer.serialize(record)?;
        }
        Command::Health => println!("OK"),
    }

    writer.flush()?;
    Ok(())
}
