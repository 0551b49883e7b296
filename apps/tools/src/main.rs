use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use board_core::{apply_filter, CallIntent, Dataset, FilterSelection, MailIntent};
use clap::{Parser, Subcommand};
use shared::domain::{EmployerId, Region};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Inspect and validate employer datasets")]
struct Cli {
    /// Dataset to operate on; the bundled sample is used when omitted.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print employers, optionally narrowed by region code and industry.
    List {
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    Industries,
    Regions,
    /// Parse and validate a dataset file without launching the board.
    Validate { path: PathBuf },
    /// Print the mail and phone links for one employer.
    Contact { id: String },
}

fn load(path: Option<&PathBuf>) -> Result<Dataset> {
    match path {
        Some(path) => {
            Dataset::load(path).with_context(|| format!("failed to load '{}'", path.display()))
        }
        None => Dataset::bundled().context("bundled dataset is invalid"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List {
            region,
            industry,
            json,
        } => {
            let dataset = load(cli.dataset.as_ref())?;
            // Accept region codes in any case.
            let region = region.map(|code| match Region::from_code(&code) {
                Some(region) => region.code().to_string(),
                None => code,
            });
            let filter = FilterSelection::new(region.as_deref(), industry.as_deref());
            let visible = apply_filter(dataset.records(), &filter);
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                for record in &visible {
                    println!(
                        "{}\t{}\t{}\t{}\t{}",
                        record.id, record.region, record.industry, record.name, record.phone
                    );
                }
                eprintln!("{} of {} employers", visible.len(), dataset.len());
            }
        }
        Command::Industries => {
            let dataset = load(cli.dataset.as_ref())?;
            for option in dataset.industry_options() {
                println!("{}\t{}", option.value, option.label);
            }
        }
        Command::Regions => {
            for option in Dataset::region_options() {
                println!("{}\t{}", option.value, option.label);
            }
        }
        Command::Validate { path } => {
            let dataset = Dataset::load(&path)
                .with_context(|| format!("'{}' is not a valid dataset", path.display()))?;
            println!(
                "ok: {} employers, {} industries",
                dataset.len(),
                dataset.industries().len()
            );
        }
        Command::Contact { id } => {
            let dataset = load(cli.dataset.as_ref())?;
            let id = EmployerId::new(id);
            let Some(record) = dataset.get(&id) else {
                bail!("no employer with id '{id}'");
            };
            println!("{}", MailIntent::inquiry(record).to_uri());
            println!("{}", CallIntent::from_record(record).to_uri());
        }
    }

    Ok(())
}
