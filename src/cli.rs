use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use quote_intake::catalog::{CatalogImporter, ProductCatalog, QuoteProduct};
use quote_intake::config::AppConfig;
use quote_intake::error::AppError;
use quote_intake::telemetry;

use crate::demo::{run_demo, DemoArgs};

#[derive(Parser, Debug)]
#[command(
    name = "Brokerage Quote Intake",
    about = "Exercise the brokerage quote-intake forms from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an end-to-end intake demo across all three product forms (default)
    Demo(DemoArgs),
    /// List the select-field vocabularies available to the forms
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Vocabulary CSV export merged over the standard catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load();
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args, &config),
        Command::Catalog(args) => run_catalog(args, &config),
    }
}

fn run_catalog(args: CatalogArgs, config: &AppConfig) -> Result<(), AppError> {
    let csv_path = args.catalog_csv.or_else(|| config.catalog.csv_path.clone());
    let catalog = load_catalog(csv_path)?;

    for product in QuoteProduct::ordered() {
        println!("{}", product.label());
        for vocabulary in catalog.vocabularies_for(product) {
            println!("  {}: {}", vocabulary.field, vocabulary.options.join(", "));
        }
    }

    Ok(())
}

pub(crate) fn load_catalog(csv_path: Option<PathBuf>) -> Result<ProductCatalog, AppError> {
    match csv_path {
        Some(path) => CatalogImporter::from_path(path).map_err(AppError::from),
        None => Ok(ProductCatalog::standard()),
    }
}
