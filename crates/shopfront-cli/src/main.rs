mod catalog;

use clap::{Parser, Subcommand};
use shopfront_core::CardCommand;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopfront-cli")]
#[command(about = "Shopfront catalog command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the catalog in display order with each product's cheapest price
    List {
        /// Catalog URL or file path (defaults to SHOPFRONT_CATALOG_SOURCE)
        #[arg(long)]
        source: Option<String>,
    },
    /// Replay clicks against one product card and print the result
    Configure {
        /// Product name, or its index in display order
        #[arg(long)]
        product: String,

        /// A click, applied in order: color=NAME, storage=VALUE, ram=VALUE,
        /// image=next or image=prev
        #[arg(long = "step", value_parser = catalog::parse_step)]
        steps: Vec<CardCommand>,

        /// Catalog URL or file path (defaults to SHOPFRONT_CATALOG_SOURCE)
        #[arg(long)]
        source: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = shopfront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::List { source }) => {
            catalog::run_list(&config, source.as_deref()).await?;
        }
        Some(Commands::Configure {
            product,
            steps,
            source,
        }) => {
            catalog::run_configure(&config, source.as_deref(), &product, &steps).await?;
        }
        None => println!("shopfront-cli ready; see --help for commands"),
    }

    Ok(())
}
