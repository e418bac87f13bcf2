//! alehouse: alehoused CLI client
//!
//! Create, inspect and import beers on a running alehoused.

use alehouse::client::ServiceClient;
use alehouse::{
    Beer, BeerCatalog, BeerType, CreateBeerParams, DeleteBeerParams, GetBeerParams,
    ListBeersParams, UpdateBeerParams,
};
use clap::{Parser, Subcommand};

/// Alehouse CLI client
#[derive(Parser)]
#[command(name = "alehouse")]
#[command(version = alehouse::PKG_VERSION)]
#[command(about = "Alehouse beer catalog client")]
struct Args {
    /// Server address
    #[arg(
        short,
        long,
        env = "ALEHOUSE_ADDRESS",
        default_value = "http://127.0.0.1:50000"
    )]
    address: String,

    /// Print beers as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check service health
    Health,

    /// Create a beer
    Create {
        /// Beer name
        name: String,
        /// Beer type (e.g. "Stout", "IndiaPaleAle")
        #[arg(short = 't', long = "type", default_value = "Unknown")]
        beer_type: BeerType,
        #[arg(short, long, default_value = "")]
        brewer: String,
        #[arg(short, long, default_value = "")]
        country: String,
    },

    /// Show one beer
    Get {
        id: String,
    },

    /// Change selected fields of a beer; omitted flags are left untouched
    Update {
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short = 't', long = "type")]
        beer_type: Option<BeerType>,
        #[arg(short, long)]
        brewer: Option<String>,
        #[arg(short, long)]
        country: Option<String>,
    },

    /// Delete a beer
    Delete {
        id: String,
    },

    /// List one page of beers
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: i32,
    },

    /// Import an Open Beer Database JSON export
    Import {
        /// Path to the export file
        path: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let client = ServiceClient::connect(&args.address).await?;

    match args.command {
        Command::Health => {
            let version = client.health().await?;
            println!("healthy (alehoused {version})");
        }
        Command::Create {
            name,
            beer_type,
            brewer,
            country,
        } => {
            let params = CreateBeerParams::new(name)
                .beer_type(beer_type)
                .brewer(brewer)
                .country(country);
            let beer = client.create_beer(params).await?;
            print_beers(&[beer], args.json)?;
        }
        Command::Get { id } => {
            let beer = client.get_beer(GetBeerParams::new(id)).await?;
            print_beers(&[beer], args.json)?;
        }
        Command::Update {
            id,
            name,
            beer_type,
            brewer,
            country,
        } => {
            let params = UpdateBeerParams {
                id,
                name,
                beer_type,
                brewer,
                country,
            };
            if params.is_empty() {
                return Err(
                    "nothing to update: pass at least one of --name, --type, --brewer, --country"
                        .into(),
                );
            }
            let beer = client.update_beer(params).await?;
            print_beers(&[beer], args.json)?;
        }
        Command::Delete { id } => {
            client.delete_beer(DeleteBeerParams::new(id)).await?;
        }
        Command::List { page } => {
            let beers = client.list_beers(ListBeersParams::new(page)).await?;
            print_beers(&beers, args.json)?;
        }
        Command::Import { path } => {
            let content = std::fs::read_to_string(&path)?;
            let beers = alehouse::import::parse_export(&content)?;
            let created = alehouse::import::import_into(&client, beers).await?;
            println!("imported {created} beers");
        }
    }

    Ok(())
}

fn print_beers(beers: &[Beer], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(beers)?);
        return Ok(());
    }
    for beer in beers {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            beer.id, beer.name, beer.beer_type, beer.brewer, beer.country
        );
    }
    Ok(())
}
