use anyhow::Result;
use clap::{Parser, Subcommand};

/// dinnerizer - Recipes to an aisle-ordered shopping list
#[derive(Parser)]
#[command(name = "dinnerizer")]
#[command(about = "Pick recipes, pick a store, get a shopping list sorted by aisle", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// List catalog recipes with their index
    Recipes {
        /// Text to look for in names, descriptions and ingredients
        #[arg(long)]
        search: Option<String>,

        /// Required dietary restrictions (vegetarian, glutenFree, dairyFree)
        #[arg(long, value_delimiter = ',')]
        diet: Vec<String>,
    },
    /// List stores near a location
    Stores {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
    /// Print the Markdown shopping list for recipes at a store
    ShoppingList {
        /// Store location id
        #[arg(long)]
        store: String,

        /// Catalog index of a recipe, repeat for several
        #[arg(long = "recipe", required = true)]
        recipes: Vec<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = dinnerizer::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    dinnerizer::observability::init_observability(
        "dinnerizer",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => dinnerizer::cli::serve(config, host, port).await,
        Commands::Recipes { search, diet } => dinnerizer::cli::list_recipes(config, search, diet),
        Commands::Stores { lat, lng } => dinnerizer::cli::list_stores(config, lat, lng).await,
        Commands::ShoppingList { store, recipes } => {
            dinnerizer::cli::shopping_list(config, store, recipes).await
        }
    }
}
