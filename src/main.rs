use anyhow::Result;
use clap::{Parser, Subcommand};
use wastenot::cli;
use wastenot::config::Config;
use wastenot::observability::init_observability;

/// wastenot - household food inventory and meal planning
#[derive(Parser)]
#[command(name = "wastenot")]
#[command(about = "Track perishables, plan meals around them, donate the rest", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the weekly meal plan
    Plan {
        /// Restrict candidates to one meal type (all, breakfast, lunch, dinner)
        #[arg(long, default_value = "all")]
        meal_type: String,

        /// Maximum prep + cook minutes per recipe
        #[arg(long)]
        max_time: Option<u32>,
    },
    /// Suggest a single meal for a slot
    Suggest {
        /// Slot to fill (breakfast, lunch, dinner)
        #[arg(long)]
        slot: String,

        /// Restrict candidates to one meal type (all, breakfast, lunch, dinner)
        #[arg(long, default_value = "all")]
        meal_type: String,

        /// Maximum prep + cook minutes per recipe
        #[arg(long)]
        max_time: Option<u32>,
    },
    /// Inspect or edit the inventory
    Inventory {
        #[command(subcommand)]
        command: InventoryCommands,
    },
    /// Schedule a donation pickup
    Donate {
        /// Donation center id (see `centers`)
        #[arg(long)]
        center: u32,

        /// Inventory item ids to donate
        #[arg(long, value_delimiter = ',', required = true)]
        items: Vec<u64>,

        /// Pickup date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Forecast how many meals today's inventory can produce
    Predict {
        /// Text file of consumption history, one entry per line
        #[arg(long)]
        history: Option<String>,

        /// Accept a suggested meal by name and earn karma for it
        #[arg(long)]
        accept: Option<String>,
    },
    /// List donation centers
    Centers,
    /// Show karma balance, achievements and recent history
    Karma,
}

#[derive(Subcommand)]
enum InventoryCommands {
    /// List every item
    List,
    /// List items expiring within 3 days
    Expiring,
    /// Add an item
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        quantity: f64,

        #[arg(long)]
        unit: Option<String>,

        /// Expiry date (YYYY-MM-DD)
        #[arg(long)]
        expiry: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = Config::load(args.config.clone())?;
    init_observability("wastenot", &config.observability.log_level)?;

    match args.command {
        Commands::Plan {
            meal_type,
            max_time,
        } => cli::plan_command(&config, meal_type, max_time).await,
        Commands::Suggest {
            slot,
            meal_type,
            max_time,
        } => cli::suggest_command(&config, slot, meal_type, max_time).await,
        Commands::Inventory { command } => match command {
            InventoryCommands::List => cli::inventory_list_command(&config, false).await,
            InventoryCommands::Expiring => cli::inventory_list_command(&config, true).await,
            InventoryCommands::Add {
                name,
                quantity,
                unit,
                expiry,
            } => cli::inventory_add_command(&config, name, quantity, unit, expiry).await,
        },
        Commands::Donate {
            center,
            items,
            date,
        } => cli::donate_command(&config, center, items, date).await,
        Commands::Predict { history, accept } => {
            cli::predict_command(&config, history, accept).await
        }
        Commands::Centers => cli::centers_command(),
        Commands::Karma => cli::karma_command(&config),
    }
}
