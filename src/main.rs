//! Syllablast - CLI
//!
//! Syllable tile-swap puzzle with TUI and line-oriented modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rand::seq::IndexedRandom;
use syllablast::{
    commands::{list_configurations, run_simple, show_configuration},
    configs::loader::{builtin_configurations, load_from_file},
    core::Configuration,
    game::{Controller, Model},
    output::{print_configurations, print_show_result},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "syllablast",
    about = "Swap syllable tiles until every row spells a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file with puzzle configurations (default: built-in puzzles)
    #[arg(short, long, global = true)]
    configs: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Configuration to load on start
        #[arg(long, conflicts_with = "random")]
        config: Option<String>,

        /// Start with a randomly chosen configuration
        #[arg(long)]
        random: bool,
    },

    /// Simple CLI mode (line-oriented, no TUI)
    Simple {
        /// Configuration to load on start
        #[arg(long)]
        config: Option<String>,
    },

    /// List available configurations
    List,

    /// Show a configuration's starting board
    Show {
        /// Configuration name, e.g. "#1"
        name: String,
    },
}

/// Load configurations based on the -c flag
fn load_configurations(path: Option<&str>) -> Result<Vec<Configuration>> {
    match path {
        None => Ok(builtin_configurations()),
        Some(path) => {
            load_from_file(path).with_context(|| format!("failed to load configurations from {path}"))
        }
    }
}

/// Log to stderr, honouring `RUST_LOG` over the given default
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        config: None,
        random: false,
    });

    // Log output would tear through the alternate screen
    init_logging(if matches!(command, Commands::Play { .. }) {
        "off"
    } else {
        "warn"
    });

    let configs = load_configurations(cli.configs.as_deref())?;

    match command {
        Commands::Play { config, random } => run_play_command(configs, config, random),
        Commands::Simple { config } => {
            run_simple(Controller::new(Model::new(configs)), config.as_deref())
        }
        Commands::List => {
            print_configurations(&list_configurations(&configs));
            Ok(())
        }
        Commands::Show { name } => {
            let result = show_configuration(&configs, &name).map_err(|e| anyhow!(e))?;
            print_show_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    configs: Vec<Configuration>,
    config: Option<String>,
    random: bool,
) -> Result<()> {
    use syllablast::interactive::{App, run_tui};

    let initial = if random {
        configs
            .choose(&mut rand::rng())
            .map(|config| config.name.clone())
    } else {
        config
    };

    let mut app = App::new(Controller::new(Model::new(configs)));
    if let Some(name) = initial {
        app.select_config_by_name(&name);
    }
    run_tui(app)
}
