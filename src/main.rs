use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pagestat::cli::{Cli, Commands, ConfigCommands};

mod commands;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "PAGESTAT_LOG";

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "pagestat=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = commands::resolve_config_path(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze(args) => {
            let config = pagestat::Config::load_from(&config_path)?;
            commands::analyze::handle(&args, &config)
        }
        Commands::Series(args) => {
            let config = pagestat::Config::load_from(&config_path)?;
            commands::series::handle_series(&args, &config)
        }
        Commands::Charts(args) => {
            let config = pagestat::Config::load_from(&config_path)?;
            commands::series::handle_charts(&args, &config)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config_path),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(&config_path, force),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(&config_path, yes),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "pagestat", &mut std::io::stdout());
            Ok(())
        }
    }
}
