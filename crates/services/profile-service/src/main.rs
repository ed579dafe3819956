//! Profile Service - command line entry point.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::ServiceConfig;
use profile_service_lib::config::ProfileServiceConfig;
use profile_service_lib::{format_profile, format_role, MigrateAction};

#[derive(Parser)]
#[command(name = "profile-service")]
#[command(about = "User profile and role management")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// List roles
    Roles,
    /// List user profiles with their roles
    Profiles,
    /// Check database connectivity
    Check,
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ProfileServiceConfig::from_env();
    init_tracing(&config.service, cli.verbose);

    tracing::debug!(?config, "Configuration loaded");

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(
    command: Commands,
    config: &ProfileServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            profile_service_lib::run_migrations(config, migrate_action).await?;
        }
        Commands::Roles => {
            let services = profile_service_lib::connect_services(config).await?;
            for role in services.roles.list_roles().await? {
                println!("{}", format_role(&role));
            }
        }
        Commands::Profiles => {
            let services = profile_service_lib::connect_services(config).await?;
            for profile in services.profiles.list_profiles().await? {
                println!("{}", format_profile(&profile));
            }
        }
        Commands::Check => {
            profile_service_lib::check_database(config).await?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber. `RUST_LOG` wins over `LOG_LEVEL` unless verbose.
fn init_tracing(service: &ServiceConfig, verbose: bool) {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) if !verbose => filter,
        _ => tracing_subscriber::EnvFilter::new(service.log_directive(verbose)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
