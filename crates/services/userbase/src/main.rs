//! Userbase - insert a user, list all users.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use userbase_lib::cli::{Cli, Commands};
use userbase_lib::config::UserbaseConfig;
use userbase_lib::session::{self, INSERT_STEP, SELECT_STEP};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = UserbaseConfig::from_env().with_database_url(cli.database_url.clone());
    tracing::debug!(?config, "Configuration loaded");

    let mut out = std::io::stdout();
    let succeeded = match cli.command() {
        Commands::Demo(args) => session::run_demo(&config, args.into(), &mut out)
            .await
            .succeeded(),
        Commands::Create(args) => {
            let inserted = session::insert_user(&config, args.into(), &mut out).await;
            session::report(INSERT_STEP, inserted, &mut out).is_some()
        }
        Commands::List => {
            let selected = session::select_all_users(&config, &mut out).await;
            session::report(SELECT_STEP, selected, &mut out).is_some()
        }
        Commands::Migrate { action } => {
            match userbase_lib::run_migrations(&config, action, &mut out).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!("Migration failed: {}", e);
                    false
                }
            }
        }
    };

    if !succeeded {
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber. Logs go to stderr so stdout carries only records.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
