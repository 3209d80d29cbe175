//! Userbase Library
//!
//! Inserts a user and lists all users through SeaORM, opening and closing
//! a connection around each step.
//!
//! # CLI Usage
//!
//! ```bash
//! # Insert the demo user, then list everyone
//! cargo run -p userbase
//!
//! # Insert a specific user
//! cargo run -p userbase -- create --email someone@example.com --password hunter2
//!
//! # Run migrations
//! cargo run -p userbase -- migrate up
//! ```

pub mod cli;
pub mod config;
pub mod infra;
pub mod output;
pub mod repository;
pub mod service;
pub mod session;

use std::io::Write;

use common::{AppError, AppResult};
use tracing::info;

use crate::cli::MigrateAction;
use crate::config::UserbaseConfig;
use crate::infra::Database;

pub use session::{insert_user, run_demo, select_all_users, DemoOutcome};

/// Run a migration action, printing status lines to `out`.
pub async fn run_migrations<W: Write>(
    config: &UserbaseConfig,
    action: MigrateAction,
    out: &mut W,
) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let outcome = apply_migration(&db, action, out).await;
    let closed = db.close().await;

    session::settle(outcome, closed)
}

async fn apply_migration<W: Write>(db: &Database, action: MigrateAction, out: &mut W) -> AppResult<()> {
    match action {
        MigrateAction::Up => {
            info!("Running pending migrations...");
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            info!("Rolling back last migration...");
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let marker = if applied { "[x]" } else { "[ ]" };
                writeln!(out, "{} {}", marker, name)?;
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
