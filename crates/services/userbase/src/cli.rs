//! CLI argument definitions.

use clap::{Parser, Subcommand};

use domain::{NewUser, DEFAULT_DEMO_EMAIL, DEFAULT_DEMO_PASSWORD};

/// Insert a user and list all users through the ORM
#[derive(Parser, Debug)]
#[command(name = "userbase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database URL, overriding USERBASE_DATABASE_URL and DATABASE_URL
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Defaults to `demo`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run, `demo` with default credentials when none was given.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| Commands::Demo(UserArgs::default()))
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Insert one user, then list all users
    Demo(UserArgs),

    /// Insert one user
    Create(UserArgs),

    /// List all users
    List,

    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

/// Credentials for the inserted user
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct UserArgs {
    /// Email of the new user
    #[arg(long, default_value = DEFAULT_DEMO_EMAIL)]
    pub email: String,

    /// Password of the new user, stored as given
    #[arg(long, default_value = DEFAULT_DEMO_PASSWORD)]
    pub password: String,
}

impl Default for UserArgs {
    fn default() -> Self {
        Self {
            email: DEFAULT_DEMO_EMAIL.to_string(),
            password: DEFAULT_DEMO_PASSWORD.to_string(),
        }
    }
}

impl From<UserArgs> for NewUser {
    fn from(args: UserArgs) -> Self {
        NewUser::new(args.email, args.password)
    }
}

/// Migration actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}
