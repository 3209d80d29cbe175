//! Connect / operate / disconnect lifecycle.
//!
//! Every step opens its own connection, performs one operation and closes
//! the connection again before returning, whether or not the operation
//! succeeded. Errors from a step are reported by [`report`], which is the
//! only place in the crate where errors stop propagating.

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use common::{AppResult, DatabaseConfig};
use domain::{NewUser, User};
use sea_orm::{DatabaseConnection, DbErr};

use crate::config::UserbaseConfig;
use crate::infra::Database;
use crate::output::{render_created, render_listing};
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Name of the insert step in logs
pub const INSERT_STEP: &str = "insert";

/// Name of the select step in logs
pub const SELECT_STEP: &str = "select";

/// Run `op` against a freshly opened connection, then close it.
///
/// The connection is closed even when `op` fails. A close failure is
/// returned only when `op` succeeded; otherwise it is logged and `op`'s
/// error wins.
pub async fn with_database<T, F, Fut>(config: &DatabaseConfig, op: F) -> AppResult<T>
where
    F: FnOnce(DatabaseConnection) -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let db = Database::connect(config).await?;
    let outcome = op(db.get_connection()).await;
    let closed = db.close().await;

    settle(outcome, closed)
}

/// Combine an operation's result with the result of closing its connection.
///
/// The operation's error always wins; a close error that would be masked by it
/// is logged at `warn`.
pub(crate) fn settle<T>(outcome: AppResult<T>, closed: Result<(), DbErr>) -> AppResult<T> {
    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err.into()),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            tracing::warn!(error = %close_err, "Disconnect failed after an earlier error");
            Err(err)
        }
    }
}

/// Insert one user and print it as JSON.
pub async fn insert_user<W: Write>(
    config: &UserbaseConfig,
    new_user: NewUser,
    out: &mut W,
) -> AppResult<User> {
    let user = with_database(&config.database, |conn| async move {
        let service = users(conn);
        service.create_user(new_user).await
    })
    .await?;

    writeln!(out, "{}", render_created(&user)?)?;
    Ok(user)
}

/// Fetch every user and print them one per line.
pub async fn select_all_users<W: Write>(config: &UserbaseConfig, out: &mut W) -> AppResult<Vec<User>> {
    let all_users = with_database(&config.database, |conn| async move {
        let service = users(conn);
        service.list_users().await
    })
    .await?;

    writeln!(out, "{}", render_listing(&all_users))?;
    Ok(all_users)
}

/// Catch-all for a step result: print the error message and log it.
pub fn report<T, W: Write>(step: &str, result: AppResult<T>, out: &mut W) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::error!(step, code = err.code(), error = %err, "Step failed");
            if let Err(write_err) = writeln!(out, "{}", err) {
                tracing::error!(error = %write_err, "Could not print step error");
            }
            None
        }
    }
}

/// What the demo run managed to do.
#[derive(Debug, Default)]
pub struct DemoOutcome {
    pub created: Option<User>,
    pub listed: Option<Vec<User>>,
}

impl DemoOutcome {
    /// Whether both steps succeeded
    pub fn succeeded(&self) -> bool {
        self.created.is_some() && self.listed.is_some()
    }
}

/// Insert a user, then list all users. A failed insert does not stop the listing.
pub async fn run_demo<W: Write>(config: &UserbaseConfig, new_user: NewUser, out: &mut W) -> DemoOutcome {
    let inserted = insert_user(config, new_user, out).await;
    let created = report(INSERT_STEP, inserted, out);

    let selected = select_all_users(config, out).await;
    let listed = report(SELECT_STEP, selected, out);

    DemoOutcome { created, listed }
}

fn users(conn: DatabaseConnection) -> UserManager {
    UserManager::new(Arc::new(UserStore::new(conn)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;

    #[test]
    fn test_report_passes_success_through() {
        let mut out: Vec<u8> = Vec::new();
        let value = report(INSERT_STEP, Ok(7), &mut out);

        assert_eq!(value, Some(7));
        assert!(out.is_empty());
    }

    #[test]
    fn test_report_prints_error_message() {
        let mut out: Vec<u8> = Vec::new();
        let value: Option<()> = report(SELECT_STEP, Err(AppError::conflict("Email")), &mut out);

        assert!(value.is_none());
        assert_eq!(String::from_utf8(out).unwrap(), "Email already exists\n");
    }

    fn close_failure() -> Result<(), DbErr> {
        Err(DbErr::Custom("pool already closed".to_string()))
    }

    #[test]
    fn test_settle_success_and_clean_close() {
        let result = settle(Ok(3), Ok(()));
        assert_eq!(result.unwrap(), 3);
    }

    #[test]
    fn test_settle_returns_close_error_after_success() {
        let result = settle(Ok(3), close_failure());

        let err = result.unwrap_err();
        assert_eq!(err.code(), "DATABASE_ERROR");
        assert!(err.to_string().contains("pool already closed"));
    }

    #[test]
    fn test_settle_returns_operation_error_after_clean_close() {
        let result: AppResult<()> = settle(Err(AppError::conflict("Email")), Ok(()));
        assert!(matches!(result, Err(AppError::Conflict(ref entity)) if entity == "Email"));
    }

    #[test]
    fn test_settle_keeps_operation_error_when_close_also_fails() {
        let result: AppResult<()> = settle(Err(AppError::conflict("Email")), close_failure());

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref entity) if entity == "Email"));
        assert!(!err.to_string().contains("pool already closed"));
    }

    #[test]
    fn test_demo_outcome_requires_both_steps() {
        let outcome = DemoOutcome {
            created: None,
            listed: Some(Vec::new()),
        };
        assert!(!outcome.succeeded());

        let outcome = DemoOutcome {
            created: Some(User::new(NewUser::default())),
            listed: Some(Vec::new()),
        };
        assert!(outcome.succeeded());
    }
}
