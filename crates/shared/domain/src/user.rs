//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_DEMO_EMAIL, DEFAULT_DEMO_PASSWORD};

/// User record as stored in the `users` table.
///
/// The password is kept exactly as supplied on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh record for the given input, stamping id and creation time
    pub fn new(new_user: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: new_user.email,
            password: new_user.password,
            created_at: Utc::now(),
        }
    }

    /// Check whether this record holds the given credentials
    pub fn matches(&self, new_user: &NewUser) -> bool {
        self.email == new_user.email && self.password == new_user.password
    }
}

/// Default string representation, one record per line.
impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "id={} email='{}' password='{}' created_at={}",
            self.id,
            self.email,
            self.password,
            self.created_at.to_rfc3339()
        )
    }
}

/// User creation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// User email address
    pub email: String,
    /// User password, stored verbatim
    pub password: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Default for NewUser {
    fn default() -> Self {
        Self::new(DEFAULT_DEMO_EMAIL, DEFAULT_DEMO_PASSWORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_user() -> User {
        User {
            id: Uuid::nil(),
            email: "a@example.com".to_string(),
            password: "pw".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn test_new_copies_input() {
        let input = NewUser::new("x@example.com", "secret");
        let user = User::new(input.clone());

        assert!(user.matches(&input));
        assert_ne!(user.id, Uuid::nil());
    }

    #[test]
    fn test_default_new_user_is_demo_user() {
        let input = NewUser::default();
        assert_eq!(input.email, "newuser@example.com");
        assert_eq!(input.password, "securepassword");
    }

    #[test]
    fn test_display_format() {
        let user = fixed_user();
        assert_eq!(
            user.to_string(),
            "id=00000000-0000-0000-0000-000000000000 email='a@example.com' \
             password='pw' created_at=2024-01-02T03:04:05+00:00"
        );
    }

    #[test]
    fn test_serializes_all_fields() {
        let value = serde_json::to_value(fixed_user()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["email"], "a@example.com");
        assert_eq!(object["password"], "pw");
        assert_eq!(object["id"], "00000000-0000-0000-0000-000000000000");
        assert!(object.contains_key("created_at"));
    }

    #[test]
    fn test_matches_rejects_other_password() {
        let user = fixed_user();
        assert!(!user.matches(&NewUser::new("a@example.com", "other")));
    }
}
