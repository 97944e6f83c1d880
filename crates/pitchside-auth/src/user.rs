//! User accounts.

use crate::password::PasswordHasher;
use crate::AuthError;
use pitchside_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// A stored user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Email address (unique, lowercased).
    pub email: String,
    /// Argon2 password hash.
    pub password_hash: String,
    /// Display name.
    pub full_name: Option<String>,
    /// Whether the user may access the admin surface.
    pub is_admin: bool,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl User {
    /// Create a user with an already-computed password hash.
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        full_name: Option<String>,
    ) -> Self {
        Self {
            id: UserId::generate(),
            email: email.into().trim().to_lowercase(),
            password_hash: password_hash.into(),
            full_name,
            is_admin: false,
            created_at: current_timestamp(),
        }
    }

    /// Create a user by hashing the given password.
    pub fn with_password(
        hasher: &PasswordHasher,
        email: impl Into<String>,
        password: &str,
        full_name: Option<String>,
    ) -> Result<Self, AuthError> {
        let hash = hasher.hash(password)?;
        Ok(Self::new(email, hash, full_name))
    }

    /// Replace the stored password.
    pub fn set_password(
        &mut self,
        hasher: &PasswordHasher,
        password: &str,
    ) -> Result<(), AuthError> {
        self.password_hash = hasher.hash(password)?;
        Ok(())
    }

    /// Check a candidate password against the stored hash.
    pub fn check_password(&self, hasher: &PasswordHasher, password: &str) -> bool {
        hasher
            .verify(password, &self.password_hash)
            .unwrap_or(false)
    }

    /// Grant admin access.
    pub fn promote_to_admin(&mut self) {
        self.is_admin = true;
    }

    /// Name shown in the UI: full name when set, email otherwise.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}

fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_password_round_trip() {
        let hasher = PasswordHasher::new();
        let user =
            User::with_password(&hasher, "ivan@example.com", "secret-pass-1", None).unwrap();

        assert!(user.check_password(&hasher, "secret-pass-1"));
        assert!(!user.check_password(&hasher, "secret-pass-2"));
    }

    #[test]
    fn test_user_email_normalized() {
        let user = User::new("  Ivan@Example.COM ", "hash", None);
        assert_eq!(user.email, "ivan@example.com");
    }

    #[test]
    fn test_user_display_name() {
        let named = User::new("a@b.c", "hash", Some("Иван".to_string()));
        assert_eq!(named.display_name(), "Иван");

        let unnamed = User::new("a@b.c", "hash", None);
        assert_eq!(unnamed.display_name(), "a@b.c");
    }

    #[test]
    fn test_user_promote() {
        let mut user = User::new("a@b.c", "hash", None);
        assert!(!user.is_admin);
        user.promote_to_admin();
        assert!(user.is_admin);
    }
}
