//! Credential verification.

use serde::{Deserialize, Serialize};

use crate::session::AdminSession;
use crate::AuthError;

/// A username/password pair for the back office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    /// Create a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for AdminCredentials {
    /// The demo credentials printed on the login screen.
    fn default() -> Self {
        Self::new("admin", "admin123")
    }
}

/// Verifies login attempts against the configured credentials.
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    credentials: AdminCredentials,
}

impl AdminGate {
    /// Create a gate with the given credentials.
    pub fn new(credentials: AdminCredentials) -> Self {
        Self { credentials }
    }

    /// The username the gate expects.
    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    /// Verify a login attempt and mint a session on success.
    pub fn login(&self, username: &str, password: &str) -> Result<AdminSession, AuthError> {
        let user_ok = constant_time_eq(
            username.as_bytes(),
            self.credentials.username.as_bytes(),
        );
        let pass_ok = constant_time_eq(
            password.as_bytes(),
            self.credentials.password.as_bytes(),
        );

        if user_ok && pass_ok {
            Ok(AdminSession::start(username))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Compare two byte strings without short-circuiting on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_credentials_log_in() {
        let gate = AdminGate::default();
        let session = gate.login("admin", "admin123").unwrap();
        assert_eq!(session.username, "admin");
        assert!(!session.is_expired());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let gate = AdminGate::default();
        assert!(matches!(
            gate.login("admin", "letmein"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn wrong_username_is_rejected() {
        let gate = AdminGate::default();
        assert!(matches!(
            gate.login("root", "admin123"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn custom_credentials() {
        let gate = AdminGate::new(AdminCredentials::new("owner", "s3cret"));
        assert!(gate.login("owner", "s3cret").is_ok());
        assert!(gate.login("admin", "admin123").is_err());
    }

    #[test]
    fn constant_time_eq_basics() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));
    }
}
