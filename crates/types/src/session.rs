//! Session credential and user profile representations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The credential issued by the backend on login.
///
/// `scheme` is an optional prefix (typically `"Bearer"`) that must be
/// prepended to the token, separated by a single space, before the value is
/// usable in an `Authorization` header. [`SessionCredential::header_value`]
/// performs that composition; the session store persists the composed string
/// so it is never reassembled on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredential {
    /// Opaque token string as received from the backend.
    pub token: String,
    /// Optional authorization scheme label (e.g. `"Bearer"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

impl SessionCredential {
    /// Create a credential with no scheme prefix.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            scheme: None,
        }
    }

    /// Attach a scheme label.
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// The fully composed `Authorization` header value.
    ///
    /// `"{scheme} {token}"` when a non-empty scheme is set, otherwise the
    /// bare token with no leading space.
    #[must_use]
    pub fn header_value(&self) -> String {
        match self.scheme.as_deref() {
            Some(scheme) if !scheme.is_empty() => format!("{scheme} {}", self.token),
            _ => self.token.clone(),
        }
    }
}

/// The role a user holds within the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Company,
    Employee,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Company => write!(f, "company"),
            Self::Employee => write!(f, "employee"),
        }
    }
}

/// Flat profile snapshot persisted alongside the session credential.
///
/// Opaque to the access layer: it is stored and retrieved as a unit, never
/// partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub status: String,
    /// Company the user belongs to, absent for platform-level accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

/// A logged-in session: one credential plus one profile snapshot.
///
/// Created by a successful login exchange, handed to the session store in a
/// single `save`, and destroyed whole by `clear`. There is no partial
/// replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub credential: SessionCredential,
    pub user: SessionUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: "u-1".into(),
            first_name: "Anna".into(),
            last_name: "Bianchi".into(),
            email: "anna@example.com".into(),
            role: UserRole::Employee,
            status: "active".into(),
            company_id: Some("c-9".into()),
        }
    }

    #[test]
    fn test_header_value_with_scheme() {
        let cred = SessionCredential::new("abc123").with_scheme("Bearer");
        assert_eq!(cred.header_value(), "Bearer abc123");
    }

    #[test]
    fn test_header_value_without_scheme() {
        let cred = SessionCredential::new("abc123");
        assert_eq!(cred.header_value(), "abc123");
    }

    #[test]
    fn test_header_value_empty_scheme_no_leading_space() {
        let cred = SessionCredential::new("abc123").with_scheme("");
        assert_eq!(cred.header_value(), "abc123");
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let back: UserRole = serde_json::from_str("\"employee\"").unwrap();
        assert_eq!(back, UserRole::Employee);
    }

    #[test]
    fn test_user_serde_camel_case() {
        let json = serde_json::to_string(&user()).unwrap();
        assert!(json.contains("firstName"));
        assert!(json.contains("companyId"));
        let back: SessionUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user());
    }

    #[test]
    fn test_user_serde_skips_absent_company() {
        let mut u = user();
        u.company_id = None;
        let json = serde_json::to_string(&u).unwrap();
        assert!(!json.contains("companyId"));
    }

    #[test]
    fn test_session_roundtrip() {
        let session = AuthSession {
            credential: SessionCredential::new("tok").with_scheme("Bearer"),
            user: user(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: AuthSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
