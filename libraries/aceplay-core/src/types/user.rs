/// User domain type
use crate::error::Result;
use crate::types::{require_non_blank, UserId};
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned id; `None` until persisted
    pub id: Option<UserId>,

    /// Unique display name (non-blank)
    pub username: String,

    /// Opaque credential. Never serialized.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

impl User {
    /// Create a new unpersisted user with a validated username.
    ///
    /// `password_hash` is the already-hashed credential; hashing itself is
    /// the auth service's concern.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Result<Self> {
        let username = username.into();
        require_non_blank("username", &username)?;

        Ok(Self {
            id: None,
            username,
            password_hash: password_hash.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AceplayError;

    #[test]
    fn test_constructs() {
        let user = User::new("SSG", "hash").unwrap();
        assert_eq!(user.username, "SSG");
        assert_eq!(user.id, None);
    }

    #[test]
    fn test_blank_username_rejected() {
        let err = User::new(" ", "hash").unwrap_err();
        assert!(matches!(
            err,
            AceplayError::Validation { field: "username", .. }
        ));
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User::new("SSG", "super-secret-hash").unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("super-secret-hash"));
        assert!(!json.contains("password"));
    }
}
