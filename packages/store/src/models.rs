//! # Session-persisted identity
//!
//! The only entity the front-end keeps beyond the lifetime of a view is the
//! authenticated user, stored next to the bearer token by
//! [`crate::TokenStore`]. Everything else is fetched from the remote API on
//! demand and lives in the `api` crate.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The identity returned at login: `id`, `username`, `email`, `rol` and an optional display `nombre`. Field names follow the API wire format through serde renames. |
//! | [`Role`] | The enumerated role (`ADMIN` / `CLIENTE`). Parsing is case-insensitive and tolerates a `ROLE_` prefix, which is how some JWT issuers spell it. |
//!
//! Identifiers are kept as strings. The backend emits them as JSON numbers,
//! so [`id`] provides serde helpers that accept either form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role attached to an authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Role {
    Admin,
    Cliente,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Cliente => "CLIENTE",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Cliente
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string is not one of the known roles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed
            .strip_prefix("ROLE_")
            .or_else(|| trimmed.strip_prefix("role_"))
            .unwrap_or(trimmed);
        if bare.eq_ignore_ascii_case("ADMIN") {
            Ok(Role::Admin)
        } else if bare.eq_ignore_ascii_case("CLIENTE") || bare.eq_ignore_ascii_case("CLIENT") {
            Ok(Role::Cliente)
        } else {
            Err(UnknownRole(s.to_string()))
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Serde helpers for identifiers that arrive as strings or numbers.
pub mod id {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    impl From<RawId> for String {
        fn from(raw: RawId) -> Self {
            match raw {
                RawId::Text(s) => s,
                RawId::Int(n) => n.to_string(),
                RawId::Float(n) => n.to_string(),
            }
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        RawId::deserialize(deserializer).map(String::from)
    }

    pub fn deserialize_opt<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
    }
}

/// Authenticated user as cached for the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "rol", alias = "role", default)]
    pub role: Role,
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Display name, falling back to the username when no name is set.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("ROLE_ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Cliente".parse::<Role>().unwrap(), Role::Cliente);
        assert!("ADMINISTRATOR".parse::<Role>().is_err());
    }

    #[test]
    fn user_uses_wire_names() {
        let json = r#"{"id":"7","username":"ana","email":"ana@petspa.es","rol":"ADMIN"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.display_name(), "ana");

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["rol"], "ADMIN");
        assert!(back.get("nombre").is_none());
    }

    #[test]
    fn numeric_ids_become_strings() {
        let json = r#"{"id":42,"username":"ana","rol":"CLIENTE"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "42");
    }

    #[test]
    fn unknown_role_fails_to_deserialize() {
        let json = r#"{"id":"7","username":"ana","rol":"ROOT"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
