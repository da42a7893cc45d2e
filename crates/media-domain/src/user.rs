//! Actor identity types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Permission level of an authenticated actor.
///
/// Wire format: the level name as issued by the auth service
/// (`"Admin"`, `"User"`, `"Guest"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserLevel {
    Admin,
    User,
    Guest,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown user level: {0}")]
pub struct UnknownUserLevel(pub String);

impl UserLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
            Self::Guest => "Guest",
        }
    }

    /// Admins may act on rows owned by other users.
    pub fn overrides_ownership(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserLevel {
    type Err = UnknownUserLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "User" => Ok(Self::User),
            "Guest" => Ok(Self::Guest),
            other => Err(UnknownUserLevel(other.to_owned())),
        }
    }
}
