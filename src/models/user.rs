use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account as held by the user store.
///
/// The credential never leaves the credential service; callers only ever
/// see a [`PublicUser`].
#[derive(Clone, Debug)]
pub struct User {
    /// Sequential user ID, starting at 1
    pub id: u32,
    pub username: String,
    /// Obfuscated password as produced by the password transform
    pub credential: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: u32, username: String, credential: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username,
            credential,
            created_at,
        }
    }

    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            created_at: self.created_at,
        }
    }
}

/// The part of a [`User`] that is safe to return to a caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: u32,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        user.to_public()
    }
}
