mod directory;

use serde::{Deserialize, Serialize};

pub use directory::{Directory, ViewState};

pub type UserId = u64;

/// One person in the directory, as returned by the users endpoint.
///
/// `is_following` never comes from the remote payload; it is session-local
/// state toggled from the card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default, rename = "isFollowing")]
    pub is_following: bool,
}
