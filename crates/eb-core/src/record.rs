use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::location::LocationId;

/// What kind of equipment a rumor yields once it proves true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Protection against the Beast.
    Ward,
    /// A means of harming the Beast.
    Weapon,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ward => write!(f, "ward"),
            Self::Weapon => write!(f, "weapon"),
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ward" => Ok(Self::Ward),
            "weapon" => Ok(Self::Weapon),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }
}

/// An unverified clue picked up while investigating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rumor {
    /// Unique within a game.
    pub id: String,
    /// Where the rumor was uncovered.
    pub location: LocationId,
    /// The rumor text.
    pub note: String,
    /// Equipment category the rumor points to.
    pub category: Category,
    /// Whether verification has been attempted.
    pub verified: bool,
    /// Verification showed the rumor to be false.
    pub is_false: bool,
    /// Verification showed the rumor to be true.
    pub is_learned: bool,
}

impl Rumor {
    /// Create a fresh, unverified rumor.
    pub fn new(
        id: impl Into<String>,
        location: LocationId,
        note: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            location,
            note: note.into(),
            category,
            verified: false,
            is_false: false,
            is_learned: false,
        }
    }
}

/// A rumor that verification proved true. Shares its id with the rumor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    /// Id of the originating rumor.
    pub id: String,
    /// The rumor text.
    pub secret: String,
    /// Equipment category.
    pub category: Category,
}

impl From<&Rumor> for Secret {
    fn from(rumor: &Rumor) -> Self {
        Self {
            id: rumor.id.clone(),
            secret: rumor.note.clone(),
            category: rumor.category,
        }
    }
}

/// A ward or weapon derived from a secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Id of the originating secret.
    pub id: String,
    /// The secret text the item was derived from.
    pub name: String,
}

impl From<&Secret> for Item {
    fn from(secret: &Secret) -> Self {
        Self {
            id: secret.id.clone(),
            name: secret.secret.clone(),
        }
    }
}
