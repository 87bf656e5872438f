use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// One of the eight fixed locations on the map, named by roman numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LocationId {
    /// The Royal Exchange.
    #[serde(rename = "I")]
    I,
    /// All-Hallows-The-Great, where the Inquisitor starts and verifies rumors.
    #[serde(rename = "II")]
    II,
    /// Billingsgate Dock.
    #[serde(rename = "III")]
    III,
    /// London Bridge.
    #[serde(rename = "IV")]
    IV,
    /// St. Thomas' Hospital.
    #[serde(rename = "V")]
    V,
    /// Coxes Wharf.
    #[serde(rename = "VI")]
    VI,
    /// Marshalsea Prison.
    #[serde(rename = "VII")]
    VII,
    /// The Burying Ground.
    #[serde(rename = "VIII")]
    VIII,
}

impl LocationId {
    /// All locations in roll order (I = 1 through VIII = 8).
    pub fn all() -> &'static [Self] {
        &[
            Self::I,
            Self::II,
            Self::III,
            Self::IV,
            Self::V,
            Self::VI,
            Self::VII,
            Self::VIII,
        ]
    }

    /// Map a 1d8 face to its location.
    pub fn from_roll(face: u32) -> CoreResult<Self> {
        face.checked_sub(1)
            .and_then(|i| Self::all().get(i as usize).copied())
            .ok_or(CoreError::InvalidLocationRoll(face))
    }

    /// The roman numeral naming this location.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
            Self::VI => "VI",
            Self::VII => "VII",
            Self::VIII => "VIII",
        }
    }

    /// The static record for this location.
    pub fn location(self) -> &'static Location {
        &LOCATIONS[self.index()]
    }

    /// Display name, e.g. "London Bridge".
    pub fn name(self) -> &'static str {
        self.location().name
    }

    fn index(self) -> usize {
        match self {
            Self::I => 0,
            Self::II => 1,
            Self::III => 2,
            Self::IV => 3,
            Self::V => 4,
            Self::VI => 5,
            Self::VII => 6,
            Self::VIII => 7,
        }
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationId {
    type Err = CoreError;

    /// Accepts the roman numeral in any case, or the arabic digits 1-8.
    fn from_str(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        let upper = trimmed.to_uppercase();
        if let Some(id) = Self::all().iter().find(|id| id.as_str() == upper) {
            return Ok(*id);
        }
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(|n| Self::from_roll(n).ok())
            .ok_or_else(|| CoreError::UnknownLocation(trimmed.to_string()))
    }
}

/// A place on the map. Coordinates are layout hints for renderers only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// Roman-numeral identifier.
    pub id: LocationId,
    /// Display name.
    pub name: &'static str,
    /// Horizontal layout position (0-100).
    pub x: f64,
    /// Vertical layout position (0-100).
    pub y: f64,
}

/// The eight locations of the map, in roll order.
pub const LOCATIONS: [Location; 8] = [
    Location {
        id: LocationId::I,
        name: "The Royal Exchange",
        x: 50.0,
        y: 20.0,
    },
    Location {
        id: LocationId::II,
        name: "All-Hallows-The-Great",
        x: 30.0,
        y: 40.0,
    },
    Location {
        id: LocationId::III,
        name: "Billingsgate Dock",
        x: 70.0,
        y: 35.0,
    },
    Location {
        id: LocationId::IV,
        name: "London Bridge",
        x: 60.0,
        y: 55.0,
    },
    Location {
        id: LocationId::V,
        name: "St. Thomas' Hospital",
        x: 40.0,
        y: 65.0,
    },
    Location {
        id: LocationId::VI,
        name: "Coxes Wharf",
        x: 75.0,
        y: 70.0,
    },
    Location {
        id: LocationId::VII,
        name: "Marshalsea Prison",
        x: 35.0,
        y: 85.0,
    },
    Location {
        id: LocationId::VIII,
        name: "Burying Ground",
        x: 55.0,
        y: 90.0,
    },
];
