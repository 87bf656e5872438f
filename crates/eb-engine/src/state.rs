//! Game state: the aggregate every action reads and mutates.

use std::collections::BTreeMap;
use std::fmt;

use eb_core::{Category, Item, LocationId, Rumor, Secret};
use serde::{Deserialize, Serialize};

use crate::calendar::Month;

/// Actions the Inquisitor may take each day.
pub const ACTIONS_PER_DAY: u32 = 2;
/// Wounds at which the Inquisitor falls.
pub const MAX_WOUNDS: u32 = 3;
/// Most dice a hunt can roll, however many secrets are known.
pub const MAX_HUNT_DICE: usize = 5;
/// Where the Inquisitor starts.
pub const HOME_LOCATION: LocationId = LocationId::II;
/// The only place rumors can be verified.
pub const VERIFICATION_LOCATION: LocationId = LocationId::II;
/// Opening date.
pub const START_DAY: u32 = 13;
/// Opening month.
pub const START_MONTH: Month = Month::May;
/// Opening year.
pub const START_YEAR: i32 = 1746;

/// Where the game is in its turn structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GamePhase {
    /// The Beast stirs. Resolved automatically; callers never wait here.
    BeastApproaches,
    /// The Inquisitor spends the day's actions.
    TakeActions,
    /// The Beast and the Inquisitor share a location.
    Hunt,
    /// Victory or defeat.
    GameEnded,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeastApproaches => write!(f, "beast-approaches"),
            Self::TakeActions => write!(f, "take-actions"),
            Self::Hunt => write!(f, "hunt"),
            Self::GameEnded => write!(f, "game-ended"),
        }
    }
}

/// Rumors heard and secrets learned, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Investigation {
    /// Every rumor heard, oldest first. Never shrinks.
    pub rumors: Vec<Rumor>,
    /// Rumors proven true. No duplicate ids.
    pub secrets: Vec<Secret>,
}

/// The complete state of one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Name of the Beast.
    pub beast_name: String,
    /// Name of the Inquisitor.
    pub inquisitor_name: String,
    /// Day of the month.
    pub current_day: u32,
    /// Month.
    pub current_month: Month,
    /// Year.
    pub current_year: i32,
    /// Seed the game's randomness was derived from.
    pub seed: u64,

    /// Where the Inquisitor stands.
    pub player_location: LocationId,
    /// `MAX_WOUNDS - wounds`, never below zero.
    pub health: u32,
    /// Wounds taken. Only ever increases.
    pub wounds: u32,

    /// Where the Beast is, once it has materialized.
    pub beast_location: Option<LocationId>,
    /// Roads between the Beast and the Inquisitor, once it has materialized.
    pub beast_distance: Option<u32>,

    /// Rumors and secrets.
    pub investigation: Investigation,
    /// Wards derived from secrets.
    pub wards: Vec<Item>,
    /// Weapons derived from secrets.
    pub weapons: Vec<Item>,

    /// Locations holding an uninvestigated rumor token.
    pub rumors_tokens: BTreeMap<LocationId, bool>,
    /// Whether the game is over.
    pub game_ended: bool,
    /// Whether the Beast was slain.
    pub victorious: bool,
    /// Current phase.
    pub game_phase: GamePhase,
    /// Actions left today.
    pub actions_remaining: u32,
    /// Round number, starting at 1.
    pub current_round: u32,

    /// Days that have passed since the opening.
    pub days_elapsed: u32,
    /// Successful investigations.
    pub investigations_completed: u32,
    /// `wards.len() + weapons.len()` as of the last verification.
    pub equipment_collected: u32,
}

impl GameState {
    /// Opening state: day 13 of May 1746, the Inquisitor at home, no Beast.
    pub fn new(beast_name: impl Into<String>, inquisitor_name: impl Into<String>, seed: u64) -> Self {
        Self {
            beast_name: beast_name.into(),
            inquisitor_name: inquisitor_name.into(),
            current_day: START_DAY,
            current_month: START_MONTH,
            current_year: START_YEAR,
            seed,
            player_location: HOME_LOCATION,
            health: MAX_WOUNDS,
            wounds: 0,
            beast_location: None,
            beast_distance: None,
            investigation: Investigation::default(),
            wards: Vec::new(),
            weapons: Vec::new(),
            rumors_tokens: BTreeMap::new(),
            game_ended: false,
            victorious: false,
            game_phase: GamePhase::BeastApproaches,
            actions_remaining: ACTIONS_PER_DAY,
            current_round: 1,
            days_elapsed: 0,
            investigations_completed: 0,
            equipment_collected: 0,
        }
    }

    /// Whether `location` holds a rumor token.
    pub fn has_token(&self, location: LocationId) -> bool {
        self.rumors_tokens.get(&location).copied().unwrap_or(false)
    }

    /// Put a token on `location`. A location holds at most one.
    pub fn place_token(&mut self, location: LocationId) {
        self.rumors_tokens.insert(location, true);
    }

    /// Remove the token from `location`, returning whether there was one.
    pub fn take_token(&mut self, location: LocationId) -> bool {
        self.rumors_tokens.remove(&location).unwrap_or(false)
    }

    /// Whether the Beast stands where the Inquisitor does.
    pub fn beast_is_here(&self) -> bool {
        self.beast_location == Some(self.player_location)
    }

    /// Rumors not yet verified.
    pub fn unverified_count(&self) -> usize {
        self.investigation
            .rumors
            .iter()
            .filter(|r| !r.verified)
            .count()
    }

    /// Number of dice a hunt would roll right now.
    pub fn hunt_dice(&self) -> usize {
        self.investigation.secrets.len().min(MAX_HUNT_DICE)
    }

    /// Inflict wounds and recompute health.
    pub fn wound(&mut self, amount: u32) {
        self.wounds = self.wounds.saturating_add(amount);
        self.health = MAX_WOUNDS.saturating_sub(self.wounds);
    }

    /// Whether the Inquisitor has taken enough wounds to fall.
    pub fn is_fatally_wounded(&self) -> bool {
        self.wounds >= MAX_WOUNDS
    }

    /// Record a secret (and its ward or weapon) unless its id is already known.
    ///
    /// Returns whether anything new was recorded.
    pub fn learn_secret(&mut self, secret: Secret) -> bool {
        if self.investigation.secrets.iter().any(|s| s.id == secret.id) {
            return false;
        }
        let item = Item::from(&secret);
        let bucket = match secret.category {
            Category::Ward => &mut self.wards,
            Category::Weapon => &mut self.weapons,
        };
        if !bucket.iter().any(|i| i.id == item.id) {
            bucket.push(item);
        }
        self.investigation.secrets.push(secret);
        true
    }

    /// Recount `equipment_collected` from the ward and weapon lists.
    pub fn recount_equipment(&mut self) {
        self.equipment_collected = (self.wards.len() + self.weapons.len()) as u32;
    }
}
