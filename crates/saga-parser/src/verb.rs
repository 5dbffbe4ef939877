//! Canonical verbs: the closed set of actions a command can resolve to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A canonical action identifier.
///
/// Every surface synonym in a [`Lexicon`](crate::Lexicon) resolves to exactly
/// one of these. [`CanonicalVerb::Unknown`] is the sentinel for input the
/// parser could not make sense of; it never appears as a lexicon key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalVerb {
    /// Move in a direction or towards a named place.
    Move,
    /// Look around, or examine a target.
    Look,
    /// Pick up an item.
    Get,
    /// Put an item down.
    Drop,
    /// Place an item in or on something.
    Put,
    /// List carried items.
    Inventory,
    /// Wear or wield an item.
    Equip,
    /// Take off or stop wielding an item.
    Unequip,
    /// Attack a creature.
    Attack,
    /// Run from combat.
    Flee,
    /// Talk to a character.
    Talk,
    /// Give an item to a character.
    Give,
    /// Trade with a character.
    Trade,
    /// Buy an item.
    Buy,
    /// Sell an item.
    Sell,
    /// Eat something.
    Eat,
    /// Drink something.
    Drink,
    /// Use an item, optionally on something else.
    Use,
    /// Open a door, chest, or container.
    Open,
    /// Close a door, chest, or container.
    Close,
    /// Show character status.
    Status,
    /// Show help.
    Help,
    /// List quests.
    Quests,
    /// Recruit a companion.
    Recruit,
    /// Dismiss a companion.
    Dismiss,
    /// Show the party.
    Party,
    /// Order a companion to do something ("tell X to Y").
    #[serde(alias = "order")]
    PartyOrder,
    /// Gather the party back together.
    Gather,
    /// Enter a place.
    Enter,
    /// Leave the current place.
    Exit,
    /// Search the surroundings or a target.
    Search,
    /// Read something.
    Read,
    /// Not recognized.
    Unknown,
}

impl CanonicalVerb {
    /// Every verb a lexicon may map surfaces to, in canonical table order.
    pub const ALL: [CanonicalVerb; 32] = [
        Self::Move,
        Self::Look,
        Self::Get,
        Self::Drop,
        Self::Put,
        Self::Inventory,
        Self::Equip,
        Self::Unequip,
        Self::Attack,
        Self::Flee,
        Self::Talk,
        Self::Give,
        Self::Trade,
        Self::Buy,
        Self::Sell,
        Self::Eat,
        Self::Drink,
        Self::Use,
        Self::Open,
        Self::Close,
        Self::Status,
        Self::Help,
        Self::Quests,
        Self::Recruit,
        Self::Dismiss,
        Self::Party,
        Self::PartyOrder,
        Self::Gather,
        Self::Enter,
        Self::Exit,
        Self::Search,
        Self::Read,
    ];

    /// The canonical snake-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Look => "look",
            Self::Get => "get",
            Self::Drop => "drop",
            Self::Put => "put",
            Self::Inventory => "inventory",
            Self::Equip => "equip",
            Self::Unequip => "unequip",
            Self::Attack => "attack",
            Self::Flee => "flee",
            Self::Talk => "talk",
            Self::Give => "give",
            Self::Trade => "trade",
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Eat => "eat",
            Self::Drink => "drink",
            Self::Use => "use",
            Self::Open => "open",
            Self::Close => "close",
            Self::Status => "status",
            Self::Help => "help",
            Self::Quests => "quests",
            Self::Recruit => "recruit",
            Self::Dismiss => "dismiss",
            Self::Party => "party",
            Self::PartyOrder => "party_order",
            Self::Gather => "gather",
            Self::Enter => "enter",
            Self::Exit => "exit",
            Self::Search => "search",
            Self::Read => "read",
            Self::Unknown => "unknown",
        }
    }

    /// Movement-class verbs are the only ones that may carry a direction.
    pub fn is_movement(&self) -> bool {
        matches!(self, Self::Move | Self::Enter | Self::Exit)
    }

    /// Returns true for the not-recognized sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CanonicalVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a lexicon verb.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a canonical verb: \"{0}\"")]
pub struct UnknownVerbName(pub String);

impl FromStr for CanonicalVerb {
    type Err = UnknownVerbName;

    /// Parse a canonical verb name. `order` is accepted for
    /// [`CanonicalVerb::PartyOrder`]; `unknown` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower == "order" {
            return Ok(Self::PartyOrder);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|verb| verb.name() == lower)
            .ok_or_else(|| UnknownVerbName(s.to_string()))
    }
}
