//! Card data model for draft packs
//!
//! Cards arrive from the pack-detection pipeline already resolved; this
//! module only defines the record shape and the color bitmask used by the
//! pack sort. Unresolved cards show up with a digit-only name (the raw arena
//! identifier) and are treated as generic basic lands downstream.

use serde::{Deserialize, Serialize};

/// Card rarity, ordered mythic-first for the pack sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Mythic,
    Rare,
    Uncommon,
    #[default]
    #[serde(other)]
    Common,
}

impl Rarity {
    /// Sort rank: mythic=0, rare=1, uncommon=2, common=3
    pub fn rank(self) -> u8 {
        match self {
            Rarity::Mythic => 0,
            Rarity::Rare => 1,
            Rarity::Uncommon => 2,
            Rarity::Common => 3,
        }
    }
}

/// One of the five mana color symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManaColor {
    W,
    U,
    B,
    R,
    G,
}

impl ManaColor {
    /// Bit used in the 5-bit color mask: W=1, U=2, B=4, R=8, G=16
    pub fn bit(self) -> u8 {
        match self {
            ManaColor::W => 1,
            ManaColor::U => 2,
            ManaColor::B => 4,
            ManaColor::R => 8,
            ManaColor::G => 16,
        }
    }
}

/// A card as observed in the current pack. Immutable once observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub colors: Vec<ManaColor>,
    /// Used instead of `colors` for artifacts and lands when present
    #[serde(default)]
    pub color_identity: Option<Vec<ManaColor>>,
}

impl Card {
    /// Minimal constructor for callers that only know a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rarity: Rarity::default(),
            types: Vec::new(),
            colors: Vec::new(),
            color_identity: None,
        }
    }

    /// True if the name is a raw numeric identifier (unresolved basic land).
    pub fn is_placeholder(&self) -> bool {
        !self.name.is_empty() && self.name.bytes().all(|b| b.is_ascii_digit())
    }

    /// True if `"Land"` appears among the card's types.
    pub fn is_land(&self) -> bool {
        self.types.iter().any(|t| t == "Land")
    }

    /// 5-bit color mask for sorting.
    ///
    /// Artifacts and lands sort by color identity when one is present, which
    /// matches the game client's pack ordering.
    pub fn color_mask(&self) -> u8 {
        let uses_identity = self
            .types
            .iter()
            .any(|t| t == "Artifact" || t == "Land");
        let colors = match (&self.color_identity, uses_identity) {
            (Some(identity), true) => identity.as_slice(),
            _ => self.colors.as_slice(),
        };
        colors.iter().fold(0, |mask, c| mask | c.bit())
    }
}
