//! Draft-pack sort order
//!
//! Reproduces the game client's internal pack presentation order
//! (reverse-engineered from its `SortTypeFilters.DraftPack` behavior):
//! mythic-to-common, lands last within a rarity, then a fixed color
//! permutation, then name. Badge positions are assigned against this order,
//! so it has to match the client exactly.

use phf::phf_map;

use crate::cards::Card;

/// Color mask → sort position. Singles come first in WUBRG order, then the
/// client's fixed (non-alphabetic) pair/triple orderings, colorless last.
static COLOR_SORT_ORDER: phf::Map<u8, u8> = phf_map! {
    1u8 => 0,   // W
    2u8 => 1,   // U
    4u8 => 2,   // B
    8u8 => 3,   // R
    16u8 => 4,  // G
    3u8 => 5,   // WU
    5u8 => 6,   // WB
    6u8 => 7,   // UB
    10u8 => 8,  // UR
    12u8 => 9,  // BR
    20u8 => 10, // BG
    24u8 => 11, // RG
    9u8 => 12,  // WR
    17u8 => 13, // WG
    18u8 => 14, // UG
    7u8 => 15,  // WUB
    14u8 => 16, // UBR
    28u8 => 17, // BRG
    25u8 => 18, // WRG
    19u8 => 19, // WUG
    13u8 => 20, // WBR
    26u8 => 21, // URG
    21u8 => 22, // WBG
    11u8 => 23, // WUR
    22u8 => 24, // UBG
    15u8 => 25, // WUBR
    30u8 => 26, // UBRG
    29u8 => 27, // WBRG
    27u8 => 28, // WURG
    23u8 => 29, // WUBG
    31u8 => 30, // WUBRG
    0u8 => 31,  // Colorless
};

/// Color rank assigned to placeholder (digit-named) cards, after every real
/// color including colorless.
const PLACEHOLDER_COLOR_RANK: u8 = 32;

/// Sort key for one card, fields in descending significance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PackSortKey<'a> {
    rarity: u8,
    land_last: u8,
    color_order: u8,
    name: &'a str,
}

/// Compute the pack sort key for a card.
///
/// Digit-only names are unresolved basic lands; they are forced behind every
/// identified card regardless of their declared rarity or colors.
pub fn pack_sort_key(card: &Card) -> PackSortKey<'_> {
    if card.is_placeholder() {
        return PackSortKey {
            rarity: 3,
            land_last: 1,
            color_order: PLACEHOLDER_COLOR_RANK,
            name: &card.name,
        };
    }
    PackSortKey {
        rarity: card.rarity.rank(),
        land_last: u8::from(card.is_land()),
        color_order: *COLOR_SORT_ORDER.get(&(card.color_mask() & 0x1F)).unwrap_or(&31),
        name: &card.name,
    }
}

/// Stable in-place sort matching the client's draft-pack order.
pub fn sort_pack(cards: &mut [Card]) {
    cards.sort_by(|a, b| pack_sort_key(a).cmp(&pack_sort_key(b)));
}

/// Sorted copy of a pack.
pub fn sorted_pack(cards: &[Card]) -> Vec<Card> {
    let mut out = cards.to_vec();
    sort_pack(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ManaColor, Rarity};

    fn card(name: &str, rarity: Rarity, colors: &[ManaColor]) -> Card {
        let mut c = Card::named(name);
        c.rarity = rarity;
        c.colors = colors.to_vec();
        c
    }

    fn names(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn rarity_dominates() {
        let mut pack = vec![
            card("Common Blue", Rarity::Common, &[ManaColor::U]),
            card("Mythic Green", Rarity::Mythic, &[ManaColor::G]),
            card("Rare White", Rarity::Rare, &[ManaColor::W]),
        ];
        sort_pack(&mut pack);
        assert_eq!(names(&pack), ["Mythic Green", "Rare White", "Common Blue"]);
    }

    #[test]
    fn color_permutation_within_rarity() {
        let mut pack = vec![
            card("Green", Rarity::Common, &[ManaColor::G]),
            card("White", Rarity::Common, &[ManaColor::W]),
            card("Colorless", Rarity::Common, &[]),
            card("Red", Rarity::Common, &[ManaColor::R]),
            card("Azorius", Rarity::Common, &[ManaColor::W, ManaColor::U]),
        ];
        sort_pack(&mut pack);
        assert_eq!(
            names(&pack),
            ["White", "Red", "Green", "Azorius", "Colorless"]
        );
    }

    #[test]
    fn lands_after_spells_of_same_rarity() {
        let mut land = card("Idyllic Grange", Rarity::Common, &[]);
        land.types = vec!["Land".to_string()];
        let mut pack = vec![land, card("Colorless Spell", Rarity::Common, &[])];
        sort_pack(&mut pack);
        assert_eq!(names(&pack), ["Colorless Spell", "Idyllic Grange"]);
    }

    #[test]
    fn name_breaks_ties() {
        let mut pack = vec![
            card("Zephyr", Rarity::Common, &[ManaColor::U]),
            card("Aether", Rarity::Common, &[ManaColor::U]),
        ];
        sort_pack(&mut pack);
        assert_eq!(names(&pack), ["Aether", "Zephyr"]);
    }

    #[test]
    fn placeholder_cards_sort_strictly_last() {
        let mut basic = card("80044", Rarity::Mythic, &[ManaColor::G]);
        basic.types = vec!["Land".to_string()];
        let mut pack = vec![
            basic,
            card("Common Land-less", Rarity::Common, &[]),
            card("Shock", Rarity::Common, &[ManaColor::R]),
        ];
        sort_pack(&mut pack);
        assert_eq!(names(&pack)[2], "80044");
    }

    #[test]
    fn sort_is_idempotent() {
        let mut pack = vec![
            card("Opt", Rarity::Common, &[ManaColor::U]),
            card("Shock", Rarity::Common, &[ManaColor::R]),
            card("80044", Rarity::Common, &[]),
            card("Murder", Rarity::Uncommon, &[ManaColor::B]),
        ];
        sort_pack(&mut pack);
        let once = pack.clone();
        sort_pack(&mut pack);
        assert_eq!(pack, once);
    }

    #[test]
    fn empty_and_single_inputs_are_total() {
        let mut empty: Vec<Card> = vec![];
        sort_pack(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![card("Opt", Rarity::Common, &[ManaColor::U])];
        sort_pack(&mut single);
        assert_eq!(names(&single), ["Opt"]);
    }

    #[test]
    fn malformed_cards_default_to_common_colorless() {
        // No rarity, types, or colors set at all
        let mut pack = vec![Card::named("Mystery"), card("White", Rarity::Common, &[ManaColor::W])];
        sort_pack(&mut pack);
        assert_eq!(names(&pack), ["White", "Mystery"]);
    }
}
