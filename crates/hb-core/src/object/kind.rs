//! Item kinds (tval)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, FromRepr};

/// Equipment kinds, numbered by Hengband tval.
///
/// The numbering matters: aura eligibility is the contiguous range
/// `Cloak..=HardArmor`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    FromRepr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ItemKind {
    Shot = 16,
    Arrow = 17,
    Bolt = 18,
    Bow = 19,
    Digging = 20,
    Hafted = 21,
    Polearm = 22,
    Sword = 23,
    Boots = 30,
    Gloves = 31,
    Helm = 32,
    Crown = 33,
    Shield = 34,
    Cloak = 35,
    SoftArmor = 36,
    HardArmor = 37,
    DragArmor = 38,
    Lite = 39,
    Amulet = 40,
    Ring = 45,
}

impl ItemKind {
    /// The raw tval
    pub const fn tval(&self) -> u8 {
        *self as u8
    }

    pub const fn is_ammo(&self) -> bool {
        matches!(self, ItemKind::Shot | ItemKind::Arrow | ItemKind::Bolt)
    }

    /// Shooters, diggers and melee weapons (not ammo)
    pub const fn is_weapon(&self) -> bool {
        matches!(
            self,
            ItemKind::Bow
                | ItemKind::Digging
                | ItemKind::Hafted
                | ItemKind::Polearm
                | ItemKind::Sword
        )
    }

    pub const fn is_weapon_ammo(&self) -> bool {
        self.is_weapon() || self.is_ammo()
    }

    pub const fn is_melee_weapon(&self) -> bool {
        matches!(
            self,
            ItemKind::Digging | ItemKind::Hafted | ItemKind::Polearm | ItemKind::Sword
        )
    }

    pub const fn is_armour(&self) -> bool {
        let tval = self.tval();
        tval >= ItemKind::Boots.tval() && tval <= ItemKind::DragArmor.tval()
    }

    pub const fn is_jewelry(&self) -> bool {
        matches!(self, ItemKind::Amulet | ItemKind::Ring)
    }

    /// Cloaks and body armour may be sheathed in an element
    pub const fn can_carry_aura(&self) -> bool {
        let tval = self.tval();
        tval >= ItemKind::Cloak.tval() && tval <= ItemKind::HardArmor.tval()
    }

    pub const fn can_reflect(&self) -> bool {
        matches!(
            self,
            ItemKind::Shield | ItemKind::Cloak | ItemKind::Helm | ItemKind::HardArmor
        )
    }

    /// Edged weapons that may be blessed by a priestly bias
    pub const fn is_blade(&self) -> bool {
        matches!(self, ItemKind::Sword | ItemKind::Polearm)
    }

    /// Kinds that keep the full to-hit/to-damage bonus from a misc roll
    pub const fn takes_full_combat_bonus(&self) -> bool {
        self.is_melee_weapon() || matches!(self, ItemKind::Gloves | ItemKind::Ring)
    }

    /// Ammo and light sources never become random artifacts
    pub const fn can_become_artifact(&self) -> bool {
        !self.is_ammo() && !matches!(self, ItemKind::Lite)
    }

    /// Base damage dice for a plain item of this kind
    pub const fn base_dice(&self) -> (u8, u8) {
        match self {
            ItemKind::Shot => (1, 4),
            ItemKind::Arrow | ItemKind::Bolt => (1, 5),
            ItemKind::Digging => (1, 4),
            ItemKind::Hafted => (2, 4),
            ItemKind::Polearm => (1, 10),
            ItemKind::Sword => (2, 5),
            _ => (0, 0),
        }
    }

    /// Base armour class for a plain item of this kind
    pub const fn base_ac(&self) -> i16 {
        match self {
            ItemKind::Boots | ItemKind::Gloves => 2,
            ItemKind::Helm | ItemKind::Crown => 3,
            ItemKind::Shield => 8,
            ItemKind::Cloak => 1,
            ItemKind::SoftArmor => 8,
            ItemKind::HardArmor => 20,
            ItemKind::DragArmor => 30,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_aura_range() {
        let aura: Vec<_> = ItemKind::iter().filter(|k| k.can_carry_aura()).collect();
        assert_eq!(
            aura,
            vec![ItemKind::Cloak, ItemKind::SoftArmor, ItemKind::HardArmor]
        );
    }

    #[test]
    fn test_armour_range() {
        assert!(ItemKind::Boots.is_armour());
        assert!(ItemKind::DragArmor.is_armour());
        assert!(!ItemKind::Lite.is_armour());
        assert!(!ItemKind::Sword.is_armour());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("sword".parse::<ItemKind>().unwrap(), ItemKind::Sword);
        assert_eq!("Hard_Armor".parse::<ItemKind>().unwrap(), ItemKind::HardArmor);
        assert!("spoon".parse::<ItemKind>().is_err());
    }

    #[test]
    fn test_from_repr() {
        assert_eq!(ItemKind::from_repr(37), Some(ItemKind::HardArmor));
        assert_eq!(ItemKind::from_repr(24), None);
    }

    #[test]
    fn test_combat_bonus_kinds() {
        assert!(ItemKind::Sword.takes_full_combat_bonus());
        assert!(ItemKind::Ring.takes_full_combat_bonus());
        assert!(!ItemKind::Bow.takes_full_combat_bonus());
        assert!(!ItemKind::Amulet.takes_full_combat_bonus());
    }
}
