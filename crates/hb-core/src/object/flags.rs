//! Artifact flags
//!
//! `ArtFlag` names one property an item can carry; `ArtFlags` is the set of
//! them on one item. Curse state lives in the separate `CurseFlags`.

use core::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Item property flags (a subset of the TR_* table)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ArtFlag {
    // pval-scaled
    Str,
    Int,
    Wis,
    Dex,
    Con,
    Chr,
    Stealth,
    Search,
    Infra,
    Tunnel,
    Speed,
    Blows,

    // Slays and brands
    Chaotic,
    Vampiric,
    SlayAnimal,
    SlayEvil,
    SlayUndead,
    SlayDemon,
    SlayOrc,
    SlayTroll,
    SlayGiant,
    SlayDragon,
    KillDragon,
    SlayHuman,
    Vorpal,
    Impact,
    BrandPois,
    BrandAcid,
    BrandElec,
    BrandFire,
    BrandCold,
    ForceWeapon,

    // Sustains
    SustStr,
    SustInt,
    SustWis,
    SustDex,
    SustCon,
    SustChr,

    // Immunities
    ImAcid,
    ImElec,
    ImFire,
    ImCold,

    Reflect,
    FreeAct,
    HoldExp,

    // Resistances
    ResAcid,
    ResElec,
    ResFire,
    ResCold,
    ResPois,
    ResFear,
    ResLite,
    ResDark,
    ResBlind,
    ResConf,
    ResSound,
    ResShards,
    ResNether,
    ResNexus,
    ResChaos,
    ResDisen,
    ResWater,
    ResTime,
    ResCurse,

    // Auras
    ShFire,
    ShElec,
    ShCold,

    // Abilities
    NoTele,
    NoMagic,
    Warning,
    Levitation,
    Light,
    SeeInvis,
    Telepathy,
    SlowDigest,
    Regen,
    XtraMight,
    XtraShots,
    Blessed,
    Teleport,
    Activate,

    // Bad stuff
    Aggravate,
    DrainExp,
    DrainHp,
    DrainMana,
    TyCurse,
    AddLCurse,
    AddHCurse,

    IgnoreAcid,
    IgnoreElec,
    IgnoreFire,
    IgnoreCold,

    // Weak ESP
    EspAnimal,
    EspUndead,
    EspDemon,
    EspOrc,
    EspTroll,
    EspGiant,
    EspDragon,
    EspHuman,
    EspEvil,
    EspGood,
    EspNonliving,
    EspUnique,
}

impl ArtFlag {
    pub const ELEMENTAL_IMMUNITIES: [ArtFlag; 4] =
        [ArtFlag::ImAcid, ArtFlag::ImElec, ArtFlag::ImFire, ArtFlag::ImCold];

    pub const AURAS: [ArtFlag; 3] = [ArtFlag::ShFire, ArtFlag::ShElec, ArtFlag::ShCold];

    pub const IGNORE_ELEMENTS: [ArtFlag; 4] = [
        ArtFlag::IgnoreAcid,
        ArtFlag::IgnoreElec,
        ArtFlag::IgnoreFire,
        ArtFlag::IgnoreCold,
    ];

    pub const fn is_immunity(&self) -> bool {
        matches!(
            self,
            ArtFlag::ImAcid | ArtFlag::ImElec | ArtFlag::ImFire | ArtFlag::ImCold
        )
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

const WORDS: usize = ArtFlag::COUNT.div_ceil(64);

/// Set of [`ArtFlag`]s carried by one item
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ArtFlags {
    bits: [u64; WORDS],
}

impl ArtFlags {
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    const fn slot(flag: ArtFlag) -> (usize, u64) {
        let i = flag as usize;
        (i / 64, 1u64 << (i % 64))
    }

    pub const fn has(&self, flag: ArtFlag) -> bool {
        let (word, mask) = Self::slot(flag);
        self.bits[word] & mask != 0
    }

    pub const fn has_not(&self, flag: ArtFlag) -> bool {
        !self.has(flag)
    }

    /// Add a flag; returns true if it was newly added
    pub fn set(&mut self, flag: ArtFlag) -> bool {
        let (word, mask) = Self::slot(flag);
        let added = self.bits[word] & mask == 0;
        self.bits[word] |= mask;
        added
    }

    /// Remove a flag; returns true if it was present
    pub fn reset(&mut self, flag: ArtFlag) -> bool {
        let (word, mask) = Self::slot(flag);
        let present = self.bits[word] & mask != 0;
        self.bits[word] &= !mask;
        present
    }

    pub fn has_any_of(&self, flags: &[ArtFlag]) -> bool {
        flags.iter().any(|&f| self.has(f))
    }

    pub fn count_of(&self, flags: &[ArtFlag]) -> usize {
        flags.iter().filter(|&&f| self.has(f)).count()
    }

    pub fn is_superset(&self, other: &ArtFlags) -> bool {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .all(|(a, b)| a & b == *b)
    }

    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Present flags in declaration order
    pub fn iter(&self) -> impl Iterator<Item = ArtFlag> + '_ {
        ArtFlag::iter().filter(|&f| self.has(f))
    }
}

impl FromIterator<ArtFlag> for ArtFlags {
    fn from_iter<I: IntoIterator<Item = ArtFlag>>(iter: I) -> Self {
        let mut flags = ArtFlags::new();
        for flag in iter {
            flags.set(flag);
        }
        flags
    }
}

impl fmt::Debug for ArtFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// Serialized as a list of flag names so saved items survive reordering
impl Serialize for ArtFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for ArtFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let flags = Vec::<ArtFlag>::deserialize(deserializer)?;
        Ok(flags.into_iter().collect())
    }
}

bitflags! {
    /// Curse state of an item
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct CurseFlags: u8 {
        const CURSED = 0x01;
        const HEAVY_CURSE = 0x02;
        const PERMA_CURSE = 0x04;
    }
}

// Manual serde impl for CurseFlags
impl Serialize for CurseFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CurseFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(CurseFlags::from_bits_truncate(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_reset() {
        let mut flags = ArtFlags::new();
        assert!(flags.is_empty());
        assert!(flags.set(ArtFlag::ResFire));
        assert!(!flags.set(ArtFlag::ResFire));
        assert!(flags.has(ArtFlag::ResFire));
        assert_eq!(flags.len(), 1);
        assert!(flags.reset(ArtFlag::ResFire));
        assert!(!flags.reset(ArtFlag::ResFire));
        assert!(flags.has_not(ArtFlag::ResFire));
    }

    #[test]
    fn test_last_flag_fits() {
        let mut flags = ArtFlags::new();
        flags.set(ArtFlag::EspUnique);
        assert!(flags.has(ArtFlag::EspUnique));
        assert_eq!(flags.iter().collect::<Vec<_>>(), vec![ArtFlag::EspUnique]);
    }

    #[test]
    fn test_superset() {
        let small: ArtFlags = [ArtFlag::ResAcid].into_iter().collect();
        let big: ArtFlags = [ArtFlag::ResAcid, ArtFlag::ImFire].into_iter().collect();
        assert!(big.is_superset(&small));
        assert!(!small.is_superset(&big));
        assert!(small.is_superset(&ArtFlags::new()));
    }

    #[test]
    fn test_serde_by_name() {
        let flags: ArtFlags = [ArtFlag::ShFire, ArtFlag::ImCold].into_iter().collect();
        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, r#"["IM_COLD","SH_FIRE"]"#);
        let back: ArtFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, flags);
    }

    #[test]
    fn test_flag_names() {
        assert_eq!(ArtFlag::SustCon.to_string(), "SUST_CON");
        assert_eq!(ArtFlag::EspNonliving.name(), "ESP_NONLIVING");
        assert_eq!("RES_POIS".parse::<ArtFlag>().unwrap(), ArtFlag::ResPois);
    }

    #[test]
    fn test_curse_flags_serde() {
        let curse = CurseFlags::CURSED | CurseFlags::HEAVY_CURSE;
        let json = serde_json::to_string(&curse).unwrap();
        assert_eq!(json, "3");
        let back: CurseFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, curse);
    }
}
