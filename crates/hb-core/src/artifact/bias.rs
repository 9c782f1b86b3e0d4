//! Artifact bias and the per-bias candidate tables
//!
//! A bias is the thematic affinity an artifact picks up while its powers
//! are rolled. Each generator first offers the bias-specific candidates
//! listed here, in order, and only falls back to its generic table when
//! none of them sticks.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ActivationId;
use super::ActivationId as Act;
use crate::{ALWAYS_ACCEPT, ForgeConfig};
use crate::object::{ArtFlag, Object};
use crate::rng::RandomSource;

/// Thematic affinity of an artifact
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactBias {
    Elec,
    Pois,
    Fire,
    Cold,
    Acid,
    Str,
    Int,
    Wis,
    Dex,
    Con,
    Chr,
    Chaos,
    Priestly,
    Necromantic,
    Law,
    Rogue,
    Mage,
    Warrior,
    Ranger,
}

/// A single random check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Odds {
    Always,
    OneIn(u32),
    NotOneIn(u32),
}

impl Odds {
    pub fn roll<R: RandomSource + ?Sized>(self, rng: &mut R) -> bool {
        match self {
            Odds::Always => true,
            Odds::OneIn(n) => rng.one_in(n),
            Odds::NotOneIn(n) => !rng.one_in(n),
        }
    }
}

/// How a bias candidate is tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Skip if present, else grant and stop on a coin flip
    Coin,
    /// `Coin`, but only on cloaks and body armour
    Aura,
    /// `Coin`, but only on swords and polearms
    Blade,
    /// `Coin` after a successful 1 in n roll
    OneIn(u32),
    /// `Coin` after a failed 1 in n roll
    NotOneIn(u32),
    /// Elemental immunity behind the bias-luck roll, stripping the other
    /// immunities unless the im-luck roll passes; then stops on a coin flip
    Immunity,
    /// Skip if present, else grant and stop
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub flag: ArtFlag,
    pub gate: Gate,
}

const fn coin(flag: ArtFlag) -> Candidate {
    Candidate {
        flag,
        gate: Gate::Coin,
    }
}

const fn gated(flag: ArtFlag, gate: Gate) -> Candidate {
    Candidate { flag, gate }
}

/// Ordered "set the bias if unset" rungs
pub type BiasNudge = &'static [(Odds, ArtifactBias)];

/// Bias-specific activation choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationProfile {
    /// A `randint1(100)` roll below this keeps the biased pick
    pub chance: u32,
    /// First rung whose odds pass wins
    pub ladder: &'static [(Odds, ActivationId)],
    pub fallback: ActivationId,
}

impl ActivationProfile {
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> ActivationId {
        self.ladder
            .iter()
            .find(|(odds, _)| odds.roll(rng))
            .map(|&(_, id)| id)
            .unwrap_or(self.fallback)
    }
}

// ============================================================================
// Resistance candidates
// ============================================================================

const RES_ACID: &[Candidate] = &[
    coin(ArtFlag::ResAcid),
    gated(ArtFlag::ImAcid, Gate::Immunity),
];
const RES_ELEC: &[Candidate] = &[
    coin(ArtFlag::ResElec),
    gated(ArtFlag::ShElec, Gate::Aura),
    gated(ArtFlag::ImElec, Gate::Immunity),
];
const RES_FIRE: &[Candidate] = &[
    coin(ArtFlag::ResFire),
    gated(ArtFlag::ShFire, Gate::Aura),
    gated(ArtFlag::ImFire, Gate::Immunity),
];
const RES_COLD: &[Candidate] = &[
    coin(ArtFlag::ResCold),
    gated(ArtFlag::ShCold, Gate::Aura),
    gated(ArtFlag::ImCold, Gate::Immunity),
];
const RES_POIS: &[Candidate] = &[coin(ArtFlag::ResPois)];
const RES_WARRIOR: &[Candidate] = &[
    gated(ArtFlag::ResFear, Gate::NotOneIn(3)),
    gated(ArtFlag::NoMagic, Gate::OneIn(3)),
];
const RES_NECROMANTIC: &[Candidate] = &[
    coin(ArtFlag::ResNether),
    coin(ArtFlag::ResPois),
    coin(ArtFlag::ResDark),
];
const RES_CHAOS: &[Candidate] = &[
    coin(ArtFlag::ResChaos),
    coin(ArtFlag::ResConf),
    coin(ArtFlag::ResDisen),
];

pub fn resistance_candidates(bias: Option<ArtifactBias>) -> &'static [Candidate] {
    match bias {
        Some(ArtifactBias::Acid) => RES_ACID,
        Some(ArtifactBias::Elec) => RES_ELEC,
        Some(ArtifactBias::Fire) => RES_FIRE,
        Some(ArtifactBias::Cold) => RES_COLD,
        Some(ArtifactBias::Pois) => RES_POIS,
        Some(ArtifactBias::Warrior) => RES_WARRIOR,
        Some(ArtifactBias::Necromantic) => RES_NECROMANTIC,
        Some(ArtifactBias::Chaos) => RES_CHAOS,
        _ => &[],
    }
}

// ============================================================================
// Misc candidates
// ============================================================================

const MISC_SUST_STR: &[Candidate] = &[coin(ArtFlag::SustStr)];
const MISC_SUST_INT: &[Candidate] = &[coin(ArtFlag::SustInt)];
const MISC_SUST_WIS: &[Candidate] = &[coin(ArtFlag::SustWis)];
const MISC_SUST_DEX: &[Candidate] = &[coin(ArtFlag::SustDex)];
const MISC_SUST_CON: &[Candidate] = &[coin(ArtFlag::SustCon)];
const MISC_SUST_CHR: &[Candidate] = &[coin(ArtFlag::SustChr)];
const MISC_CHAOS: &[Candidate] = &[coin(ArtFlag::Teleport)];
const MISC_FIRE: &[Candidate] = &[gated(ArtFlag::Light, Gate::Always)];

pub fn misc_candidates(bias: Option<ArtifactBias>) -> &'static [Candidate] {
    match bias {
        Some(ArtifactBias::Ranger) | Some(ArtifactBias::Con) => MISC_SUST_CON,
        Some(ArtifactBias::Str) => MISC_SUST_STR,
        Some(ArtifactBias::Int) => MISC_SUST_INT,
        Some(ArtifactBias::Wis) => MISC_SUST_WIS,
        Some(ArtifactBias::Dex) => MISC_SUST_DEX,
        Some(ArtifactBias::Chr) => MISC_SUST_CHR,
        Some(ArtifactBias::Chaos) => MISC_CHAOS,
        Some(ArtifactBias::Fire) => MISC_FIRE,
        _ => &[],
    }
}

// ============================================================================
// Pval candidates
// ============================================================================

const PVAL_WARRIOR: &[Candidate] = &[
    coin(ArtFlag::Str),
    coin(ArtFlag::Con),
    coin(ArtFlag::Dex),
];
const PVAL_RANGER: &[Candidate] = &[
    coin(ArtFlag::Dex),
    coin(ArtFlag::Con),
    coin(ArtFlag::Str),
];
const PVAL_ROGUE: &[Candidate] = &[coin(ArtFlag::Stealth), coin(ArtFlag::Search)];
const PVAL_STR: &[Candidate] = &[coin(ArtFlag::Str)];
const PVAL_INT: &[Candidate] = &[coin(ArtFlag::Int)];
const PVAL_WIS: &[Candidate] = &[coin(ArtFlag::Wis)];
const PVAL_DEX: &[Candidate] = &[coin(ArtFlag::Dex)];
const PVAL_CON: &[Candidate] = &[coin(ArtFlag::Con)];
const PVAL_CHR: &[Candidate] = &[coin(ArtFlag::Chr)];

pub fn pval_candidates(bias: Option<ArtifactBias>) -> &'static [Candidate] {
    match bias {
        Some(ArtifactBias::Warrior) => PVAL_WARRIOR,
        Some(ArtifactBias::Mage) | Some(ArtifactBias::Int) => PVAL_INT,
        Some(ArtifactBias::Priestly) | Some(ArtifactBias::Wis) => PVAL_WIS,
        Some(ArtifactBias::Ranger) => PVAL_RANGER,
        Some(ArtifactBias::Rogue) => PVAL_ROGUE,
        Some(ArtifactBias::Str) => PVAL_STR,
        Some(ArtifactBias::Dex) => PVAL_DEX,
        Some(ArtifactBias::Con) => PVAL_CON,
        Some(ArtifactBias::Chr) => PVAL_CHR,
        _ => &[],
    }
}

// ============================================================================
// Slay candidates (melee weapons only)
// ============================================================================

const SLAY_CHAOS: &[Candidate] = &[coin(ArtFlag::Chaotic)];
const SLAY_PRIESTLY: &[Candidate] = &[gated(ArtFlag::Blessed, Gate::Blade)];
const SLAY_NECROMANTIC: &[Candidate] = &[coin(ArtFlag::Vampiric), coin(ArtFlag::BrandPois)];
const SLAY_RANGER: &[Candidate] = &[coin(ArtFlag::SlayAnimal)];
const SLAY_POIS: &[Candidate] = &[coin(ArtFlag::BrandPois)];
const SLAY_FIRE: &[Candidate] = &[coin(ArtFlag::BrandFire)];
const SLAY_COLD: &[Candidate] = &[coin(ArtFlag::BrandCold)];
const SLAY_ELEC: &[Candidate] = &[coin(ArtFlag::BrandElec)];
const SLAY_ACID: &[Candidate] = &[coin(ArtFlag::BrandAcid)];
const SLAY_LAW: &[Candidate] = &[
    coin(ArtFlag::SlayEvil),
    coin(ArtFlag::SlayUndead),
    coin(ArtFlag::SlayDemon),
];

pub fn slay_candidates(bias: Option<ArtifactBias>) -> &'static [Candidate] {
    match bias {
        Some(ArtifactBias::Chaos) => SLAY_CHAOS,
        Some(ArtifactBias::Priestly) => SLAY_PRIESTLY,
        Some(ArtifactBias::Necromantic) => SLAY_NECROMANTIC,
        Some(ArtifactBias::Ranger) => SLAY_RANGER,
        Some(ArtifactBias::Rogue) | Some(ArtifactBias::Pois) => SLAY_POIS,
        Some(ArtifactBias::Fire) => SLAY_FIRE,
        Some(ArtifactBias::Cold) => SLAY_COLD,
        Some(ArtifactBias::Elec) => SLAY_ELEC,
        Some(ArtifactBias::Acid) => SLAY_ACID,
        Some(ArtifactBias::Law) => SLAY_LAW,
        _ => &[],
    }
}

// ============================================================================
// Activation profiles
// ============================================================================

const ACT_ELEC: ActivationProfile = ActivationProfile {
    chance: ALWAYS_ACCEPT,
    ladder: &[(Odds::NotOneIn(3), Act::BoElec1), (Odds::NotOneIn(5), Act::BaElec2)],
    fallback: Act::BaElec3,
};
const ACT_FIRE: ActivationProfile = ActivationProfile {
    chance: ALWAYS_ACCEPT,
    ladder: &[(Odds::NotOneIn(3), Act::BoFire1), (Odds::NotOneIn(5), Act::BaFire1)],
    fallback: Act::BaFire2,
};
const ACT_COLD: ActivationProfile = ActivationProfile {
    chance: ALWAYS_ACCEPT,
    ladder: &[(Odds::NotOneIn(3), Act::BoCold1), (Odds::NotOneIn(3), Act::BaCold1)],
    fallback: Act::BaCold2,
};
const ACT_POIS: ActivationProfile = ActivationProfile {
    chance: ALWAYS_ACCEPT,
    ladder: &[],
    fallback: Act::BaPois1,
};
const ACT_CHAOS: ActivationProfile = ActivationProfile {
    chance: 50,
    ladder: &[(Odds::OneIn(6), Act::SummonDemon)],
    fallback: Act::CallChaos,
};
const ACT_PRIESTLY: ActivationProfile = ActivationProfile {
    chance: ALWAYS_ACCEPT,
    ladder: &[
        (Odds::OneIn(13), Act::CharmUndead),
        (Odds::OneIn(12), Act::BanishEvil),
        (Odds::OneIn(11), Act::DispEvil),
        (Odds::OneIn(10), Act::ProtEvil),
        (Odds::OneIn(9), Act::Cure1000),
        (Odds::OneIn(8), Act::Cure700),
        (Odds::OneIn(7), Act::RestAll),
        (Odds::OneIn(6), Act::RestLife),
    ],
    fallback: Act::CureMw,
};
const ACT_NECROMANTIC: ActivationProfile = ActivationProfile {
    chance: ALWAYS_ACCEPT,
    ladder: &[
        (Odds::OneIn(66), Act::Wraith),
        (Odds::OneIn(13), Act::DispGood),
        (Odds::OneIn(9), Act::MassGeno),
        (Odds::OneIn(8), Act::Genocide),
        (Odds::OneIn(13), Act::SummonUndead),
        (Odds::OneIn(9), Act::Drain2),
        (Odds::OneIn(6), Act::CharmUndead),
    ],
    fallback: Act::Drain1,
};
const ACT_LAW: ActivationProfile = ActivationProfile {
    chance: ALWAYS_ACCEPT,
    ladder: &[(Odds::OneIn(8), Act::BanishEvil), (Odds::OneIn(4), Act::DispEvil)],
    fallback: Act::ProtEvil,
};
const ACT_ROGUE: ActivationProfile = ActivationProfile {
    chance: ALWAYS_ACCEPT,
    ladder: &[
        (Odds::OneIn(50), Act::Speed),
        (Odds::OneIn(4), Act::Sleep),
        (Odds::OneIn(3), Act::DetectAll),
        (Odds::OneIn(8), Act::IdFull),
    ],
    fallback: Act::IdPlain,
};
const ACT_MAGE: ActivationProfile = ActivationProfile {
    chance: 66,
    ladder: &[
        (Odds::OneIn(20), Act::SummonElemental),
        (Odds::OneIn(10), Act::SummonPhantom),
        (Odds::OneIn(5), Act::RuneExplo),
    ],
    fallback: Act::Esp,
};
const ACT_WARRIOR: ActivationProfile = ActivationProfile {
    chance: 80,
    ladder: &[(Odds::OneIn(100), Act::Invuln)],
    fallback: Act::Berserk,
};
const ACT_RANGER: ActivationProfile = ActivationProfile {
    chance: ALWAYS_ACCEPT,
    ladder: &[
        (Odds::OneIn(20), Act::CharmAnimals),
        (Odds::OneIn(7), Act::SummonAnimal),
        (Odds::OneIn(6), Act::CharmAnimal),
        (Odds::OneIn(4), Act::ResistAll),
        (Odds::OneIn(3), Act::Satiate),
    ],
    fallback: Act::CurePoison,
};

pub fn activation_profile(bias: Option<ArtifactBias>) -> Option<&'static ActivationProfile> {
    match bias? {
        ArtifactBias::Elec => Some(&ACT_ELEC),
        ArtifactBias::Fire => Some(&ACT_FIRE),
        ArtifactBias::Cold => Some(&ACT_COLD),
        ArtifactBias::Pois => Some(&ACT_POIS),
        ArtifactBias::Chaos => Some(&ACT_CHAOS),
        ArtifactBias::Priestly => Some(&ACT_PRIESTLY),
        ArtifactBias::Necromantic => Some(&ACT_NECROMANTIC),
        ArtifactBias::Law => Some(&ACT_LAW),
        ArtifactBias::Rogue => Some(&ACT_ROGUE),
        ArtifactBias::Mage => Some(&ACT_MAGE),
        ArtifactBias::Warrior => Some(&ACT_WARRIOR),
        ArtifactBias::Ranger => Some(&ACT_RANGER),
        _ => None,
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Record a bias from the first passing rung, if the item has none yet.
///
/// No roll is made once a bias is set.
pub fn nudge_bias<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R, nudge: BiasNudge) {
    if obj.bias.is_some() {
        return;
    }
    if let Some(&(_, bias)) = nudge.iter().find(|(odds, _)| odds.roll(rng)) {
        obj.bias = Some(bias);
    }
}

/// Grant an elemental immunity. Unless the im-luck roll passes, the other
/// elemental immunities are stripped.
pub fn grant_immunity<R: RandomSource + ?Sized>(
    obj: &mut Object,
    rng: &mut R,
    config: &ForgeConfig,
    immunity: ArtFlag,
) {
    obj.flags.set(immunity);
    if !rng.one_in(config.im_luck) {
        for other in ArtFlag::ELEMENTAL_IMMUNITIES {
            if other != immunity {
                obj.flags.reset(other);
            }
        }
    }
}

fn grant_then_coin<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R, flag: ArtFlag) -> bool {
    if !obj.flags.set(flag) {
        return false;
    }
    rng.one_in(2)
}

/// Walk the candidates in order; true once one of them sticks.
pub fn try_candidates<R: RandomSource + ?Sized>(
    obj: &mut Object,
    rng: &mut R,
    config: &ForgeConfig,
    candidates: &[Candidate],
) -> bool {
    for candidate in candidates {
        let flag = candidate.flag;
        let accepted = match candidate.gate {
            Gate::Coin => grant_then_coin(obj, rng, flag),
            Gate::Aura => obj.kind.can_carry_aura() && grant_then_coin(obj, rng, flag),
            Gate::Blade => obj.kind.is_blade() && grant_then_coin(obj, rng, flag),
            Gate::OneIn(n) => rng.one_in(n) && grant_then_coin(obj, rng, flag),
            Gate::NotOneIn(n) => !rng.one_in(n) && grant_then_coin(obj, rng, flag),
            Gate::Immunity => {
                if rng.one_in(config.bias_luck) && obj.flags.has_not(flag) {
                    grant_immunity(obj, rng, config, flag);
                    rng.one_in(2)
                } else {
                    false
                }
            }
            Gate::Always => obj.flags.set(flag),
        };
        if accepted {
            tracing::debug!(?flag, bias = ?obj.bias, "biased candidate accepted");
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{ItemKind, ObjectId};
    use crate::rng::{GameRng, ScriptedRng};
    use strum::IntoEnumIterator;

    fn item(kind: ItemKind, bias: Option<ArtifactBias>) -> Object {
        let mut obj = Object::new(ObjectId(1), kind);
        obj.bias = bias;
        obj
    }

    #[test]
    fn test_no_bias_no_candidates() {
        assert!(resistance_candidates(None).is_empty());
        assert!(misc_candidates(None).is_empty());
        assert!(pval_candidates(None).is_empty());
        assert!(slay_candidates(None).is_empty());
        assert!(activation_profile(None).is_none());
    }

    #[test]
    fn test_stat_biases_have_no_resistances() {
        for bias in [ArtifactBias::Str, ArtifactBias::Dex, ArtifactBias::Rogue] {
            assert!(resistance_candidates(Some(bias)).is_empty());
        }
    }

    #[test]
    fn test_every_bias_has_some_table() {
        for bias in ArtifactBias::iter() {
            let b = Some(bias);
            let any = !resistance_candidates(b).is_empty()
                || !misc_candidates(b).is_empty()
                || !pval_candidates(b).is_empty()
                || !slay_candidates(b).is_empty()
                || activation_profile(b).is_some();
            assert!(any, "{bias} has no candidates anywhere");
        }
    }

    #[test]
    fn test_elemental_tables_end_with_immunity() {
        for bias in [
            ArtifactBias::Acid,
            ArtifactBias::Elec,
            ArtifactBias::Fire,
            ArtifactBias::Cold,
        ] {
            let last = resistance_candidates(Some(bias)).last().unwrap();
            assert_eq!(last.gate, Gate::Immunity);
            assert!(last.flag.is_immunity());
        }
    }

    #[test]
    fn test_coin_accepts_on_heads() {
        let mut obj = item(ItemKind::Ring, Some(ArtifactBias::Pois));
        let mut rng = ScriptedRng::new([0]);
        let config = ForgeConfig::default();
        assert!(try_candidates(&mut obj, &mut rng, &config, RES_POIS));
        assert!(obj.has(ArtFlag::ResPois));
    }

    #[test]
    fn test_coin_keeps_flag_on_tails() {
        let mut obj = item(ItemKind::Ring, Some(ArtifactBias::Pois));
        let mut rng = ScriptedRng::new([1]);
        let config = ForgeConfig::default();
        assert!(!try_candidates(&mut obj, &mut rng, &config, RES_POIS));
        assert!(obj.has(ArtFlag::ResPois));
    }

    #[test]
    fn test_present_flag_is_skipped_without_rolling() {
        let mut obj = item(ItemKind::Ring, Some(ArtifactBias::Pois));
        obj.flags.set(ArtFlag::ResPois);
        let mut rng = ScriptedRng::new([0]);
        let config = ForgeConfig::default();
        assert!(!try_candidates(&mut obj, &mut rng, &config, RES_POIS));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_aura_gate_respects_kind() {
        let config = ForgeConfig::default();
        let candidates = [gated(ArtFlag::ShFire, Gate::Aura)];

        let mut boots = item(ItemKind::Boots, None);
        let mut rng = ScriptedRng::new([0]);
        assert!(!try_candidates(&mut boots, &mut rng, &config, &candidates));
        assert!(boots.flags.is_empty());

        let mut cloak = item(ItemKind::Cloak, None);
        let mut rng = ScriptedRng::new([0]);
        assert!(try_candidates(&mut cloak, &mut rng, &config, &candidates));
        assert!(cloak.has(ArtFlag::ShFire));
    }

    #[test]
    fn test_immunity_strips_others_unless_lucky() {
        let config = ForgeConfig::default();

        let mut obj = item(ItemKind::Shield, None);
        obj.flags.set(ArtFlag::ImFire);
        obj.flags.set(ArtFlag::ImCold);
        // im-luck roll fails
        let mut rng = ScriptedRng::new([1]);
        grant_immunity(&mut obj, &mut rng, &config, ArtFlag::ImAcid);
        assert_eq!(obj.flags.count_of(&ArtFlag::ELEMENTAL_IMMUNITIES), 1);
        assert!(obj.has(ArtFlag::ImAcid));

        let mut obj = item(ItemKind::Shield, None);
        obj.flags.set(ArtFlag::ImFire);
        // im-luck roll passes
        let mut rng = ScriptedRng::new([0]);
        grant_immunity(&mut obj, &mut rng, &config, ArtFlag::ImAcid);
        assert!(obj.has(ArtFlag::ImFire));
        assert!(obj.has(ArtFlag::ImAcid));
    }

    #[test]
    fn test_immunity_gate_flips_coin_after_grant() {
        let config = ForgeConfig::default();
        let candidates = [gated(ArtFlag::ImFire, Gate::Immunity)];

        // bias luck passes, im luck fails, tails: granted but not accepted
        let mut obj = item(ItemKind::Ring, Some(ArtifactBias::Fire));
        let mut rng = ScriptedRng::new([0, 1, 1]);
        assert!(!try_candidates(&mut obj, &mut rng, &config, &candidates));
        assert!(obj.has(ArtFlag::ImFire));
        assert_eq!(rng.consumed(), 3);

        // heads: accepted
        let mut obj = item(ItemKind::Ring, Some(ArtifactBias::Fire));
        let mut rng = ScriptedRng::new([0, 1, 0]);
        assert!(try_candidates(&mut obj, &mut rng, &config, &candidates));
        assert!(obj.has(ArtFlag::ImFire));
    }

    #[test]
    fn test_nudge_only_when_unset() {
        let nudge: BiasNudge = &[(Odds::OneIn(3), ArtifactBias::Chaos)];
        let mut obj = item(ItemKind::Ring, Some(ArtifactBias::Fire));
        let mut rng = ScriptedRng::new([0]);
        nudge_bias(&mut obj, &mut rng, nudge);
        assert_eq!(obj.bias, Some(ArtifactBias::Fire));
        assert_eq!(rng.consumed(), 0);

        let mut obj = item(ItemKind::Ring, None);
        nudge_bias(&mut obj, &mut rng, nudge);
        assert_eq!(obj.bias, Some(ArtifactBias::Chaos));
    }

    #[test]
    fn test_nudge_ladder_falls_through() {
        let nudge: BiasNudge = &[
            (Odds::NotOneIn(4), ArtifactBias::Pois),
            (Odds::OneIn(2), ArtifactBias::Necromantic),
        ];
        let mut obj = item(ItemKind::Ring, None);
        // one_in(4) succeeds -> first rung fails; one_in(2) succeeds
        let mut rng = ScriptedRng::new([0, 0]);
        nudge_bias(&mut obj, &mut rng, nudge);
        assert_eq!(obj.bias, Some(ArtifactBias::Necromantic));
    }

    #[test]
    fn test_profile_pick_uses_fallback() {
        // Both rungs fail: one_in(3) passes (so NotOneIn fails) twice
        let mut rng = ScriptedRng::new([0, 0]);
        assert_eq!(ACT_ELEC.pick(&mut rng), Act::BaElec3);
        let mut rng = ScriptedRng::new([1]);
        assert_eq!(ACT_ELEC.pick(&mut rng), Act::BoElec1);
    }

    #[test]
    fn test_profile_chances() {
        assert_eq!(activation_profile(Some(ArtifactBias::Chaos)).unwrap().chance, 50);
        assert_eq!(activation_profile(Some(ArtifactBias::Mage)).unwrap().chance, 66);
        assert_eq!(activation_profile(Some(ArtifactBias::Warrior)).unwrap().chance, 80);
        assert_eq!(
            activation_profile(Some(ArtifactBias::Fire)).unwrap().chance,
            ALWAYS_ACCEPT
        );
    }

    #[test]
    fn test_bias_parse() {
        assert_eq!("fire".parse::<ArtifactBias>().unwrap(), ArtifactBias::Fire);
        assert_eq!(
            "Necromantic".parse::<ArtifactBias>().unwrap(),
            ArtifactBias::Necromantic
        );
        assert_eq!(ArtifactBias::Priestly.to_string(), "priestly");
    }

    #[test]
    fn test_warrior_candidates_statistics() {
        let config = ForgeConfig::default();
        let mut rng = GameRng::new(5);
        let mut fear = 0;
        for _ in 0..3000 {
            let mut obj = item(ItemKind::HardArmor, Some(ArtifactBias::Warrior));
            try_candidates(&mut obj, &mut rng, &config, RES_WARRIOR);
            if obj.has(ArtFlag::ResFear) {
                fear += 1;
            }
        }
        // Expected 2/3 of the time
        assert!((1800..2200).contains(&fear), "fear granted {fear} times");
    }
}
