//! Random artifact miscellaneous abilities
//!
//! Sustains, free action, ESP, light, armour and combat bonuses and the
//! other abilities that are neither resistances nor pval-scaled.

use super::bias::{BiasNudge, Odds, misc_candidates, nudge_bias, try_candidates};
use super::{ArtifactBias, Roll};
use crate::ForgeConfig;
use crate::object::{ArtFlag, Object};
use crate::rng::RandomSource;

#[derive(Debug, Clone, Copy)]
enum MiscSlot {
    Grant(ArtFlag, BiasNudge),
    /// Armour already has an AC line, so it re-rolls instead
    ArmourClass,
    CombatBonus,
    StrongEsp,
    WeakEsp,
}

use MiscSlot::{ArmourClass, CombatBonus, Grant, StrongEsp, WeakEsp};

const NO_NUDGE: BiasNudge = &[];
const STR: BiasNudge = &[(Odds::Always, ArtifactBias::Str)];
const INT: BiasNudge = &[(Odds::Always, ArtifactBias::Int)];
const WIS: BiasNudge = &[(Odds::Always, ArtifactBias::Wis)];
const DEX: BiasNudge = &[(Odds::Always, ArtifactBias::Dex)];
const CON: BiasNudge = &[(Odds::Always, ArtifactBias::Con)];
const CHR: BiasNudge = &[(Odds::Always, ArtifactBias::Chr)];
const HOLD_EXP: BiasNudge = &[
    (Odds::OneIn(5), ArtifactBias::Priestly),
    (Odds::OneIn(6), ArtifactBias::Necromantic),
];

/// Indexed by `randint1(33) - 1`
const MISC_TABLE: [MiscSlot; 33] = [
    Grant(ArtFlag::SustStr, STR), // 1
    Grant(ArtFlag::SustInt, INT),
    Grant(ArtFlag::SustWis, WIS),
    Grant(ArtFlag::SustDex, DEX),
    Grant(ArtFlag::SustCon, CON), // 5
    Grant(ArtFlag::SustChr, CHR),
    Grant(ArtFlag::FreeAct, NO_NUDGE),
    Grant(ArtFlag::FreeAct, NO_NUDGE),
    Grant(ArtFlag::HoldExp, HOLD_EXP),
    Grant(ArtFlag::Light, NO_NUDGE), // 10
    Grant(ArtFlag::Light, NO_NUDGE),
    Grant(ArtFlag::Levitation, NO_NUDGE),
    Grant(ArtFlag::Levitation, NO_NUDGE),
    Grant(ArtFlag::FreeAct, NO_NUDGE),
    Grant(ArtFlag::SeeInvis, NO_NUDGE), // 15
    Grant(ArtFlag::SeeInvis, NO_NUDGE),
    Grant(ArtFlag::SeeInvis, NO_NUDGE),
    StrongEsp,
    Grant(ArtFlag::SlowDigest, NO_NUDGE),
    Grant(ArtFlag::SlowDigest, NO_NUDGE), // 20
    Grant(ArtFlag::Regen, NO_NUDGE),
    Grant(ArtFlag::Regen, NO_NUDGE),
    Grant(ArtFlag::Teleport, NO_NUDGE),
    ArmourClass,
    ArmourClass, // 25
    ArmourClass,
    CombatBonus,
    CombatBonus,
    CombatBonus,
    Grant(ArtFlag::NoMagic, NO_NUDGE), // 30
    Grant(ArtFlag::NoTele, NO_NUDGE),
    Grant(ArtFlag::Warning, NO_NUDGE),
    WeakEsp,
];

const STRONG_ESP: [(ArtFlag, BiasNudge); 3] = [
    (ArtFlag::EspEvil, &[(Odds::OneIn(3), ArtifactBias::Law)]),
    (ArtFlag::EspNonliving, &[(Odds::OneIn(3), ArtifactBias::Mage)]),
    (ArtFlag::Telepathy, &[(Odds::OneIn(9), ArtifactBias::Mage)]),
];

/// Pool for the weak ESP roll; up to three distinct entries are granted
pub const WEAK_ESP: [(ArtFlag, BiasNudge); 10] = [
    (ArtFlag::EspAnimal, &[(Odds::OneIn(4), ArtifactBias::Ranger)]),
    (
        ArtFlag::EspUndead,
        &[
            (Odds::OneIn(3), ArtifactBias::Priestly),
            (Odds::OneIn(6), ArtifactBias::Necromantic),
        ],
    ),
    (ArtFlag::EspDemon, &[(Odds::OneIn(3), ArtifactBias::Priestly)]),
    (ArtFlag::EspOrc, NO_NUDGE),
    (ArtFlag::EspTroll, NO_NUDGE),
    (ArtFlag::EspGiant, NO_NUDGE),
    (ArtFlag::EspDragon, NO_NUDGE),
    (ArtFlag::EspHuman, &[(Odds::OneIn(6), ArtifactBias::Rogue)]),
    (ArtFlag::EspGood, &[(Odds::OneIn(3), ArtifactBias::Law)]),
    (ArtFlag::EspUnique, &[(Odds::OneIn(3), ArtifactBias::Law)]),
];

fn grant<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R, flag: ArtFlag, nudge: BiasNudge) {
    obj.flags.set(flag);
    nudge_bias(obj, rng, nudge);
}

/// Choose the weak ESP entries: `randint1(3)` distinct indices into
/// [`WEAK_ESP`], in pick order.
pub fn weak_esp_picks<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<usize> {
    let count = rng.randint1(3) as usize;
    rng.sample_distinct(WEAK_ESP.len(), count)
}

fn roll_misc_table<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R) -> Roll {
    match MISC_TABLE[rng.randint1(MISC_TABLE.len() as u32) as usize - 1] {
        Grant(flag, nudge) => grant(obj, rng, flag, nudge),
        ArmourClass => {
            if obj.kind.is_armour() {
                return Roll::Again;
            }
            obj.to_a += 4 + rng.randint1(11) as i16;
        }
        CombatBonus => {
            let mut bonus_h = 4 + rng.randint1(11) as i16;
            let mut bonus_d = 4 + rng.randint1(11) as i16;
            if !obj.kind.takes_full_combat_bonus() {
                bonus_h /= 2;
                bonus_d /= 2;
            }
            obj.to_h += bonus_h;
            obj.to_d += bonus_d;
        }
        StrongEsp => {
            let (flag, nudge) = STRONG_ESP[rng.randint1(3) as usize - 1];
            grant(obj, rng, flag, nudge);
        }
        WeakEsp => {
            for i in weak_esp_picks(rng) {
                let (flag, nudge) = WEAK_ESP[i];
                grant(obj, rng, flag, nudge);
            }
        }
    }
    Roll::Granted
}

/// Give the item one miscellaneous power.
///
/// Re-rolls (the AC slot on armour) share the `config.max_retries` budget.
pub fn random_misc<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R, config: &ForgeConfig) {
    for _ in 0..config.max_retries {
        if try_candidates(obj, rng, config, misc_candidates(obj.bias)) {
            return;
        }
        if roll_misc_table(obj, rng) == Roll::Granted {
            return;
        }
    }
    tracing::warn!(kind = %obj.kind, "misc retry budget exhausted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{ItemKind, ObjectId};
    use crate::rng::{GameRng, ScriptedRng};
    use std::collections::HashSet;

    fn item(kind: ItemKind, bias: Option<ArtifactBias>) -> Object {
        let mut obj = Object::new(ObjectId(1), kind);
        obj.bias = bias;
        obj
    }

    fn slot_index(pred: impl Fn(&MiscSlot) -> bool) -> u32 {
        MISC_TABLE.iter().position(pred).unwrap() as u32
    }

    #[test]
    fn test_table_shape() {
        let free_act = MISC_TABLE
            .iter()
            .filter(|s| matches!(s, Grant(ArtFlag::FreeAct, _)))
            .count();
        assert_eq!(free_act, 3);
        assert_eq!(MISC_TABLE.iter().filter(|s| matches!(s, ArmourClass)).count(), 3);
        assert_eq!(MISC_TABLE.iter().filter(|s| matches!(s, CombatBonus)).count(), 3);
        assert!(matches!(MISC_TABLE[17], StrongEsp));
        assert!(matches!(MISC_TABLE[32], WeakEsp));
    }

    #[test]
    fn test_fire_bias_light_is_unconditional() {
        let mut obj = item(ItemKind::Cloak, Some(ArtifactBias::Fire));
        let mut rng = ScriptedRng::new(Vec::<u32>::new());
        random_misc(&mut obj, &mut rng, &ForgeConfig::default());
        assert!(obj.has(ArtFlag::Light));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_sustain_slot_sets_stat_bias() {
        let mut obj = item(ItemKind::Ring, None);
        let mut rng = ScriptedRng::new([3]);
        random_misc(&mut obj, &mut rng, &ForgeConfig::default());
        assert!(obj.has(ArtFlag::SustDex));
        assert_eq!(obj.bias, Some(ArtifactBias::Dex));
    }

    #[test]
    fn test_armour_class_rerolls_on_armour() {
        let ac = slot_index(|s| matches!(s, ArmourClass));
        let regen = slot_index(|s| matches!(s, Grant(ArtFlag::Regen, _)));
        let mut obj = item(ItemKind::Helm, None);
        let mut rng = ScriptedRng::new([ac, regen]);
        random_misc(&mut obj, &mut rng, &ForgeConfig::default());
        assert_eq!(obj.to_a, 0);
        assert!(obj.has(ArtFlag::Regen));
    }

    #[test]
    fn test_armour_class_on_weapon() {
        let ac = slot_index(|s| matches!(s, ArmourClass));
        let mut obj = item(ItemKind::Sword, None);
        let mut rng = ScriptedRng::new([ac, 10]);
        random_misc(&mut obj, &mut rng, &ForgeConfig::default());
        assert_eq!(obj.to_a, 15);
    }

    #[test]
    fn test_combat_bonus_halved_off_weapons() {
        let slot = slot_index(|s| matches!(s, CombatBonus));

        let mut sword = item(ItemKind::Sword, None);
        let mut rng = ScriptedRng::new([slot, 10, 9]);
        random_misc(&mut sword, &mut rng, &ForgeConfig::default());
        assert_eq!((sword.to_h, sword.to_d), (15, 14));

        let mut amulet = item(ItemKind::Amulet, None);
        let mut rng = ScriptedRng::new([slot, 10, 9]);
        random_misc(&mut amulet, &mut rng, &ForgeConfig::default());
        assert_eq!((amulet.to_h, amulet.to_d), (7, 7));
    }

    #[test]
    fn test_strong_esp_telepathy() {
        let mut obj = item(ItemKind::Helm, None);
        // slot 18, third entry, Mage nudge fails
        let mut rng = ScriptedRng::new([17, 2, 1]);
        random_misc(&mut obj, &mut rng, &ForgeConfig::default());
        assert!(obj.has(ArtFlag::Telepathy));
        assert_eq!(obj.bias, None);
    }

    #[test]
    fn test_weak_esp_grants_distinct_flags() {
        let mut obj = item(ItemKind::Helm, Some(ArtifactBias::Str));
        // bias Str: SUST_STR granted on tails, then slot 33,
        // three picks: 0, then offset 0 (index 1), then offset 0 (index 2)
        let mut rng = ScriptedRng::new([1, 32, 2, 0, 0, 0]);
        random_misc(&mut obj, &mut rng, &ForgeConfig::default());
        assert!(obj.has(ArtFlag::SustStr));
        assert!(obj.has(ArtFlag::EspAnimal));
        assert!(obj.has(ArtFlag::EspUndead));
        assert!(obj.has(ArtFlag::EspDemon));
        assert_eq!(obj.flags.count_of(&WEAK_ESP.map(|(f, _)| f)), 3);
    }

    #[test]
    fn test_weak_esp_picks_never_repeat() {
        let mut rng = GameRng::new(4242);
        for _ in 0..100_000 {
            let picks = weak_esp_picks(&mut rng);
            assert!((1..=3).contains(&picks.len()));
            let unique: HashSet<_> = picks.iter().copied().collect();
            assert_eq!(unique.len(), picks.len());
        }
    }

    #[test]
    fn test_weak_esp_covers_whole_pool() {
        let mut rng = GameRng::new(8);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            seen.extend(weak_esp_picks(&mut rng));
        }
        assert_eq!(seen.len(), WEAK_ESP.len());
    }

    #[test]
    fn test_second_call_is_superset() {
        let config = ForgeConfig::default();
        let mut rng = GameRng::new(11);
        for _ in 0..2000 {
            let mut obj = item(ItemKind::Gloves, None);
            random_misc(&mut obj, &mut rng, &config);
            let once = obj.flags;
            random_misc(&mut obj, &mut rng, &config);
            assert!(obj.flags.is_superset(&once));
        }
    }
}
