//! Random artifact slays, brands and shooter powers

use super::bias::{BiasNudge, Odds, nudge_bias, slay_candidates, try_candidates};
use super::{ArtifactBias, Roll};
use crate::ForgeConfig;
use crate::object::{ArtFlag, ItemKind, Object};
use crate::rng::RandomSource;

#[derive(Debug, Clone, Copy)]
enum SlaySlot {
    Grant(ArtFlag, BiasNudge),
    /// Only on the given kind; any other weapon re-rolls
    Only(ItemKind, ArtFlag),
}

use SlaySlot::{Grant, Only};

const NO_NUDGE: BiasNudge = &[];
const ANIMAL: BiasNudge = &[(Odds::OneIn(4), ArtifactBias::Ranger)];
const EVIL: BiasNudge = &[
    (Odds::OneIn(2), ArtifactBias::Priestly),
    (Odds::OneIn(9), ArtifactBias::Law),
];
const UNDEAD: BiasNudge = &[(Odds::OneIn(9), ArtifactBias::Priestly)];
const DEMON: BiasNudge = &[(Odds::OneIn(9), ArtifactBias::Priestly)];
const FIRE: BiasNudge = &[(Odds::OneIn(4), ArtifactBias::Fire)];
const COLD: BiasNudge = &[(Odds::OneIn(4), ArtifactBias::Cold)];
const ELEC: BiasNudge = &[(Odds::OneIn(4), ArtifactBias::Elec)];
const ACID: BiasNudge = &[(Odds::OneIn(4), ArtifactBias::Acid)];
const POIS: BiasNudge = &[
    (Odds::NotOneIn(3), ArtifactBias::Pois),
    (Odds::OneIn(6), ArtifactBias::Necromantic),
    (Odds::Always, ArtifactBias::Rogue),
];
const VAMPIRIC: BiasNudge = &[(Odds::Always, ArtifactBias::Necromantic)];
const FORCE: BiasNudge = &[(Odds::OneIn(2), ArtifactBias::Mage)];
const HUMAN: BiasNudge = &[(Odds::OneIn(9), ArtifactBias::Necromantic)];
const CHAOTIC: BiasNudge = &[(Odds::Always, ArtifactBias::Chaos)];

/// Indexed by `randint1(36) - 1`
const SLAY_TABLE: [SlaySlot; 36] = [
    Grant(ArtFlag::SlayAnimal, ANIMAL), // 1
    Grant(ArtFlag::SlayAnimal, ANIMAL),
    Grant(ArtFlag::SlayEvil, EVIL),
    Grant(ArtFlag::SlayEvil, EVIL),
    Grant(ArtFlag::SlayUndead, UNDEAD), // 5
    Grant(ArtFlag::SlayUndead, UNDEAD),
    Grant(ArtFlag::SlayDemon, DEMON),
    Grant(ArtFlag::SlayDemon, DEMON),
    Grant(ArtFlag::SlayOrc, NO_NUDGE),
    Grant(ArtFlag::SlayOrc, NO_NUDGE), // 10
    Grant(ArtFlag::SlayTroll, NO_NUDGE),
    Grant(ArtFlag::SlayTroll, NO_NUDGE),
    Grant(ArtFlag::SlayGiant, NO_NUDGE),
    Grant(ArtFlag::SlayGiant, NO_NUDGE),
    Grant(ArtFlag::SlayDragon, NO_NUDGE), // 15
    Grant(ArtFlag::SlayDragon, NO_NUDGE),
    Grant(ArtFlag::KillDragon, NO_NUDGE),
    Only(ItemKind::Sword, ArtFlag::Vorpal),
    Only(ItemKind::Sword, ArtFlag::Vorpal),
    Only(ItemKind::Hafted, ArtFlag::Impact), // 20
    Grant(ArtFlag::BrandFire, FIRE),
    Grant(ArtFlag::BrandFire, FIRE),
    Grant(ArtFlag::BrandCold, COLD),
    Grant(ArtFlag::BrandCold, COLD),
    Grant(ArtFlag::BrandElec, ELEC), // 25
    Grant(ArtFlag::BrandElec, ELEC),
    Grant(ArtFlag::BrandAcid, ACID),
    Grant(ArtFlag::BrandAcid, ACID),
    Grant(ArtFlag::BrandPois, POIS),
    Grant(ArtFlag::BrandPois, POIS), // 30
    Grant(ArtFlag::Vampiric, VAMPIRIC),
    Grant(ArtFlag::ForceWeapon, FORCE),
    Grant(ArtFlag::SlayHuman, HUMAN),
    Grant(ArtFlag::SlayHuman, HUMAN),
    Grant(ArtFlag::Chaotic, CHAOTIC), // 35
    Grant(ArtFlag::Chaotic, CHAOTIC),
];

const RANGER: BiasNudge = &[(Odds::OneIn(9), ArtifactBias::Ranger)];

/// Shooters get extra might or extra shots; rarely both.
fn bow_power<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R) {
    let (gain, lose) = if rng.randint1(6) <= 3 {
        (ArtFlag::XtraMight, ArtFlag::XtraShots)
    } else {
        (ArtFlag::XtraShots, ArtFlag::XtraMight)
    };
    obj.flags.set(gain);
    if !rng.one_in(7) {
        obj.flags.reset(lose);
    }
    nudge_bias(obj, rng, RANGER);
}

fn roll_slay_table<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R) -> Roll {
    match SLAY_TABLE[rng.randint1(SLAY_TABLE.len() as u32) as usize - 1] {
        Grant(flag, nudge) => {
            obj.flags.set(flag);
            nudge_bias(obj, rng, nudge);
        }
        Only(kind, flag) => {
            if obj.kind != kind {
                return Roll::Again;
            }
            obj.flags.set(flag);
        }
    }
    Roll::Granted
}

/// Give a weapon one slay, brand or shooter power. Other items are left
/// untouched.
pub fn random_slay<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R, config: &ForgeConfig) {
    if obj.kind == ItemKind::Bow {
        bow_power(obj, rng);
        return;
    }
    if !obj.kind.is_melee_weapon() {
        return;
    }
    for _ in 0..config.max_retries {
        if try_candidates(obj, rng, config, slay_candidates(obj.bias)) {
            return;
        }
        if roll_slay_table(obj, rng) == Roll::Granted {
            return;
        }
    }
    tracing::warn!(kind = %obj.kind, "slay retry budget exhausted");
}
