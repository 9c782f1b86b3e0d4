//! Random artifact resistances
//!
//! Rolls one resistance, immunity, aura or reflection onto an item.

use super::bias::{BiasNudge, Odds, nudge_bias, resistance_candidates, try_candidates};
use super::{ArtifactBias, Roll};
use crate::ForgeConfig;
use crate::object::{ArtFlag, Object};
use crate::rng::RandomSource;

/// One outcome of the generic resistance table
#[derive(Debug, Clone, Copy)]
enum ResistSlot {
    /// Usually re-rolls; on a weird-luck roll grants the immunity
    Weird(ArtFlag, ArtifactBias),
    Grant(ArtFlag, BiasNudge),
    /// Cloaks and body armour only
    Aura(ArtFlag, BiasNudge),
    Reflect,
}

use ResistSlot::{Aura, Grant, Reflect, Weird};

const NO_NUDGE: BiasNudge = &[];
const ACID: BiasNudge = &[(Odds::Always, ArtifactBias::Acid)];
const ELEC: BiasNudge = &[(Odds::Always, ArtifactBias::Elec)];
const FIRE: BiasNudge = &[(Odds::Always, ArtifactBias::Fire)];
const COLD: BiasNudge = &[(Odds::Always, ArtifactBias::Cold)];
const POIS: BiasNudge = &[
    (Odds::NotOneIn(4), ArtifactBias::Pois),
    (Odds::OneIn(2), ArtifactBias::Necromantic),
    (Odds::OneIn(2), ArtifactBias::Rogue),
];
const FEAR: BiasNudge = &[(Odds::OneIn(3), ArtifactBias::Warrior)];
const CONF: BiasNudge = &[(Odds::OneIn(6), ArtifactBias::Chaos)];
const NETHER: BiasNudge = &[(Odds::OneIn(3), ArtifactBias::Necromantic)];
const CHAOS: BiasNudge = &[(Odds::OneIn(2), ArtifactBias::Chaos)];

/// Indexed by `randint1(45) - 1`
const RESIST_TABLE: [ResistSlot; 45] = [
    Weird(ArtFlag::ImAcid, ArtifactBias::Acid), // 1
    Weird(ArtFlag::ImElec, ArtifactBias::Elec),
    Weird(ArtFlag::ImCold, ArtifactBias::Cold),
    Weird(ArtFlag::ImFire, ArtifactBias::Fire),
    Grant(ArtFlag::ResAcid, ACID), // 5
    Grant(ArtFlag::ResAcid, ACID),
    Grant(ArtFlag::ResElec, ELEC),
    Grant(ArtFlag::ResElec, ELEC),
    Grant(ArtFlag::ResFire, FIRE),
    Grant(ArtFlag::ResFire, FIRE), // 10
    Grant(ArtFlag::ResCold, COLD),
    Grant(ArtFlag::ResCold, COLD),
    Grant(ArtFlag::ResAcid, ACID),
    Grant(ArtFlag::ResElec, ELEC),
    Grant(ArtFlag::ResFire, FIRE), // 15
    Grant(ArtFlag::ResCold, COLD),
    Grant(ArtFlag::ResPois, POIS),
    Grant(ArtFlag::ResPois, POIS),
    Grant(ArtFlag::ResFear, FEAR),
    Grant(ArtFlag::ResFear, FEAR), // 20
    Grant(ArtFlag::ResLite, NO_NUDGE),
    Grant(ArtFlag::ResDark, NO_NUDGE),
    Grant(ArtFlag::ResBlind, NO_NUDGE),
    Grant(ArtFlag::ResBlind, NO_NUDGE),
    Grant(ArtFlag::ResConf, CONF), // 25
    Grant(ArtFlag::ResConf, CONF),
    Grant(ArtFlag::ResSound, NO_NUDGE),
    Grant(ArtFlag::ResSound, NO_NUDGE),
    Grant(ArtFlag::ResShards, NO_NUDGE),
    Grant(ArtFlag::ResShards, NO_NUDGE), // 30
    Grant(ArtFlag::ResNether, NETHER),
    Grant(ArtFlag::ResNether, NETHER),
    Grant(ArtFlag::ResNexus, NO_NUDGE),
    Grant(ArtFlag::ResNexus, NO_NUDGE),
    Grant(ArtFlag::ResChaos, CHAOS), // 35
    Grant(ArtFlag::ResChaos, CHAOS),
    Grant(ArtFlag::ResDisen, NO_NUDGE),
    Grant(ArtFlag::ResDisen, NO_NUDGE),
    Aura(ArtFlag::ShElec, ELEC),
    Aura(ArtFlag::ShFire, FIRE), // 40
    Reflect,
    Aura(ArtFlag::ShCold, COLD),
    Grant(ArtFlag::ResWater, NO_NUDGE),
    Grant(ArtFlag::ResTime, NO_NUDGE),
    Grant(ArtFlag::ResCurse, NO_NUDGE), // 45
];

/// Rolls one table slot. An aura that does not fit the item still leaves
/// its bias nudge in `deferred`, to be applied once the call settles.
fn roll_resistance_table<R: RandomSource + ?Sized>(
    obj: &mut Object,
    rng: &mut R,
    config: &ForgeConfig,
    deferred: &mut Vec<BiasNudge>,
) -> Roll {
    let slot = RESIST_TABLE[rng.randint1(RESIST_TABLE.len() as u32) as usize - 1];
    match slot {
        Weird(immunity, bias) => {
            if !rng.one_in(config.weird_luck) {
                return Roll::Again;
            }
            obj.flags.set(immunity);
            obj.set_bias_if_unset(bias);
        }
        Grant(flag, nudge) => {
            obj.flags.set(flag);
            nudge_bias(obj, rng, nudge);
        }
        Aura(flag, nudge) => {
            if !obj.kind.can_carry_aura() {
                deferred.push(nudge);
                return Roll::Again;
            }
            obj.flags.set(flag);
            nudge_bias(obj, rng, nudge);
        }
        Reflect => {
            if !obj.kind.can_reflect() {
                return Roll::Again;
            }
            obj.flags.set(ArtFlag::Reflect);
        }
    }
    Roll::Granted
}

/// Give the item one resistance-type power.
///
/// Bias candidates are tried first; otherwise the generic table is rolled.
/// Outcomes that do not fit the item are re-rolled up to
/// `config.max_retries` times, after which no flag is added.
///
/// A re-rolled aura still steers the bias toward its element, but only
/// after the re-roll has settled, so a nudge from the granted slot wins.
pub fn random_resistance<R: RandomSource + ?Sized>(
    obj: &mut Object,
    rng: &mut R,
    config: &ForgeConfig,
) {
    let mut deferred = Vec::new();
    let mut granted = false;
    for _ in 0..config.max_retries {
        if try_candidates(obj, rng, config, resistance_candidates(obj.bias))
            || roll_resistance_table(obj, rng, config, &mut deferred) == Roll::Granted
        {
            granted = true;
            break;
        }
    }
    if !granted {
        tracing::warn!(kind = %obj.kind, "resistance retry budget exhausted");
    }
    for nudge in deferred.into_iter().rev() {
        nudge_bias(obj, rng, nudge);
    }
}
