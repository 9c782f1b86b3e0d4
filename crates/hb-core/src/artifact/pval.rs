//! Random artifact pval-scaled powers (stats, stealth, speed, blows...)

use super::bias::{BiasNudge, Odds, nudge_bias, pval_candidates, try_candidates};
use super::{ArtifactBias, Roll};
use crate::ForgeConfig;
use crate::object::{ArtFlag, ItemKind, Object};
use crate::rng::RandomSource;

const NO_NUDGE: BiasNudge = &[];
const STR: BiasNudge = &[
    (Odds::OneIn(13), ArtifactBias::Str),
    (Odds::OneIn(7), ArtifactBias::Warrior),
];
const INT: BiasNudge = &[
    (Odds::OneIn(13), ArtifactBias::Int),
    (Odds::OneIn(7), ArtifactBias::Mage),
];
const WIS: BiasNudge = &[
    (Odds::OneIn(13), ArtifactBias::Wis),
    (Odds::OneIn(7), ArtifactBias::Priestly),
];
const DEX: BiasNudge = &[
    (Odds::OneIn(13), ArtifactBias::Dex),
    (Odds::OneIn(7), ArtifactBias::Rogue),
];
const CON: BiasNudge = &[
    (Odds::OneIn(13), ArtifactBias::Con),
    (Odds::OneIn(9), ArtifactBias::Ranger),
];
const CHR: BiasNudge = &[(Odds::OneIn(13), ArtifactBias::Chr)];
const STEALTH: BiasNudge = &[(Odds::OneIn(3), ArtifactBias::Rogue)];
const SEARCH: BiasNudge = &[(Odds::OneIn(9), ArtifactBias::Ranger)];
const SPEED: BiasNudge = &[(Odds::OneIn(11), ArtifactBias::Rogue)];
const BLOWS: BiasNudge = &[(Odds::OneIn(11), ArtifactBias::Warrior)];

/// Indexed by `randint1(n) - 1`; weapons and ammo roll over all 23 slots,
/// everything else over the first 19.
const PVAL_TABLE: [(ArtFlag, BiasNudge); 23] = [
    (ArtFlag::Str, STR), // 1
    (ArtFlag::Str, STR),
    (ArtFlag::Int, INT),
    (ArtFlag::Int, INT),
    (ArtFlag::Wis, WIS), // 5
    (ArtFlag::Wis, WIS),
    (ArtFlag::Dex, DEX),
    (ArtFlag::Dex, DEX),
    (ArtFlag::Con, CON),
    (ArtFlag::Con, CON), // 10
    (ArtFlag::Chr, CHR),
    (ArtFlag::Chr, CHR),
    (ArtFlag::Stealth, STEALTH),
    (ArtFlag::Stealth, STEALTH),
    (ArtFlag::Search, SEARCH), // 15
    (ArtFlag::Search, SEARCH),
    (ArtFlag::Infra, NO_NUDGE),
    (ArtFlag::Infra, NO_NUDGE),
    (ArtFlag::Speed, SPEED),
    (ArtFlag::Tunnel, NO_NUDGE), // 20
    (ArtFlag::Tunnel, NO_NUDGE),
    (ArtFlag::Blows, BLOWS),
    (ArtFlag::Blows, BLOWS),
];

const NON_WEAPON_SLOTS: u32 = 19;

fn roll_pval_table<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R) -> Roll {
    let slots = if obj.kind.is_weapon_ammo() {
        PVAL_TABLE.len() as u32
    } else {
        NON_WEAPON_SLOTS
    };
    let (flag, nudge) = PVAL_TABLE[rng.randint1(slots) as usize - 1];
    if flag == ArtFlag::Blows {
        if obj.kind == ItemKind::Bow {
            return Roll::Again;
        }
        obj.pval = obj.pval.max(1);
    }
    obj.flags.set(flag);
    nudge_bias(obj, rng, nudge);
    Roll::Granted
}

/// Give the item one pval-scaled power.
///
/// The magnitude itself is settled by the caller once all powers are in.
pub fn random_plus<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R, config: &ForgeConfig) {
    for _ in 0..config.max_retries {
        if try_candidates(obj, rng, config, pval_candidates(obj.bias)) {
            return;
        }
        if roll_pval_table(obj, rng) == Roll::Granted {
            return;
        }
    }
    tracing::warn!(kind = %obj.kind, "pval retry budget exhausted");
}
