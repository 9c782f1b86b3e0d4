//! Turning a plain item into a random artifact

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    ArtifactBias, curse_artifact, give_activation_power, random_artifact_name, random_misc,
    random_plus, random_resistance, random_slay,
};
use crate::ForgeConfig;
use crate::object::{ArtFlag, ItemKind, Object};
use crate::rng::RandomSource;

/// Forging errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForgeError {
    #[error("Item is already the artifact {0}")]
    AlreadyArtifact(String),

    #[error("Items of kind {0} cannot become artifacts")]
    CannotBecomeArtifact(ItemKind),
}

/// How the artifact is being made
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRequest {
    /// Made by reading a scroll of artifact creation
    pub scroll: bool,
    /// Force a cursed artifact
    pub cursed: bool,
    /// Bias a scroll-made artifact may pick up (usually the reader's class)
    pub bias_hint: Option<ArtifactBias>,
}

/// Treats nonpositive ranges like `one_in(0)`, which always passes
fn one_in_signed<R: RandomSource + ?Sized>(rng: &mut R, n: i16) -> bool {
    rng.one_in(n.max(0) as u32)
}

/// Enchantment step that shrinks as the bonus approaches 20
fn enchant_step<R: RandomSource + ?Sized>(rng: &mut R, current: i16) -> i16 {
    rng.randint1((20 - current).max(1) as u32) as i16
}

fn power_budget<R: RandomSource + ?Sized>(rng: &mut R, config: &ForgeConfig, cursed: bool) -> u32 {
    let mut powers = rng.randint1(5) + 1;
    for _ in 0..config.max_retries {
        if !(rng.one_in(powers) || rng.one_in(7) || rng.one_in(10)) {
            break;
        }
        powers += 1;
    }
    if !cursed && rng.one_in(config.weird_luck) {
        powers *= 2;
    }
    if cursed {
        powers /= 2;
    }
    powers
}

/// Sometimes add a die (or, rarely, a side) instead of a resistance
fn bump_dice<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R) {
    if rng.one_in(13) {
        if one_in_signed(rng, obj.damage_sides as i16 + 4) {
            obj.damage_sides = obj.damage_sides.saturating_add(1);
        }
    } else if one_in_signed(rng, obj.damage_dice as i16 + 1) {
        obj.damage_dice = obj.damage_dice.saturating_add(1);
    }
}

fn settle_pval<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R, config: &ForgeConfig) {
    if obj.has(ArtFlag::Blows) {
        obj.pval = rng.randint1(2) as i16;
    } else {
        obj.pval = obj.pval.max(0);
        for _ in 0..config.max_retries {
            obj.pval += 1;
            if !(obj.pval < rng.randint1(5) as i16 || one_in_signed(rng, obj.pval)) {
                break;
            }
        }
    }
    if obj.pval > 4 && !rng.one_in(config.weird_luck) {
        obj.pval = 4;
    }
}

/// Pull an armour piece's to-hit and to-damage back towards 10..20.
fn tame_armour_combat<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R, config: &ForgeConfig) {
    for _ in 0..config.max_retries {
        if obj.to_h + obj.to_d <= 20 {
            break;
        }
        if one_in_signed(rng, obj.to_d) && one_in_signed(rng, obj.to_h) {
            break;
        }
        obj.to_d -= rng.randint0(3) as i16;
        obj.to_h -= rng.randint0(3) as i16;
    }
    for _ in 0..config.max_retries {
        if obj.to_h + obj.to_d <= 10 {
            break;
        }
        if one_in_signed(rng, obj.to_d) || one_in_signed(rng, obj.to_h) {
            break;
        }
        obj.to_d -= rng.randint0(3) as i16;
        obj.to_h -= rng.randint0(3) as i16;
    }
}

/// Forge a random artifact out of a plain item.
///
/// Rolls a power budget, spends it on the individual generators, settles
/// the pval and bonuses, then curses or empowers the result and names it.
pub fn become_random_artifact<R: RandomSource + ?Sized>(
    obj: &mut Object,
    rng: &mut R,
    config: &ForgeConfig,
    request: &ArtifactRequest,
) -> Result<(), ForgeError> {
    if let Some(name) = &obj.art_name {
        return Err(ForgeError::AlreadyArtifact(name.clone()));
    }
    if !obj.kind.can_become_artifact() {
        return Err(ForgeError::CannotBecomeArtifact(obj.kind));
    }

    obj.bias = None;
    obj.activation = None;
    obj.timeout = 0;

    let mut cursed = request.cursed;
    if request.scroll {
        if let Some(hint) = request.bias_hint {
            if rng.one_in(4) {
                obj.bias = Some(hint);
            }
        }
    } else if rng.one_in(config.cursed_chance) {
        cursed = true;
    }
    if obj.kind.is_jewelry() && obj.is_cursed() {
        cursed = true;
    }

    let powers = power_budget(rng, config, cursed);
    let mut has_pval = false;
    for _ in 0..powers {
        let roll = if obj.kind.is_weapon_ammo() {
            rng.randint1(7)
        } else {
            rng.randint1(5)
        };
        match roll {
            1 | 2 => {
                random_plus(obj, rng, config);
                has_pval = true;
            }
            3 | 4 => {
                if obj.kind.is_weapon_ammo() && obj.kind != ItemKind::Bow && rng.one_in(2) {
                    bump_dice(obj, rng);
                } else {
                    random_resistance(obj, rng, config);
                }
            }
            5 => random_misc(obj, rng, config),
            _ => random_slay(obj, rng, config),
        }
    }

    if has_pval {
        settle_pval(obj, rng, config);
    }

    if obj.kind.is_armour() {
        obj.to_a += enchant_step(rng, obj.to_a);
    } else if obj.kind.is_weapon_ammo() {
        obj.to_h += enchant_step(rng, obj.to_h);
        obj.to_d += enchant_step(rng, obj.to_d);
        if obj.has(ArtFlag::Wis) && obj.pval > 0 {
            obj.flags.set(ArtFlag::Blessed);
        }
    }

    for flag in ArtFlag::IGNORE_ELEMENTS {
        obj.flags.set(flag);
    }

    if cursed {
        curse_artifact(obj, rng);
    } else {
        let chance = if obj.kind.is_armour() {
            config.activation_chance.saturating_mul(2)
        } else {
            config.activation_chance
        };
        if rng.one_in(chance) {
            give_activation_power(obj, rng, config);
        }
    }

    if obj.kind.is_armour() {
        tame_armour_combat(obj, rng, config);
    }

    if obj.kind == ItemKind::Gloves
        && matches!(obj.bias, Some(ArtifactBias::Mage) | Some(ArtifactBias::Int))
    {
        obj.flags.set(ArtFlag::FreeAct);
    }

    obj.art_name = Some(random_artifact_name(rng, cursed));
    tracing::debug!(
        kind = %obj.kind,
        powers,
        bias = ?obj.bias,
        flags = obj.flags.len(),
        "forged {}",
        obj
    );
    Ok(())
}
