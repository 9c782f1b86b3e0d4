//! Curses for random artifacts

use crate::object::{ArtFlag, CurseFlags, Object};
use crate::rng::RandomSource;

fn invert<R: RandomSource + ?Sized>(value: &mut i16, rng: &mut R) {
    if *value > 0 {
        *value = -(*value + rng.randint1(4) as i16);
    }
}

/// Turn the item's bonuses negative and load it with curses.
///
/// Always sets `CURSED` and `HEAVY_CURSE`; the rest are individual rolls.
pub fn curse_artifact<R: RandomSource + ?Sized>(obj: &mut Object, rng: &mut R) {
    invert(&mut obj.pval, rng);
    invert(&mut obj.to_a, rng);
    invert(&mut obj.to_h, rng);
    invert(&mut obj.to_d, rng);

    obj.curse.insert(CurseFlags::CURSED | CurseFlags::HEAVY_CURSE);
    obj.flags.reset(ArtFlag::Blessed);

    if rng.one_in(4) {
        obj.curse.insert(CurseFlags::PERMA_CURSE);
    }
    let rolls = [
        (3, ArtFlag::TyCurse),
        (2, ArtFlag::Aggravate),
        (3, ArtFlag::DrainExp),
        (6, ArtFlag::AddLCurse),
        (9, ArtFlag::AddHCurse),
        (9, ArtFlag::DrainHp),
        (9, ArtFlag::DrainMana),
    ];
    for (n, flag) in rolls {
        if rng.one_in(n) {
            obj.flags.set(flag);
        }
    }
    if rng.one_in(2) {
        obj.flags.set(ArtFlag::Teleport);
    } else if rng.one_in(3) {
        obj.flags.set(ArtFlag::NoTele);
    }
    if rng.one_in(3) {
        obj.flags.set(ArtFlag::NoMagic);
    }
    tracing::debug!(kind = %obj.kind, curse = ?obj.curse, "artifact cursed");
}
