//! Artifact generation constants
//!
//! Defaults for [`crate::ForgeConfig`]; the generators read the config, not
//! these constants directly.

/// 1 in N chance that a biased roll tries for an elemental immunity
pub const BIAS_LUCK: u32 = 20;

/// 1 in N chance that a new immunity keeps the other elemental immunities
pub const IM_LUCK: u32 = 7;

/// 1 in N chance for the rare outcomes (weird immunity, doubled powers)
pub const WEIRD_LUCK: u32 = 12;

/// 1 in N chance that a non-cursed artifact gets an activation
pub const ACTIVATION_CHANCE: u32 = 3;

/// 1 in N chance that a non-scroll artifact comes out cursed
pub const A_CURSED: u32 = 13;

/// Re-roll budget for table outcomes that do not fit the item
pub const MAX_RETRIES: u32 = 50;

/// Sample budget for the generic activation table
pub const MAX_ACTIVATION_SAMPLES: u32 = 10_000;

/// Acceptance chance that always passes a `randint1(100)` check
pub const ALWAYS_ACCEPT: u32 = 101;
