//! Random artifact forge
//!
//! Each generator adds one kind of power to an item: resistances,
//! miscellaneous abilities, pval-scaled stats, slays and activations.
//! `become_random_artifact` drives them to turn a plain item into a
//! named random artifact.

mod activation;
mod bias;
mod create;
mod curse;
mod misc;
mod name;
mod pval;
mod resistance;
mod slay;

pub use activation::{ActivationId, give_activation_power, one_activation};
pub use bias::{
    ActivationProfile, ArtifactBias, BiasNudge, Candidate, Gate, Odds, activation_profile,
    grant_immunity, misc_candidates, nudge_bias, pval_candidates, resistance_candidates,
    slay_candidates, try_candidates,
};
pub use create::{ArtifactRequest, ForgeError, become_random_artifact};
pub use curse::curse_artifact;
pub use misc::{WEAK_ESP, random_misc, weak_esp_picks};
pub use name::random_artifact_name;
pub use pval::random_plus;
pub use resistance::random_resistance;
pub use slay::random_slay;

/// Result of one roll on a generic table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Roll {
    Granted,
    /// The outcome does not fit the item; roll again
    Again,
}
