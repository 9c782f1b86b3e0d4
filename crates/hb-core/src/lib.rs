//! hb-core: random artifact generation for a Hengband-style roguelike
//!
//! This crate contains the artifact forge with no I/O beyond loading its
//! configuration. Every roll goes through a [`RandomSource`], so a seeded
//! [`GameRng`] reproduces the same artifact and a [`ScriptedRng`] can replay
//! an exact sequence of rolls.

pub mod artifact;
pub mod object;

mod config;
mod consts;
mod rng;

pub use config::{ConfigError, ForgeConfig};
pub use consts::*;
pub use rng::{GameRng, RandomSource, ScriptedRng};
