//! Object instances

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{ArtFlag, ArtFlags, CurseFlags, ItemKind};
use crate::artifact::{ActivationId, ArtifactBias};

/// Unique identifier for object instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl ObjectId {
    pub const NONE: ObjectId = ObjectId(0);

    pub fn next(self) -> Self {
        ObjectId(self.0 + 1)
    }
}

/// Object instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    /// Unique identifier
    pub id: ObjectId,

    /// Item kind (tval)
    pub kind: ItemKind,

    /// Property flags
    pub flags: ArtFlags,

    /// Curse state
    pub curse: CurseFlags,

    /// Thematic affinity; once set, later rolls only read it
    pub bias: Option<ArtifactBias>,

    /// Magnitude shared by the pval-scaled flags
    pub pval: i16,

    /// To-hit bonus
    pub to_h: i16,

    /// To-damage bonus
    pub to_d: i16,

    /// Armour class bonus
    pub to_a: i16,

    /// Base armour class
    pub ac: i16,

    /// Weapon damage dice (number of dice)
    pub damage_dice: u8,

    /// Weapon damage sides (sides per die)
    pub damage_sides: u8,

    /// Activation power, if any
    pub activation: Option<ActivationId>,

    /// Recharge timer for the activation
    pub timeout: i16,

    /// Random artifact name
    pub art_name: Option<String>,
}

impl Object {
    /// A plain, unenchanted item of the given kind
    pub fn new(id: ObjectId, kind: ItemKind) -> Self {
        let (damage_dice, damage_sides) = kind.base_dice();
        Self {
            id,
            kind,
            flags: ArtFlags::new(),
            curse: CurseFlags::empty(),
            bias: None,
            pval: 0,
            to_h: 0,
            to_d: 0,
            to_a: 0,
            ac: kind.base_ac(),
            damage_dice,
            damage_sides,
            activation: None,
            timeout: 0,
            art_name: None,
        }
    }

    pub fn is_artifact(&self) -> bool {
        self.art_name.is_some()
    }

    pub fn is_cursed(&self) -> bool {
        self.curse.contains(CurseFlags::CURSED)
    }

    pub fn has(&self, flag: ArtFlag) -> bool {
        self.flags.has(flag)
    }

    /// Set the bias unless one is already recorded
    pub fn set_bias_if_unset(&mut self, bias: ArtifactBias) -> bool {
        if self.bias.is_some() {
            return false;
        }
        self.bias = Some(bias);
        true
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(name) = &self.art_name {
            write!(f, " {}", name)?;
        }
        if self.damage_dice > 0 {
            write!(f, " ({}d{})", self.damage_dice, self.damage_sides)?;
        }
        if self.kind.is_weapon_ammo() || self.to_h != 0 || self.to_d != 0 {
            write!(f, " ({:+},{:+})", self.to_h, self.to_d)?;
        }
        if self.ac > 0 || self.to_a != 0 {
            write!(f, " [{},{:+}]", self.ac, self.to_a)?;
        }
        if self.pval != 0 {
            write!(f, " <{:+}>", self.pval)?;
        }
        if self.is_cursed() {
            write!(f, " {{cursed}}")?;
        }
        Ok(())
    }
}
