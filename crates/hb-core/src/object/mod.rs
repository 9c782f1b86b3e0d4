//! Object system
//!
//! Item kinds, property flags, and the item instance the forge mutates.

mod flags;
mod kind;
mod obj;

pub use flags::{ArtFlag, ArtFlags, CurseFlags};
pub use kind::ItemKind;
pub use obj::{Object, ObjectId};
