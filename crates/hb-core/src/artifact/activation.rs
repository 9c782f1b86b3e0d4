//! Random artifact activations
//!
//! An artifact gets at most one activation. A biased artifact usually takes
//! the pick from its bias profile; otherwise the generic table is
//! rejection-sampled by power tier.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};

use super::bias::activation_profile;
use crate::{ALWAYS_ACCEPT, ForgeConfig};
use crate::object::{ArtFlag, Object};
use crate::rng::RandomSource;

/// Activation effects, numbered from 1 so that `randint1(MAX)` maps
/// straight onto a variant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    FromRepr,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ActivationId {
    SunLight = 1,
    BoMiss1,
    BaPois1,
    BoElec1,
    BoAcid1,
    BoCold1,
    BoFire1,
    BaCold1,
    BaFire1,
    Drain1,
    BaCold2,
    BaElec2,
    Drain2,
    Vampire1,
    BoMiss2,
    BaFire3,
    BaCold3,
    BaElec3,
    Whirlwind,
    Vampire2,
    CallChaos,
    Rocket,
    DispEvil,
    BaMiss3,
    DispGood,
    BaFire2,
    BaAcid1,
    Confuse,
    Sleep,
    Quake,
    Terror,
    TeleAway,
    BanishEvil,
    Genocide,
    MassGeno,
    CharmAnimal,
    CharmUndead,
    CharmOther,
    CharmAnimals,
    CharmOthers,
    SummonAnimal,
    SummonPhantom,
    SummonElemental,
    SummonDemon,
    SummonUndead,
    CureLw,
    CureMw,
    CurePoison,
    RestLife,
    RestAll,
    Cure700,
    Cure1000,
    Esp,
    Berserk,
    ProtEvil,
    ResistAll,
    Speed,
    XtraSpeed,
    Wraith,
    Invuln,
    Light,
    MapLight,
    DetectAll,
    DetectXtra,
    IdFull,
    IdPlain,
    RuneExplo,
    RuneProt,
    Satiate,
    DestDoor,
    StoneMud,
    Recharge,
    Alchemy,
    DimDoor,
    Teleport,
    Recall,
}

impl ActivationId {
    /// Highest activation number
    pub const MAX: u32 = ActivationId::COUNT as u32;

    pub fn from_index(index: u32) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    /// Acceptance chance (out of 100) when drawn from the generic table.
    /// [`ALWAYS_ACCEPT`] always passes a `randint1(100)` check.
    pub const fn tier_chance(&self) -> u32 {
        use ActivationId::*;
        match self {
            SunLight | BoMiss1 | BaPois1 | BoElec1 | BoAcid1 | BoCold1 | BoFire1 | Confuse
            | Sleep | Quake | CureLw | CureMw | CurePoison | Berserk | Light | MapLight
            | DestDoor | StoneMud | Teleport => ALWAYS_ACCEPT,
            BaCold1 | BaFire1 | Drain1 | TeleAway | Esp | ResistAll | DetectAll | Recall
            | Satiate | Recharge => 85,
            Terror | ProtEvil | IdPlain => 75,
            Drain2 | Vampire1 | BoMiss2 | BaFire2 | RestLife => 66,
            BaCold3 | BaElec3 | Whirlwind | Vampire2 | CharmAnimal => 50,
            BaCold2 | BaElec2 | BaAcid1 | SummonAnimal => 40,
            DispEvil | BaMiss3 | DispGood | BanishEvil | Genocide | MassGeno | CharmUndead
            | CharmOther | SummonPhantom | RestAll | RuneExplo => 33,
            CallChaos | Rocket | CharmAnimals | CharmOthers | SummonElemental | Cure700
            | Speed | IdFull | RuneProt => 25,
            BaFire3 | DimDoor => 15,
            Cure1000 | XtraSpeed | DetectXtra => 10,
            SummonUndead | SummonDemon | Wraith | Invuln | Alchemy => 5,
        }
    }

    /// Player-facing description
    pub const fn description(&self) -> &'static str {
        use ActivationId::*;
        match self {
            SunLight => "beam of sunlight",
            BoMiss1 => "magic missile (2d6)",
            BaPois1 => "stinking cloud (12)",
            BoElec1 => "lightning bolt (4d8)",
            BoAcid1 => "acid bolt (5d8)",
            BoCold1 => "frost bolt (6d8)",
            BoFire1 => "fire bolt (9d8)",
            BaCold1 => "ball of cold (48)",
            BaFire1 => "ball of fire (72)",
            Drain1 => "drain life (100)",
            BaCold2 => "ball of cold (100)",
            BaElec2 => "ball of lightning (100)",
            Drain2 => "drain life (120)",
            Vampire1 => "vampiric drain (3*50)",
            BoMiss2 => "arrow (150)",
            BaFire3 => "fire ball (300)",
            BaCold3 => "ball of cold (400)",
            BaElec3 => "ball of lightning (500)",
            Whirlwind => "whirlwind attack",
            Vampire2 => "vampiric drain (3*100)",
            CallChaos => "call chaos",
            Rocket => "launch rocket (120+level)",
            DispEvil => "dispel evil (level*5)",
            BaMiss3 => "elemental breath (300)",
            DispGood => "dispel good (level*5)",
            BaFire2 => "fire ball (120)",
            BaAcid1 => "acid ball (100)",
            Confuse => "confuse monster",
            Sleep => "sleep nearby monsters",
            Quake => "earthquake",
            Terror => "terror",
            TeleAway => "teleport away",
            BanishEvil => "banish evil",
            Genocide => "genocide",
            MassGeno => "mass genocide",
            CharmAnimal => "charm animal",
            CharmUndead => "enslave undead",
            CharmOther => "charm monster",
            CharmAnimals => "animal friendship",
            CharmOthers => "mass charm",
            SummonAnimal => "summon animal",
            SummonPhantom => "summon phantasmal servant",
            SummonElemental => "summon elemental",
            SummonDemon => "summon demon",
            SummonUndead => "summon undead",
            CureLw => "cure light wounds",
            CureMw => "cure serious wounds",
            CurePoison => "cure poison",
            RestLife => "restore life levels",
            RestAll => "restore stats and life levels",
            Cure700 => "heal 700 hit points",
            Cure1000 => "heal 1000 hit points",
            Esp => "temporary ESP",
            Berserk => "heroism and berserk",
            ProtEvil => "protection from evil",
            ResistAll => "resist elements",
            Speed => "haste self",
            XtraSpeed => "haste self (extra)",
            Wraith => "wraith form",
            Invuln => "invulnerability",
            Light => "light area",
            MapLight => "light and map area",
            DetectAll => "detect all monsters",
            DetectXtra => "detection, probing and identify true",
            IdFull => "identify true",
            IdPlain => "identify",
            RuneExplo => "explosive rune",
            RuneProt => "rune of protection",
            Satiate => "satisfy hunger",
            DestDoor => "destroy doors",
            StoneMud => "stone to mud",
            Recharge => "recharging",
            Alchemy => "alchemy",
            DimDoor => "dimension door",
            Teleport => "teleport",
            Recall => "word of recall",
        }
    }
}

fn install(obj: &mut Object, id: ActivationId) {
    obj.activation = Some(id);
    obj.flags.set(ArtFlag::Activate);
    obj.timeout = 0;
}

/// Give the item an activation, preferring its bias profile.
pub fn give_activation_power<R: RandomSource + ?Sized>(
    obj: &mut Object,
    rng: &mut R,
    config: &ForgeConfig,
) {
    let Some(profile) = activation_profile(obj.bias) else {
        one_activation(obj, rng, config);
        return;
    };
    let pick = profile.pick(rng);
    if rng.randint1(100) >= profile.chance {
        one_activation(obj, rng, config);
        return;
    }
    tracing::debug!(activation = %pick, bias = ?obj.bias, "biased activation");
    install(obj, pick);
}

/// Rejection-sample the generic activation table.
///
/// Each draw is accepted with its tier chance. If the sample budget runs
/// out, the last draw is kept so the item always ends up with an
/// activation.
pub fn one_activation<R: RandomSource + ?Sized>(
    obj: &mut Object,
    rng: &mut R,
    config: &ForgeConfig,
) {
    let mut pick = ActivationId::SunLight;
    for attempt in 1..=config.max_activation_samples {
        pick = ActivationId::from_index(rng.randint1(ActivationId::MAX))
            .unwrap_or(ActivationId::SunLight);
        if rng.randint1(100) < pick.tier_chance() {
            tracing::debug!(activation = %pick, attempt, "generic activation");
            install(obj, pick);
            return;
        }
    }
    tracing::warn!(
        activation = %pick,
        budget = config.max_activation_samples,
        "activation sample budget exhausted, keeping last draw"
    );
    install(obj, pick);
}
