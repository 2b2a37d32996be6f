//! Abilities and the effects they carry.
//!
//! Abilities ("powers") are immutable value records. They are usually
//! parsed from a data file into an [`AbilityDefinition`] and validated
//! into an [`Ability`] with `TryFrom`; code that builds abilities directly
//! uses [`Ability::new`] and the public effect fields.

use crate::error::{CombatError, DataError};
use crate::ids::AbilityId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Critical hits trigger when the attack margin exceeds this value, less
/// any threshold bonus.
pub const BASE_CRITICAL_THRESHOLD: i32 = 6;

/// Penalty applied to a counter-attack before any reduction.
pub const BASE_COUNTER_ATTACK_PENALTY: i32 = -2;

/// Where an ability's damage comes from. Decides which attacker stat adds
/// to damage and which defender stats mitigate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerType {
    /// Scales with strength; dodged, and reduced by armor.
    Physical,
    /// Scales with mind; deflected, ignores armor, can burn barrier.
    Spell,
}

impl FromStr for PowerType {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "physical" => Ok(PowerType::Physical),
            "spell" => Ok(PowerType::Spell),
            _ => Err(DataError::UnknownPowerType(s.to_string())),
        }
    }
}

/// Critical-hit modifiers of an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CriticalEffect {
    /// Lowers the margin needed to crit.
    pub critical_hit_threshold_bonus: i32,
    /// Added to the doubled damage pool on a critical hit.
    pub extra_critical_damage: i32,
}

impl CriticalEffect {
    /// Margin an attack roll must exceed to crit. Lower is easier.
    ///
    /// ```rust
    /// use tactica::CriticalEffect;
    ///
    /// let keen = CriticalEffect { critical_hit_threshold_bonus: 2, extra_critical_damage: 0 };
    /// assert_eq!(keen.critical_hit_threshold(), 4);
    /// ```
    pub fn critical_hit_threshold(&self) -> i32 {
        BASE_CRITICAL_THRESHOLD.saturating_sub(self.critical_hit_threshold_bonus)
    }
}

/// Offensive part of an ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackEffect {
    pub to_hit_bonus: i32,
    pub damage_bonus: i32,
    /// Spell-only damage dealt to whatever barrier survives the main hit.
    pub extra_barrier_burn: i32,
    /// Weapon-like attacks that can be equipped.
    pub can_be_equipped: bool,
    pub can_counter_attack: bool,
    pub counter_attack_penalty_reduction: i32,
    pub critical: Option<CriticalEffect>,
}

impl AttackEffect {
    /// To-hit penalty when used to counter, or `None` if this attack
    /// cannot counter.
    pub fn counter_attack_penalty(&self) -> Option<i32> {
        self.can_counter_attack.then_some(
            BASE_COUNTER_ATTACK_PENALTY.saturating_add(self.counter_attack_penalty_reduction),
        )
    }

    pub fn can_crit(&self) -> bool {
        self.critical.is_some()
    }
}

/// How much of the healer's mind adds to a heal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MindScaling {
    #[default]
    Full,
    Half,
    Zero,
}

impl MindScaling {
    /// Portion of `mind` contributed by this scaling. Halving truncates
    /// toward zero.
    pub fn scale(self, mind: i32) -> i32 {
        match self {
            MindScaling::Full => mind,
            MindScaling::Half => mind / 2,
            MindScaling::Zero => 0,
        }
    }
}

/// Restorative part of an ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealingEffect {
    pub hit_points_healed: i32,
    pub mind_scaling: MindScaling,
}

/// Who an ability may be aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Targeting {
    #[serde(rename = "self")]
    pub self_: bool,
    pub friend: bool,
    pub foe: bool,
}

impl Targeting {
    pub const FOE: Targeting = Targeting {
        self_: false,
        friend: false,
        foe: true,
    };

    pub const FRIEND_OR_SELF: Targeting = Targeting {
        self_: true,
        friend: true,
        foe: false,
    };
}

/// A validated ability.
///
/// An ability with neither an attack nor a healing effect is inert but
/// valid. Deserializing goes through [`AbilityDefinition`].
///
/// # Examples
///
/// ```rust
/// use tactica::{Ability, AttackEffect, PowerType, Targeting};
///
/// let mut slash = Ability::new("slash", "Slash", PowerType::Physical, Targeting::FOE);
/// slash.attack = Some(AttackEffect { damage_bonus: 3, ..Default::default() });
/// assert!(slash.attack.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AbilityDefinition")]
pub struct Ability {
    pub id: AbilityId,
    pub name: String,
    pub power_type: PowerType,
    pub targets: Targeting,
    pub attack: Option<AttackEffect>,
    pub healing: Option<HealingEffect>,
}

impl Ability {
    pub fn new(
        id: impl Into<AbilityId>,
        name: impl Into<String>,
        power_type: PowerType,
        targets: Targeting,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            power_type,
            targets,
            attack: None,
            healing: None,
        }
    }

    pub fn is_inert(&self) -> bool {
        self.attack.is_none() && self.healing.is_none()
    }

    /// To-hit penalty for countering with this ability.
    ///
    /// Fails with [`CombatError::CannotCounter`] if the ability has no
    /// attack or its attack cannot counter.
    pub fn counter_attack_penalty(&self) -> Result<i32, CombatError> {
        self.attack
            .as_ref()
            .and_then(AttackEffect::counter_attack_penalty)
            .ok_or_else(|| CombatError::CannotCounter(self.id.clone()))
    }
}

/// An ability as it arrives from a data file, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityDefinition {
    pub id: String,
    pub name: String,
    pub power_type: String,
    #[serde(default)]
    pub targets: Targeting,
    #[serde(default)]
    pub attack: Option<AttackEffect>,
    #[serde(default)]
    pub healing: Option<HealingEffect>,
}

impl TryFrom<AbilityDefinition> for Ability {
    type Error = DataError;

    fn try_from(def: AbilityDefinition) -> Result<Self, Self::Error> {
        let power_type = def.power_type.parse()?;
        Ok(Self {
            id: AbilityId::from(def.id),
            name: def.name,
            power_type,
            targets: def.targets,
            attack: def.attack,
            healing: def.healing,
        })
    }
}
