//! Level-up benefits.
//!
//! A benefit is one level of a class track: a bundle of stat deltas,
//! an optional movement improvement and abilities gained or lost. Deltas
//! may be negative.

use crate::error::DataError;
use crate::ids::{AbilityId, ClassId, LevelId};
use crate::movement::MovementImprovement;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The two tiers of level-up benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenefitSize {
    Small,
    Big,
}

impl FromStr for BenefitSize {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(BenefitSize::Small),
            "big" => Ok(BenefitSize::Big),
            _ => Err(DataError::UnknownBenefitSize(s.to_string())),
        }
    }
}

/// Per-stat changes granted by a benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatDeltas {
    pub max_hit_points: i32,
    pub aim: i32,
    pub strength: i32,
    pub mind: i32,
    pub dodge: i32,
    pub deflect: i32,
    pub max_barrier: i32,
    pub armor: i32,
}

/// A validated level-up benefit.
///
/// Deserializing goes through [`LevelUpBenefitDefinition`], so a record
/// read from data is checked the same way as one converted by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LevelUpBenefitDefinition")]
pub struct LevelUpBenefit {
    pub level_id: LevelId,
    pub class_id: ClassId,
    pub size: BenefitSize,
    pub stats: StatDeltas,
    pub movement: Option<MovementImprovement>,
    pub abilities_gained: Vec<AbilityId>,
    pub abilities_lost: Vec<AbilityId>,
}

impl LevelUpBenefit {
    /// Create a benefit with no deltas.
    ///
    /// Fails with [`DataError::MissingClassId`] if `class_id` is blank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tactica::{BenefitSize, LevelUpBenefit};
    ///
    /// let mut level = LevelUpBenefit::new("knight-s1", "knight", BenefitSize::Small).unwrap();
    /// level.stats.max_hit_points = 2;
    /// assert!(level.is_small());
    ///
    /// assert!(LevelUpBenefit::new("orphan", "", BenefitSize::Big).is_err());
    /// ```
    pub fn new(
        level_id: impl Into<LevelId>,
        class_id: impl Into<ClassId>,
        size: BenefitSize,
    ) -> Result<Self, DataError> {
        let class_id = class_id.into();
        if class_id.is_blank() {
            return Err(DataError::MissingClassId);
        }
        Ok(Self {
            level_id: level_id.into(),
            class_id,
            size,
            stats: StatDeltas::default(),
            movement: None,
            abilities_gained: Vec::new(),
            abilities_lost: Vec::new(),
        })
    }

    pub fn is_small(&self) -> bool {
        self.size == BenefitSize::Small
    }

    pub fn is_big(&self) -> bool {
        self.size == BenefitSize::Big
    }
}

/// A benefit as it arrives from a data file, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelUpBenefitDefinition {
    pub level_id: String,
    #[serde(default)]
    pub class_id: String,
    pub size: String,
    #[serde(default)]
    pub stats: StatDeltas,
    #[serde(default)]
    pub movement: Option<MovementImprovement>,
    #[serde(default)]
    pub abilities_gained: Vec<String>,
    #[serde(default)]
    pub abilities_lost: Vec<String>,
}

impl TryFrom<LevelUpBenefitDefinition> for LevelUpBenefit {
    type Error = DataError;

    fn try_from(def: LevelUpBenefitDefinition) -> Result<Self, Self::Error> {
        let size = def.size.parse()?;
        let mut benefit = LevelUpBenefit::new(def.level_id, def.class_id, size)?;
        benefit.stats = def.stats;
        benefit.movement = def.movement;
        benefit.abilities_gained = def.abilities_gained.into_iter().map(AbilityId::from).collect();
        benefit.abilities_lost = def.abilities_lost.into_iter().map(AbilityId::from).collect();
        Ok(benefit)
    }
}
