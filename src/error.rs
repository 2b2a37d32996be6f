//! Error types for the rules engine.
//!
//! Every error here is an expected, recoverable condition. Legality
//! outcomes are not errors; see [`crate::targeting::LegalityResult`].

use crate::ids::{AbilityId, ClassId, LevelId};
use thiserror::Error;

/// Errors raised while validating raw data records.
///
/// A record that fails validation should be rejected by the loader and
/// never added to any repository.
///
/// # Examples
///
/// ```rust
/// use tactica::DataError;
///
/// let err = DataError::UnknownPowerType(String::from("Psychic"));
/// assert_eq!(err.to_string(), "Unknown power type: Psychic");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataError {
    /// The damage-source kind of an ability is neither Physical nor Spell.
    #[error("Unknown power type: {0}")]
    UnknownPowerType(String),

    /// A level-up benefit was defined without a class.
    #[error("Level-up benefit is missing a class id")]
    MissingClassId,

    /// A level-up benefit size is neither Small nor Big.
    #[error("Unknown benefit size: {0}")]
    UnknownBenefitSize(String),

    /// A class lists a level that belongs to another class.
    #[error("Level {level_id} belongs to class {found}, not {expected}")]
    LevelClassMismatch {
        level_id: LevelId,
        expected: ClassId,
        found: ClassId,
    },

    /// A class lists the same level id twice.
    #[error("Level {level_id} is listed twice in class {class_id}")]
    DuplicateLevel { class_id: ClassId, level_id: LevelId },
}

/// Errors raised by combat math requests.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CombatError {
    /// Counter-attack math was requested for an attack that cannot counter.
    #[error("Ability {0} cannot counter-attack")]
    CannotCounter(AbilityId),
}

/// Errors raised by the progression engine.
///
/// When one of these is returned the combatant is left untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProgressionError {
    /// The class was never added to the combatant (or is not in the catalog).
    #[error("Unknown class: {0}")]
    UnknownClass(ClassId),

    /// The level was already consumed in that class.
    #[error("Level {level_id} already consumed in class {class_id}")]
    LevelAlreadyConsumed { class_id: ClassId, level_id: LevelId },
}

/// Any error the engine can produce.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RulesError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    Progression(#[from] ProgressionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProgressionError::UnknownClass(ClassId::new("paladin"));
        assert!(err.to_string().contains("paladin"));
    }

    #[test]
    fn test_level_consumed_display() {
        let err = ProgressionError::LevelAlreadyConsumed {
            class_id: ClassId::new("knight"),
            level_id: LevelId::new("knight-s1"),
        };
        let display = err.to_string();
        assert!(display.contains("knight-s1"));
        assert!(display.contains("knight"));
    }

    #[test]
    fn test_level_class_mismatch_display() {
        let err = DataError::LevelClassMismatch {
            level_id: LevelId::new("cleric-s0"),
            expected: ClassId::new("cleric"),
            found: ClassId::new("wizard"),
        };
        assert_eq!(
            err.to_string(),
            "Level cleric-s0 belongs to class wizard, not cleric"
        );
    }

    #[test]
    fn test_rules_error_from() {
        let err: RulesError = DataError::MissingClassId.into();
        assert_eq!(err, RulesError::Data(DataError::MissingClassId));
        assert_eq!(err.to_string(), "Level-up benefit is missing a class id");
    }
}
