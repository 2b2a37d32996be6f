//! The mutable combatant entity.
//!
//! A `Combatant` owns its stats, movement, known abilities and class
//! progress for its whole lifetime. The engines borrow it; callers that
//! keep combatants in a repository write the mutated record back
//! themselves.

use crate::affiliation::Affiliation;
use crate::ids::{AbilityId, CombatantId};
use crate::movement::Movement;
use crate::progression::ClassProgress;
use crate::stats::{CombatantStats, StatView};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A unit on the battlefield.
///
/// # Examples
///
/// ```rust
/// use tactica::{Affiliation, Combatant};
///
/// let hero = Combatant::new("hero", "Aria", Affiliation::Player);
/// assert!(hero.is_alive());
/// assert_eq!(hero.stats.max_hit_points, 5);
/// assert!(hero.progress.base_class().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub affiliation: Affiliation,
    pub stats: CombatantStats,
    pub movement: Movement,
    pub abilities: BTreeSet<AbilityId>,
    pub progress: ClassProgress,
}

impl Combatant {
    pub fn new(
        id: impl Into<CombatantId>,
        name: impl Into<String>,
        affiliation: Affiliation,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            affiliation,
            stats: CombatantStats::default(),
            movement: Movement::default(),
            abilities: BTreeSet::new(),
            progress: ClassProgress::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    /// Whether `other` is this very combatant.
    pub fn is_same_entity(&self, other: &Combatant) -> bool {
        self.id == other.id
    }

    pub fn knows(&self, ability: &AbilityId) -> bool {
        self.abilities.contains(ability)
    }
}

impl StatView for Combatant {
    fn current_hit_points(&self) -> i32 {
        self.stats.current_hit_points
    }

    fn max_hit_points(&self) -> i32 {
        self.stats.max_hit_points
    }

    fn current_barrier(&self) -> i32 {
        self.stats.current_barrier
    }

    fn max_barrier(&self) -> i32 {
        self.stats.max_barrier
    }

    fn armor(&self) -> i32 {
        self.stats.armor
    }

    fn dodge(&self) -> i32 {
        self.stats.dodge
    }

    fn deflect(&self) -> i32 {
        self.stats.deflect
    }

    fn aim(&self) -> i32 {
        self.stats.aim
    }

    fn strength(&self) -> i32 {
        self.stats.strength
    }

    fn mind(&self) -> i32 {
        self.stats.mind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_combatant_defaults() {
        let unit = Combatant::new("u1", "Grunt", Affiliation::Enemy);
        assert_eq!(unit.stats, CombatantStats::default());
        assert_eq!(unit.movement, Movement::default());
        assert!(unit.abilities.is_empty());
        assert!(unit.progress.current_class().is_none());
    }

    #[test]
    fn test_same_entity_by_id() {
        let a = Combatant::new("u1", "Grunt", Affiliation::Enemy);
        let mut b = a.clone();
        b.name = String::from("Renamed");
        let c = Combatant::new("u2", "Grunt", Affiliation::Enemy);
        assert!(a.is_same_entity(&b));
        assert!(!a.is_same_entity(&c));
    }

    #[test]
    fn test_dies_at_zero() {
        let mut unit = Combatant::new("u1", "Grunt", Affiliation::Enemy);
        unit.stats.reduce_hit_points(5);
        assert!(!unit.is_alive());
    }
}
