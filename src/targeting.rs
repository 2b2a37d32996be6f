//! Target legality.
//!
//! Decides whether an ability may be aimed at a candidate target. The
//! outcome is a value the caller branches on, never an error.

use crate::ability::Ability;
use crate::affiliation::Affiliation;
use crate::combatant::Combatant;
use serde::{Deserialize, Serialize};

/// Outcome of a legality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalityResult {
    Valid,
    /// The target's side does not match any side the ability may target.
    InvalidAffiliation,
    /// Dead targets can never be targeted.
    InvalidTargetDead,
}

impl LegalityResult {
    pub fn is_valid(self) -> bool {
        self == LegalityResult::Valid
    }
}

/// Check whether `ability` may target the candidate.
///
/// Rules are tried in order: a dead target is always illegal; then self,
/// friend and foe targeting are checked against the ability's flags.
///
/// # Examples
///
/// ```rust
/// use tactica::{check_legality, Ability, Affiliation, LegalityResult, PowerType, Targeting};
///
/// let fireball = Ability::new("fireball", "Fireball", PowerType::Spell, Targeting::FOE);
///
/// let result = check_legality(Affiliation::Player, Affiliation::Enemy, false, true, &fireball);
/// assert_eq!(result, LegalityResult::Valid);
///
/// let result = check_legality(Affiliation::Player, Affiliation::Ally, false, true, &fireball);
/// assert_eq!(result, LegalityResult::InvalidAffiliation);
/// ```
pub fn check_legality(
    user_affiliation: Affiliation,
    target_affiliation: Affiliation,
    target_is_same_entity: bool,
    target_is_alive: bool,
    ability: &Ability,
) -> LegalityResult {
    if !target_is_alive {
        return LegalityResult::InvalidTargetDead;
    }

    let targets = ability.targets;
    if targets.self_ && target_is_same_entity {
        return LegalityResult::Valid;
    }
    if targets.friend && user_affiliation.is_friend(target_affiliation) {
        return LegalityResult::Valid;
    }
    if targets.foe && user_affiliation.is_foe(target_affiliation) {
        return LegalityResult::Valid;
    }

    LegalityResult::InvalidAffiliation
}

/// [`check_legality`] for two combatant records.
pub fn check_target(user: &Combatant, target: &Combatant, ability: &Ability) -> LegalityResult {
    check_legality(
        user.affiliation,
        target.affiliation,
        user.is_same_entity(target),
        target.is_alive(),
        ability,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{PowerType, Targeting};
    use crate::affiliation::Affiliation::*;

    fn ability(targets: Targeting) -> Ability {
        Ability::new("test", "Test", PowerType::Physical, targets)
    }

    #[test]
    fn test_dead_target_always_invalid() {
        let all = ability(Targeting {
            self_: true,
            friend: true,
            foe: true,
        });
        assert_eq!(
            check_legality(Player, Enemy, false, false, &all),
            LegalityResult::InvalidTargetDead
        );
        assert_eq!(
            check_legality(Player, Player, true, false, &all),
            LegalityResult::InvalidTargetDead
        );
    }

    #[test]
    fn test_self_targeting() {
        let self_only = ability(Targeting {
            self_: true,
            ..Default::default()
        });
        assert!(check_legality(Enemy, Enemy, true, true, &self_only).is_valid());
        assert_eq!(
            check_legality(Enemy, Enemy, false, true, &self_only),
            LegalityResult::InvalidAffiliation
        );
    }

    #[test]
    fn test_friend_targeting_player_and_ally() {
        let heal = ability(Targeting {
            friend: true,
            ..Default::default()
        });
        assert!(check_legality(Player, Ally, false, true, &heal).is_valid());
        assert!(check_legality(Ally, Player, false, true, &heal).is_valid());
        assert!(!check_legality(Player, Enemy, false, true, &heal).is_valid());
        assert!(!check_legality(Neutral, Neutral, false, true, &heal).is_valid());
    }

    #[test]
    fn test_self_is_friend_for_friend_abilities() {
        let heal = ability(Targeting {
            friend: true,
            ..Default::default()
        });
        assert!(check_legality(Player, Player, true, true, &heal).is_valid());
    }

    #[test]
    fn test_foe_targeting_neutral() {
        let strike = ability(Targeting::FOE);
        assert!(check_legality(Player, Neutral, false, true, &strike).is_valid());
        assert!(check_legality(Neutral, Player, false, true, &strike).is_valid());
        assert!(check_legality(Neutral, Neutral, false, true, &strike).is_valid());
        assert!(!check_legality(Enemy, Enemy, false, true, &strike).is_valid());
    }

    #[test]
    fn test_inert_targeting_is_invalid() {
        let nothing = ability(Targeting::default());
        assert_eq!(
            check_legality(Player, Enemy, false, true, &nothing),
            LegalityResult::InvalidAffiliation
        );
    }

    #[test]
    fn test_check_target_from_combatants() {
        let strike = ability(Targeting::FOE);
        let hero = Combatant::new("hero", "Hero", Player);
        let mut goblin = Combatant::new("goblin", "Goblin", Enemy);
        assert!(check_target(&hero, &goblin, &strike).is_valid());
        goblin.stats.reduce_hit_points(100);
        assert_eq!(
            check_target(&hero, &goblin, &strike),
            LegalityResult::InvalidTargetDead
        );
    }
}
