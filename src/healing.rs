//! Healing resolution.

use crate::ability::{Ability, HealingEffect};
use crate::stats::{CombatantStats, StatView};
use serde::{Deserialize, Serialize};

/// Outcome of a heal before it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealSummary {
    /// Base healing of the effect.
    pub base: i32,
    /// Healing contributed by the healer's mind.
    pub mind_bonus: i32,
    /// `base + mind_bonus`, never negative.
    pub amount: i32,
    /// Part of `amount` that the target can actually take.
    pub effective: i32,
}

impl HealSummary {
    pub fn apply_to(&self, stats: &mut CombatantStats) {
        stats.gain_hit_points(self.effective);
    }

    /// Healing that exceeds the target's missing hit points.
    pub fn overheal(&self) -> i32 {
        self.amount - self.effective
    }
}

/// Compute how much `effect` heals `target` when used by `healer`.
///
/// # Examples
///
/// ```rust
/// use tactica::{resolve_heal, CombatantStats, HealingEffect, MindScaling};
///
/// let healer = CombatantStats { mind: 3, ..CombatantStats::default() };
/// let mut target = CombatantStats::default();
/// target.reduce_hit_points(4);
///
/// let effect = HealingEffect { hit_points_healed: 1, mind_scaling: MindScaling::Half };
/// let heal = resolve_heal(&effect, &healer, &target);
/// assert_eq!(heal.amount, 2);
/// assert_eq!(heal.effective, 2);
/// ```
pub fn resolve_heal(
    effect: &HealingEffect,
    healer: &(impl StatView + ?Sized),
    target: &(impl StatView + ?Sized),
) -> HealSummary {
    let mind_bonus = effect.mind_scaling.scale(healer.mind());
    let amount = effect.hit_points_healed.saturating_add(mind_bonus).max(0);
    HealSummary {
        base: effect.hit_points_healed,
        mind_bonus,
        amount,
        effective: amount.min(target.missing_hit_points()),
    }
}

/// Resolve an ability's healing, or `None` if it does not heal.
pub fn resolve_ability_heal(
    ability: &Ability,
    healer: &(impl StatView + ?Sized),
    target: &(impl StatView + ?Sized),
) -> Option<HealSummary> {
    ability
        .healing
        .as_ref()
        .map(|effect| resolve_heal(effect, healer, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{MindScaling, PowerType, Targeting};

    fn wounded(missing: i32) -> CombatantStats {
        let mut stats = CombatantStats {
            max_hit_points: 20,
            current_hit_points: 20,
            ..CombatantStats::default()
        };
        stats.reduce_hit_points(missing);
        stats
    }

    fn healer(mind: i32) -> CombatantStats {
        CombatantStats {
            mind,
            ..CombatantStats::default()
        }
    }

    #[test]
    fn test_mind_scaling_modes() {
        let target = wounded(15);
        for (scaling, expected) in [
            (MindScaling::Full, 9),
            (MindScaling::Half, 6),
            (MindScaling::Zero, 4),
        ] {
            let effect = HealingEffect {
                hit_points_healed: 4,
                mind_scaling: scaling,
            };
            assert_eq!(resolve_heal(&effect, &healer(5), &target).amount, expected);
        }
    }

    #[test]
    fn test_overheal_is_capped() {
        let effect = HealingEffect {
            hit_points_healed: 10,
            mind_scaling: MindScaling::Zero,
        };
        let mut target = wounded(3);
        let heal = resolve_heal(&effect, &healer(0), &target);
        assert_eq!(heal.effective, 3);
        assert_eq!(heal.overheal(), 7);
        heal.apply_to(&mut target);
        assert_eq!(target.current_hit_points, 20);
    }

    #[test]
    fn test_negative_heal_clamps_to_zero() {
        let effect = HealingEffect {
            hit_points_healed: -5,
            mind_scaling: MindScaling::Full,
        };
        let heal = resolve_heal(&effect, &healer(2), &wounded(5));
        assert_eq!(heal.amount, 0);
        assert_eq!(heal.effective, 0);
    }

    #[test]
    fn test_huge_mind_does_not_overflow() {
        let effect = HealingEffect {
            hit_points_healed: 1,
            mind_scaling: MindScaling::Full,
        };
        let heal = resolve_heal(&effect, &healer(i32::MAX), &wounded(5));
        assert_eq!(heal.amount, i32::MAX);
        assert_eq!(heal.effective, 5);
    }

    #[test]
    fn test_ability_without_healing() {
        let ability = Ability::new("slash", "Slash", PowerType::Physical, Targeting::FOE);
        assert!(resolve_ability_heal(&ability, &healer(1), &wounded(1)).is_none());
    }
}
