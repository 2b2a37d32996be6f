//! Combatant statistics.
//!
//! `CombatantStats` is the mutable record owned by a combatant. The
//! engines never mutate it directly; they read it through the
//! [`StatView`] trait and hand back summaries that the caller applies
//! with the clamp-safe `reduce_*`/`gain_*` operations.

use serde::{Deserialize, Serialize};

/// Read-only projection of a combatant's offensive and defensive numbers.
///
/// Anything that can answer these questions can be fed to the damage and
/// healing engines, whether it is a live [`CombatantStats`], a
/// [`crate::Combatant`], or a hypothetical "what if" snapshot.
pub trait StatView {
    fn current_hit_points(&self) -> i32;
    fn max_hit_points(&self) -> i32;
    fn current_barrier(&self) -> i32;
    fn max_barrier(&self) -> i32;
    fn armor(&self) -> i32;
    fn dodge(&self) -> i32;
    fn deflect(&self) -> i32;
    fn aim(&self) -> i32;
    fn strength(&self) -> i32;
    fn mind(&self) -> i32;

    /// Hit points that can still be restored.
    fn missing_hit_points(&self) -> i32 {
        self.max_hit_points()
            .saturating_sub(self.current_hit_points())
            .max(0)
    }
}

/// Default maximum hit points of a freshly created combatant.
pub const DEFAULT_MAX_HIT_POINTS: i32 = 5;

/// A combatant's current numbers.
///
/// # Examples
///
/// ```rust
/// use tactica::CombatantStats;
///
/// let mut stats = CombatantStats::default();
/// assert_eq!(stats.current_hit_points, 5);
///
/// stats.reduce_hit_points(8);
/// assert_eq!(stats.current_hit_points, 0);
///
/// stats.gain_hit_points(100);
/// assert_eq!(stats.current_hit_points, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatantStats {
    pub current_hit_points: i32,
    pub max_hit_points: i32,
    pub current_barrier: i32,
    pub max_barrier: i32,
    pub armor: i32,
    pub dodge: i32,
    pub deflect: i32,
    pub aim: i32,
    pub strength: i32,
    pub mind: i32,
}

impl Default for CombatantStats {
    fn default() -> Self {
        Self {
            current_hit_points: DEFAULT_MAX_HIT_POINTS,
            max_hit_points: DEFAULT_MAX_HIT_POINTS,
            current_barrier: 0,
            max_barrier: 0,
            armor: 0,
            dodge: 0,
            deflect: 0,
            aim: 0,
            strength: 0,
            mind: 0,
        }
    }
}

impl CombatantStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lose up to `amount` hit points. Negative amounts are ignored.
    pub fn reduce_hit_points(&mut self, amount: i32) {
        let value = self.current_hit_points.saturating_sub(amount.max(0));
        self.current_hit_points = clamp_pool(value, self.max_hit_points);
    }

    /// Recover up to `amount` hit points. Negative amounts are ignored.
    pub fn gain_hit_points(&mut self, amount: i32) {
        let value = self.current_hit_points.saturating_add(amount.max(0));
        self.current_hit_points = clamp_pool(value, self.max_hit_points);
    }

    /// Lose up to `amount` barrier. Negative amounts are ignored.
    pub fn reduce_barrier(&mut self, amount: i32) {
        let value = self.current_barrier.saturating_sub(amount.max(0));
        self.current_barrier = clamp_pool(value, self.max_barrier);
    }

    /// Recover up to `amount` barrier. Negative amounts are ignored.
    pub fn gain_barrier(&mut self, amount: i32) {
        let value = self.current_barrier.saturating_add(amount.max(0));
        self.current_barrier = clamp_pool(value, self.max_barrier);
    }

    /// Refill the barrier, as at the start of an encounter.
    pub fn restore_barrier(&mut self) {
        self.current_barrier = self.max_barrier;
    }

    /// Shift max hit points by `delta`; the current value moves with it.
    pub fn adjust_max_hit_points(&mut self, delta: i32) {
        self.max_hit_points = self.max_hit_points.saturating_add(delta).max(0);
        let value = self.current_hit_points.saturating_add(delta);
        self.current_hit_points = clamp_pool(value, self.max_hit_points);
    }

    /// Shift max barrier by `delta`; the current value moves with it.
    pub fn adjust_max_barrier(&mut self, delta: i32) {
        self.max_barrier = self.max_barrier.saturating_add(delta).max(0);
        let value = self.current_barrier.saturating_add(delta);
        self.current_barrier = clamp_pool(value, self.max_barrier);
    }

    pub fn is_alive(&self) -> bool {
        self.current_hit_points > 0
    }
}

fn clamp_pool(value: i32, max: i32) -> i32 {
    value.clamp(0, max.max(0))
}

impl StatView for CombatantStats {
    fn current_hit_points(&self) -> i32 {
        self.current_hit_points
    }

    fn max_hit_points(&self) -> i32 {
        self.max_hit_points
    }

    fn current_barrier(&self) -> i32 {
        self.current_barrier
    }

    fn max_barrier(&self) -> i32 {
        self.max_barrier
    }

    fn armor(&self) -> i32 {
        self.armor
    }

    fn dodge(&self) -> i32 {
        self.dodge
    }

    fn deflect(&self) -> i32 {
        self.deflect
    }

    fn aim(&self) -> i32 {
        self.aim
    }

    fn strength(&self) -> i32 {
        self.strength
    }

    fn mind(&self) -> i32 {
        self.mind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let stats = CombatantStats::new();
        assert_eq!(stats.max_hit_points, 5);
        assert_eq!(stats.current_hit_points, 5);
        assert_eq!(stats.max_barrier, 0);
        assert_eq!(stats.armor, 0);
        assert!(stats.is_alive());
    }

    #[test]
    fn test_reduce_clamps_to_zero() {
        let mut stats = CombatantStats::new();
        stats.reduce_hit_points(3);
        assert_eq!(stats.current_hit_points, 2);
        stats.reduce_hit_points(10);
        assert_eq!(stats.current_hit_points, 0);
        assert!(!stats.is_alive());
    }

    #[test]
    fn test_negative_amounts_ignored() {
        let mut stats = CombatantStats::new();
        stats.reduce_hit_points(2);
        stats.reduce_hit_points(-10);
        assert_eq!(stats.current_hit_points, 3);
        stats.gain_hit_points(-10);
        assert_eq!(stats.current_hit_points, 3);
    }

    #[test]
    fn test_barrier_clamps_to_max() {
        let mut stats = CombatantStats {
            max_barrier: 4,
            current_barrier: 1,
            ..CombatantStats::default()
        };
        stats.gain_barrier(10);
        assert_eq!(stats.current_barrier, 4);
        stats.reduce_barrier(3);
        assert_eq!(stats.current_barrier, 1);
        stats.restore_barrier();
        assert_eq!(stats.current_barrier, 4);
    }

    #[test]
    fn test_adjust_max_moves_current() {
        let mut stats = CombatantStats::new();
        stats.reduce_hit_points(1);
        stats.adjust_max_hit_points(3);
        assert_eq!(stats.max_hit_points, 8);
        assert_eq!(stats.current_hit_points, 7);

        stats.adjust_max_hit_points(-6);
        assert_eq!(stats.max_hit_points, 2);
        assert_eq!(stats.current_hit_points, 1);
    }

    #[test]
    fn test_extreme_values_saturate() {
        let mut stats = CombatantStats::new();
        stats.gain_hit_points(i32::MAX);
        assert_eq!(stats.current_hit_points, 5);

        stats.adjust_max_hit_points(i32::MAX);
        assert_eq!(stats.max_hit_points, i32::MAX);
        assert_eq!(stats.current_hit_points, i32::MAX);

        stats.adjust_max_hit_points(i32::MIN);
        assert_eq!(stats.max_hit_points, 0);
        assert_eq!(stats.current_hit_points, 0);

        let odd = CombatantStats {
            max_hit_points: i32::MAX,
            current_hit_points: i32::MIN,
            ..CombatantStats::default()
        };
        assert_eq!(odd.missing_hit_points(), i32::MAX);
    }

    #[test]
    fn test_missing_hit_points() {
        let mut stats = CombatantStats::new();
        stats.reduce_hit_points(4);
        assert_eq!(stats.missing_hit_points(), 4);
    }
}
