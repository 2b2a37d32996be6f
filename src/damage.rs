//! Damage resolution.
//!
//! Turns an attack, the attacker's numbers and the defender's numbers into
//! a [`DamageSummary`]: to-hit figures, hit and crit chances, and how the
//! damage pool is split between barrier, extra barrier burn and health.
//! Nothing is mutated here; callers apply a [`Mitigation`] to the
//! defender's stats once the roll is known.
//!
//! ```text
//! pool ─► barrier ─► extra barrier burn (Spell) ─► armor (Physical) ─► health
//! ```

use crate::ability::{Ability, AttackEffect, PowerType};
use crate::config::RulesConfig;
use crate::error::CombatError;
use crate::stats::{CombatantStats, StatView};
use serde::{Deserialize, Serialize};

/// Result of an attack roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackOutcome {
    Miss,
    Hit,
    Critical,
}

/// How one damage pool is absorbed by the defender.
///
/// # Examples
///
/// ```rust
/// use tactica::{mitigate, CombatantStats, PowerType};
///
/// let defender = CombatantStats { armor: 3, ..CombatantStats::default() };
/// let result = mitigate(4, PowerType::Physical, 0, &defender);
/// assert_eq!(result.barrier_damage, 0);
/// assert_eq!(result.health_damage, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Mitigation {
    /// Damage before any mitigation.
    pub pool: i32,
    /// Part of the pool absorbed by the barrier.
    pub barrier_damage: i32,
    /// Barrier burned on top of the pool. Never reaches health.
    pub extra_barrier_damage: i32,
    /// Damage left for hit points after barrier and armor.
    pub health_damage: i32,
}

impl Mitigation {
    /// Barrier lost in total.
    pub fn total_barrier_damage(&self) -> i32 {
        self.barrier_damage.saturating_add(self.extra_barrier_damage)
    }

    /// Apply this damage to the defender's stats.
    pub fn apply_to(&self, stats: &mut CombatantStats) {
        stats.reduce_barrier(self.total_barrier_damage());
        stats.reduce_hit_points(self.health_damage);
    }
}

/// Split a damage pool across the defender's barrier and armor.
///
/// The order is fixed: the barrier absorbs first, a Spell's extra burn
/// then eats whatever barrier is left, and finally armor reduces what
/// remains of a Physical pool. Spells ignore armor.
pub fn mitigate(
    pool: i32,
    power_type: PowerType,
    extra_barrier_burn: i32,
    defender: &(impl StatView + ?Sized),
) -> Mitigation {
    let pool = pool.max(0);
    let barrier = defender.current_barrier().max(0);

    let barrier_damage = barrier.min(pool);
    let remaining_pool = pool - barrier_damage;
    let remaining_barrier = barrier - barrier_damage;

    let extra_barrier_damage = match power_type {
        PowerType::Spell => remaining_barrier.min(extra_barrier_burn.max(0)),
        PowerType::Physical => 0,
    };

    let health_damage = match power_type {
        PowerType::Physical => remaining_pool.saturating_sub(defender.armor()).max(0),
        PowerType::Spell => remaining_pool,
    };

    Mitigation {
        pool,
        barrier_damage,
        extra_barrier_damage,
        health_damage,
    }
}

/// Everything known about an attack before the die is rolled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageSummary {
    pub power_type: PowerType,

    /// Attacker aim plus the attack's to-hit bonus (and counter penalty).
    pub to_hit_total: i32,
    /// Defender dodge (Physical) or deflect (Spell).
    pub to_hit_penalty: i32,
    /// Number the die roll plus `to_hit_total` must reach, before the penalty.
    pub hit_target: i32,
    pub attack_die_sides: u32,

    /// Attack damage bonus plus strength (Physical) or mind (Spell).
    pub damage_bonus: i32,
    /// Twice `damage_bonus`, before mitigation.
    pub critical_damage_bonus: i32,
    /// Margin to exceed for a crit, if the attack can crit at all.
    pub critical_hit_threshold: Option<i32>,

    /// Probability in `[0, 1]` that the attack connects.
    pub chance_to_hit: f64,
    /// Probability in `[0, 1]` that the attack crits.
    pub chance_to_crit: f64,

    /// Damage split on a normal hit.
    pub normal: Mitigation,
    /// Damage split on a critical hit.
    pub critical: Option<Mitigation>,

    /// Health damage averaged over every face of the die.
    pub expected_health_damage: f64,
}

impl DamageSummary {
    /// How far `roll` lands above (or below) what was needed to hit.
    pub fn margin(&self, roll: i32) -> i32 {
        roll.saturating_add(self.to_hit_total)
            .saturating_sub(self.hit_target.saturating_add(self.to_hit_penalty))
    }

    /// Classify a die roll. Rolls outside the die are classified as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tactica::{resolve_attack, AttackEffect, AttackOutcome, CombatantStats, PowerType, RulesConfig};
    ///
    /// let attacker = CombatantStats::default();
    /// let defender = CombatantStats::default();
    /// let effect = AttackEffect { damage_bonus: 2, ..Default::default() };
    /// let summary = resolve_attack(&effect, PowerType::Physical, &attacker, &defender, &RulesConfig::default());
    ///
    /// assert_eq!(summary.classify_roll(9), AttackOutcome::Miss);
    /// assert_eq!(summary.classify_roll(10), AttackOutcome::Hit);
    /// // No critical effect: even a perfect roll is a plain hit.
    /// assert_eq!(summary.classify_roll(20), AttackOutcome::Hit);
    /// ```
    pub fn classify_roll(&self, roll: i32) -> AttackOutcome {
        let margin = self.margin(roll);
        if margin < 0 {
            return AttackOutcome::Miss;
        }
        match self.critical_hit_threshold {
            Some(threshold) if margin > threshold => AttackOutcome::Critical,
            _ => AttackOutcome::Hit,
        }
    }

    /// Damage split for an outcome; `None` on a miss.
    pub fn damage_for(&self, outcome: AttackOutcome) -> Option<&Mitigation> {
        match outcome {
            AttackOutcome::Miss => None,
            AttackOutcome::Hit => Some(&self.normal),
            AttackOutcome::Critical => self.critical.as_ref().or(Some(&self.normal)),
        }
    }
}

/// Resolve an attack effect between two combatants.
///
/// # Examples
///
/// ```rust
/// use tactica::{resolve_attack, AttackEffect, CombatantStats, PowerType, RulesConfig};
///
/// let attacker = CombatantStats { strength: 1, ..CombatantStats::default() };
/// let defender = CombatantStats { max_barrier: 4, current_barrier: 1, ..CombatantStats::default() };
/// let effect = AttackEffect { damage_bonus: 3, ..Default::default() };
///
/// let summary = resolve_attack(&effect, PowerType::Physical, &attacker, &defender, &RulesConfig::default());
/// assert_eq!(summary.damage_bonus, 4);
/// assert_eq!(summary.normal.barrier_damage, 1);
/// assert_eq!(summary.normal.health_damage, 3);
/// ```
pub fn resolve_attack(
    effect: &AttackEffect,
    power_type: PowerType,
    attacker: &(impl StatView + ?Sized),
    defender: &(impl StatView + ?Sized),
    config: &RulesConfig,
) -> DamageSummary {
    resolve_with_modifier(effect, power_type, attacker, defender, config, 0)
}

/// Resolve an ability's attack, or `None` if the ability has no attack.
pub fn resolve_ability(
    ability: &Ability,
    attacker: &(impl StatView + ?Sized),
    defender: &(impl StatView + ?Sized),
    config: &RulesConfig,
) -> Option<DamageSummary> {
    ability
        .attack
        .as_ref()
        .map(|effect| resolve_attack(effect, ability.power_type, attacker, defender, config))
}

/// Resolve a counter-attack with `ability`; the counter penalty is folded
/// into the to-hit total.
pub fn resolve_counter_attack(
    ability: &Ability,
    attacker: &(impl StatView + ?Sized),
    defender: &(impl StatView + ?Sized),
    config: &RulesConfig,
) -> Result<DamageSummary, CombatError> {
    let penalty = ability.counter_attack_penalty()?;
    let effect = ability
        .attack
        .as_ref()
        .ok_or_else(|| CombatError::CannotCounter(ability.id.clone()))?;
    Ok(resolve_with_modifier(
        effect,
        ability.power_type,
        attacker,
        defender,
        config,
        penalty,
    ))
}

fn resolve_with_modifier(
    effect: &AttackEffect,
    power_type: PowerType,
    attacker: &(impl StatView + ?Sized),
    defender: &(impl StatView + ?Sized),
    config: &RulesConfig,
    to_hit_modifier: i32,
) -> DamageSummary {
    let to_hit_total = attacker
        .aim()
        .saturating_add(effect.to_hit_bonus)
        .saturating_add(to_hit_modifier);
    let (to_hit_penalty, scaling_stat) = match power_type {
        PowerType::Physical => (defender.dodge(), attacker.strength()),
        PowerType::Spell => (defender.deflect(), attacker.mind()),
    };

    let damage_bonus = effect.damage_bonus.saturating_add(scaling_stat);
    let critical_damage_bonus = damage_bonus.saturating_mul(2);

    let normal = mitigate(damage_bonus, power_type, effect.extra_barrier_burn, defender);
    let critical = effect.critical.map(|crit| {
        mitigate(
            critical_damage_bonus.saturating_add(crit.extra_critical_damage),
            power_type,
            effect.extra_barrier_burn,
            defender,
        )
    });

    let mut summary = DamageSummary {
        power_type,
        to_hit_total,
        to_hit_penalty,
        hit_target: config.hit_target,
        attack_die_sides: config.attack_die_sides,
        damage_bonus,
        critical_damage_bonus,
        critical_hit_threshold: effect.critical.map(|crit| crit.critical_hit_threshold()),
        chance_to_hit: 0.0,
        chance_to_crit: 0.0,
        normal,
        critical,
        expected_health_damage: 0.0,
    };
    summary.fill_expectations();
    summary
}

impl DamageSummary {
    /// Enumerate every face of the attack die to fill in chances and the
    /// expected damage.
    fn fill_expectations(&mut self) {
        let sides = self.attack_die_sides;
        if sides == 0 {
            return;
        }

        let (mut hits, mut crits, mut damage) = (0u32, 0u32, 0i64);
        for roll in 1..=sides {
            let outcome = self.classify_roll(roll as i32);
            match outcome {
                AttackOutcome::Miss => {}
                AttackOutcome::Hit => hits += 1,
                AttackOutcome::Critical => {
                    hits += 1;
                    crits += 1;
                }
            }
            if let Some(mitigation) = self.damage_for(outcome) {
                damage = damage.saturating_add(i64::from(mitigation.health_damage));
            }
        }

        let faces = f64::from(sides);
        self.chance_to_hit = f64::from(hits) / faces;
        self.chance_to_crit = f64::from(crits) / faces;
        self.expected_health_damage = damage as f64 / faces;
    }
}
