//! # tactica - Deterministic Tactics-Combat Rules Engine
//!
//! The rules core of a turn-based tactics game:
//! - **Targeting**: may this ability be aimed at that unit?
//! - **Damage**: to-hit figures, critical hits, and how damage is split
//!   between barrier, extra barrier burn, armor and health
//! - **Healing**: mind-scaled restoration capped at missing hit points
//! - **Progression**: small/big level-ups along class tracks, and when a
//!   unit may switch class
//!
//! ## Core Concepts
//!
//! ### Combat Pipeline
//!
//! ```text
//! [Ability] + [Combatant] x2 → check_legality → resolve_attack → DamageSummary → apply_to(stats)
//! ```
//!
//! 1. **Legality** gates the action on affiliation, self-targeting and liveness
//! 2. **Resolution** computes every number without touching any state
//! 3. **Application** is done by the caller through clamp-safe stat operations
//!
//! ### Determinism
//!
//! Every operation is a pure function of its inputs or a direct mutation of
//! a record the caller owns. The only randomness (small-level selection) comes
//! from a [`RandomSource`] the caller passes in.
//!
//! ## Example
//!
//! ```rust
//! use tactica::*;
//!
//! let mut hero = Combatant::new("hero", "Aria", Affiliation::Player);
//! hero.stats.strength = 1;
//! let mut goblin = Combatant::new("goblin", "Goblin", Affiliation::Enemy);
//!
//! let mut slash = Ability::new("slash", "Slash", PowerType::Physical, Targeting::FOE);
//! slash.attack = Some(AttackEffect { damage_bonus: 3, ..Default::default() });
//!
//! assert_eq!(check_target(&hero, &goblin, &slash), LegalityResult::Valid);
//!
//! let summary = resolve_ability(&slash, &hero, &goblin, &RulesConfig::default()).unwrap();
//! assert_eq!(summary.normal.health_damage, 4);
//!
//! if let Some(damage) = summary.damage_for(summary.classify_roll(12)) {
//!     damage.apply_to(&mut goblin.stats);
//! }
//! assert_eq!(goblin.stats.current_hit_points, 1);
//! ```
//!
//! ## Modules
//!
//! - [`affiliation`] - Faction relations
//! - [`targeting`] - Target legality
//! - [`stats`] - Combatant numbers and the [`StatView`] trait
//! - [`damage`] - Damage resolution and mitigation
//! - [`healing`] - Healing resolution
//! - [`ability`] - Ability and effect records
//! - [`benefit`] - Level-up benefit records
//! - [`movement`] - Movement and its upgrade rule
//! - [`combatant`] - The combatant entity
//! - [`progression`] - Class tracks and level-ups
//! - [`random`] - Injected randomness
//! - [`config`] - Balance parameters
//! - [`ids`] - Identifier types
//! - [`error`] - Error types

pub mod ability;
pub mod affiliation;
pub mod benefit;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod error;
pub mod healing;
pub mod ids;
pub mod movement;
pub mod progression;
pub mod random;
pub mod stats;
pub mod targeting;

// Re-export main types for convenience
pub use ability::{
    Ability, AbilityDefinition, AttackEffect, CriticalEffect, HealingEffect, MindScaling,
    PowerType, Targeting,
};
pub use affiliation::{is_foe, is_friend, Affiliation};
pub use benefit::{BenefitSize, LevelUpBenefit, LevelUpBenefitDefinition, StatDeltas};
pub use combatant::Combatant;
pub use config::RulesConfig;
pub use damage::{
    mitigate, resolve_ability, resolve_attack, resolve_counter_attack, AttackOutcome,
    DamageSummary, Mitigation,
};
pub use error::{CombatError, DataError, ProgressionError, RulesError};
pub use healing::{resolve_ability_heal, resolve_heal, HealSummary};
pub use ids::{AbilityId, ClassId, CombatantId, LevelId};
pub use movement::{Movement, MovementImprovement, MovementType};
pub use progression::{
    ClassCatalog, ClassDefinition, ClassProgress, ClassState, LevelUpSelection, ProgressionEngine,
    RawClassDefinition,
};
pub use random::{RandomSource, RngSource};
pub use stats::{CombatantStats, StatView};
pub use targeting::{check_legality, check_target, LegalityResult};
