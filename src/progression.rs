//! Class progression.
//!
//! A combatant walks one or more class tracks. Each track is a set of
//! small and big level-up benefits defined by a [`ClassDefinition`]; the
//! combatant's [`ClassProgress`] remembers which of them it has consumed.
//!
//! ## Rules
//!
//! - A level can be consumed once per combatant.
//! - Big levels are offered only on even small-level counts (0, 2, 4, ...).
//!   A class may force a specific initial big level.
//! - Small levels are drawn uniformly from the ones not yet consumed.
//! - A class is completed after [`RulesConfig::mastery_small_levels`] small
//!   levels, or after all of its small levels if it has fewer. Only a
//!   completed class can be left, and a completed class cannot be
//!   re-entered.
//!
//! ## Example
//!
//! ```rust
//! use tactica::*;
//!
//! let mut small = LevelUpBenefit::new("squire-s1", "squire", BenefitSize::Small).unwrap();
//! small.stats.max_hit_points = 2;
//!
//! let mut squire = ClassDefinition::new("squire", "Squire");
//! squire.levels.push(small);
//!
//! let catalog = ClassCatalog::from_iter([squire]);
//! let engine = ProgressionEngine::new(&catalog);
//!
//! let mut hero = Combatant::new("hero", "Aria", Affiliation::Player);
//! hero.progress.add_class(ClassId::new("squire"));
//! hero.progress.set_current_class(&ClassId::new("squire")).unwrap();
//!
//! let mut rng = RngSource::new(rand::thread_rng());
//! let picked = engine
//!     .select_levels_for_level_up(&hero.progress, &ClassId::new("squire"), None, &mut rng)
//!     .unwrap();
//! let level = picked.small.unwrap();
//! engine.improve(&level, &mut hero).unwrap();
//!
//! assert_eq!(hero.stats.max_hit_points, 7);
//! assert_eq!(engine.class_state(&hero.progress, &ClassId::new("squire")), ClassState::Completed);
//! ```

use crate::benefit::{LevelUpBenefit, StatDeltas};
use crate::combatant::Combatant;
use crate::config::RulesConfig;
use crate::error::{DataError, ProgressionError};
use crate::ids::{ClassId, LevelId};
use crate::random::RandomSource;
use crate::stats::CombatantStats;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// Where a combatant stands in one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassState {
    NotStarted,
    InProgress,
    Completed,
}

/// A class track as defined in game data.
///
/// Deserialized definitions are checked with [`ClassDefinition::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawClassDefinition")]
pub struct ClassDefinition {
    pub id: ClassId,
    pub name: String,
    /// Can only be entered by a combatant that already has a base class.
    #[serde(default)]
    pub base_class_required: bool,
    /// Big level that must be taken before any other big level.
    #[serde(default)]
    pub initial_big_level: Option<LevelId>,
    #[serde(default)]
    pub levels: Vec<LevelUpBenefit>,
}

impl ClassDefinition {
    pub fn new(id: impl Into<ClassId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_class_required: false,
            initial_big_level: None,
            levels: Vec::new(),
        }
    }

    /// Every level must belong to this class and level ids must be unique.
    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = BTreeSet::new();
        for level in &self.levels {
            if level.class_id != self.id {
                return Err(DataError::LevelClassMismatch {
                    level_id: level.level_id.clone(),
                    expected: self.id.clone(),
                    found: level.class_id.clone(),
                });
            }
            if !seen.insert(&level.level_id) {
                return Err(DataError::DuplicateLevel {
                    class_id: self.id.clone(),
                    level_id: level.level_id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Levels tagged with this class. Levels of other classes are never
    /// offered or counted.
    fn own_levels(&self) -> impl Iterator<Item = &LevelUpBenefit> {
        self.levels.iter().filter(|level| level.class_id == self.id)
    }

    pub fn small_levels(&self) -> impl Iterator<Item = &LevelUpBenefit> {
        self.own_levels().filter(|level| level.is_small())
    }

    pub fn big_levels(&self) -> impl Iterator<Item = &LevelUpBenefit> {
        self.own_levels().filter(|level| level.is_big())
    }

    pub fn level(&self, level_id: &LevelId) -> Option<&LevelUpBenefit> {
        self.own_levels().find(|level| &level.level_id == level_id)
    }

    /// Small levels of this class that `progress` has consumed.
    pub fn small_levels_consumed(&self, progress: &ClassProgress) -> usize {
        self.small_levels()
            .filter(|level| progress.is_consumed(&self.id, &level.level_id))
            .count()
    }

    /// Small levels needed to complete this class.
    pub fn small_levels_to_complete(&self, config: &RulesConfig) -> usize {
        self.small_levels().count().min(config.mastery_small_levels)
    }

    pub fn state(&self, progress: &ClassProgress, config: &RulesConfig) -> ClassState {
        if !progress.has_class(&self.id) {
            return ClassState::NotStarted;
        }
        if self.small_levels_consumed(progress) >= self.small_levels_to_complete(config) {
            return ClassState::Completed;
        }
        match progress.consumed_levels(&self.id) {
            Some(levels) if !levels.is_empty() => ClassState::InProgress,
            _ => ClassState::NotStarted,
        }
    }
}

/// A class as it arrives from a data file, before its levels are checked
/// against it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawClassDefinition {
    pub id: ClassId,
    pub name: String,
    #[serde(default)]
    pub base_class_required: bool,
    #[serde(default)]
    pub initial_big_level: Option<LevelId>,
    #[serde(default)]
    pub levels: Vec<LevelUpBenefit>,
}

impl TryFrom<RawClassDefinition> for ClassDefinition {
    type Error = DataError;

    fn try_from(raw: RawClassDefinition) -> Result<Self, Self::Error> {
        let class = ClassDefinition {
            id: raw.id,
            name: raw.name,
            base_class_required: raw.base_class_required,
            initial_big_level: raw.initial_big_level,
            levels: raw.levels,
        };
        class.validate()?;
        Ok(class)
    }
}

/// In-memory lookup of class definitions by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassCatalog {
    classes: BTreeMap<ClassId, ClassDefinition>,
}

impl ClassCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a class definition. Returns the replaced one.
    pub fn insert(&mut self, class: ClassDefinition) -> Option<ClassDefinition> {
        self.classes.insert(class.id.clone(), class)
    }

    pub fn get(&self, class_id: &ClassId) -> Option<&ClassDefinition> {
        self.classes.get(class_id)
    }

    pub fn contains(&self, class_id: &ClassId) -> bool {
        self.classes.contains_key(class_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<ClassDefinition> for ClassCatalog {
    fn from_iter<I: IntoIterator<Item = ClassDefinition>>(iter: I) -> Self {
        let mut catalog = ClassCatalog::new();
        for class in iter {
            catalog.insert(class);
        }
        catalog
    }
}

/// Which classes a combatant has entered and which levels it consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassProgress {
    base_class: Option<ClassId>,
    current_class: Option<ClassId>,
    consumed: BTreeMap<ClassId, BTreeSet<LevelId>>,
}

impl ClassProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first class this combatant ever entered.
    pub fn base_class(&self) -> Option<&ClassId> {
        self.base_class.as_ref()
    }

    pub fn current_class(&self) -> Option<&ClassId> {
        self.current_class.as_ref()
    }

    /// Register a class track. Adding a class twice is a no-op.
    pub fn add_class(&mut self, class_id: ClassId) {
        self.consumed.entry(class_id).or_default();
    }

    pub fn has_class(&self, class_id: &ClassId) -> bool {
        self.consumed.contains_key(class_id)
    }

    /// Registered classes, in id order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassId> {
        self.consumed.keys()
    }

    /// Make `class_id` the current class. The first successful call also
    /// fixes the base class.
    pub fn set_current_class(&mut self, class_id: &ClassId) -> Result<(), ProgressionError> {
        if !self.has_class(class_id) {
            return Err(ProgressionError::UnknownClass(class_id.clone()));
        }
        let previous = self.current_class.replace(class_id.clone());
        self.base_class.get_or_insert_with(|| class_id.clone());
        debug!(
            from = ?previous,
            to = %class_id,
            base = ?self.base_class,
            "current class set"
        );
        Ok(())
    }

    pub fn consumed_levels(&self, class_id: &ClassId) -> Option<&BTreeSet<LevelId>> {
        self.consumed.get(class_id)
    }

    pub fn is_consumed(&self, class_id: &ClassId, level_id: &LevelId) -> bool {
        self.consumed
            .get(class_id)
            .is_some_and(|levels| levels.contains(level_id))
    }

    /// Record a consumed level. Returns `false` if it was already there.
    fn consume(&mut self, class_id: &ClassId, level_id: &LevelId) -> bool {
        let inserted = self
            .consumed
            .entry(class_id.clone())
            .or_default()
            .insert(level_id.clone());
        self.base_class.get_or_insert_with(|| class_id.clone());
        inserted
    }
}

/// Levels offered for one level-up. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelUpSelection {
    pub big: Option<LevelUpBenefit>,
    pub small: Option<LevelUpBenefit>,
}

impl LevelUpSelection {
    pub fn is_empty(&self) -> bool {
        self.big.is_none() && self.small.is_none()
    }

    /// Selected benefits, big level first.
    pub fn benefits(&self) -> impl Iterator<Item = &LevelUpBenefit> {
        self.big.iter().chain(self.small.iter())
    }
}

/// Applies and selects level-up benefits against a class catalog.
#[derive(Debug, Clone)]
pub struct ProgressionEngine<'a> {
    catalog: &'a ClassCatalog,
    config: RulesConfig,
}

impl<'a> ProgressionEngine<'a> {
    pub fn new(catalog: &'a ClassCatalog) -> Self {
        Self::with_config(catalog, RulesConfig::default())
    }

    pub fn with_config(catalog: &'a ClassCatalog, config: RulesConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a ClassCatalog {
        self.catalog
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// State of `class_id` for `progress`. Classes missing from the
    /// catalog are reported as not started.
    pub fn class_state(&self, progress: &ClassProgress, class_id: &ClassId) -> ClassState {
        self.catalog
            .get(class_id)
            .map_or(ClassState::NotStarted, |class| class.state(progress, &self.config))
    }

    /// Whether a combatant with `progress` may switch into `target`.
    pub fn can_switch_to(&self, progress: &ClassProgress, target: &ClassId) -> bool {
        let Some(target_class) = self.catalog.get(target) else {
            return false;
        };

        if progress.base_class().is_none() {
            return !target_class.base_class_required;
        }

        if let Some(current) = progress.current_class() {
            if current == target {
                return false;
            }
            if self.class_state(progress, current) != ClassState::Completed {
                return false;
            }
        }

        target_class.state(progress, &self.config) != ClassState::Completed
    }

    /// Apply a level-up benefit to `combatant`.
    ///
    /// Fails without touching the combatant if the class was never added
    /// or the level was already consumed.
    pub fn improve(
        &self,
        benefit: &LevelUpBenefit,
        combatant: &mut Combatant,
    ) -> Result<(), ProgressionError> {
        check_applicable(benefit, &combatant.progress)?;

        apply_stat_deltas(&mut combatant.stats, &benefit.stats);
        combatant
            .abilities
            .extend(benefit.abilities_gained.iter().cloned());
        for lost in &benefit.abilities_lost {
            combatant.abilities.remove(lost);
        }
        if let Some(movement) = &benefit.movement {
            combatant.movement.improve(movement);
        }
        combatant
            .progress
            .consume(&benefit.class_id, &benefit.level_id);

        debug!(
            combatant = %combatant.id,
            class = %benefit.class_id,
            level = %benefit.level_id,
            size = ?benefit.size,
            "level-up benefit applied"
        );
        Ok(())
    }

    /// Pick the benefits for the next level-up in `class_id`.
    ///
    /// The big level is offered only on an even small-level count: the
    /// class's initial big level if it is still pending, otherwise
    /// `requested_big` if it names an unconsumed big level of the class.
    /// The small level is drawn uniformly from the unconsumed ones.
    /// Nothing is mutated.
    pub fn select_levels_for_level_up<R: RandomSource + ?Sized>(
        &self,
        progress: &ClassProgress,
        class_id: &ClassId,
        requested_big: Option<&LevelId>,
        random: &mut R,
    ) -> Result<LevelUpSelection, ProgressionError> {
        let class = self
            .catalog
            .get(class_id)
            .ok_or_else(|| ProgressionError::UnknownClass(class_id.clone()))?;
        let is_open =
            |level: &&LevelUpBenefit| !progress.is_consumed(class_id, &level.level_id);

        let big = if class.small_levels_consumed(progress) % 2 == 0 {
            let forced = class
                .initial_big_level
                .as_ref()
                .and_then(|initial| class.big_levels().filter(is_open).find(|l| &l.level_id == initial));
            forced
                .or_else(|| {
                    requested_big.and_then(|requested| {
                        class
                            .big_levels()
                            .filter(is_open)
                            .find(|l| &l.level_id == requested)
                    })
                })
                .cloned()
        } else {
            None
        };

        let candidates: Vec<&LevelUpBenefit> = class.small_levels().filter(is_open).collect();
        let small = if candidates.is_empty() {
            None
        } else {
            let pick = random.next(candidates.len()) % candidates.len();
            Some(candidates[pick].clone())
        };

        trace!(
            class = %class_id,
            big = ?big.as_ref().map(|l| &l.level_id),
            small = ?small.as_ref().map(|l| &l.level_id),
            remaining_small = candidates.len(),
            "levels selected"
        );
        Ok(LevelUpSelection { big, small })
    }

    /// Select and immediately apply a level-up in `class_id`.
    ///
    /// Fails before selecting anything if the combatant never added the
    /// class. Every selected benefit is checked before any is applied, so
    /// an error leaves the combatant untouched.
    pub fn level_up<R: RandomSource + ?Sized>(
        &self,
        combatant: &mut Combatant,
        class_id: &ClassId,
        requested_big: Option<&LevelId>,
        random: &mut R,
    ) -> Result<LevelUpSelection, ProgressionError> {
        if !combatant.progress.has_class(class_id) {
            return Err(ProgressionError::UnknownClass(class_id.clone()));
        }
        let selection =
            self.select_levels_for_level_up(&combatant.progress, class_id, requested_big, random)?;
        let benefits: Vec<&LevelUpBenefit> = selection.benefits().collect();
        for (i, benefit) in benefits.iter().enumerate() {
            check_applicable(benefit, &combatant.progress)?;
            let repeated = benefits[..i].iter().any(|earlier| {
                earlier.class_id == benefit.class_id && earlier.level_id == benefit.level_id
            });
            if repeated {
                return Err(already_consumed(benefit));
            }
        }
        for benefit in benefits {
            self.improve(benefit, combatant)?;
        }
        Ok(selection)
    }
}

fn check_applicable(
    benefit: &LevelUpBenefit,
    progress: &ClassProgress,
) -> Result<(), ProgressionError> {
    if !progress.has_class(&benefit.class_id) {
        return Err(ProgressionError::UnknownClass(benefit.class_id.clone()));
    }
    if progress.is_consumed(&benefit.class_id, &benefit.level_id) {
        return Err(already_consumed(benefit));
    }
    Ok(())
}

fn already_consumed(benefit: &LevelUpBenefit) -> ProgressionError {
    ProgressionError::LevelAlreadyConsumed {
        class_id: benefit.class_id.clone(),
        level_id: benefit.level_id.clone(),
    }
}

fn apply_stat_deltas(stats: &mut CombatantStats, deltas: &StatDeltas) {
    stats.adjust_max_hit_points(deltas.max_hit_points);
    stats.adjust_max_barrier(deltas.max_barrier);
    stats.aim = stats.aim.saturating_add(deltas.aim);
    stats.strength = stats.strength.saturating_add(deltas.strength);
    stats.mind = stats.mind.saturating_add(deltas.mind);
    stats.dodge = stats.dodge.saturating_add(deltas.dodge);
    stats.deflect = stats.deflect.saturating_add(deltas.deflect);
    stats.armor = stats.armor.saturating_add(deltas.armor);
}
