//! Level-up example: a recruit's career
//!
//! This example demonstrates:
//! - Building a class catalog
//! - Levelling up with an injected random source
//! - Class-switch eligibility

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tactica::*;

fn track(id: &str, smalls: usize, base_class_required: bool) -> Result<ClassDefinition, DataError> {
    let mut class = ClassDefinition::new(id, id);
    class.base_class_required = base_class_required;
    for i in 0..smalls {
        let mut level = LevelUpBenefit::new(format!("{id}-s{i}").as_str(), id, BenefitSize::Small)?;
        level.stats.max_hit_points = 1;
        level.stats.strength = (i % 2) as i32;
        class.levels.push(level);
    }
    let mut big = LevelUpBenefit::new(format!("{id}-b0").as_str(), id, BenefitSize::Big)?;
    big.stats.armor = 1;
    big.abilities_gained.push(AbilityId::new(&format!("{id}-technique")));
    class.initial_big_level = Some(big.level_id.clone());
    class.levels.push(big);
    Ok(class)
}

fn main() -> Result<(), RulesError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let catalog = ClassCatalog::from_iter([track("squire", 4, false)?, track("knight", 6, true)?]);
    let engine = ProgressionEngine::new(&catalog);
    let mut random = RngSource::new(ChaCha8Rng::seed_from_u64(2024));

    let squire = ClassId::new("squire");
    let knight = ClassId::new("knight");
    let mut recruit = Combatant::new("recruit", "Recruit", Affiliation::Player);

    println!("Can become knight now? {}", engine.can_switch_to(&recruit.progress, &knight));

    recruit.progress.add_class(squire.clone());
    recruit.progress.set_current_class(&squire)?;

    while engine.class_state(&recruit.progress, &squire) != ClassState::Completed {
        let selection = engine.level_up(&mut recruit, &squire, None, &mut random)?;
        let names: Vec<&str> = selection.benefits().map(|l| l.level_id.as_str()).collect();
        println!("Squire level-up: {}", names.join(", "));
    }

    println!("Can become knight now? {}", engine.can_switch_to(&recruit.progress, &knight));
    recruit.progress.add_class(knight.clone());
    recruit.progress.set_current_class(&knight)?;

    println!("\n=== Recruit ===");
    println!("Base class: {:?}", recruit.progress.base_class().map(ClassId::as_str));
    println!("Max HP: {}", recruit.stats.max_hit_points);
    println!("Strength: {}", recruit.stats.strength);
    println!("Armor: {}", recruit.stats.armor);
    for ability in &recruit.abilities {
        println!("Knows: {ability}");
    }

    Ok(())
}
