//! Skirmish example: one exchange of blows
//!
//! This example demonstrates:
//! - Validating abilities loaded from JSON
//! - Checking target legality
//! - Reading a damage summary and applying a rolled outcome

use rand::Rng;
use tactica::*;

const ABILITIES: &str = r#"[
    { "id": "slash", "name": "Slash", "power_type": "Physical",
      "targets": { "foe": true },
      "attack": { "damage_bonus": 3, "can_counter_attack": true,
                  "critical": { "critical_hit_threshold_bonus": 1 } } },
    { "id": "scorch", "name": "Scorch", "power_type": "Spell",
      "targets": { "foe": true },
      "attack": { "damage_bonus": 2, "extra_barrier_burn": 2 } },
    { "id": "mind_blast", "name": "Mind Blast", "power_type": "Psychic" }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let definitions: Vec<AbilityDefinition> = serde_json::from_str(ABILITIES)?;
    let mut abilities = Vec::new();
    for definition in definitions {
        let name = definition.name.clone();
        match Ability::try_from(definition) {
            Ok(ability) => abilities.push(ability),
            Err(err) => println!("Rejected {name}: {err}"),
        }
    }

    let mut hero = Combatant::new("hero", "Aria", Affiliation::Player);
    hero.stats.strength = 2;
    hero.stats.aim = 3;
    hero.stats.mind = 1;

    let mut warden = Combatant::new("warden", "Warden", Affiliation::Enemy);
    warden.stats.max_hit_points = 12;
    warden.stats.current_hit_points = 12;
    warden.stats.max_barrier = 3;
    warden.stats.armor = 1;
    warden.stats.dodge = 2;
    warden.stats.restore_barrier();

    let config = RulesConfig::default();
    let mut rng = rand::thread_rng();

    for ability in &abilities {
        println!("\n=== {} ===", ability.name);
        let legality = check_target(&hero, &warden, ability);
        if !legality.is_valid() {
            println!("Illegal target: {legality:?}");
            continue;
        }

        let Some(summary) = resolve_ability(ability, &hero, &warden, &config) else {
            continue;
        };
        println!("Chance to hit:   {:.0}%", summary.chance_to_hit * 100.0);
        println!("Chance to crit:  {:.0}%", summary.chance_to_crit * 100.0);
        println!("Expected damage: {:.2}", summary.expected_health_damage);

        let roll = rng.gen_range(1..=config.attack_die_sides as i32);
        let outcome = summary.classify_roll(roll);
        println!("Rolled {roll}: {outcome:?}");
        if let Some(damage) = summary.damage_for(outcome) {
            println!(
                "  barrier -{} (burn -{}), health -{}",
                damage.barrier_damage, damage.extra_barrier_damage, damage.health_damage
            );
            damage.apply_to(&mut warden.stats);
        }
        println!(
            "Warden: {}/{} HP, {}/{} barrier",
            warden.stats.current_hit_points,
            warden.stats.max_hit_points,
            warden.stats.current_barrier,
            warden.stats.max_barrier
        );
    }

    if let Some(slash) = abilities.first() {
        match resolve_counter_attack(slash, &warden, &hero, &config) {
            Ok(counter) => println!("\nCounter to-hit total: {}", counter.to_hit_total),
            Err(err) => println!("\nNo counter: {err}"),
        }
    }

    Ok(())
}
