//! Tunable rule parameters.
//!
//! `RulesConfig` is passed explicitly to the engines that need it. The
//! core does not read environment variables or files; callers that keep
//! balance values in a data file can deserialize this struct from it.

use serde::{Deserialize, Serialize};

/// Balance parameters for attack rolls and class mastery.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Examples
///
/// ```rust
/// use tactica::RulesConfig;
///
/// let config = RulesConfig::from_json(r#"{ "hit_target": 12 }"#).unwrap();
/// assert_eq!(config.hit_target, 12);
/// assert_eq!(config.attack_die_sides, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Number of faces on the attack die. Rolls are `1..=attack_die_sides`.
    pub attack_die_sides: u32,

    /// Base number an attack roll has to reach, before the defender's
    /// dodge or deflect is added.
    pub hit_target: i32,

    /// Small levels after which a class counts as completed, even if it
    /// defines more.
    pub mastery_small_levels: usize,
}

impl RulesConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            attack_die_sides: 20,
            hit_target: 10,
            mastery_small_levels: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();
        assert_eq!(config.attack_die_sides, 20);
        assert_eq!(config.hit_target, 10);
        assert_eq!(config.mastery_small_levels, 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = RulesConfig::from_json(r#"{ "mastery_small_levels": 4 }"#).unwrap();
        assert_eq!(config.mastery_small_levels, 4);
        assert_eq!(config.attack_die_sides, 20);
    }

    #[test]
    fn test_invalid_json() {
        assert!(RulesConfig::from_json("{ not json").is_err());
    }
}
