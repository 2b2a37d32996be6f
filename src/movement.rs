//! Movement capabilities and the upgrade rule applied on level-up.

use serde::{Deserialize, Serialize};

/// How a combatant moves across the map.
///
/// The variants are totally ordered: `Foot < Light < Fly < Teleport`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MovementType {
    #[default]
    Foot,
    Light,
    Fly,
    Teleport,
}

impl MovementType {
    /// Position in the upgrade order.
    pub fn rank(self) -> u8 {
        match self {
            MovementType::Foot => 0,
            MovementType::Light => 1,
            MovementType::Fly => 2,
            MovementType::Teleport => 3,
        }
    }
}

impl PartialOrd for MovementType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MovementType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// A combatant's movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Movement {
    pub distance: i32,
    /// May keep moving after attacking.
    pub hit_and_run: bool,
    pub kind: MovementType,
}

/// Movement change granted by a level-up benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementImprovement {
    pub distance: i32,
    pub hit_and_run: bool,
    pub kind: Option<MovementType>,
}

impl Movement {
    /// Apply an improvement. Distance adds, hit-and-run is sticky, and the
    /// movement type only ever moves up the order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tactica::{Movement, MovementImprovement, MovementType};
    ///
    /// let mut movement = Movement { distance: 4, hit_and_run: false, kind: MovementType::Fly };
    /// movement.improve(&MovementImprovement {
    ///     distance: 1,
    ///     hit_and_run: true,
    ///     kind: Some(MovementType::Light),
    /// });
    /// assert_eq!(movement.distance, 5);
    /// assert!(movement.hit_and_run);
    /// assert_eq!(movement.kind, MovementType::Fly);
    /// ```
    pub fn improve(&mut self, improvement: &MovementImprovement) {
        self.distance = self.distance.saturating_add(improvement.distance);
        self.hit_and_run |= improvement.hit_and_run;
        if let Some(kind) = improvement.kind {
            if kind > self.kind {
                self.kind = kind;
            }
        }
    }
}
