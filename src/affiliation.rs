//! Faction relations between combatants.

use serde::{Deserialize, Serialize};

/// A combatant's faction tag.
///
/// # Examples
///
/// ```rust
/// use tactica::Affiliation;
///
/// assert!(Affiliation::Player.is_friend(Affiliation::Ally));
/// assert!(Affiliation::Enemy.is_foe(Affiliation::Ally));
///
/// // Neutral things (scenery hazards, breakable walls) are hostile to
/// // everything, each other included.
/// assert!(!Affiliation::Neutral.is_friend(Affiliation::Neutral));
/// assert!(Affiliation::Neutral.is_foe(Affiliation::Neutral));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affiliation {
    Player,
    Ally,
    Enemy,
    Neutral,
}

impl Affiliation {
    pub const ALL: [Affiliation; 4] = [
        Affiliation::Player,
        Affiliation::Ally,
        Affiliation::Enemy,
        Affiliation::Neutral,
    ];

    /// Whether `self` and `other` fight on the same side.
    pub fn is_friend(self, other: Affiliation) -> bool {
        use Affiliation::*;
        match (self, other) {
            (Player | Ally, Player | Ally) => true,
            (Enemy, Enemy) => true,
            _ => false,
        }
    }

    /// Whether `self` may treat `other` as hostile.
    ///
    /// Anything involving `Neutral` is a foe, including `Neutral` against
    /// itself. For every other pair this is the negation of [`is_friend`].
    ///
    /// [`is_friend`]: Affiliation::is_friend
    pub fn is_foe(self, other: Affiliation) -> bool {
        if self == Affiliation::Neutral || other == Affiliation::Neutral {
            return true;
        }
        !self.is_friend(other)
    }
}

/// Free-function form of [`Affiliation::is_friend`].
pub fn is_friend(a: Affiliation, b: Affiliation) -> bool {
    a.is_friend(b)
}

/// Free-function form of [`Affiliation::is_foe`].
pub fn is_foe(a: Affiliation, b: Affiliation) -> bool {
    a.is_foe(b)
}
