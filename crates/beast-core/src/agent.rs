use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of one controlled car.
///
/// `index` addresses the car in [`GamePacket::cars`](crate::GamePacket); `team` is 0 (blue) or
/// 1 (orange). Used to pick our goals and in every diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentId {
    pub index: usize,
    pub team: u8,
}

impl AgentId {
    pub const fn new(index: usize, team: u8) -> Self {
        Self { index, team }
    }

    pub fn is_blue(self) -> bool {
        self.team == 0
    }

    /// Sign of our own goal's y coordinate.
    pub fn team_sign(self) -> f32 {
        if self.is_blue() {
            -1.0
        } else {
            1.0
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{} t{}", self.index, self.team)
    }
}
