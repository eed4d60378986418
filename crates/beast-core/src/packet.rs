//! Raw per-tick input as delivered by the game.
//!
//! A packet may be incomplete (no field info yet, no ball in play). Use
//! [`WorldState::from_packet`](crate::WorldState::from_packet) to validate it before deciding.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ControlOutput, Rotator, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatchPhase {
    #[default]
    Inactive,
    Countdown,
    Kickoff,
    Active,
    GoalScored,
    Replay,
    Paused,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarState {
    pub team: u8,
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Rotator,
    pub boost: f32,
    pub on_ground: bool,
    /// Input applied on the previous tick, fed back by the caller.
    pub last_input: ControlOutput,
}

impl CarState {
    pub fn forward(&self) -> Vec3 {
        self.rotation.forward()
    }

    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BallState {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Static field geometry; only the goal centres are needed by the decision core.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldInfo {
    pub blue_goal: Vec3,
    pub orange_goal: Vec3,
}

impl Default for FieldInfo {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl FieldInfo {
    /// Goal centres of the standard soccar arena.
    pub const STANDARD: FieldInfo = FieldInfo {
        blue_goal: Vec3::new(0.0, -5120.0, 0.0),
        orange_goal: Vec3::new(0.0, 5120.0, 0.0),
    };
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GamePacket {
    pub tick: u64,
    pub time: f32,
    pub match_phase: MatchPhase,
    pub cars: Vec<CarState>,
    pub ball: Option<BallState>,
    pub field: Option<FieldInfo>,
}
