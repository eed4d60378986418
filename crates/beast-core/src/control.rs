#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::clamp11;

/// One tick of vehicle input.
///
/// Every field is always set; `ControlOutput::NOOP` is the explicit "do nothing" value used
/// before world data is ready and whenever a tick could not produce a usable output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControlOutput {
    pub throttle: f32,
    pub steer: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub jump: bool,
    pub boost: bool,
    pub handbrake: bool,
    pub use_item: bool,
}

impl ControlOutput {
    pub const NOOP: ControlOutput = ControlOutput {
        throttle: 0.0,
        steer: 0.0,
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
        jump: false,
        boost: false,
        handbrake: false,
        use_item: false,
    };

    pub fn is_noop(&self) -> bool {
        *self == Self::NOOP
    }

    /// Clamp every axis into `[-1, 1]`; NaN axes become 0.
    pub fn clamped(mut self) -> Self {
        for axis in [
            &mut self.throttle,
            &mut self.steer,
            &mut self.pitch,
            &mut self.yaw,
            &mut self.roll,
        ] {
            *axis = if axis.is_nan() { 0.0 } else { clamp11(*axis) };
        }
        self
    }

    pub fn with_throttle(mut self, throttle: f32) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn with_steer(mut self, steer: f32) -> Self {
        self.steer = steer;
        self
    }

    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn with_jump(mut self, jump: bool) -> Self {
        self.jump = jump;
        self
    }

    pub fn with_boost(mut self, boost: bool) -> Self {
        self.boost = boost;
        self
    }

    pub fn with_handbrake(mut self, handbrake: bool) -> Self {
        self.handbrake = handbrake;
        self
    }
}
