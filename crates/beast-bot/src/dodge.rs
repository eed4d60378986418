use beast_core::{ControlOutput, ExecError, Maneuver, ManeuverKey, Vec3, WorldState};

use crate::drive::yaw_error;

pub const DODGE: ManeuverKey = ManeuverKey("dodge");

/// First jump is held this long (s).
const JUMP_END: f32 = 0.10;
/// Jump released until this time, so the second press registers as a dodge.
const RELEASE_END: f32 = 0.15;
/// Second jump with pitch input held until this time.
const FLIP_END: f32 = 0.25;
/// Time from the first jump until the car is considered recovered.
const DODGE_DURATION: f32 = 0.65;

/// Timed jump + forward flip toward a target.
///
/// The timeline starts on the first `exec`. `is_done` flips once the recovery window has
/// passed.
#[derive(Debug, Clone)]
pub struct DodgeManeuver {
    target: Vec3,
    started: Option<f32>,
    done: bool,
}

impl DodgeManeuver {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            started: None,
            done: false,
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn elapsed(&self, world: &WorldState) -> f32 {
        self.started.map_or(0.0, |t| (world.time - t).max(0.0))
    }
}

impl Maneuver for DodgeManeuver {
    fn key(&self) -> ManeuverKey {
        DODGE
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn exec(&mut self, world: &WorldState) -> Result<ControlOutput, ExecError> {
        if self.started.is_none() {
            self.started = Some(world.time);
        }
        let t = self.elapsed(world);

        let mut out = ControlOutput::NOOP.with_throttle(1.0);
        if t < JUMP_END {
            out.jump = true;
        } else if t < RELEASE_END {
            out.jump = false;
        } else if t < FLIP_END {
            // Forward flip, yawed toward the target.
            out.jump = true;
            out.pitch = -1.0;
            out.yaw = yaw_error(world, self.target);
        }

        if t >= DODGE_DURATION {
            self.done = true;
        }
        Ok(out.clamped())
    }
}
