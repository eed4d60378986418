use beast_core::{ControlOutput, ExecError, Maneuver, ManeuverKey, WorldState};

use crate::dodge::DodgeManeuver;
use crate::drive::DriveController;

pub const KICKOFF: ManeuverKey = ManeuverKey("kickoff");

/// Give up on the kickoff after this long (s), even if the phase has not changed.
const KICKOFF_TIMEOUT: f32 = 3.0;
const KICKOFF_SPEED: f32 = 2300.0;

/// Picks the maneuver to run when a kickoff is detected.
pub trait KickoffSelector: 'static {
    fn choose(&self, world: &WorldState) -> Box<dyn Maneuver>;
}

impl<F> KickoffSelector for F
where
    F: Fn(&WorldState) -> Box<dyn Maneuver> + 'static,
{
    fn choose(&self, world: &WorldState) -> Box<dyn Maneuver> {
        self(world)
    }
}

/// Drive straight at the ball on full boost and dodge into it.
#[derive(Debug, Clone, Copy)]
pub struct DefaultKickoff {
    pub dodge_distance: f32,
}

impl KickoffSelector for DefaultKickoff {
    fn choose(&self, _world: &WorldState) -> Box<dyn Maneuver> {
        Box::new(KickoffManeuver::new(self.dodge_distance))
    }
}

#[derive(Debug, Clone)]
pub struct KickoffManeuver {
    drive: DriveController,
    dodge_distance: f32,
    started: Option<f32>,
    dodge: Option<DodgeManeuver>,
    done: bool,
}

impl KickoffManeuver {
    pub fn new(dodge_distance: f32) -> Self {
        Self {
            drive: DriveController::default(),
            dodge_distance,
            started: None,
            dodge: None,
            done: false,
        }
    }

    pub fn is_dodging(&self) -> bool {
        self.dodge.is_some()
    }

    fn approach(&self, world: &WorldState) -> ControlOutput {
        self.drive
            .steer_towards(world, world.ball.position.xy(), KICKOFF_SPEED, false, true)
            .with_boost(true)
    }
}

impl Maneuver for KickoffManeuver {
    fn key(&self) -> ManeuverKey {
        KICKOFF
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn is_kickoff(&self) -> bool {
        true
    }

    fn exec(&mut self, world: &WorldState) -> Result<ControlOutput, ExecError> {
        // A started dodge always runs to completion.
        if let Some(dodge) = self.dodge.as_mut() {
            let out = dodge.exec(world)?;
            if dodge.is_done() {
                self.done = true;
            }
            return Ok(out);
        }

        let started = *self.started.get_or_insert(world.time);
        if !world.is_kickoff || world.time - started > KICKOFF_TIMEOUT {
            // Someone touched the ball before we got there, or we never did.
            self.done = true;
            return Ok(self.approach(world));
        }

        let ball = world.ball.position;
        if world.my_car.position.xy().dist(ball.xy()) < self.dodge_distance {
            let mut dodge = DodgeManeuver::new(ball);
            let out = dodge.exec(world)?;
            self.dodge = Some(dodge);
            return Ok(out);
        }

        Ok(self.approach(world))
    }
}
