use beast_core::{Exec, ExecError, ScoreError, WorldState};
use beast_utility::{Choice, ChoiceKey};

use crate::config::BotConfig;
use crate::drive::DriveController;

pub const SAVE_GOAL: ChoiceKey = ChoiceKey("save_goal");

/// Beyond this ball-to-goal distance the threat is ignored.
const THREAT_RANGE: f32 = 5000.0;
const MAX_UTILITY: f32 = 0.9;

/// Get to the ball when it is on our half and heading for our goal.
#[derive(Debug, Clone)]
pub struct SaveGoal {
    drive: DriveController,
    chase_speed: f32,
    dodge_distance: f32,
}

impl SaveGoal {
    pub fn new(chase_speed: f32, dodge_distance: f32) -> Self {
        Self {
            drive: DriveController::default(),
            chase_speed,
            dodge_distance,
        }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(config.chase_speed, config.dodge_distance)
    }
}

impl Choice for SaveGoal {
    fn key(&self) -> ChoiceKey {
        SAVE_GOAL
    }

    fn utility(&mut self, world: &WorldState) -> Result<f32, ScoreError> {
        let ball = world.ball;
        let on_our_half = ball.position.y * world.team_sign > 0.0;
        let heading_home = ball.velocity.dot(world.own_goal - ball.position) > 0.0;
        if !on_our_half || !heading_home {
            return Ok(0.0);
        }

        let closeness = 1.0 - ball.position.dist(world.own_goal) / THREAT_RANGE;
        Ok(closeness.clamp(0.0, 1.0) * MAX_UTILITY)
    }

    fn exec(&mut self, world: &WorldState) -> Result<Exec, ExecError> {
        let ball = world.ball.position;
        let can_dodge = world.car_to_ball().norm() > self.dodge_distance;
        Ok(self
            .drive
            .go_towards_point(world, ball.xy(), self.chase_speed, true, true, can_dodge))
    }
}
