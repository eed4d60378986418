use beast_core::{Exec, ExecError, ScoreError, Vec3, WorldState};
use beast_utility::{Choice, ChoiceKey};

use crate::config::BotConfig;
use crate::drive::DriveController;

pub const CLEAR_BALL: ChoiceKey = ChoiceKey("clear_ball");

const MAX_UTILITY: f32 = 0.5;
/// Half the field length; a ball this far from our goal is no longer worth clearing.
const CLEAR_RANGE: f32 = 5120.0;
const CLEAR_SPEED: f32 = 2300.0;
const BALL_RADIUS: f32 = 92.75;

/// Hit the ball away from our goal while it is on our half and we are goal-side of it.
#[derive(Debug, Clone)]
pub struct ClearBall {
    drive: DriveController,
    dodge_distance: f32,
}

impl ClearBall {
    pub fn new(dodge_distance: f32) -> Self {
        Self {
            drive: DriveController::default(),
            dodge_distance,
        }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(config.dodge_distance)
    }
}

fn away_from_goal(world: &WorldState) -> Vec3 {
    (world.ball.position - world.own_goal).xy().normalized()
}

impl Choice for ClearBall {
    fn key(&self) -> ChoiceKey {
        CLEAR_BALL
    }

    fn utility(&mut self, world: &WorldState) -> Result<f32, ScoreError> {
        let ball = world.ball.position;
        let on_our_half = ball.y * world.team_sign > 0.0;
        let goal_side = world.car_to_ball().dot(ball - world.own_goal) > 0.0;
        if !on_our_half || !goal_side {
            return Ok(0.0);
        }

        let closeness = 1.0 - ball.dist(world.own_goal) / CLEAR_RANGE;
        Ok(closeness.clamp(0.0, 1.0) * MAX_UTILITY)
    }

    fn exec(&mut self, world: &WorldState) -> Result<Exec, ExecError> {
        let target = world.ball.position.xy() - away_from_goal(world) * BALL_RADIUS;
        let can_dodge = world.car_to_ball().norm() > self.dodge_distance;
        Ok(self
            .drive
            .go_towards_point(world, target, CLEAR_SPEED, true, true, can_dodge))
    }
}
