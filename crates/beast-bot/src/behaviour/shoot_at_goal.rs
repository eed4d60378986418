use beast_core::{Exec, ExecError, ScoreError, Vec3, WorldState};
use beast_utility::{Choice, ChoiceKey};

use crate::config::BotConfig;
use crate::drive::DriveController;

pub const SHOOT_AT_GOAL: ChoiceKey = ChoiceKey("shoot_at_goal");

const MAX_UTILITY: f32 = 0.6;
const SHOT_SPEED: f32 = 2300.0;
/// Contact point offset behind the ball centre (ball radius, uu).
const BALL_RADIUS: f32 = 92.75;
/// Only dodge into the shot when this well lined up.
const DODGE_ALIGNMENT: f32 = 0.9;

/// Drive through the ball toward the enemy goal when lined up on offence.
#[derive(Debug, Clone)]
pub struct ShootAtGoal {
    drive: DriveController,
    dodge_distance: f32,
}

impl ShootAtGoal {
    pub fn new(dodge_distance: f32) -> Self {
        Self {
            drive: DriveController::default(),
            dodge_distance,
        }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(config.dodge_distance)
    }

    /// Cosine between the car's approach and the ball-to-goal line, on the ground plane.
    pub fn alignment(world: &WorldState) -> f32 {
        let approach = world.car_to_ball().xy().normalized();
        approach.dot(shot_direction(world))
    }
}

fn shot_direction(world: &WorldState) -> Vec3 {
    (world.enemy_goal - world.ball.position).xy().normalized()
}

impl Choice for ShootAtGoal {
    fn key(&self) -> ChoiceKey {
        SHOOT_AT_GOAL
    }

    fn utility(&mut self, world: &WorldState) -> Result<f32, ScoreError> {
        if !world.is_offence() {
            return Ok(0.0);
        }
        Ok(Self::alignment(world).max(0.0) * MAX_UTILITY)
    }

    fn exec(&mut self, world: &WorldState) -> Result<Exec, ExecError> {
        let target = world.ball.position.xy() - shot_direction(world) * BALL_RADIUS;
        let can_dodge = world.car_to_ball().norm() > self.dodge_distance
            && Self::alignment(world) > DODGE_ALIGNMENT;
        Ok(self
            .drive
            .go_towards_point(world, target, SHOT_SPEED, false, true, can_dodge))
    }
}
