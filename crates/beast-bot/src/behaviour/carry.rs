use beast_core::{Exec, ExecError, ScoreError, WorldState};
use beast_utility::{Choice, ChoiceKey};

use crate::drive::DriveController;

pub const CARRY: ChoiceKey = ChoiceKey("carry");

const UTILITY: f32 = 0.7;
/// Ball must be within this ground distance of the car (uu).
const CARRY_RANGE: f32 = 800.0;
/// Ball must be below this height (uu).
const CARRY_MAX_HEIGHT: f32 = 200.0;
/// Approach the ball this much faster than it is rolling.
const PUSH_SPEED: f32 = 250.0;
/// Touch the ball this far behind its centre so it is nudged, not struck.
const PUSH_OFFSET: f32 = 40.0;

/// Dribble: keep a low, close ball rolling toward the enemy goal.
#[derive(Debug, Clone, Default)]
pub struct Carry {
    drive: DriveController,
}

impl Carry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_carry(world: &WorldState) -> bool {
        let car = &world.my_car;
        let ball = world.ball.position;
        let toward_goal = world.car_to_ball().dot(world.enemy_goal - ball) > 0.0;
        car.on_ground
            && ball.z < CARRY_MAX_HEIGHT
            && car.position.xy().dist(ball.xy()) < CARRY_RANGE
            && toward_goal
    }
}

impl Choice for Carry {
    fn key(&self) -> ChoiceKey {
        CARRY
    }

    fn utility(&mut self, world: &WorldState) -> Result<f32, ScoreError> {
        Ok(if Self::can_carry(world) { UTILITY } else { 0.0 })
    }

    fn exec(&mut self, world: &WorldState) -> Result<Exec, ExecError> {
        let ball = &world.ball;
        let goal_dir = (world.enemy_goal - ball.position).xy().normalized();
        let target = ball.position.xy() - goal_dir * PUSH_OFFSET;
        let speed = ball.velocity.xy().norm() + PUSH_SPEED;
        Ok(Exec::Control(
            self.drive.steer_towards(world, target, speed, false, false),
        ))
    }
}
