use beast_core::{Exec, ExecError, ScoreError, Vec3, WorldState};
use beast_utility::{Choice, ChoiceKey};

use crate::config::BotConfig;
use crate::drive::DriveController;

pub const DEFAULT: ChoiceKey = ChoiceKey("default");

/// Constant low utility; lets any specialised choice outrank it.
pub const DEFAULT_UTILITY: f32 = 0.1;

/// Where the default behaviour wants to go this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultPlan {
    /// We are on the correct side of the ball: go for it.
    Chase { target: Vec3, can_dodge: bool },
    /// Wrong side of the ball: go back to the home point in front of our goal.
    Retreat { target: Vec3 },
}

/// The always-available fallback choice.
#[derive(Debug, Clone)]
pub struct DefaultBehaviour {
    drive: DriveController,
    chase_speed: f32,
    dodge_distance: f32,
}

impl DefaultBehaviour {
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

    pub fn plan(&self, world: &WorldState) -> DefaultPlan {
        let car = world.my_car.position;
        let ball = world.ball.position;

        let car_to_ball = ball - car;
        let ball_to_enemy_goal = world.enemy_goal - ball;
        let own_goal_to_ball = ball - world.own_goal;

        let right_side_of_ball = if world.is_offence() {
            car_to_ball.dot(ball_to_enemy_goal) > 0.0
        } else {
            car_to_ball.dot(own_goal_to_ball) > 0.0
        };

        if right_side_of_ball {
            DefaultPlan::Chase {
                target: ball.xy(),
                can_dodge: car_to_ball.norm() > self.dodge_distance,
            }
        } else {
            DefaultPlan::Retreat {
                target: world.own_goal_field,
            }
        }
    }
}

impl Choice for DefaultBehaviour {
    fn key(&self) -> ChoiceKey {
        DEFAULT
    }

    fn utility(&mut self, _world: &WorldState) -> Result<f32, ScoreError> {
        Ok(DEFAULT_UTILITY)
    }

    fn exec(&mut self, world: &WorldState) -> Result<Exec, ExecError> {
        let exec = match self.plan(world) {
            DefaultPlan::Chase { target, can_dodge } => {
                self.drive
                    .go_towards_point(world, target, self.chase_speed, true, true, can_dodge)
            }
            DefaultPlan::Retreat { target } => {
                self.drive
                    .go_towards_point(world, target, self.chase_speed, true, true, false)
            }
        };
        Ok(exec)
    }
}
