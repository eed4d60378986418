//! Choices registered with the agent's utility system.

pub mod carry;
pub mod clear_ball;
pub mod default;
pub mod save_goal;
pub mod shoot_at_goal;

pub use carry::{Carry, CARRY};
pub use clear_ball::{ClearBall, CLEAR_BALL};
pub use default::{DefaultBehaviour, DefaultPlan, DEFAULT, DEFAULT_UTILITY};
pub use save_goal::{SaveGoal, SAVE_GOAL};
pub use shoot_at_goal::{ShootAtGoal, SHOOT_AT_GOAL};
