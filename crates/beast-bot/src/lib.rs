//! The Beast agent: a utility-driven decision loop for a car-ball match.
//!
//! [`Brain::step`] is called once per game tick with the latest [`GamePacket`] and returns the
//! car's input for that tick.
//!
//! [`GamePacket`]: beast_core::GamePacket

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod behaviour;
pub mod brain;
pub mod celebrate;
pub mod config;
pub mod dodge;
pub mod drive;
pub mod kickoff;

pub use behaviour::{Carry, ClearBall, DefaultBehaviour, DefaultPlan, SaveGoal, ShootAtGoal};
pub use brain::{step_brains, Brain, DecisionSnapshot, Doing};
pub use celebrate::celebrate;
pub use config::BotConfig;
pub use dodge::DodgeManeuver;
pub use drive::DriveController;
pub use kickoff::{DefaultKickoff, KickoffManeuver, KickoffSelector};
