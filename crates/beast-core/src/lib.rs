//! Core types for the Beast car-ball agent: world snapshots, control output and the maneuver
//! contract shared by the arbitrator and the decision loop.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod control;
pub mod error;
pub mod maneuver;
pub mod math;
pub mod packet;
pub mod world;

pub use agent::AgentId;
pub use control::ControlOutput;
pub use error::{ConfigError, ExecError, NotReady, ScoreError};
pub use maneuver::{Exec, Maneuver, ManeuverKey};
pub use math::{normalize_angle, Rotator, Vec3};
pub use packet::{BallState, CarState, FieldInfo, GamePacket, MatchPhase};
pub use world::{WorldState, DEFAULT_HOME_OFFSET};
