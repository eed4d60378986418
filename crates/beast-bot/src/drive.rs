//! Minimal ground driving toward a point.
//!
//! A stand-in for a full path-following controller: proportional steering on the yaw error,
//! bang-bang throttle, boost when lined up, handbrake on very sharp turns.

use beast_core::{normalize_angle, ControlOutput, Exec, Vec3, WorldState};

use crate::dodge::DodgeManeuver;

/// Cars cannot exceed this speed on throttle alone.
pub const MAX_THROTTLE_SPEED: f32 = 1410.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveController {
    pub steer_gain: f32,
    /// Yaw error (rad) above which the handbrake is pulled when sliding is allowed.
    pub handbrake_angle: f32,
    /// Yaw error (rad) below which boosting is allowed.
    pub boost_angle: f32,
    pub dodge_min_speed: f32,
    pub dodge_min_distance: f32,
    pub dodge_max_angle: f32,
}

impl Default for DriveController {
    fn default() -> Self {
        Self {
            steer_gain: 3.0,
            handbrake_angle: 1.7,
            boost_angle: 0.3,
            dodge_min_speed: 1100.0,
            dodge_min_distance: 1500.0,
            dodge_max_angle: 0.1,
        }
    }
}

/// Yaw error from the car's heading to `target`, in `(-PI, PI]`.
pub fn yaw_error(world: &WorldState, target: Vec3) -> f32 {
    let car = &world.my_car;
    let to_target = (target - car.position).xy();
    if to_target.norm() < 1.0 {
        return 0.0;
    }
    normalize_angle(to_target.y.atan2(to_target.x) - car.rotation.yaw)
}

impl DriveController {
    /// Plain steering toward `target`, never starting a maneuver.
    pub fn steer_towards(
        &self,
        world: &WorldState,
        target: Vec3,
        target_speed: f32,
        slide: bool,
        boost: bool,
    ) -> ControlOutput {
        let car = &world.my_car;
        let angle = yaw_error(world, target);
        let speed = car.velocity.dot(car.forward());

        let throttle = if speed < target_speed { 1.0 } else { 0.0 };
        let boost = boost
            && car.on_ground
            && angle.abs() < self.boost_angle
            && target_speed > MAX_THROTTLE_SPEED
            && speed < target_speed;
        let handbrake = slide && car.on_ground && angle.abs() > self.handbrake_angle;

        ControlOutput::NOOP
            .with_throttle(throttle)
            .with_steer(angle * self.steer_gain)
            .with_boost(boost)
            .with_handbrake(handbrake)
            .clamped()
    }

    /// Drive toward `target`; may start a dodge toward it when `can_dodge` is set and the car
    /// is fast, grounded, lined up and still far away.
    pub fn go_towards_point(
        &self,
        world: &WorldState,
        target: Vec3,
        target_speed: f32,
        slide: bool,
        boost: bool,
        can_dodge: bool,
    ) -> Exec {
        if can_dodge && self.should_dodge(world, target) {
            return Exec::start(DodgeManeuver::new(target));
        }
        Exec::Control(self.steer_towards(world, target, target_speed, slide, boost))
    }

    fn should_dodge(&self, world: &WorldState, target: Vec3) -> bool {
        let car = &world.my_car;
        car.on_ground
            && yaw_error(world, target).abs() < self.dodge_max_angle
            && car.velocity.dot(car.forward()) > self.dodge_min_speed
            && (target - car.position).xy().norm() > self.dodge_min_distance
    }
}
