mod common;

use std::f32::consts::{FRAC_PI_2, PI};

use beast_bot::dodge::DODGE;
use beast_bot::drive::yaw_error;
use beast_bot::kickoff::KICKOFF;
use beast_bot::{
    celebrate, DefaultKickoff, DodgeManeuver, DriveController, KickoffManeuver, KickoffSelector,
};
use beast_core::{AgentId, Exec, Maneuver, MatchPhase, Vec3, WorldState};

use common::{car, packet_with};

const BLUE: AgentId = AgentId::new(0, 0);

fn world_at(phase: MatchPhase, time: f32, car_pos: Vec3, yaw: f32, velocity: Vec3) -> WorldState {
    let mut packet = packet_with(
        phase,
        car(0, car_pos, yaw, velocity),
        Vec3::new(0.0, 0.0, 93.0),
    );
    packet.time = time;
    WorldState::from_packet(&packet, BLUE).unwrap()
}

fn still(phase: MatchPhase, time: f32, car_pos: Vec3) -> WorldState {
    world_at(phase, time, car_pos, FRAC_PI_2, Vec3::ZERO)
}

#[test]
fn dodge_follows_its_timeline() {
    let mut dodge = DodgeManeuver::new(Vec3::new(0.0, 0.0, 0.0));
    let car_pos = Vec3::new(0.0, -3000.0, 17.0);
    assert_eq!(dodge.key(), DODGE);
    assert!(!dodge.is_kickoff());

    let start = 10.0;
    let out = dodge.exec(&still(MatchPhase::Active, start, car_pos)).unwrap();
    assert!(out.jump);
    assert_eq!(out.pitch, 0.0);

    let out = dodge.exec(&still(MatchPhase::Active, start + 0.12, car_pos)).unwrap();
    assert!(!out.jump);

    let out = dodge.exec(&still(MatchPhase::Active, start + 0.2, car_pos)).unwrap();
    assert!(out.jump);
    assert_eq!(out.pitch, -1.0);
    assert!(out.yaw.abs() < 1e-3);

    let out = dodge.exec(&still(MatchPhase::Active, start + 0.4, car_pos)).unwrap();
    assert!(!out.jump);
    assert!(!dodge.is_done());

    dodge.exec(&still(MatchPhase::Active, start + 0.7, car_pos)).unwrap();
    assert!(dodge.is_done());
}

#[test]
fn kickoff_maneuver_boosts_at_the_ball_then_dodges() {
    let mut kickoff = KickoffManeuver::new(750.0);
    assert_eq!(kickoff.key(), KICKOFF);
    assert!(kickoff.is_kickoff());

    let far = kickoff
        .exec(&still(MatchPhase::Kickoff, 0.0, Vec3::new(0.0, -4000.0, 17.0)))
        .unwrap();
    assert_eq!(far.throttle, 1.0);
    assert!(far.boost);
    assert!(!far.jump);
    assert!(!kickoff.is_dodging());

    let near = kickoff
        .exec(&still(MatchPhase::Kickoff, 1.0, Vec3::new(0.0, -700.0, 17.0)))
        .unwrap();
    assert!(near.jump);
    assert!(kickoff.is_dodging());
    assert!(!kickoff.is_done());

    // The dodge keeps running after the kickoff phase ends, until it has recovered.
    kickoff
        .exec(&still(MatchPhase::Active, 1.3, Vec3::new(0.0, -300.0, 17.0)))
        .unwrap();
    assert!(!kickoff.is_done());
    kickoff
        .exec(&still(MatchPhase::Active, 1.7, Vec3::new(0.0, -100.0, 17.0)))
        .unwrap();
    assert!(kickoff.is_done());
}

#[test]
fn kickoff_maneuver_ends_when_the_phase_ends_before_the_dodge() {
    let mut kickoff = KickoffManeuver::new(750.0);
    kickoff
        .exec(&still(MatchPhase::Kickoff, 0.0, Vec3::new(0.0, -4000.0, 17.0)))
        .unwrap();
    assert!(!kickoff.is_done());

    kickoff
        .exec(&still(MatchPhase::Active, 0.5, Vec3::new(0.0, -3000.0, 17.0)))
        .unwrap();
    assert!(kickoff.is_done());
}

#[test]
fn finished_kickoff_never_starts_a_dodge() {
    // Within dodge range, but the ball has already been touched.
    let mut kickoff = KickoffManeuver::new(750.0);
    let out = kickoff
        .exec(&still(MatchPhase::Active, 0.0, Vec3::new(0.0, -500.0, 17.0)))
        .unwrap();
    assert!(kickoff.is_done());
    assert!(!kickoff.is_dodging());
    assert!(!out.jump);

    // Same after a timeout.
    let mut kickoff = KickoffManeuver::new(750.0);
    kickoff
        .exec(&still(MatchPhase::Kickoff, 0.0, Vec3::new(0.0, -4000.0, 17.0)))
        .unwrap();
    let out = kickoff
        .exec(&still(MatchPhase::Kickoff, 3.5, Vec3::new(0.0, -500.0, 17.0)))
        .unwrap();
    assert!(kickoff.is_done());
    assert!(!kickoff.is_dodging());
    assert!(!out.jump);
}

#[test]
fn kickoff_maneuver_times_out() {
    let mut kickoff = KickoffManeuver::new(750.0);
    let far = Vec3::new(0.0, -4000.0, 17.0);
    kickoff.exec(&still(MatchPhase::Kickoff, 2.0, far)).unwrap();
    kickoff.exec(&still(MatchPhase::Kickoff, 4.0, far)).unwrap();
    assert!(!kickoff.is_done());
    kickoff.exec(&still(MatchPhase::Kickoff, 5.5, far)).unwrap();
    assert!(kickoff.is_done());
}

#[test]
fn default_kickoff_selector_builds_a_fresh_kickoff() {
    let selector = DefaultKickoff { dodge_distance: 750.0 };
    let world = still(MatchPhase::Kickoff, 0.0, Vec3::new(0.0, -4000.0, 17.0));
    let maneuver = selector.choose(&world);
    assert_eq!(maneuver.key(), KICKOFF);
    assert!(maneuver.is_kickoff());
    assert!(!maneuver.is_done());
}

#[test]
fn yaw_error_is_relative_to_heading() {
    let car_pos = Vec3::new(0.0, -3000.0, 17.0);
    let facing_ball = still(MatchPhase::Active, 0.0, car_pos);
    assert!(yaw_error(&facing_ball, Vec3::ZERO).abs() < 1e-4);

    let facing_away = world_at(MatchPhase::Active, 0.0, car_pos, -FRAC_PI_2, Vec3::ZERO);
    assert!((yaw_error(&facing_away, Vec3::ZERO).abs() - PI).abs() < 1e-4);

    let facing_right = world_at(MatchPhase::Active, 0.0, car_pos, 0.0, Vec3::ZERO);
    assert!((yaw_error(&facing_right, Vec3::ZERO) - FRAC_PI_2).abs() < 1e-4);

    // Standing on the target: nothing to correct.
    assert_eq!(yaw_error(&facing_right, car_pos), 0.0);
}

#[test]
fn sharp_turns_slide_and_never_boost() {
    let drive = DriveController::default();
    let car_pos = Vec3::new(0.0, -3000.0, 17.0);
    let facing_away = world_at(MatchPhase::Active, 0.0, car_pos, -FRAC_PI_2, Vec3::ZERO);

    let out = drive.steer_towards(&facing_away, Vec3::ZERO, 2000.0, true, true);
    assert!(out.handbrake);
    assert!(!out.boost);
    assert_eq!(out.steer.abs(), 1.0);

    let no_slide = drive.steer_towards(&facing_away, Vec3::ZERO, 2000.0, false, true);
    assert!(!no_slide.handbrake);
}

#[test]
fn coasts_above_target_speed() {
    let drive = DriveController::default();
    let fast = world_at(
        MatchPhase::Active,
        0.0,
        Vec3::new(0.0, -3000.0, 17.0),
        FRAC_PI_2,
        Vec3::new(0.0, 2100.0, 0.0),
    );
    let out = drive.steer_towards(&fast, Vec3::ZERO, 2000.0, true, true);
    assert_eq!(out.throttle, 0.0);
    assert!(!out.boost);
}

#[test]
fn dodge_requires_speed_alignment_and_distance() {
    let drive = DriveController::default();
    let car_pos = Vec3::new(0.0, -3000.0, 17.0);

    let fast = world_at(MatchPhase::Active, 0.0, car_pos, FRAC_PI_2, Vec3::new(0.0, 1400.0, 0.0));
    let exec = drive.go_towards_point(&fast, Vec3::ZERO, 2000.0, true, true, true);
    assert_eq!(exec.started(), Some(DODGE));

    // Not allowed by the caller.
    let exec = drive.go_towards_point(&fast, Vec3::ZERO, 2000.0, true, true, false);
    assert!(matches!(exec, Exec::Control(_)));

    // Too slow.
    let slow = world_at(MatchPhase::Active, 0.0, car_pos, FRAC_PI_2, Vec3::new(0.0, 800.0, 0.0));
    let exec = drive.go_towards_point(&slow, Vec3::ZERO, 2000.0, true, true, true);
    assert!(matches!(exec, Exec::Control(_)));

    // Too close.
    let close = Vec3::new(0.0, -1800.0, 0.0);
    let exec = drive.go_towards_point(&fast, close, 2000.0, true, true, true);
    assert!(matches!(exec, Exec::Control(_)));

    // Not lined up.
    let aside = Vec3::new(1500.0, 0.0, 0.0);
    let exec = drive.go_towards_point(&fast, aside, 2000.0, true, true, true);
    assert!(matches!(exec, Exec::Control(_)));
}

#[test]
fn celebration_spins_in_place() {
    let out = celebrate();
    assert_eq!(out.throttle, 1.0);
    assert_eq!(out.steer, 1.0);
    assert!(out.handbrake);
    assert!(!out.jump);
}
