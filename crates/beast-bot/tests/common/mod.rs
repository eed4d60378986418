#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use beast_core::{
    BallState, CarState, ControlOutput, Exec, ExecError, FieldInfo, GamePacket, Maneuver,
    ManeuverKey, MatchPhase, Rotator, ScoreError, Vec3, WorldState,
};
use beast_utility::{Choice, ChoiceKey};

pub fn car(team: u8, position: Vec3, yaw: f32, velocity: Vec3) -> CarState {
    CarState {
        team,
        position,
        velocity,
        rotation: Rotator::new(0.0, yaw, 0.0),
        boost: 33.0,
        on_ground: true,
        last_input: ControlOutput::NOOP,
    }
}

pub fn packet_with(phase: MatchPhase, car: CarState, ball: Vec3) -> GamePacket {
    GamePacket {
        tick: 0,
        time: 0.0,
        match_phase: phase,
        cars: vec![car],
        ball: Some(BallState {
            position: ball,
            velocity: Vec3::ZERO,
        }),
        field: Some(FieldInfo::STANDARD),
    }
}

/// Blue car parked behind the ball on its own half.
pub fn packet(phase: MatchPhase) -> GamePacket {
    packet_with(
        phase,
        car(0, Vec3::new(0.0, -3000.0, 17.0), 0.0, Vec3::ZERO),
        Vec3::new(0.0, 0.0, 93.0),
    )
}

pub fn at_tick(mut packet: GamePacket, tick: u64) -> GamePacket {
    packet.tick = tick;
    packet.time = tick as f32 / 120.0;
    packet
}

/// Shared counters for a scripted maneuver.
#[derive(Clone, Default)]
pub struct ManeuverProbe {
    pub created: Rc<Cell<u32>>,
    pub execs: Rc<Cell<u32>>,
    pub canceled: Rc<Cell<u32>>,
    pub done: Rc<Cell<bool>>,
    /// Report done after this many execs (0 = never on its own).
    pub finish_after: Rc<Cell<u32>>,
    pub fail: Rc<Cell<bool>>,
}

pub struct ScriptedManeuver {
    key: &'static str,
    kickoff: bool,
    probe: ManeuverProbe,
    done: bool,
    execs: u32,
}

impl ScriptedManeuver {
    pub fn new(key: &'static str, kickoff: bool, probe: &ManeuverProbe) -> Self {
        probe.created.set(probe.created.get() + 1);
        probe.done.set(false);
        Self {
            key,
            kickoff,
            probe: probe.clone(),
            done: false,
            execs: 0,
        }
    }
}

impl Maneuver for ScriptedManeuver {
    fn key(&self) -> ManeuverKey {
        ManeuverKey(self.key)
    }

    fn is_done(&self) -> bool {
        self.done || self.probe.done.get()
    }

    fn exec(&mut self, _world: &WorldState) -> Result<ControlOutput, ExecError> {
        self.execs += 1;
        self.probe.execs.set(self.probe.execs.get() + 1);
        let finish_after = self.probe.finish_after.get();
        if finish_after > 0 && self.execs >= finish_after {
            self.done = true;
        }
        if self.probe.fail.get() {
            return Err(ExecError::NoOutput { what: "scripted" });
        }
        Ok(ControlOutput::NOOP.with_throttle(0.5).with_jump(true))
    }

    fn cancel(&mut self) {
        self.probe.canceled.set(self.probe.canceled.get() + 1);
    }

    fn is_kickoff(&self) -> bool {
        self.kickoff
    }
}

/// Shared counters for a scripted choice.
#[derive(Clone, Default)]
pub struct ChoiceProbe {
    pub scored: Rc<Cell<u32>>,
    pub execs: Rc<Cell<u32>>,
    pub utility: Rc<Cell<f32>>,
    pub fail_score: Rc<Cell<bool>>,
    pub fail_exec: Rc<Cell<bool>>,
    pub resets: Rc<Cell<u32>>,
}

/// Choice that either drives straight or starts a scripted maneuver.
pub struct ScriptedChoice {
    key: &'static str,
    probe: ChoiceProbe,
    starts: Option<ManeuverProbe>,
}

impl ScriptedChoice {
    pub fn driving(key: &'static str, utility: f32, probe: &ChoiceProbe) -> Box<dyn Choice> {
        probe.utility.set(utility);
        Box::new(Self {
            key,
            probe: probe.clone(),
            starts: None,
        })
    }

    pub fn starting(
        key: &'static str,
        utility: f32,
        probe: &ChoiceProbe,
        maneuver: &ManeuverProbe,
    ) -> Box<dyn Choice> {
        probe.utility.set(utility);
        Box::new(Self {
            key,
            probe: probe.clone(),
            starts: Some(maneuver.clone()),
        })
    }
}

impl Choice for ScriptedChoice {
    fn key(&self) -> ChoiceKey {
        ChoiceKey(self.key)
    }

    fn utility(&mut self, _world: &WorldState) -> Result<f32, ScoreError> {
        self.probe.scored.set(self.probe.scored.get() + 1);
        if self.probe.fail_score.get() {
            return Err(ScoreError::Failed("scripted".to_string()));
        }
        Ok(self.probe.utility.get())
    }

    fn exec(&mut self, _world: &WorldState) -> Result<Exec, ExecError> {
        self.probe.execs.set(self.probe.execs.get() + 1);
        if self.probe.fail_exec.get() {
            return Err(ExecError::Failed("scripted".to_string()));
        }
        match self.starts.as_ref() {
            Some(m) => Ok(Exec::start(ScriptedManeuver::new("long", false, m))),
            None => Ok(Exec::Control(ControlOutput::NOOP.with_throttle(1.0))),
        }
    }

    fn reset(&mut self) {
        self.probe.resets.set(self.probe.resets.get() + 1);
    }
}
