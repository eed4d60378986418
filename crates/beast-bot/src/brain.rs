use beast_core::{
    AgentId, ConfigError, ControlOutput, Exec, ExecError, GamePacket, Maneuver, ManeuverKey,
    WorldState,
};
use beast_tools::{TraceEvent, TraceSink};
use beast_utility::{Choice, ChoiceKey, UtilitySystem};

use crate::behaviour::{Carry, ClearBall, DefaultBehaviour, SaveGoal, ShootAtGoal};
use crate::celebrate::celebrate;
use crate::config::BotConfig;
use crate::kickoff::{DefaultKickoff, KickoffSelector};

/// What is driving the car, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Doing {
    Idle,
    Choice(ChoiceKey),
    Maneuver(ManeuverKey),
}

impl std::fmt::Display for Doing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Doing::Idle => f.write_str("idle"),
            Doing::Choice(key) => write!(f, "choice:{key}"),
            Doing::Maneuver(key) => write!(f, "maneuver:{key}"),
        }
    }
}

/// Per-agent state carried from one tick to the next.
#[derive(Default)]
struct DecisionState {
    maneuver: Option<Box<dyn Maneuver>>,
    /// Choice driving the car directly (no maneuver running).
    choice: Option<ChoiceKey>,
    /// Choice that started the running maneuver, kept for display only.
    origin: Option<ChoiceKey>,
    doing_kickoff: bool,
    last_input: ControlOutput,
}

/// Copyable view of the decision state, for inspection and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionSnapshot {
    pub maneuver: Option<ManeuverKey>,
    pub choice: Option<ChoiceKey>,
    pub origin: Option<ChoiceKey>,
    pub doing_kickoff: bool,
    pub last_input: ControlOutput,
    pub arbitrator_choice: Option<ChoiceKey>,
}

/// The per-tick decision loop of one agent.
///
/// Each [`step`](Self::step):
/// 1. installs a kickoff maneuver when a kickoff starts (interrupting any running maneuver),
/// 2. otherwise keeps executing the running maneuver until it reports done,
/// 3. otherwise asks the utility system for a choice and executes it; a choice that starts a
///    maneuver hands control to it within the same tick.
pub struct Brain {
    agent: AgentId,
    config: BotConfig,
    utility: UtilitySystem,
    kickoff: Box<dyn KickoffSelector>,
    state: DecisionState,
    trace: Option<Box<dyn TraceSink>>,
}

impl Brain {
    /// `DefaultBehaviour` is always registered first, followed by `extra` in order.
    pub fn new(
        agent: AgentId,
        config: BotConfig,
        extra: Vec<Box<dyn Choice>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut choices: Vec<Box<dyn Choice>> = Vec::with_capacity(extra.len() + 1);
        choices.push(Box::new(DefaultBehaviour::from_config(&config)));
        choices.extend(extra);

        let utility = UtilitySystem::new(choices)?.with_config(config.utility_config())?;
        let kickoff = Box::new(DefaultKickoff {
            dodge_distance: config.kickoff_dodge_distance,
        });

        tracing::info!(
            agent = %agent,
            name = %config.name,
            choices = utility.len(),
            "brain initialized"
        );

        Ok(Self {
            agent,
            config,
            utility,
            kickoff,
            state: DecisionState::default(),
            trace: None,
        })
    }

    /// The full behaviour set, in priority order for ties: default, shoot at goal, clear ball,
    /// save goal, carry.
    pub fn standard(agent: AgentId, config: BotConfig) -> Result<Self, ConfigError> {
        let extra: Vec<Box<dyn Choice>> = vec![
            Box::new(ShootAtGoal::from_config(&config)),
            Box::new(ClearBall::from_config(&config)),
            Box::new(SaveGoal::from_config(&config)),
            Box::new(Carry::new()),
        ];
        Self::new(agent, config, extra)
    }

    pub fn with_kickoff(mut self, selector: impl KickoffSelector) -> Self {
        self.kickoff = Box::new(selector);
        self
    }

    pub fn with_trace_sink(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    pub fn agent(&self) -> AgentId {
        self.agent
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn utility(&self) -> &UtilitySystem {
        &self.utility
    }

    pub fn last_input(&self) -> ControlOutput {
        self.state.last_input
    }

    pub fn is_doing_kickoff(&self) -> bool {
        self.state.doing_kickoff
    }

    pub fn has_maneuver(&self) -> bool {
        self.state.maneuver.is_some()
    }

    pub fn doing(&self) -> Doing {
        if let Some(m) = self.state.maneuver.as_ref() {
            return Doing::Maneuver(m.key());
        }
        match self.state.choice {
            Some(key) => Doing::Choice(key),
            None => Doing::Idle,
        }
    }

    pub fn snapshot(&self) -> DecisionSnapshot {
        DecisionSnapshot {
            maneuver: self.state.maneuver.as_ref().map(|m| m.key()),
            choice: self.state.choice,
            origin: self.state.origin,
            doing_kickoff: self.state.doing_kickoff,
            last_input: self.state.last_input,
            arbitrator_choice: self.utility.current(),
        }
    }

    /// Decide this tick's output. Never panics; the worst case is [`ControlOutput::NOOP`].
    pub fn step(&mut self, packet: &GamePacket) -> ControlOutput {
        let world = match WorldState::from_packet_with_home(
            packet,
            self.agent,
            self.config.home_offset,
        ) {
            Ok(world) => world,
            Err(reason) => {
                tracing::debug!(agent = %self.agent, %reason, "world not ready");
                return ControlOutput::NOOP;
            }
        };

        if world.match_ended {
            return celebrate();
        }

        let output = match self.decide(&world) {
            Ok(output) => output.clamped(),
            Err(error) => {
                tracing::warn!(
                    agent = %self.agent,
                    name = %self.config.name,
                    doing = ?self.doing(),
                    %error,
                    "no usable output, substituting no-op"
                );
                let subject = match self.doing() {
                    Doing::Maneuver(key) => key.0,
                    Doing::Choice(key) => key.0,
                    Doing::Idle => "",
                };
                self.emit(TraceEvent::new(world.tick, "exec_failed").with_subject(subject));
                ControlOutput::NOOP
            }
        };

        self.state.last_input = output;
        output
    }

    fn decide(&mut self, world: &WorldState) -> Result<ControlOutput, ExecError> {
        if !world.is_kickoff {
            // A kickoff maneuver may still be finishing its dodge; only the flag follows the world.
            self.state.doing_kickoff = false;
        } else if !self.state.doing_kickoff {
            self.begin_kickoff(world);
        }

        if let Some(maneuver) = self.state.maneuver.as_mut() {
            if !maneuver.is_done() {
                return maneuver.exec(world);
            }
        }

        if let Some(finished) = self.state.maneuver.take() {
            self.emit(TraceEvent::new(world.tick, "maneuver_done").with_subject(finished.key().0));
        }
        self.state.origin = None;
        self.state.doing_kickoff = false;

        let Some(selection) = self.utility.evaluate(world) else {
            self.state.choice = None;
            return Err(ExecError::NoOutput {
                what: "utility system",
            });
        };

        if self.state.choice != Some(selection.key) {
            self.emit(
                TraceEvent::new(world.tick, "choice")
                    .with_subject(selection.key.0)
                    .with_score(selection.score),
            );
        }
        self.state.choice = Some(selection.key);

        match self.utility.exec(selection.index, world)? {
            Exec::Control(output) => Ok(output),
            Exec::Start(mut maneuver) => {
                // The maneuver owns execution now; the next evaluation starts unbiased.
                self.utility.reset();
                self.state.choice = None;
                self.state.origin = Some(selection.key);
                self.emit(
                    TraceEvent::new(world.tick, "maneuver_start").with_subject(maneuver.key().0),
                );

                let output = maneuver.exec(world);
                self.state.maneuver = Some(maneuver);
                output
            }
        }
    }

    fn begin_kickoff(&mut self, world: &WorldState) {
        if let Some(mut running) = self.state.maneuver.take() {
            if running.is_kickoff() && !running.is_done() {
                self.state.maneuver = Some(running);
                self.state.doing_kickoff = true;
                return;
            }
            running.cancel();
            self.emit(TraceEvent::new(world.tick, "interrupt").with_subject(running.key().0));
        }

        // The kickoff preempts the arbitrator; the next evaluation starts unbiased.
        self.utility.reset();

        let maneuver = self.kickoff.choose(world);
        tracing::info!(agent = %self.agent, maneuver = %maneuver.key(), "kickoff");
        self.emit(TraceEvent::new(world.tick, "kickoff").with_subject(maneuver.key().0));

        self.state.maneuver = Some(maneuver);
        self.state.choice = None;
        self.state.origin = None;
        self.state.doing_kickoff = true;
    }

    fn emit(&mut self, event: TraceEvent) {
        if !self.config.render {
            return;
        }
        if let Some(sink) = self.trace.as_mut() {
            sink.emit(event);
        }
    }
}

/// Step several independent agents on the same packet.
///
/// Brains are stepped and reported in [`AgentId`] order; the slice itself is left as given.
pub fn step_brains(packet: &GamePacket, brains: &mut [Brain]) -> Vec<(AgentId, ControlOutput)> {
    let mut order: Vec<usize> = (0..brains.len()).collect();
    order.sort_by_key(|&i| brains[i].agent());
    order
        .into_iter()
        .map(|i| {
            let brain = &mut brains[i];
            (brain.agent(), brain.step(packet))
        })
        .collect()
}
