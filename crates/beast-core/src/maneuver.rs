use core::fmt;

use crate::{ControlOutput, ExecError, WorldState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManeuverKey(pub &'static str);

impl fmt::Display for ManeuverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A committed multi-tick action.
///
/// Once installed, a maneuver is executed every tick, bypassing choice scoring, until
/// [`is_done`](Self::is_done) reports `true` or a kickoff interrupts it. `is_done` must be
/// monotonic: once it returns `true` for an instance it never returns `false` again, and a
/// finished instance is never executed again.
pub trait Maneuver: 'static {
    fn key(&self) -> ManeuverKey;

    fn is_done(&self) -> bool;

    fn exec(&mut self, world: &WorldState) -> Result<ControlOutput, ExecError>;

    /// Called when the maneuver is dropped before finishing (kickoff interrupt).
    fn cancel(&mut self) {}

    /// Kickoff maneuvers are never interrupted by a kickoff.
    fn is_kickoff(&self) -> bool {
        false
    }
}

/// What a choice decided to do this tick.
pub enum Exec {
    /// Drive with this output; the choice is re-scored next tick.
    Control(ControlOutput),
    /// Commit to a maneuver; its first tick provides this tick's output.
    Start(Box<dyn Maneuver>),
}

impl Exec {
    pub fn start(maneuver: impl Maneuver) -> Self {
        Exec::Start(Box::new(maneuver))
    }

    pub fn control(&self) -> Option<&ControlOutput> {
        match self {
            Exec::Control(c) => Some(c),
            Exec::Start(_) => None,
        }
    }

    pub fn started(&self) -> Option<ManeuverKey> {
        match self {
            Exec::Control(_) => None,
            Exec::Start(m) => Some(m.key()),
        }
    }
}

impl From<ControlOutput> for Exec {
    fn from(value: ControlOutput) -> Self {
        Exec::Control(value)
    }
}

impl fmt::Debug for Exec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exec::Control(c) => f.debug_tuple("Control").field(c).finish(),
            Exec::Start(m) => f.debug_tuple("Start").field(&m.key()).finish(),
        }
    }
}
