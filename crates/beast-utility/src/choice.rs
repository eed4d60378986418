use core::fmt;

use beast_core::{Exec, ExecError, ScoreError, WorldState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChoiceKey(pub &'static str);

impl fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A high-level behaviour competing for control of the car.
///
/// Scored every tick no maneuver is running. The winner's [`exec`](Self::exec) either drives
/// directly or starts a maneuver via [`Exec::Start`].
pub trait Choice: 'static {
    fn key(&self) -> ChoiceKey;

    fn utility(&mut self, world: &WorldState) -> Result<f32, ScoreError>;

    fn exec(&mut self, world: &WorldState) -> Result<Exec, ExecError>;

    /// Drop any per-selection memory. Called when this choice stops being the selected one.
    fn reset(&mut self) {}
}
