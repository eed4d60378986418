use beast_core::ControlOutput;

/// Fixed output once the match has ended: spin in place.
pub fn celebrate() -> ControlOutput {
    ControlOutput::NOOP
        .with_throttle(1.0)
        .with_steer(1.0)
        .with_handbrake(true)
}
