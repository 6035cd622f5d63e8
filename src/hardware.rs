use derive_more::Display;

use crate::pin::{Level, PinId};

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum HardwareFault {
    #[display(fmt = "pin {} is not a usable output on this board", _0)]
    InvalidPin(PinId),
    #[display(fmt = "pin {} was written before being configured as an output", _0)]
    NotConfigured(PinId),
    #[display(fmt = "gpio driver rejected pin {}: {}", pin, reason)]
    Driver { pin: PinId, reason: String },
}

impl std::error::Error for HardwareFault {}

/// Digital output capability handed to the controller at startup.
///
/// Both calls are synchronous. An implementation either succeeds or reports a
/// [`HardwareFault`]; callers never retry.
pub trait DigitalOutputs {
    /// One-time direction setup for `pin`. The pin is left driven LOW.
    fn configure_output(&mut self, pin: PinId) -> Result<(), HardwareFault>;

    fn write(&mut self, pin: PinId, level: Level) -> Result<(), HardwareFault>;
}
