use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::{
    action::Action,
    hardware::{DigitalOutputs, HardwareFault},
    pin::{Level, PinId, PinState},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Driven(Level),
    Ignored,
}

/// Last commanded level of every pin seen so far, plus the hardware handle
/// used to drive them.
///
/// A pin gets a record the first time a request names it, at which point it is
/// configured as an output exactly once. Records are never removed.
pub struct PinController<H> {
    outputs: H,
    pins: BTreeMap<PinId, Level>,
}

impl<H: DigitalOutputs> PinController<H> {
    pub fn new(outputs: H) -> Self {
        Self {
            outputs,
            pins: BTreeMap::new(),
        }
    }

    /// Configures `pin` on first use, then drives it according to `action`.
    ///
    /// Unrecognized actions still create the record but never touch the
    /// output level.
    pub fn set_pin(&mut self, pin: PinId, action: &Action) -> Result<Outcome, HardwareFault> {
        if !self.pins.contains_key(&pin) {
            self.outputs.configure_output(pin)?;
            info!("configured pin {pin} as output");
            self.pins.insert(pin, Level::Low);
        }

        let Some(level) = action.target_level() else {
            if let Action::Unrecognized(token) = action {
                warn!("ignoring unrecognized action {token:?} for pin {pin}");
            }
            return Ok(Outcome::Ignored);
        };

        self.outputs.write(pin, level)?;
        debug!("pin {pin} -> {level}");
        self.pins.insert(pin, level);
        Ok(Outcome::Driven(level))
    }

    pub fn level(&self, pin: PinId) -> Option<Level> {
        self.pins.get(&pin).copied()
    }

    pub fn states(&self) -> Vec<PinState> {
        self.pins
            .iter()
            .map(|(&pin, &level)| PinState { pin, level })
            .collect()
    }

    pub fn outputs(&self) -> &H {
        &self.outputs
    }
}
