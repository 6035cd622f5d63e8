//! Host-side stand-in for the GPIO bank.
//!
//! [`SimulatedOutputs`] behaves like a strict board: pins outside its valid
//! range fail to configure, and writes to pins that were never configured are
//! rejected. Every accepted call is recorded so tests can assert on the exact
//! hardware traffic the controller produced.

use std::{
    collections::{BTreeMap, BTreeSet},
    ops::RangeInclusive,
};

use crate::{
    hardware::{DigitalOutputs, HardwareFault},
    pin::{Level, PinId},
};

/// BCM numbering of the 40-pin Raspberry Pi header.
pub const DEFAULT_VALID_PINS: RangeInclusive<i32> = 0..=27;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputCall {
    Configure(PinId),
    Write(PinId, Level),
}

#[derive(Debug)]
pub struct SimulatedOutputs {
    valid: RangeInclusive<i32>,
    levels: BTreeMap<PinId, Level>,
    failing_writes: BTreeSet<PinId>,
    calls: Vec<OutputCall>,
}

impl SimulatedOutputs {
    pub fn new() -> Self {
        Self::with_valid_pins(DEFAULT_VALID_PINS)
    }

    pub fn with_valid_pins(valid: RangeInclusive<i32>) -> Self {
        Self {
            valid,
            levels: BTreeMap::new(),
            failing_writes: BTreeSet::new(),
            calls: vec![],
        }
    }

    /// Every later write to `pin` fails with a driver fault. Configuration
    /// of the pin still succeeds.
    pub fn fail_writes_on(&mut self, pin: PinId) {
        self.failing_writes.insert(pin);
    }

    pub fn calls(&self) -> &[OutputCall] {
        &self.calls
    }

    /// Electrical level currently driven on `pin`, if it is an output.
    pub fn physical_level(&self, pin: PinId) -> Option<Level> {
        self.levels.get(&pin).copied()
    }

    pub fn configure_count(&self, pin: PinId) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == OutputCall::Configure(pin))
            .count()
    }

    pub fn write_count(&self, pin: PinId) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, OutputCall::Write(p, _) if *p == pin))
            .count()
    }
}

impl Default for SimulatedOutputs {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitalOutputs for SimulatedOutputs {
    fn configure_output(&mut self, pin: PinId) -> Result<(), HardwareFault> {
        if !self.valid.contains(&pin.0) {
            return Err(HardwareFault::InvalidPin(pin));
        }
        self.calls.push(OutputCall::Configure(pin));
        self.levels.insert(pin, Level::Low);
        Ok(())
    }

    fn write(&mut self, pin: PinId, level: Level) -> Result<(), HardwareFault> {
        let current = self
            .levels
            .get_mut(&pin)
            .ok_or(HardwareFault::NotConfigured(pin))?;
        if self.failing_writes.contains(&pin) {
            return Err(HardwareFault::Driver {
                pin,
                reason: String::from("simulated write failure"),
            });
        }
        *current = level;
        self.calls.push(OutputCall::Write(pin, level));
        Ok(())
    }
}
