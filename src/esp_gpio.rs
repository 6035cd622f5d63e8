use std::collections::HashMap;

use esp_idf_svc::hal::gpio::{AnyOutputPin, Output, PinDriver};

use crate::{
    hardware::{DigitalOutputs, HardwareFault},
    pin::{Level, PinId},
};

// GPIO6-11 are wired to the SPI flash, GPIO34-39 are input only.
fn is_output_capable(pin: PinId) -> bool {
    matches!(pin.0, 0..=5 | 12..=19 | 21..=23 | 25..=27 | 32..=33)
}

/// ESP32 GPIO bank, one `PinDriver` per pin that has been configured.
pub struct EspOutputs {
    drivers: HashMap<PinId, PinDriver<'static, AnyOutputPin, Output>>,
}

impl EspOutputs {
    /// The bridge addresses pins by number, so it must be the only owner of
    /// the GPIO bank: do not hand `Peripherals::pins` to anything else.
    pub fn new() -> Self {
        Self {
            drivers: HashMap::new(),
        }
    }
}

impl Default for EspOutputs {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitalOutputs for EspOutputs {
    fn configure_output(&mut self, pin: PinId) -> Result<(), HardwareFault> {
        if !is_output_capable(pin) {
            return Err(HardwareFault::InvalidPin(pin));
        }
        // SAFETY: the number is a real output GPIO and no other driver in the
        // firmware holds it; `EspOutputs::new` documents the exclusivity.
        let any_pin = unsafe { AnyOutputPin::new(pin.0) };
        let mut driver = PinDriver::output(any_pin).map_err(|err| HardwareFault::Driver {
            pin,
            reason: err.to_string(),
        })?;
        driver.set_low().map_err(|err| HardwareFault::Driver {
            pin,
            reason: err.to_string(),
        })?;
        self.drivers.insert(pin, driver);
        Ok(())
    }

    fn write(&mut self, pin: PinId, level: Level) -> Result<(), HardwareFault> {
        let driver = self
            .drivers
            .get_mut(&pin)
            .ok_or(HardwareFault::NotConfigured(pin))?;
        let res = match level {
            Level::High => driver.set_high(),
            Level::Low => driver.set_low(),
        };
        res.map_err(|err| HardwareFault::Driver {
            pin,
            reason: err.to_string(),
        })
    }
}
