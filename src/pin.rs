use {
    derive_more::Display,
    serde::{Deserialize, Serialize},
};

/// Board-numbered GPIO identifier. Not range checked here; the hardware
/// backend decides which numbers are real pins.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinId(pub i32);

#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    #[default]
    #[display(fmt = "LOW")]
    Low,
    #[display(fmt = "HIGH")]
    High,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PinState {
    pub pin: PinId,
    pub level: Level,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_state_json() {
        let state = PinState {
            pin: PinId(17),
            level: Level::High,
        };
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"pin":17,"level":"HIGH"}"#
        );
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Low.to_string(), "LOW");
        assert_eq!(Level::High.to_string(), "HIGH");
        assert_eq!(Level::default(), Level::Low);
    }
}
