use crate::pin::Level;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    // "on"
    On,
    // "off"
    Off,
    // anything else, kept verbatim for the logs
    Unrecognized(String),
}

impl Action {
    /// Tokens are matched exactly: `"ON"` or `" on"` are unrecognized.
    pub fn of_str(str: &str) -> Self {
        match str {
            "on" => Action::On,
            "off" => Action::Off,
            other => Action::Unrecognized(other.to_owned()),
        }
    }

    pub fn target_level(&self) -> Option<Level> {
        match self {
            Action::On => Some(Level::High),
            Action::Off => Some(Level::Low),
            Action::Unrecognized(_) => None,
        }
    }
}
