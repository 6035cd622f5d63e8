use serde::Deserialize;

use crate::{action::Action, error::RequestFormatError, pin::PinId};

/// Body of `POST /control_gpio`.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ControlRequest {
    pub pin: PinId,
    action: String,
}

impl ControlRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, RequestFormatError> {
        serde_json::from_slice(body).map_err(|err| RequestFormatError(err.to_string()))
    }

    pub fn action(&self) -> Action {
        Action::of_str(&self.action)
    }
}
