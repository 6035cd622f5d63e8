use derive_more::Display;

use crate::hardware::HardwareFault;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[display(fmt = "malformed request: {}", _0)]
pub struct RequestFormatError(pub String);

impl std::error::Error for RequestFormatError {}

/// Everything a control request can fail with. Neither case is recovered
/// locally; the transport maps them to a status code.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum ControlError {
    #[display(fmt = "{}", _0)]
    RequestFormat(RequestFormatError),
    #[display(fmt = "hardware fault: {}", _0)]
    Hardware(HardwareFault),
}

impl ControlError {
    pub fn status(&self) -> u16 {
        match self {
            ControlError::RequestFormat(_) => 400,
            ControlError::Hardware(_) => 500,
        }
    }
}

impl std::error::Error for ControlError {}

impl From<RequestFormatError> for ControlError {
    fn from(err: RequestFormatError) -> Self {
        ControlError::RequestFormat(err)
    }
}

impl From<HardwareFault> for ControlError {
    fn from(err: HardwareFault) -> Self {
        ControlError::Hardware(err)
    }
}
