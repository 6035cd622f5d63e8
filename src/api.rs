//! Transport-independent HTTP handlers.
//!
//! The ESP-IDF server only moves bytes in and out; status codes and bodies are
//! decided here so the whole request path runs in host tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use {
    embedded_io::Read,
    log::{error, info, warn},
    serde::Serialize,
};

use crate::{
    controller::PinController,
    error::{ControlError, RequestFormatError},
    hardware::DigitalOutputs,
    pin::PinState,
    request::ControlRequest,
    server_response::{ErrorBody, Response},
};

pub const CONTROL_GPIO_PATH: &str = "/control_gpio";
pub const PINS_PATH: &str = "/pins";

#[derive(Debug, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub message: &'static str,
    pub body: String,
}

impl Reply {
    fn new<T: Serialize, E: Serialize>(status: u16, response: Response<T, E>) -> Self {
        let body = response
            .json()
            .unwrap_or_else(|_| String::from(r#"{"status":"error"}"#));
        Self {
            status,
            message: reason_phrase(status),
            body,
        }
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        _ => "Internal Server Error",
    }
}

#[derive(Serialize)]
struct PinsBody {
    pins: Vec<PinState>,
}

fn lock<H>(controller: &Mutex<PinController<H>>) -> MutexGuard<'_, PinController<H>> {
    // A panic mid-request cannot leave the map half-written, so keep serving.
    controller.lock().unwrap_or_else(PoisonError::into_inner)
}

/// `POST /control_gpio`
pub fn control_gpio<H: DigitalOutputs>(controller: &Mutex<PinController<H>>, body: &[u8]) -> Reply {
    match apply(controller, body) {
        Ok(()) => Reply::new(200, Response::ok(())),
        Err(err) => reject(err),
    }
}

fn apply<H: DigitalOutputs>(
    controller: &Mutex<PinController<H>>,
    body: &[u8],
) -> Result<(), ControlError> {
    let req = ControlRequest::from_slice(body)?;
    let action = req.action();
    info!("control_gpio pin: {}, action: {:?}", req.pin, action);
    lock(controller).set_pin(req.pin, &action)?;
    Ok(())
}

/// `GET /pins`
pub fn list_pins<H: DigitalOutputs>(controller: &Mutex<PinController<H>>) -> Reply {
    let pins = lock(controller).states();
    Reply::new(200, Response::ok(PinsBody { pins }))
}

/// Reads at most `max` bytes of request body.
///
/// Returns `None` when the body is longer than `max`; the rest of it is left
/// unread.
pub fn read_body<R: Read>(reader: &mut R, max: usize) -> Result<Option<Vec<u8>>, R::Error> {
    let mut body = vec![0; max + 1];
    let mut len = 0;
    while len < body.len() {
        let n = reader.read(&mut body[len..])?;
        if n == 0 {
            break;
        }
        len += n;
    }
    if len > max {
        return Ok(None);
    }
    body.truncate(len);
    Ok(Some(body))
}

/// Reply for a request the transport refused before it reached a handler.
pub fn request_error(err: RequestFormatError) -> Reply {
    reject(err.into())
}

fn reject(err: ControlError) -> Reply {
    match &err {
        ControlError::RequestFormat(_) => warn!("rejected request: {err}"),
        ControlError::Hardware(_) => error!("{err}"),
    }
    Reply::new(
        err.status(),
        Response::error(ErrorBody {
            error: err.to_string(),
        }),
    )
}
