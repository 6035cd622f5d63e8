//! HTTP-to-GPIO bridge firmware.
//!
//! `POST /control_gpio` with `{"pin": 17, "action": "on"}` drives a pin and
//! remembers the last commanded level. The controller, request decoding and
//! reply building are plain Rust and run on the host against
//! [`sim::SimulatedOutputs`]; the ESP-IDF server, Wi-Fi and GPIO drivers are
//! only built with the `espidf` feature.

pub mod action;
pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod hardware;
pub mod pin;
pub mod request;
pub mod server_response;
pub mod sim;

#[cfg(feature = "espidf")]
pub mod esp_gpio;
#[cfg(feature = "espidf")]
pub mod server;
#[cfg(feature = "espidf")]
pub mod wifi;
