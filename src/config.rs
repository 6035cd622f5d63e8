pub const HTTP_PORT: u16 = 5000;
pub const HTTP_STACK_SIZE: usize = 10240;

/// Upper bound on a `POST /control_gpio` body. A well-formed request is
/// under 40 bytes.
pub const MAX_REQUEST_BODY: usize = 256;

// Baked in at build time; there is no runtime configuration.
pub const WIFI_SSID: &str = match option_env!("GPIO_BRIDGE_WIFI_SSID") {
    Some(ssid) => ssid,
    None => "",
};
pub const WIFI_PASSWORD: &str = match option_env!("GPIO_BRIDGE_WIFI_PASSWORD") {
    Some(password) => password,
    None => "",
};
