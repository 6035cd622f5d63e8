use std::{
    sync::{Arc, Mutex},
    thread,
    time::Duration,
};

use {esp_idf_svc::hal::peripherals::Peripherals, log::info};

use gpio_bridge::{config, controller::PinController, esp_gpio::EspOutputs, server, wifi};

fn main() -> anyhow::Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    // Only the modem is taken; the GPIO bank belongs to EspOutputs.
    let peripherals = Peripherals::take()?;
    let mut wifi = wifi::create_wifi(peripherals.modem)?;
    let ip_info = futures::executor::block_on(wifi::connect_wifi(
        &mut wifi,
        config::WIFI_SSID,
        config::WIFI_PASSWORD,
    ))?;

    let controller = Arc::new(Mutex::new(PinController::new(EspOutputs::new())));
    let _server = server::start(controller)?;
    info!("gpio bridge ready at http://{}:{}", ip_info.ip, config::HTTP_PORT);

    loop {
        thread::sleep(Duration::from_secs(1));
    }
}
