use {
    anyhow::anyhow,
    embedded_svc::{
        ipv4::IpInfo,
        wifi::{AuthMethod, ClientConfiguration, Configuration},
    },
    esp_idf_svc::{
        eventloop::EspSystemEventLoop,
        hal::modem::Modem,
        nvs::EspDefaultNvsPartition,
        timer::EspTaskTimerService,
        wifi::{AsyncWifi, EspWifi},
    },
    heapless::String,
};

use log::info;

pub fn create_wifi(modem: Modem) -> anyhow::Result<AsyncWifi<EspWifi<'static>>> {
    let sys_loop = EspSystemEventLoop::take()?;
    let timer_service = EspTaskTimerService::new()?;
    let nvs = EspDefaultNvsPartition::take()?;

    let inner_wifi = EspWifi::new(modem, sys_loop.clone(), Some(nvs))?;

    let af = AsyncWifi::wrap(inner_wifi, sys_loop, timer_service)?;

    Ok(af)
}

pub async fn connect_wifi(
    wifi: &mut AsyncWifi<EspWifi<'static>>,
    ssid: &str,
    password: &str,
) -> anyhow::Result<IpInfo> {
    if ssid.is_empty() {
        return Err(anyhow!(
            "no wifi ssid, rebuild with GPIO_BRIDGE_WIFI_SSID set"
        ));
    }
    info!("Wifi connecting to {ssid} with pass ****");
    let mut sssid: String<32> = String::new();
    sssid
        .push_str(ssid)
        .map_err(|_| anyhow!("wifi ssid longer than 32 bytes"))?;
    let mut spassword: String<64> = String::new();
    spassword
        .push_str(password)
        .map_err(|_| anyhow!("wifi password longer than 64 bytes"))?;
    let auth_method = if password.is_empty() {
        AuthMethod::None
    } else {
        AuthMethod::WPA2Personal
    };
    let wifi_configuration = Configuration::Client(ClientConfiguration {
        ssid: sssid,
        auth_method,
        password: spassword,
        ..Default::default()
    });

    wifi.set_configuration(&wifi_configuration)?;

    wifi.start().await?;
    info!("Wifi started");

    wifi.connect().await?;
    info!("Wifi connected");

    wifi.wait_netif_up().await?;
    info!("Wifi netif up");

    let ip_info = wifi.wifi().sta_netif().get_ip_info()?;

    info!("Wifi DHCP info: {:?}", ip_info);

    Ok(ip_info)
}
