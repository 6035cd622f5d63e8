use std::sync::{Arc, Mutex};

use {
    embedded_svc::http::server::Request,
    esp_idf_svc::{
        http::{
            server::{Configuration, EspHttpConnection, EspHttpServer},
            Method,
        },
        io::Write,
    },
    log::info,
};

use crate::{
    api::{self, Reply, CONTROL_GPIO_PATH, PINS_PATH},
    config::{HTTP_PORT, HTTP_STACK_SIZE, MAX_REQUEST_BODY},
    controller::PinController,
    error::RequestFormatError,
    hardware::DigitalOutputs,
};

pub fn start<H>(controller: Arc<Mutex<PinController<H>>>) -> anyhow::Result<EspHttpServer<'static>>
where
    H: DigitalOutputs + Send + 'static,
{
    let server_configuration = Configuration {
        http_port: HTTP_PORT,
        stack_size: HTTP_STACK_SIZE,
        ..Default::default()
    };

    let mut server = EspHttpServer::new(&server_configuration)?;

    let control = controller.clone();
    server.fn_handler(
        CONTROL_GPIO_PATH,
        Method::Post,
        move |mut req| -> anyhow::Result<()> {
            info!("handling POST {}", req.uri());
            let reply = match api::read_body(&mut req, MAX_REQUEST_BODY)? {
                Some(body) => api::control_gpio(&control, &body),
                None => api::request_error(RequestFormatError(format!(
                    "body exceeds {MAX_REQUEST_BODY} bytes"
                ))),
            };
            send(req, reply)
        },
    )?;

    server.fn_handler(PINS_PATH, Method::Get, move |req| -> anyhow::Result<()> {
        info!("handling GET {}", req.uri());
        let reply = api::list_pins(&controller);
        send(req, reply)
    })?;

    info!("http server listening on 0.0.0.0:{HTTP_PORT}");
    Ok(server)
}

fn send(req: Request<&mut EspHttpConnection<'_>>, reply: Reply) -> anyhow::Result<()> {
    let mut response = req.into_response(
        reply.status,
        Some(reply.message),
        &[("content-type", "application/json")],
    )?;
    response.write_all(reply.body.as_bytes())?;
    response.flush()?;
    Ok(())
}
