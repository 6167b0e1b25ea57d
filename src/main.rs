use std::sync::Arc;

use log::warn;

use turnstile::{
    init_stdout_logger, Api, Config, HandlerResult, Level, Params, Request, Response, Server,
    VerbObject,
};

const CONFIG_FILE: &str = "gateway.toml";
const LOG_BUFFER_SIZE: usize = 10;

fn main() {
    init_stdout_logger(LOG_BUFFER_SIZE, Level::Info).unwrap();

    let config = match Config::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}. using default config", e);
            Config::default()
        }
    };

    let mut api = Api::new();
    set_up_routes(&mut api);

    let mut server = Server::new(&config, Arc::new(api)).unwrap();
    server.start().unwrap();
}

fn set_up_routes(api: &mut Api) {
    api.route(
        "/home",
        |_req: &Request, res: &mut Response, _params: &Params| {
            res.body = "This is Home".to_string();
            Ok(None)
        },
    )
    .unwrap();

    api.route(
        "/hello/{name}",
        |_req: &Request, _res: &mut Response, params: &Params| {
            Ok(Some(format!("Hello, {}", params["name"])))
        },
    )
    .unwrap();

    api.register_object(
        "/book",
        VerbObject::new()
            .on(
                "get",
                |_req: &Request, _res: &mut Response, _params: &Params| {
                    Ok(Some("Books Page".to_string()))
                },
            )
            .on(
                "post",
                |_req: &Request, _res: &mut Response, _params: &Params| {
                    Ok(Some("Endpoint to create a book".to_string()))
                },
            ),
    )
    .unwrap();

    api.register("/handler1", handler1, "get").unwrap();
}

fn handler1(_req: &Request, res: &mut Response, _params: &Params) -> HandlerResult {
    res.body = "handler1".to_string();
    Ok(None)
}
