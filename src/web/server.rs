use rocket::{Build, Rocket};

use crate::tools::env_args::retrieve_parsed_arg_value;
use crate::web::api::server::ApiServer;

const PORT_ENV_ARG: &str = "--port";
const DEFAULT_PORT: u16 = 8000;

pub trait Server {
    fn initialize_managed_states(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
    fn mount_routes(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server() -> Rocket<Build> {
    let api_port = get_api_port();
    let rocket_build =
        rocket::build().configure(rocket::Config::figment().merge(("port", api_port)));

    let servers: Vec<Box<dyn Server>> = vec![Box::new(ApiServer::new())];
    servers.iter().fold(rocket_build, |rocket_build, server| {
        server.mount_routes(server.initialize_managed_states(rocket_build))
    })
}

fn get_api_port() -> u16 {
    retrieve_parsed_arg_value(PORT_ENV_ARG, DEFAULT_PORT)
}
