use crate::web::server::build_server;
use rocket::{Build, Rocket};

mod api;
mod authentication;
mod error;
mod server;
mod session_storage;

pub fn start_servers() -> Rocket<Build> {
    build_server()
}
