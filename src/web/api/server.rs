use crate::backend::configuration::BackendConfiguration;
use crate::backend::session::BackendSession;
use crate::inventory::configuration::InventoryConfiguration;
use crate::web::api::{
    alumnos_controller, dashboard_controller, membresias_controller, productos_controller,
    session_controller,
};
use crate::web::error::unauthorized;
use crate::web::server::Server;
use crate::web::session_storage::SessionStorage;
use log::info;
use rocket::{Build, Rocket};
use std::sync::Mutex;

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    fn initialize_managed_states(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let backend_configuration = BackendConfiguration::from_args();
        info!("Forwarding to backend {}", backend_configuration.base_url());

        rocket_build
            .manage(backend_configuration)
            .manage(InventoryConfiguration::from_args())
            .manage(Mutex::new(SessionStorage::<BackendSession>::default()))
    }

    fn mount_routes(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .mount(
                "/api/",
                routes![
                    session_controller::login,
                    session_controller::current_session,
                    session_controller::logout,
                    alumnos_controller::retrieve_alumnos,
                    alumnos_controller::create_alumno,
                    alumnos_controller::update_alumno,
                    alumnos_controller::retrieve_membership_history,
                    membresias_controller::load_renewal,
                    membresias_controller::summarize_renewal,
                    membresias_controller::renew,
                    productos_controller::retrieve_productos,
                    productos_controller::create_producto,
                    productos_controller::update_producto,
                    productos_controller::delete_producto,
                    productos_controller::add_stock,
                    dashboard_controller::retrieve_dashboard,
                ],
            )
            .register("/api/", catchers![unauthorized])
    }
}
