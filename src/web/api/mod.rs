pub mod alumnos_controller;
pub mod dashboard_controller;
pub mod membresias_controller;
pub mod productos_controller;
pub mod server;
pub mod session_controller;
