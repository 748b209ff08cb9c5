pub mod alert;
pub mod alumno;
pub mod dashboard;
pub mod date;
pub mod membresia;
pub mod membership_status;
pub mod plan;
pub mod producto;
pub mod renewal;
pub mod session;
pub mod validation;
