use dto::alumno::{Alumno, AlumnoConEstado};
use dto::membership_status::compute_membership_status;
use dto::membresia::Membresia;
use chrono::NaiveDate;

/// Attach to each student the status derived from the active memberships.
pub fn with_membership_status(
    alumnos: Vec<Alumno>,
    active_memberships: &[Membresia],
    today: &NaiveDate,
) -> Vec<AlumnoConEstado> {
    alumnos
        .into_iter()
        .map(|alumno| {
            let status = compute_membership_status(alumno.alumno_id(), active_memberships, today);
            AlumnoConEstado::new(alumno, status)
        })
        .collect()
}
