use crate::backend::alumnos::retrieve_alumnos;
use crate::backend::membresias::retrieve_active_memberships;
use crate::backend::productos::retrieve_productos;
use crate::backend::session::BackendSession;
use crate::error::Result;
use crate::inventory::low_stock;
use chrono::NaiveDate;
use dto::alumno::Alumno;
use dto::dashboard::{DashboardSummary, RenewalAlert};
use dto::membership_status::MembershipStatus::{AboutToExpire, Active, Expired, NoMembership};
use dto::membership_status::{compute_membership_status, days_remaining};
use dto::membresia::Membresia;
use dto::producto::Producto;
use rocket::tokio;

pub async fn build_dashboard(
    session: &BackendSession,
    today: &NaiveDate,
    low_stock_threshold: u32,
) -> Result<DashboardSummary> {
    let (alumnos, memberships, productos) = tokio::join!(
        retrieve_alumnos(session.client(), session.base_url()),
        retrieve_active_memberships(session.client(), session.base_url()),
        retrieve_productos(session.client(), session.base_url())
    );
    Ok(compute_dashboard(
        &alumnos?,
        &memberships?,
        &productos?,
        today,
        low_stock_threshold,
    ))
}

pub fn compute_dashboard(
    alumnos: &[Alumno],
    active_memberships: &[Membresia],
    productos: &[Producto],
    today: &NaiveDate,
    low_stock_threshold: u32,
) -> DashboardSummary {
    let mut alumnos_activos = 0;
    let mut sin_membresia = 0;
    let mut alertas_renovacion = vec![];

    for alumno in alumnos {
        match compute_membership_status(alumno.alumno_id(), active_memberships, today) {
            Active => alumnos_activos += 1,
            AboutToExpire => {
                alumnos_activos += 1;
                if let Some(membership) = active_memberships
                    .iter()
                    .find(|membership| membership.alumno_id() == alumno.alumno_id())
                {
                    alertas_renovacion.push(RenewalAlert::new(
                        alumno.alumno_id().to_owned(),
                        alumno.nombre_completo().to_owned(),
                        membership.plan().nombre().to_owned(),
                        *membership.fecha_fin(),
                        days_remaining(membership.fecha_fin(), today),
                    ));
                }
            }
            NoMembership => sin_membresia += 1,
            Expired => {}
        }
    }
    alertas_renovacion.sort_by(|left, right| {
        left.dias_restantes()
            .cmp(right.dias_restantes())
            .then_with(|| left.nombre_completo().cmp(right.nombre_completo()))
    });

    DashboardSummary::new(
        alumnos_activos,
        alertas_renovacion.len(),
        sin_membresia,
        alertas_renovacion,
        low_stock(productos, low_stock_threshold),
    )
}
