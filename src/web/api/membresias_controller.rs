use crate::backend::session::BackendSession;
use crate::error::ApplicationError;
use crate::membership::gateway::MembershipGateway;
use crate::membership::notifier::{AlertLog, Notifier};
use crate::membership::renewal_flow::RenewalFlow;
use crate::tools::today;
use crate::web::error::{ApiResult, error_response, status_of_backend_error};
use dto::renewal::{RenewalChoice, RenewalOptions, RenewalOutcome};
use log::debug;
use rocket::http::Status;
use rocket::serde::json::{Json, Value, json};

/// Load the renewal flow of a student: the step to start from, the current membership and the plans.
/// A loading failure is reported through the alerts, not as an error.
/// Summarizing or submitting a renewal, on the contrary, stops when loading fails.
#[get("/membresias/alumno/<alumno_id>/renovacion")]
pub async fn load_renewal(session: BackendSession, alumno_id: &str) -> ApiResult {
    let notifier = AlertLog::default();
    let mut flow = RenewalFlow::new(&session, &notifier, alumno_id, today());
    flow.load()
        .await
        .map_err(ApplicationError::from)
        .map_err(error_response)?;

    let (step, current_membership, plans) = flow.into_parts();
    let options = RenewalOptions::new(step, current_membership, plans, notifier.into_alerts());
    Ok(json!(options))
}

/// What the renewal would be, without submitting it: plan, start and end dates.
#[post(
    "/membresias/renovacion/resumen",
    format = "application/json",
    data = "<choice>"
)]
pub async fn summarize_renewal(session: BackendSession, choice: Json<RenewalChoice>) -> ApiResult {
    let notifier = AlertLog::default();
    let mut flow = RenewalFlow::new(&session, &notifier, choice.alumno_id(), today());
    flow.load()
        .await
        .map_err(ApplicationError::from)
        .map_err(error_response)?;
    ensure_fully_loaded(&flow)?;
    flow.choose(choice.plan_id().as_deref())
        .map_err(ApplicationError::from)
        .map_err(error_response)?;

    let summary = flow.summary();
    let step = flow.step();
    let outcome = RenewalOutcome::new(step, summary, None, notifier.into_alerts());
    Ok(json!(outcome))
}

/// Submit a renewal. Whatever happens, the outcome tells the step the flow ended at and the alerts.
/// An already scheduled renewal answers `409 Conflict`.
#[post("/membresias/renovar", format = "application/json", data = "<choice>")]
pub async fn renew(
    session: BackendSession,
    choice: Json<RenewalChoice>,
) -> ApiResult<(Status, Value)> {
    let notifier = AlertLog::default();
    let mut flow = RenewalFlow::new(&session, &notifier, choice.alumno_id(), today());
    flow.load()
        .await
        .map_err(ApplicationError::from)
        .map_err(error_response)?;
    ensure_fully_loaded(&flow)?;
    flow.choose(choice.plan_id().as_deref())
        .map_err(ApplicationError::from)
        .map_err(error_response)?;
    let membership = flow
        .submit()
        .await
        .map_err(ApplicationError::from)
        .map_err(error_response)?;

    let status = flow
        .submission_error()
        .map(status_of_backend_error)
        .unwrap_or(Status::Ok);
    let summary = flow.summary();
    let step = flow.step();
    let outcome = RenewalOutcome::new(step, summary, membership, notifier.into_alerts());
    Ok((status, json!(outcome)))
}

/// Without the current membership or the plans, the renewal dates and the plan can't be trusted.
fn ensure_fully_loaded<G: MembershipGateway, N: Notifier>(
    flow: &RenewalFlow<'_, G, N>,
) -> ApiResult<()> {
    match flow.load_error() {
        None => Ok(()),
        Some(error) => {
            debug!("Renewal stopped, the flow could not be loaded [error: {error:?}]");
            Err(error_response(ApplicationError::from(error.clone())))
        }
    }
}
