use crate::alumno::{list_alumnos, membership_history, modify_alumno, register_alumno};
use crate::backend::session::BackendSession;
use crate::tools::today;
use crate::web::error::{ApiResult, error_response};
use dto::alumno::AlumnoForm;
use rocket::http::Status;
use rocket::serde::json::{Json, Value, json};

/// Every student along with their membership status (`Activo`, `Por Vencer`, `Vencido`, `Sin Membresia`).
#[get("/alumnos")]
pub async fn retrieve_alumnos(session: BackendSession) -> ApiResult {
    let alumnos = list_alumnos(&session, &today())
        .await
        .map_err(error_response)?;
    Ok(json!(alumnos))
}

#[post("/alumnos", format = "application/json", data = "<form>")]
pub async fn create_alumno(
    session: BackendSession,
    form: Json<AlumnoForm>,
) -> ApiResult<(Status, Value)> {
    let alumno = register_alumno(&session, form.into_inner())
        .await
        .map_err(error_response)?;
    Ok((Status::Created, json!(alumno)))
}

#[put("/alumnos/<alumno_id>", format = "application/json", data = "<form>")]
pub async fn update_alumno(
    session: BackendSession,
    alumno_id: &str,
    form: Json<AlumnoForm>,
) -> ApiResult {
    let alumno = modify_alumno(&session, alumno_id, form.into_inner(), &today())
        .await
        .map_err(error_response)?;
    Ok(json!(alumno))
}

#[get("/alumnos/<alumno_id>/membresias")]
pub async fn retrieve_membership_history(session: BackendSession, alumno_id: &str) -> ApiResult {
    let memberships = membership_history(&session, alumno_id)
        .await
        .map_err(error_response)?;
    Ok(json!(memberships))
}
