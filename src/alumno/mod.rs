use crate::alumno::validation::validate_alumno_form;
use crate::backend::alumnos::{create_alumno, retrieve_alumnos, update_alumno};
use crate::backend::membresias::{
    retrieve_active_membership_of_alumno, retrieve_active_memberships,
    retrieve_memberships_of_alumno,
};
use crate::backend::session::BackendSession;
use crate::error::ApplicationError::Invalid;
use crate::error::Result;
use crate::membership::status::with_membership_status;
use chrono::NaiveDate;
use dto::alert::Alert;
use dto::alumno::{AlumnoConEstado, AlumnoForm};
use dto::membership_status::MembershipStatus::NoMembership;
use dto::membership_status::{
    MembershipStatus, compute_membership_status, compute_status_of_membership,
};
use dto::membresia::Membresia;
use log::{debug, warn};
use rocket::tokio;

pub const STATUS_UNAVAILABLE_MESSAGE: &str =
    "Alumno actualizado, pero no se pudo obtener el estado de su membresía";

pub mod validation;

/// Every student, with the status of their membership.
pub async fn list_alumnos(session: &BackendSession, today: &NaiveDate) -> Result<Vec<AlumnoConEstado>> {
    let (alumnos, memberships) = tokio::join!(
        retrieve_alumnos(session.client(), session.base_url()),
        retrieve_active_memberships(session.client(), session.base_url())
    );
    Ok(with_membership_status(alumnos?, &memberships?, today))
}

/// Validate then create a student. A new student has no membership yet.
pub async fn register_alumno(session: &BackendSession, form: AlumnoForm) -> Result<AlumnoConEstado> {
    let form = form.normalized();
    let existing_alumnos = retrieve_alumnos(session.client(), session.base_url()).await?;
    let errors = validate_alumno_form(&form, &existing_alumnos, None);
    if !errors.is_empty() {
        debug!("Student refused [errors: {errors:?}]");
        return Err(Invalid(errors));
    }

    let alumno = create_alumno(session.client(), session.base_url(), &form).await?;
    Ok(AlumnoConEstado::new(alumno, NoMembership))
}

pub async fn modify_alumno(
    session: &BackendSession,
    alumno_id: &str,
    form: AlumnoForm,
    today: &NaiveDate,
) -> Result<AlumnoConEstado> {
    let form = form.normalized();
    let existing_alumnos = retrieve_alumnos(session.client(), session.base_url()).await?;
    let errors = validate_alumno_form(&form, &existing_alumnos, Some(alumno_id));
    if !errors.is_empty() {
        debug!("Student update refused [alumno: {alumno_id}, errors: {errors:?}]");
        return Err(Invalid(errors));
    }

    let alumno = update_alumno(session.client(), session.base_url(), alumno_id, &form).await?;
    // Saved from here on: a failing status lookup only raises an alert.
    match membership_status_of(session, alumno_id, today).await {
        Ok(status) => Ok(AlumnoConEstado::new(alumno, status)),
        Err(error) => {
            warn!("Can't derive status of updated student [alumno: {alumno_id}, error: {error:?}]");
            Ok(AlumnoConEstado::new(alumno, NoMembership)
                .with_alert(Alert::error(STATUS_UNAVAILABLE_MESSAGE)))
        }
    }
}

/// Status of a single student, falling back to the list of active memberships
/// when the student's own active membership can't be fetched.
async fn membership_status_of(
    session: &BackendSession,
    alumno_id: &str,
    today: &NaiveDate,
) -> crate::backend::error::Result<MembershipStatus> {
    match retrieve_active_membership_of_alumno(session.client(), session.base_url(), alumno_id)
        .await
    {
        Ok(membership) => Ok(compute_status_of_membership(membership.as_ref(), today)),
        Err(error) => {
            debug!("Falling back to active memberships [alumno: {alumno_id}, error: {error:?}]");
            let memberships =
                retrieve_active_memberships(session.client(), session.base_url()).await?;
            Ok(compute_membership_status(alumno_id, &memberships, today))
        }
    }
}

pub async fn membership_history(session: &BackendSession, alumno_id: &str) -> Result<Vec<Membresia>> {
    Ok(retrieve_memberships_of_alumno(session.client(), session.base_url(), alumno_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alumno::validation::NOMBRE_COMPLETO;
    use crate::backend::alumnos::tests::{setup_alumno_creation, setup_alumnos_retrieval};
    use crate::backend::error::BackendError::{ConnectionFailed, UnexpectedStatus};
    use crate::backend::membresias::tests::{
        setup_active_membership_of_alumno, setup_active_memberships,
    };
    use crate::backend::session::tests::session_onto;
    use crate::error::ApplicationError::Backend;
    use dto::alumno::tests::{ALUMNO_AS_JSON, ALUMNO_ID, juan_perez, maria_lopez};
    use dto::membership_status::MembershipStatus::{AboutToExpire, Active};
    use dto::membresia::tests::{membresia_juan, membresia_maria};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 8).unwrap()
    }

    fn form_named(name: &str) -> AlumnoForm {
        AlumnoForm::new(
            name.to_owned(),
            Some(*juan_perez().fecha_nacimiento()),
            Some(*juan_perez().fecha_ingreso()),
        )
    }

    #[async_test]
    async fn should_list_alumnos_with_status() {
        let mock_server = MockServer::start().await;
        setup_alumnos_retrieval(&mock_server).await;
        setup_active_memberships(
            &mock_server,
            &[
                membresia_juan(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()),
                membresia_maria(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()),
            ],
        )
        .await;

        let alumnos = list_alumnos(&session_onto(&mock_server), &today()).await.unwrap();

        assert_eq!(
            vec![
                AlumnoConEstado::new(juan_perez(), AboutToExpire),
                AlumnoConEstado::new(maria_lopez(), Active)
            ],
            alumnos
        );
    }

    #[async_test]
    async fn should_fail_to_list_alumnos_when_memberships_are_unavailable() {
        let mock_server = MockServer::start().await;
        setup_alumnos_retrieval(&mock_server).await;
        Mock::given(method("GET"))
            .and(path("/membresias/activas"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let error = list_alumnos(&session_onto(&mock_server), &today())
            .await
            .unwrap_err();

        assert_eq!(Backend(UnexpectedStatus(500)), error);
    }

    #[async_test]
    async fn should_register_alumno_with_normalized_name() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/alumnos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;
        setup_alumno_creation(&mock_server).await;

        let alumno = register_alumno(&session_onto(&mock_server), form_named("  Juan   Pérez "))
            .await
            .unwrap();

        assert_eq!(AlumnoConEstado::new(juan_perez(), NoMembership), alumno);
    }

    #[async_test]
    async fn should_not_send_invalid_alumno() {
        let mock_server = MockServer::start().await;
        setup_alumnos_retrieval(&mock_server).await;
        Mock::given(method("POST"))
            .and(path("/alumnos"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let error = register_alumno(&session_onto(&mock_server), form_named("juan perez"))
            .await
            .unwrap_err();

        match error {
            Invalid(errors) => assert!(errors.get(NOMBRE_COMPLETO).is_some()),
            error => panic!("Unexpected error {error:?}"),
        }
    }

    #[async_test]
    async fn should_modify_alumno_and_compute_status() {
        let mock_server = MockServer::start().await;
        setup_alumnos_retrieval(&mock_server).await;
        Mock::given(method("PUT"))
            .and(path(format!("/alumnos/{ALUMNO_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!(
                r#"{{"msg": "Alumno actualizado", "alumno": {ALUMNO_AS_JSON}}}"#
            )))
            .mount(&mock_server)
            .await;
        let membership = membresia_juan(NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());
        setup_active_membership_of_alumno(&mock_server, ALUMNO_ID, Some(&membership)).await;

        let alumno = modify_alumno(
            &session_onto(&mock_server),
            ALUMNO_ID,
            form_named("Juan Pérez"),
            &today(),
        )
        .await
        .unwrap();

        assert_eq!(AlumnoConEstado::new(juan_perez(), Active), alumno);
    }

    async fn setup_alumno_update(mock_server: &MockServer) {
        Mock::given(method("PUT"))
            .and(path(format!("/alumnos/{ALUMNO_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!(
                r#"{{"msg": "Alumno actualizado", "alumno": {ALUMNO_AS_JSON}}}"#
            )))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    async fn setup_failing_active_membership_of_alumno(mock_server: &MockServer) {
        Mock::given(method("GET"))
            .and(path(format!("/membresias/alumno/{ALUMNO_ID}/activa")))
            .respond_with(ResponseTemplate::new(500))
            .mount(mock_server)
            .await;
    }

    #[async_test]
    async fn should_modify_alumno_with_status_from_active_memberships() {
        let mock_server = MockServer::start().await;
        setup_alumnos_retrieval(&mock_server).await;
        setup_alumno_update(&mock_server).await;
        setup_failing_active_membership_of_alumno(&mock_server).await;
        let membership = membresia_juan(NaiveDate::from_ymd_opt(2025, 10, 12).unwrap());
        setup_active_memberships(&mock_server, &[membership]).await;

        let alumno = modify_alumno(
            &session_onto(&mock_server),
            ALUMNO_ID,
            form_named("Juan Pérez"),
            &today(),
        )
        .await
        .unwrap();

        assert_eq!(AlumnoConEstado::new(juan_perez(), AboutToExpire), alumno);
    }

    #[async_test]
    async fn should_return_saved_alumno_with_alert_when_status_is_unavailable() {
        let mock_server = MockServer::start().await;
        setup_alumnos_retrieval(&mock_server).await;
        setup_alumno_update(&mock_server).await;
        setup_failing_active_membership_of_alumno(&mock_server).await;
        Mock::given(method("GET"))
            .and(path("/membresias/activas"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;

        let alumno = modify_alumno(
            &session_onto(&mock_server),
            ALUMNO_ID,
            form_named("Juan Pérez"),
            &today(),
        )
        .await
        .unwrap();

        assert_eq!(&juan_perez(), alumno.alumno());
        assert_eq!(
            &vec![Alert::error(STATUS_UNAVAILABLE_MESSAGE)],
            alumno.alertas()
        );
    }

    #[async_test]
    async fn should_fail_to_register_when_backend_is_unreachable() {
        let session = BackendSession::new(
            crate::tools::web::build_client().unwrap(),
            "http://127.0.0.1:1".to_owned(),
            dto::session::UserSession::new(3, 1),
        );

        let error = register_alumno(&session, form_named("Ana Sofía")).await.unwrap_err();

        assert_eq!(Backend(ConnectionFailed), error);
    }
}
