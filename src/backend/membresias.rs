use crate::backend::error::BackendError::NotFound;
use crate::backend::error::Result;
use crate::backend::{build_url, read_json, send};
use dto::membresia::{Membresia, RenovacionResponse, RenovarMembresia};
use reqwest::Client;

const MEMBRESIAS: &str = "membresias";
const ALUMNO: &str = "alumno";

/// Retrieve the active membership of every student having one.
pub async fn retrieve_active_memberships(client: &Client, base_url: &str) -> Result<Vec<Membresia>> {
    let url = build_url(base_url, &[MEMBRESIAS, "activas"])?;
    let response = send(client.get(url)).await?;
    read_json(response).await
}

/// Retrieve all memberships of a student, past and current.
pub async fn retrieve_memberships_of_alumno(
    client: &Client,
    base_url: &str,
    alumno_id: &str,
) -> Result<Vec<Membresia>> {
    let url = build_url(base_url, &[MEMBRESIAS, ALUMNO, alumno_id])?;
    let response = send(client.get(url)).await?;
    read_json(response).await
}

/// The backend answers `404 Not Found` when the student has no active membership.
pub async fn retrieve_active_membership_of_alumno(
    client: &Client,
    base_url: &str,
    alumno_id: &str,
) -> Result<Option<Membresia>> {
    let url = build_url(base_url, &[MEMBRESIAS, ALUMNO, alumno_id, "activa"])?;
    match send(client.get(url)).await {
        Ok(response) => read_json(response).await.map(Some),
        Err(NotFound) => Ok(None),
        Err(error) => Err(error),
    }
}

/// Renew the membership of a student, or assign a first one.
pub async fn renew_membership(
    client: &Client,
    base_url: &str,
    renewal: &RenovarMembresia,
) -> Result<RenovacionResponse> {
    let url = build_url(base_url, &[MEMBRESIAS, "renovar"])?;
    let response = send(client.post(url).json(renewal)).await?;
    read_json(response).await
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::backend::error::BackendError::{ScheduledRenewalConflict, UnexpectedStatus};
    use crate::tools::web::build_client;
    use chrono::NaiveDate;
    use dto::alumno::tests::ALUMNO_ID;
    use dto::membresia::tests::{MEMBRESIA_AS_JSON, membresia_juan};
    use dto::plan::tests::PLAN_MENSUAL_ID;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const SCHEDULED_RENEWAL_REFUSAL: &str = r#"{"message": "El alumno ya tiene una renovación programada", "membresiaProgramada": {"membresia_id": "m-2"}}"#;

    /// Serialize the given memberships the way the backend does, with timestamps.
    pub fn as_backend_json(memberships: &[Membresia]) -> String {
        rocket::serde::json::to_string(&memberships).unwrap()
    }

    pub async fn setup_active_memberships(mock_server: &MockServer, memberships: &[Membresia]) {
        Mock::given(method("GET"))
            .and(path("/membresias/activas"))
            .respond_with(ResponseTemplate::new(200).set_body_string(as_backend_json(memberships)))
            .mount(mock_server)
            .await;
    }

    pub async fn setup_active_membership_of_alumno(
        mock_server: &MockServer,
        alumno_id: &str,
        membership: Option<&Membresia>,
    ) {
        let response = match membership {
            None => ResponseTemplate::new(404)
                .set_body_string(r#"{"message": "El alumno no tiene membresía activa"}"#),
            Some(membership) => ResponseTemplate::new(200)
                .set_body_string(rocket::serde::json::to_string(membership).unwrap()),
        };
        Mock::given(method("GET"))
            .and(path(format!("/membresias/alumno/{alumno_id}/activa")))
            .respond_with(response)
            .mount(mock_server)
            .await;
    }

    pub async fn setup_renewal(mock_server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/membresias/renovar"))
            .respond_with(response)
            .mount(mock_server)
            .await;
    }

    fn end_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()
    }

    #[async_test]
    async fn should_retrieve_active_memberships() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/membresias/activas"))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!("[{MEMBRESIA_AS_JSON}]")))
            .mount(&mock_server)
            .await;

        let memberships = retrieve_active_memberships(&build_client().unwrap(), &mock_server.uri())
            .await
            .unwrap();

        assert_eq!(vec![membresia_juan(end_date())], memberships);
    }

    #[async_test]
    async fn should_retrieve_memberships_of_alumno() {
        let mock_server = MockServer::start().await;
        let previous = dto::membresia::tests::inactive(membresia_juan(
            NaiveDate::from_ymd_opt(2025, 9, 14).unwrap(),
        ));
        let memberships = vec![previous, membresia_juan(end_date())];
        Mock::given(method("GET"))
            .and(path(format!("/membresias/alumno/{ALUMNO_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(as_backend_json(&memberships)))
            .mount(&mock_server)
            .await;

        let result =
            retrieve_memberships_of_alumno(&build_client().unwrap(), &mock_server.uri(), ALUMNO_ID)
                .await
                .unwrap();

        assert_eq!(memberships, result);
    }

    #[async_test]
    async fn should_retrieve_active_membership_of_alumno() {
        let mock_server = MockServer::start().await;
        let membership = membresia_juan(end_date());
        setup_active_membership_of_alumno(&mock_server, ALUMNO_ID, Some(&membership)).await;

        let result = retrieve_active_membership_of_alumno(
            &build_client().unwrap(),
            &mock_server.uri(),
            ALUMNO_ID,
        )
        .await
        .unwrap();

        assert_eq!(Some(membership), result);
    }

    #[async_test]
    async fn should_have_no_active_membership_when_not_found() {
        let mock_server = MockServer::start().await;
        setup_active_membership_of_alumno(&mock_server, ALUMNO_ID, None).await;

        let result = retrieve_active_membership_of_alumno(
            &build_client().unwrap(),
            &mock_server.uri(),
            ALUMNO_ID,
        )
        .await
        .unwrap();

        assert_eq!(None, result);
    }

    #[async_test]
    async fn should_fail_to_retrieve_active_membership_when_backend_fails() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/membresias/alumno/{ALUMNO_ID}/activa")))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let error = retrieve_active_membership_of_alumno(
            &build_client().unwrap(),
            &mock_server.uri(),
            ALUMNO_ID,
        )
        .await
        .unwrap_err();

        assert_eq!(UnexpectedStatus(500), error);
    }

    #[async_test]
    async fn should_renew_membership() {
        let mock_server = MockServer::start().await;
        let renewal = RenovarMembresia::new(ALUMNO_ID.to_owned(), PLAN_MENSUAL_ID.to_owned());
        Mock::given(method("POST"))
            .and(path("/membresias/renovar"))
            .and(body_json(&renewal))
            .respond_with(ResponseTemplate::new(201).set_body_string(format!(
                r#"{{"message": "Renovación programada", "membresia": {MEMBRESIA_AS_JSON}, "esProgramada": true, "tipoOperacion": "renovacion"}}"#
            )))
            .mount(&mock_server)
            .await;

        let response = renew_membership(&build_client().unwrap(), &mock_server.uri(), &renewal)
            .await
            .unwrap();

        assert!(response.es_programada());
        assert_eq!(&membresia_juan(end_date()), response.membresia());
    }

    #[async_test]
    async fn should_fail_to_renew_when_renewal_already_scheduled() {
        let mock_server = MockServer::start().await;
        setup_renewal(
            &mock_server,
            ResponseTemplate::new(400).set_body_string(SCHEDULED_RENEWAL_REFUSAL),
        )
        .await;

        let renewal = RenovarMembresia::new(ALUMNO_ID.to_owned(), PLAN_MENSUAL_ID.to_owned());
        let error = renew_membership(&build_client().unwrap(), &mock_server.uri(), &renewal)
            .await
            .unwrap_err();

        assert_eq!(
            ScheduledRenewalConflict("El alumno ya tiene una renovación programada".to_owned()),
            error
        );
    }
}
