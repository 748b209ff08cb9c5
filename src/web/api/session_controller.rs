use crate::backend::configuration::BackendConfiguration;
use crate::backend::session::{BackendSession, open_session, validate_token};
use crate::error::ApplicationError;
use crate::tools::log_error_and_return;
use crate::tools::web::build_client;
use crate::web::authentication::SESSION_COOKIE;
use crate::web::error::{ApiResult, error_response};
use crate::web::session_storage::SessionStorage;
use dto::session::Credentials;
use log::debug;
use rocket::State;
use rocket::http::{Cookie, CookieJar, Status};
use rocket::serde::json::{Json, Value, json};
use rocket::time::Duration;
use std::sync::Mutex;
use uuid::Uuid;

/// Try and log the user onto the backend.
/// If the login operation succeeds,
/// then a new UUID is created and the backend session is stored with this UUID.
/// The UUID is returned to the caller through a private cookie, so that it is their new access token.
#[post("/login", format = "application/json", data = "<credentials>")]
pub async fn login(
    configuration: &State<BackendConfiguration>,
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
    credentials: Json<Credentials>,
) -> ApiResult {
    let client = build_client()
        .map_err(ApplicationError::from)
        .map_err(error_response)?;
    let session = open_session(client, configuration.base_url(), &credentials)
        .await
        .map_err(ApplicationError::from)
        .map_err(error_response)?;
    let user = json!(session.user());

    let uuid = Uuid::new_v4().to_string();
    let mut storage = session_storage
        .lock()
        .map_err(log_error_and_return((Status::InternalServerError, json!({}))))?;
    storage.store(uuid.clone(), session);
    let cookie = Cookie::build((SESSION_COOKIE.to_owned(), uuid))
        .max_age(Duration::hours(12))
        .build();
    cookie_jar.add_private(cookie);
    Ok(user)
}

/// Check that the backend still accepts the session, and tell who the user is.
#[get("/session")]
pub async fn current_session(session: BackendSession) -> ApiResult {
    let user = validate_token(session.client(), session.base_url())
        .await
        .map_err(ApplicationError::from)
        .map_err(error_response)?;
    Ok(json!(user))
}

/// Forget the session, whether it exists or not.
#[post("/logout")]
pub fn logout(
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
) -> Result<Status, Status> {
    if let Some(cookie) = get_session_cookie_from_jar(cookie_jar) {
        let mut storage = session_storage
            .lock()
            .map_err(log_error_and_return(Status::InternalServerError))?;
        if storage.remove(cookie.value()).is_some() {
            debug!("Session closed");
        }
    }
    cookie_jar.remove_private(SESSION_COOKIE);
    Ok(Status::Ok)
}

#[cfg(not(test))]
fn get_session_cookie_from_jar(cookie_jar: &CookieJar<'_>) -> Option<Cookie<'static>> {
    cookie_jar.get_private(SESSION_COOKIE)
}

/// Same trick as the authentication guard: tests send plain cookies.
#[cfg(test)]
fn get_session_cookie_from_jar(cookie_jar: &CookieJar<'_>) -> Option<Cookie<'static>> {
    cookie_jar.get_pending(SESSION_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::session::tests::{credentials, setup_login};
    use crate::web::authentication::tests::{SESSION_UUID, authenticated_rocket};
    use reqwest::header::CONTENT_TYPE;
    use rocket::http::{ContentType, Header};
    use rocket::local::asynchronous::Client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn login_rocket(mock_server: &MockServer) -> rocket::Rocket<rocket::Build> {
        rocket::build()
            .manage(BackendConfiguration::new(mock_server.uri()))
            .manage(Mutex::new(SessionStorage::<BackendSession>::default()))
            .mount("/", routes![login])
    }

    #[async_test]
    async fn should_login() {
        let mock_server = MockServer::start().await;
        setup_login(&mock_server).await;

        let client = Client::tracked(login_rocket(&mock_server)).await.unwrap();
        let request = client
            .post("/login")
            .body(json!(credentials()).to_string())
            .header(Header::new(
                CONTENT_TYPE.to_string(),
                ContentType::JSON.to_string(),
            ));

        let response = request.dispatch().await;
        assert_eq!(Status::Ok, response.status());
        assert!(response.cookies().get_private(SESSION_COOKIE).is_some());
        assert_eq!(
            json!({"IdUsuario": 3, "IdRol": 1}),
            response.into_json::<Value>().await.unwrap()
        );
    }

    #[async_test]
    async fn should_fail_to_login_with_wrong_credentials() {
        let mock_server = MockServer::start().await;
        setup_login(&mock_server).await;

        let client = Client::tracked(login_rocket(&mock_server)).await.unwrap();
        let wrong_credentials = Credentials::new("admin@dojo.mx".to_owned(), "nope".to_owned());
        let request = client
            .post("/login")
            .body(json!(wrong_credentials).to_string())
            .header(Header::new(
                CONTENT_TYPE.to_string(),
                ContentType::JSON.to_string(),
            ));

        let response = request.dispatch().await;
        assert_eq!(Status::Unauthorized, response.status());
        assert!(response.cookies().get_private(SESSION_COOKIE).is_none());
    }

    #[async_test]
    async fn should_fail_to_login_when_backend_is_down() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = Client::tracked(login_rocket(&mock_server)).await.unwrap();
        let request = client
            .post("/login")
            .body(json!(credentials()).to_string())
            .header(Header::new(
                CONTENT_TYPE.to_string(),
                ContentType::JSON.to_string(),
            ));

        let response = request.dispatch().await;
        assert_eq!(Status::BadGateway, response.status());
    }

    #[async_test]
    async fn should_retrieve_current_session() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/validate-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"IdUsuario": 3, "IdRol": 1}"#))
            .mount(&mock_server)
            .await;
        let (rocket, cookie) = authenticated_rocket(&mock_server);
        let client = Client::tracked(rocket.mount("/", routes![current_session]))
            .await
            .unwrap();

        let response = client.get("/session").cookie(cookie).dispatch().await;

        assert_eq!(Status::Ok, response.status());
    }

    #[async_test]
    async fn should_refuse_current_session_when_backend_token_expired() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/validate-token"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;
        let (rocket, cookie) = authenticated_rocket(&mock_server);
        let client = Client::tracked(rocket.mount("/", routes![current_session]))
            .await
            .unwrap();

        let response = client.get("/session").cookie(cookie).dispatch().await;

        assert_eq!(Status::Unauthorized, response.status());
    }

    #[async_test]
    async fn should_logout() {
        let mock_server = MockServer::start().await;
        let (rocket, cookie) = authenticated_rocket(&mock_server);
        let client = Client::tracked(rocket.mount("/", routes![logout, current_session]))
            .await
            .unwrap();

        let response = client.post("/logout").cookie(cookie.clone()).dispatch().await;
        assert_eq!(Status::Ok, response.status());

        let storage = client
            .rocket()
            .state::<Mutex<SessionStorage>>()
            .unwrap();
        assert!(storage.lock().unwrap().get(SESSION_UUID).is_none());
    }
}
