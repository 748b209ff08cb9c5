use crate::backend::session::BackendSession;
use crate::tools::log_error_and_return;
use crate::web::session_storage::SessionStorage;
use rocket::State;
use rocket::http::{Cookie, Status};
use rocket::outcome::{Outcome, try_outcome};
use rocket::request::{self, FromRequest, Request};
use std::sync::Mutex;

pub const SESSION_COOKIE: &str = "Gimnasio-Sesion";

/// If an endpoint requires the backend to be called on behalf of the user,
/// then its implementation should require a [BackendSession] parameter.
/// Rocket will summon this guard to ensure such a session exists.
/// If it doesn't, then the caller receives an Unauthorized status.
///
/// The session id is passed from the caller to the server using a `Gimnasio-Sesion` private cookie.
#[rocket::async_trait]
impl<'r> FromRequest<'r> for BackendSession {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        if let Some(cookie) = get_session_cookie(req) {
            let session_storage = try_outcome!(req.guard::<&State<Mutex<SessionStorage>>>().await);
            match session_storage.lock() {
                Ok(mut session_storage) => match session_storage.get(cookie.value()) {
                    None => Outcome::Forward(Status::Unauthorized),
                    Some(session) => Outcome::Success(session.clone()),
                },
                Err(error) => {
                    log_error_and_return(Outcome::Error((Status::InternalServerError, ())))(error)
                }
            }
        } else {
            Outcome::Forward(Status::Unauthorized)
        }
    }
}

#[cfg(not(test))]
pub(crate) fn get_session_cookie<'a>(req: &'a Request) -> Option<Cookie<'a>> {
    req.cookies().get_private(SESSION_COOKIE)
}

/// For tests, we have to ensure the cookie is there, pending or not. Otherwise, it doesn't work.
/// Thus, the need to hijack the normal method.
#[cfg(test)]
pub(crate) fn get_session_cookie<'a>(req: &'a Request) -> Option<Cookie<'a>> {
    req.cookies().get_pending(SESSION_COOKIE)
}
