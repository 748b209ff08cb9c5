use crate::backend::error::BackendError;
use crate::error::ApplicationError;
use crate::membership::error::FlowError;
use crate::membership::renewal_flow::SCHEDULED_RENEWAL_MESSAGE;
use crate::tools::log_error;
use log::debug;
use rocket::http::Status;
use rocket::serde::json::{Value, json};

/// What controllers answer: a JSON body, or an error status along with a JSON body explaining it.
pub type ApiResult<T = Value> = Result<T, (Status, Value)>;

const INVALID_FORM_MESSAGE: &str = "Hay campos con errores.";
const SESSION_EXPIRED_MESSAGE: &str = "La sesión ha expirado, inicia sesión de nuevo.";
const WRONG_CREDENTIALS_MESSAGE: &str = "Credenciales inválidas.";
const NOT_FOUND_MESSAGE: &str = "El recurso solicitado no existe.";
const BACKEND_FAILURE_MESSAGE: &str = "No se pudo comunicar con el servidor.";
const INVALID_STEP_MESSAGE: &str = "La operación no está permitida en este paso.";
const UNKNOWN_PLAN_MESSAGE: &str = "El plan seleccionado no existe.";
const INTERNAL_ERROR_MESSAGE: &str = "Ocurrió un error interno.";

pub fn status_of_backend_error(error: &BackendError) -> Status {
    match error {
        BackendError::Unauthorized | BackendError::WrongCredentials => Status::Unauthorized,
        BackendError::NotFound => Status::NotFound,
        BackendError::ScheduledRenewalConflict(_) => Status::Conflict,
        BackendError::Rejected(_) => Status::BadRequest,
        BackendError::InvalidUrl
        | BackendError::ConnectionFailed
        | BackendError::UnexpectedStatus(_)
        | BackendError::MalformedResponse => Status::BadGateway,
    }
}

pub fn status_of(error: &ApplicationError) -> Status {
    match error {
        ApplicationError::Invalid(_) | ApplicationError::Flow(_) => Status::UnprocessableEntity,
        ApplicationError::Backend(error) => status_of_backend_error(error),
        ApplicationError::Tools(_) => Status::InternalServerError,
    }
}

fn message_of_backend_error(error: &BackendError) -> &str {
    match error {
        BackendError::Unauthorized => SESSION_EXPIRED_MESSAGE,
        BackendError::WrongCredentials => WRONG_CREDENTIALS_MESSAGE,
        BackendError::NotFound => NOT_FOUND_MESSAGE,
        BackendError::ScheduledRenewalConflict(_) => SCHEDULED_RENEWAL_MESSAGE,
        BackendError::Rejected(message) => message,
        _ => BACKEND_FAILURE_MESSAGE,
    }
}

/// Log the error, then turn it into a response. Field errors are sent along under `errores`.
pub fn error_response(error: ApplicationError) -> (Status, Value) {
    let status = status_of(&error);
    let body = match &error {
        ApplicationError::Invalid(errors) => {
            json!({"message": INVALID_FORM_MESSAGE, "errores": errors})
        }
        ApplicationError::Backend(backend_error) => {
            json!({"message": message_of_backend_error(backend_error)})
        }
        ApplicationError::Flow(FlowError::UnknownPlan(_)) => {
            json!({"message": UNKNOWN_PLAN_MESSAGE})
        }
        ApplicationError::Flow(FlowError::InvalidTransition { .. }) => {
            json!({"message": INVALID_STEP_MESSAGE})
        }
        ApplicationError::Tools(_) => json!({"message": INTERNAL_ERROR_MESSAGE}),
    };
    if status.code >= 500 {
        log_error(error);
    } else {
        debug!("Request refused [status: {status}, error: {error:?}]");
    }
    (status, body)
}

#[catch(401)]
pub fn unauthorized() -> Value {
    json!({"message": SESSION_EXPIRED_MESSAGE})
}
