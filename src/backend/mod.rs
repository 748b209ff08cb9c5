//! Connector to the gym REST backend.
//! Each function maps one backend route; all of them share the status mapping below.

use crate::backend::error::BackendError;
use crate::backend::error::BackendError::{
    ConnectionFailed, InvalidUrl, MalformedResponse, NotFound, Rejected,
    ScheduledRenewalConflict, Unauthorized, UnexpectedStatus,
};
use crate::backend::error::Result;
use crate::tools::log_message_and_return;
use log::debug;
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use rocket::serde::json::Value;
use serde::de::DeserializeOwned;

pub mod alumnos;
pub mod configuration;
pub mod error;
pub mod membresias;
pub mod planes;
pub mod productos;
pub mod session;

const SCHEDULED_RENEWAL_FLAG: &str = "membresiaProgramada";
const SCHEDULED_RENEWAL_MESSAGE: &str = "renovación programada";
const DEFAULT_REJECTION_MESSAGE: &str = "La solicitud fue rechazada.";

/// Append path segments to the backend base URL. Segments are percent-encoded.
pub(crate) fn build_url(base_url: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(log_message_and_return("Invalid backend URL", InvalidUrl))?;
    url.path_segments_mut()
        .map_err(log_message_and_return("Backend URL can't have a path", InvalidUrl))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send the request and turn any non-successful answer into an error.
pub(crate) async fn send(request: RequestBuilder) -> Result<Response> {
    let response = request.send().await.map_err(log_message_and_return(
        "Can't reach the backend",
        ConnectionFailed,
    ))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    debug!(
        "Backend refused request [url: {}, status: {status}]",
        response.url()
    );
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Unauthorized),
        StatusCode::NOT_FOUND => Err(NotFound),
        status if status.is_client_error() => {
            let body = response.text().await.unwrap_or_default();
            Err(error_from_rejection(&body))
        }
        status => Err(UnexpectedStatus(status.as_u16())),
    }
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response.json::<T>().await.map_err(log_message_and_return(
        "Can't read backend answer",
        MalformedResponse,
    ))
}

/// The backend explains its refusals with a `message` (or `msg`) field.
/// A refusal caused by an already scheduled renewal either carries the
/// `membresiaProgramada` field or says so in its message.
fn error_from_rejection(body: &str) -> BackendError {
    let value = rocket::serde::json::from_str::<Value>(body).unwrap_or(Value::Null);
    let message = value
        .get("message")
        .or_else(|| value.get("msg"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    let has_scheduled_flag = value
        .get(SCHEDULED_RENEWAL_FLAG)
        .is_some_and(|flag| !flag.is_null());
    let mentions_scheduled_renewal = message
        .as_deref()
        .is_some_and(|message| message.to_lowercase().contains(SCHEDULED_RENEWAL_MESSAGE));

    let message = message.unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_owned());
    if has_scheduled_flag || mentions_scheduled_renewal {
        ScheduledRenewalConflict(message)
    } else {
        Rejected(message)
    }
}
