use crate::backend::error::BackendError::{Rejected, Unauthorized, WrongCredentials};
use crate::backend::error::Result;
use crate::backend::{build_url, read_json, send};
use derive_getters::Getters;
use dto::session::{Credentials, UserSession};
use log::debug;
use reqwest::Client;

/// An authenticated connection to the backend.
/// The client holds the session cookies set by the backend on login.
#[derive(Debug, Clone, Getters)]
pub struct BackendSession {
    client: Client,
    base_url: String,
    user: UserSession,
}

impl BackendSession {
    pub fn new(client: Client, base_url: String, user: UserSession) -> Self {
        Self {
            client,
            base_url,
            user,
        }
    }
}

/// Log into the backend, then check the session it opened.
pub async fn open_session(
    client: Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<BackendSession> {
    login(&client, base_url, credentials).await?;
    let user = validate_token(&client, base_url).await?;
    debug!(
        "Backend session opened [user: {}, role: {}]",
        user.id_usuario(),
        user.id_rol()
    );

    Ok(BackendSession::new(client, base_url.to_owned(), user))
}

pub async fn login(client: &Client, base_url: &str, credentials: &Credentials) -> Result<()> {
    let url = build_url(base_url, &["login"])?;
    match send(client.post(url).json(credentials)).await {
        Ok(_) => Ok(()),
        Err(Unauthorized) | Err(Rejected(_)) => Err(WrongCredentials),
        Err(error) => Err(error),
    }
}

pub async fn validate_token(client: &Client, base_url: &str) -> Result<UserSession> {
    let url = build_url(base_url, &["validate-token"])?;
    let response = send(client.get(url)).await?;
    read_json(response).await
}
