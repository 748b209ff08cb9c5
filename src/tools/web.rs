use crate::tools::error::Result;
use crate::tools::error::ToolsError::CantCreateClient;
use crate::tools::log_message_and_return;
use reqwest::Client;

/// Each backend session gets its own client, so that the session cookies it receives
/// on login are stored apart from other users' ones.
pub fn build_client() -> Result<Client> {
    reqwest::ClientBuilder::new()
        .cookie_store(true)
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}
