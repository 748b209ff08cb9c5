use crate::backend::session::BackendSession;
use crate::dashboard::build_dashboard;
use crate::inventory::configuration::InventoryConfiguration;
use crate::tools::today;
use crate::web::error::{ApiResult, error_response};
use rocket::State;
use rocket::serde::json::json;

#[get("/dashboard")]
pub async fn retrieve_dashboard(
    session: BackendSession,
    configuration: &State<InventoryConfiguration>,
) -> ApiResult {
    let summary = build_dashboard(&session, &today(), *configuration.low_stock_threshold())
        .await
        .map_err(error_response)?;
    Ok(json!(summary))
}
