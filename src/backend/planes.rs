use crate::backend::error::Result;
use crate::backend::{build_url, read_json, send};
use dto::plan::Plan;
use reqwest::Client;

pub async fn retrieve_plans(client: &Client, base_url: &str) -> Result<Vec<Plan>> {
    let url = build_url(base_url, &["membresias", "planes"])?;
    let response = send(client.get(url)).await?;
    read_json(response).await
}
