use crate::backend::session::BackendSession;
use crate::inventory::{
    list_productos, modify_producto, register_producto, remove_producto, restock_producto,
};
use crate::web::error::{ApiResult, error_response};
use dto::producto::{AgregarStock, ProductoForm};
use rocket::http::Status;
use rocket::serde::json::{Json, Value, json};

#[get("/productos")]
pub async fn retrieve_productos(session: BackendSession) -> ApiResult {
    let productos = list_productos(&session).await.map_err(error_response)?;
    Ok(json!(productos))
}

#[post("/productos", format = "application/json", data = "<form>")]
pub async fn create_producto(
    session: BackendSession,
    form: Json<ProductoForm>,
) -> ApiResult<(Status, Value)> {
    let producto = register_producto(&session, form.into_inner())
        .await
        .map_err(error_response)?;
    Ok((Status::Created, json!(producto)))
}

#[put("/productos/<producto_id>", format = "application/json", data = "<form>")]
pub async fn update_producto(
    session: BackendSession,
    producto_id: u32,
    form: Json<ProductoForm>,
) -> ApiResult {
    let producto = modify_producto(&session, producto_id, form.into_inner())
        .await
        .map_err(error_response)?;
    Ok(json!(producto))
}

/// Products are soft-deleted by the backend.
#[delete("/productos/<producto_id>")]
pub async fn delete_producto(session: BackendSession, producto_id: u32) -> ApiResult<Status> {
    remove_producto(&session, producto_id)
        .await
        .map_err(error_response)?;
    Ok(Status::NoContent)
}

#[post("/productos/<producto_id>/stock", format = "application/json", data = "<stock>")]
pub async fn add_stock(
    session: BackendSession,
    producto_id: u32,
    stock: Json<AgregarStock>,
) -> ApiResult {
    let producto = restock_producto(&session, producto_id, stock.into_inner())
        .await
        .map_err(error_response)?;
    Ok(json!(producto))
}
