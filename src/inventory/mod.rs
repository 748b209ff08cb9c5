use crate::backend::productos::{
    add_stock, create_producto, delete_producto, retrieve_productos, update_producto,
};
use crate::backend::session::BackendSession;
use crate::error::ApplicationError::Invalid;
use crate::error::Result;
use crate::inventory::validation::{validate_producto_form, validate_stock_addition};
use dto::dashboard::LowStockItem;
use dto::producto::{AgregarStock, Producto, ProductoForm};
use dto::validation::FieldErrors;
use log::debug;

pub mod configuration;
pub mod validation;

pub async fn list_productos(session: &BackendSession) -> Result<Vec<Producto>> {
    Ok(retrieve_productos(session.client(), session.base_url()).await?)
}

pub async fn register_producto(session: &BackendSession, form: ProductoForm) -> Result<Producto> {
    let form = form.trimmed();
    reject_if_invalid(validate_producto_form(&form))?;
    Ok(create_producto(session.client(), session.base_url(), &form).await?)
}

pub async fn modify_producto(
    session: &BackendSession,
    producto_id: u32,
    form: ProductoForm,
) -> Result<Producto> {
    let form = form.trimmed();
    reject_if_invalid(validate_producto_form(&form))?;
    Ok(update_producto(session.client(), session.base_url(), producto_id, &form).await?)
}

pub async fn remove_producto(session: &BackendSession, producto_id: u32) -> Result<()> {
    Ok(delete_producto(session.client(), session.base_url(), producto_id).await?)
}

pub async fn restock_producto(
    session: &BackendSession,
    producto_id: u32,
    stock: AgregarStock,
) -> Result<Producto> {
    reject_if_invalid(validate_stock_addition(&stock))?;
    Ok(add_stock(session.client(), session.base_url(), producto_id, &stock).await?)
}

/// Products to restock, the scarcest first.
pub fn low_stock(productos: &[Producto], threshold: u32) -> Vec<LowStockItem> {
    let mut items: Vec<LowStockItem> = productos
        .iter()
        .filter(|producto| *producto.stock() <= threshold)
        .map(|producto| {
            LowStockItem::new(
                *producto.producto_id(),
                producto.nombre().to_owned(),
                *producto.stock(),
            )
        })
        .collect();
    items.sort_by_key(|item| *item.stock());
    items
}

fn reject_if_invalid(errors: FieldErrors) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        debug!("Product refused [errors: {errors:?}]");
        Err(Invalid(errors))
    }
}
