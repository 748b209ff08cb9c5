use crate::backend::error::Result;
use crate::backend::{build_url, read_json, send};
use dto::producto::{AgregarStock, Producto, ProductoForm};
use reqwest::Client;

const PRODUCTOS: &str = "productos";

pub async fn retrieve_productos(client: &Client, base_url: &str) -> Result<Vec<Producto>> {
    let url = build_url(base_url, &[PRODUCTOS, "listarproductos"])?;
    let response = send(client.get(url)).await?;
    read_json(response).await
}

pub async fn create_producto(
    client: &Client,
    base_url: &str,
    form: &ProductoForm,
) -> Result<Producto> {
    let url = build_url(base_url, &[PRODUCTOS, "agregarproducto"])?;
    let response = send(client.post(url).json(form)).await?;
    read_json(response).await
}

pub async fn update_producto(
    client: &Client,
    base_url: &str,
    producto_id: u32,
    form: &ProductoForm,
) -> Result<Producto> {
    let id = producto_id.to_string();
    let url = build_url(base_url, &[PRODUCTOS, "editarproducto", &id])?;
    let response = send(client.put(url).json(form)).await?;
    read_json(response).await
}

/// Products are only flagged as deleted by the backend, so that past sales keep their product.
pub async fn delete_producto(client: &Client, base_url: &str, producto_id: u32) -> Result<()> {
    let id = producto_id.to_string();
    let url = build_url(base_url, &[PRODUCTOS, "eliminarproducto", &id])?;
    send(client.patch(url)).await?;
    Ok(())
}

pub async fn add_stock(
    client: &Client,
    base_url: &str,
    producto_id: u32,
    stock: &AgregarStock,
) -> Result<Producto> {
    let id = producto_id.to_string();
    let url = build_url(base_url, &[PRODUCTOS, "agregarstock", &id])?;
    let response = send(client.put(url).json(stock)).await?;
    read_json(response).await
}
