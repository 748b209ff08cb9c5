use dto::producto::{AgregarStock, ProductoForm};
use dto::validation::FieldErrors;

pub const NOMBRE: &str = "nombre";
pub const DESCRIPCION: &str = "descripcion";
pub const PRECIO: &str = "precio";
pub const STOCK: &str = "stock";
pub const CANTIDAD: &str = "cantidad";

pub fn validate_producto_form(form: &ProductoForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if form.nombre().trim().is_empty() {
        errors.add(NOMBRE, "El nombre es obligatorio");
    }
    if form.descripcion().trim().is_empty() {
        errors.add(DESCRIPCION, "La descripción es obligatoria");
    }
    if !form.precio().is_finite() || *form.precio() <= 0.0 {
        errors.add(PRECIO, "El precio debe ser un número mayor a 0");
    }
    if *form.stock() <= 0 {
        errors.add(STOCK, "El stock debe ser un entero y mayor a 0");
    }
    errors
}

pub fn validate_stock_addition(stock: &AgregarStock) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if *stock.cantidad() < 1 {
        errors.add(CANTIDAD, "Debe ser mayor que 0");
    }
    errors
}
