use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Producto {
    producto_id: u32,
    nombre: String,
    #[serde(default)]
    descripcion: Option<String>,
    precio: f64,
    stock: u32,
}

impl Producto {
    pub fn new(
        producto_id: u32,
        nombre: String,
        descripcion: Option<String>,
        precio: f64,
        stock: u32,
    ) -> Self {
        Self {
            producto_id,
            nombre,
            descripcion,
            precio,
            stock,
        }
    }
}

/// Data entered in the product form, for creation and edition.
/// Numbers are kept signed so that negative values can be reported instead of rejected.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct ProductoForm {
    nombre: String,
    descripcion: String,
    precio: f64,
    stock: i64,
}

impl ProductoForm {
    pub fn new(nombre: String, descripcion: String, precio: f64, stock: i64) -> Self {
        Self {
            nombre,
            descripcion,
            precio,
            stock,
        }
    }

    pub fn trimmed(self) -> Self {
        Self {
            nombre: self.nombre.trim().to_owned(),
            descripcion: self.descripcion.trim().to_owned(),
            ..self
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Copy)]
pub struct AgregarStock {
    cantidad: i64,
}

impl AgregarStock {
    pub fn new(cantidad: i64) -> Self {
        Self { cantidad }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn guantes() -> Producto {
        Producto::new(
            1,
            "Guantes de Boxeo (16oz)".to_owned(),
            Some("Guantes de entrenamiento".to_owned()),
            650.0,
            4,
        )
    }

    pub fn camiseta() -> Producto {
        Producto::new(2, "Camiseta Krav Maga Talla M".to_owned(), None, 300.0, 2)
    }

    pub fn botella() -> Producto {
        Producto::new(3, "Botella de Agua (Logo)".to_owned(), None, 120.0, 25)
    }

    #[test]
    fn should_trim_form() {
        let form = ProductoForm::new(" Vendas ".to_owned(), " Vendas de 4m  ".to_owned(), 90.0, 10);
        assert_eq!(
            ProductoForm::new("Vendas".to_owned(), "Vendas de 4m".to_owned(), 90.0, 10),
            form.trimmed()
        );
    }
}
