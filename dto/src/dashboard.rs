use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A student to contact because their membership is about to expire.
#[derive(Debug, Serialize, Deserialize, Getters, Eq, PartialEq, Clone)]
pub struct RenewalAlert {
    alumno_id: String,
    nombre_completo: String,
    plan_nombre: String,
    #[serde(with = "crate::date")]
    fecha_fin: NaiveDate,
    dias_restantes: i64,
}

impl RenewalAlert {
    pub fn new(
        alumno_id: String,
        nombre_completo: String,
        plan_nombre: String,
        fecha_fin: NaiveDate,
        dias_restantes: i64,
    ) -> Self {
        Self {
            alumno_id,
            nombre_completo,
            plan_nombre,
            fecha_fin,
            dias_restantes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, Eq, PartialEq, Clone)]
pub struct LowStockItem {
    producto_id: u32,
    nombre: String,
    stock: u32,
}

impl LowStockItem {
    pub fn new(producto_id: u32, nombre: String, stock: u32) -> Self {
        Self {
            producto_id,
            nombre,
            stock,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, Eq, PartialEq, Clone, Default)]
pub struct DashboardSummary {
    alumnos_activos: usize,
    vencen_7_dias: usize,
    sin_membresia: usize,
    alertas_renovacion: Vec<RenewalAlert>,
    productos_stock_bajo: Vec<LowStockItem>,
}

impl DashboardSummary {
    pub fn new(
        alumnos_activos: usize,
        vencen_7_dias: usize,
        sin_membresia: usize,
        alertas_renovacion: Vec<RenewalAlert>,
        productos_stock_bajo: Vec<LowStockItem>,
    ) -> Self {
        Self {
            alumnos_activos,
            vencen_7_dias,
            sin_membresia,
            alertas_renovacion,
            productos_stock_bajo,
        }
    }
}
