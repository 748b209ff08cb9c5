use crate::membresia::PlanResumen;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A membership tier. Plans are reference data: this application never alters them.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Plan {
    plan_id: String,
    nombre: String,
    #[serde(default)]
    descripcion: Option<String>,
    precio: f64,
    duracion_dias: u32,
}

impl Plan {
    pub fn new(
        plan_id: String,
        nombre: String,
        descripcion: Option<String>,
        precio: f64,
        duracion_dias: u32,
    ) -> Self {
        Self {
            plan_id,
            nombre,
            descripcion,
            precio,
            duracion_dias,
        }
    }
}

impl From<PlanResumen> for Plan {
    fn from(plan: PlanResumen) -> Self {
        let (plan_id, nombre, precio, duracion_dias) = plan.into_parts();
        Self::new(plan_id, nombre, None, precio, duracion_dias)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const PLAN_MENSUAL_ID: &str = "plan-mensual";
    pub const PLAN_SEMANAL_ID: &str = "plan-semanal";
    pub const PLAN_TRIMESTRAL_ID: &str = "plan-trimestral";

    pub fn plan_mensual() -> Plan {
        Plan::new(
            PLAN_MENSUAL_ID.to_owned(),
            "Mensual".to_owned(),
            Some("Acceso ilimitado a clases".to_owned()),
            850.0,
            30,
        )
    }

    pub fn plan_semanal() -> Plan {
        Plan::new(
            PLAN_SEMANAL_ID.to_owned(),
            "Semanal".to_owned(),
            None,
            250.0,
            7,
        )
    }

    pub fn plan_trimestral() -> Plan {
        Plan::new(
            PLAN_TRIMESTRAL_ID.to_owned(),
            "Trimestral".to_owned(),
            None,
            2300.0,
            90,
        )
    }

    pub fn all_plans() -> Vec<Plan> {
        vec![plan_semanal(), plan_mensual(), plan_trimestral()]
    }

    #[test]
    fn should_build_plan_from_summary() {
        let summary = PlanResumen::new(PLAN_MENSUAL_ID.to_owned(), "Mensual".to_owned(), 850.0, 30);
        let plan = Plan::from(summary);

        assert_eq!(PLAN_MENSUAL_ID, plan.plan_id());
        assert_eq!(&None, plan.descripcion());
        assert_eq!(30, *plan.duracion_dias());
    }
}
