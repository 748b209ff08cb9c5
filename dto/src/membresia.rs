use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Plan details embedded in a membership.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct PlanResumen {
    plan_id: String,
    nombre: String,
    precio: f64,
    duracion_dias: u32,
}

impl PlanResumen {
    pub fn new(plan_id: String, nombre: String, precio: f64, duracion_dias: u32) -> Self {
        Self {
            plan_id,
            nombre,
            precio,
            duracion_dias,
        }
    }

    pub fn into_parts(self) -> (String, String, f64, u32) {
        (self.plan_id, self.nombre, self.precio, self.duracion_dias)
    }
}

/// Student details embedded in a membership.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct AlumnoResumen {
    alumno_id: String,
    nombre_completo: String,
    #[serde(default)]
    celular: Option<String>,
    #[serde(default)]
    correo: Option<String>,
}

impl AlumnoResumen {
    pub fn new(alumno_id: String, nombre_completo: String) -> Self {
        Self {
            alumno_id,
            nombre_completo,
            celular: None,
            correo: None,
        }
    }
}

/// A membership links a student to a plan for a date range.
/// The student summary is only sent along by some routes (active memberships list).
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Membresia {
    membresia_id: String,
    alumno_id: String,
    plan_id: String,
    #[serde(with = "crate::date")]
    fecha_inicio: NaiveDate,
    #[serde(with = "crate::date")]
    fecha_fin: NaiveDate,
    esta_activa: bool,
    plan: PlanResumen,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alumno: Option<AlumnoResumen>,
}

impl Membresia {
    pub fn new(
        membresia_id: String,
        alumno_id: String,
        fecha_inicio: NaiveDate,
        fecha_fin: NaiveDate,
        esta_activa: bool,
        plan: PlanResumen,
        alumno: Option<AlumnoResumen>,
    ) -> Self {
        Self {
            membresia_id,
            alumno_id,
            plan_id: plan.plan_id().to_owned(),
            fecha_inicio,
            fecha_fin,
            esta_activa,
            plan,
            alumno,
        }
    }
}

/// Request body of a renewal (or first assignment).
/// The backend decides by itself whether the new membership starts now or is scheduled.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct RenovarMembresia {
    alumno_id: String,
    plan_id: String,
}

impl RenovarMembresia {
    pub fn new(alumno_id: String, plan_id: String) -> Self {
        Self { alumno_id, plan_id }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct RenovacionResponse {
    #[serde(default)]
    message: String,
    membresia: Membresia,
    #[serde(rename = "esProgramada", default)]
    es_programada: bool,
    #[serde(rename = "tipoOperacion", default)]
    tipo_operacion: Option<String>,
}

impl RenovacionResponse {
    pub fn new(
        message: String,
        membresia: Membresia,
        es_programada: bool,
        tipo_operacion: Option<String>,
    ) -> Self {
        Self {
            message,
            membresia,
            es_programada,
            tipo_operacion,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use crate::alumno::tests::{ALUMNO_ID, OTHER_ALUMNO_ID};
    use crate::plan::tests::{PLAN_MENSUAL_ID, PLAN_SEMANAL_ID};

    pub fn plan_mensual_resumen() -> PlanResumen {
        PlanResumen::new(PLAN_MENSUAL_ID.to_owned(), "Mensual".to_owned(), 850.0, 30)
    }

    pub fn plan_semanal_resumen() -> PlanResumen {
        PlanResumen::new(PLAN_SEMANAL_ID.to_owned(), "Semanal".to_owned(), 250.0, 7)
    }

    /// An active monthly membership of Juan Pérez ending on the given date.
    pub fn membresia_juan(fecha_fin: NaiveDate) -> Membresia {
        Membresia::new(
            "membresia-juan".to_owned(),
            ALUMNO_ID.to_owned(),
            fecha_fin - chrono::Days::new(30),
            fecha_fin,
            true,
            plan_mensual_resumen(),
            Some(AlumnoResumen::new(
                ALUMNO_ID.to_owned(),
                "Juan Pérez".to_owned(),
            )),
        )
    }

    /// An active weekly membership of María López ending on the given date.
    pub fn membresia_maria(fecha_fin: NaiveDate) -> Membresia {
        Membresia::new(
            "membresia-maria".to_owned(),
            OTHER_ALUMNO_ID.to_owned(),
            fecha_fin - chrono::Days::new(7),
            fecha_fin,
            true,
            plan_semanal_resumen(),
            Some(AlumnoResumen::new(
                OTHER_ALUMNO_ID.to_owned(),
                "María López".to_owned(),
            )),
        )
    }

    pub fn inactive(membresia: Membresia) -> Membresia {
        Membresia {
            esta_activa: false,
            ..membresia
        }
    }

    pub const MEMBRESIA_AS_JSON: &str = r#"{
        "membresia_id": "membresia-juan",
        "alumno_id": "7c1e0f5a-2d4b-4a8e-9d36-0b1f5e2a9c11",
        "plan_id": "plan-mensual",
        "fecha_inicio": "2025-09-15T00:00:00.000Z",
        "fecha_fin": "2025-10-15T00:00:00.000Z",
        "esta_activa": true,
        "plan": {"plan_id": "plan-mensual", "nombre": "Mensual", "precio": 850, "duracion_dias": 30},
        "alumno": {"alumno_id": "7c1e0f5a-2d4b-4a8e-9d36-0b1f5e2a9c11", "nombre_completo": "Juan Pérez", "celular": null, "correo": null}
    }"#;

    #[test]
    fn should_deserialize_membership_sent_by_backend() {
        let membresia: Membresia = serde_json::from_str(MEMBRESIA_AS_JSON).unwrap();
        assert_eq!(
            membresia_juan(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()),
            membresia
        );
    }

    #[test]
    fn should_deserialize_membership_without_student() {
        let json = r#"{
            "membresia_id": "m-1",
            "alumno_id": "a-1",
            "plan_id": "plan-semanal",
            "fecha_inicio": "2025-01-01",
            "fecha_fin": "2025-01-08",
            "esta_activa": false,
            "plan": {"plan_id": "plan-semanal", "nombre": "Semanal", "precio": 250.5, "duracion_dias": 7}
        }"#;
        let membresia: Membresia = serde_json::from_str(json).unwrap();

        assert_eq!(&None, membresia.alumno());
        assert!(!membresia.esta_activa());
        assert_eq!(
            &NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
            membresia.fecha_fin()
        );
    }

    #[test]
    fn should_deserialize_renewal_response() {
        let json = format!(
            r#"{{"message": "Renovación programada", "membresia": {MEMBRESIA_AS_JSON}, "esProgramada": true, "tipoOperacion": "renovacion"}}"#
        );
        let response: RenovacionResponse = serde_json::from_str(&json).unwrap();

        assert!(response.es_programada());
        assert_eq!(&Some("renovacion".to_owned()), response.tipo_operacion());
    }
}
