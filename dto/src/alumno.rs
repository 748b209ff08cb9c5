use crate::alert::Alert;
use crate::membership_status::MembershipStatus;
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A student, as stored by the backend.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Alumno {
    alumno_id: String,
    nombre_completo: String,
    #[serde(with = "crate::date")]
    fecha_nacimiento: NaiveDate,
    #[serde(with = "crate::date")]
    fecha_ingreso: NaiveDate,
    #[serde(default)]
    celular: Option<String>,
    #[serde(default)]
    correo: Option<String>,
    #[serde(default)]
    estado_alumno_id: Option<u32>,
    #[serde(default)]
    notas_instructor: Option<String>,
    #[serde(default)]
    contacto_emergencia: Option<String>,
    #[serde(default)]
    parentezco_contacto_emergencia: Option<String>,
    #[serde(default)]
    condiciones_medicas: Option<String>,
}

impl Alumno {
    pub fn new(
        alumno_id: String,
        nombre_completo: String,
        fecha_nacimiento: NaiveDate,
        fecha_ingreso: NaiveDate,
    ) -> Self {
        Self {
            alumno_id,
            nombre_completo,
            fecha_nacimiento,
            fecha_ingreso,
            celular: None,
            correo: None,
            estado_alumno_id: None,
            notas_instructor: None,
            contacto_emergencia: None,
            parentezco_contacto_emergencia: None,
            condiciones_medicas: None,
        }
    }
}

/// A student along with their membership status.
/// The status is derived on every read and never sent back to the backend.
/// Alerts tell when the status could not be derived reliably.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct AlumnoConEstado {
    #[serde(flatten)]
    alumno: Alumno,
    estado_membresia: MembershipStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    alertas: Vec<Alert>,
}

impl AlumnoConEstado {
    pub fn new(alumno: Alumno, estado_membresia: MembershipStatus) -> Self {
        Self {
            alumno,
            estado_membresia,
            alertas: vec![],
        }
    }

    pub fn with_alert(mut self, alert: Alert) -> Self {
        self.alertas.push(alert);
        self
    }
}

/// Data entered in the student form, used both for creation and update.
/// Dates are optional here so that a missing date can be reported as a field error.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Default)]
pub struct AlumnoForm {
    nombre_completo: String,
    #[serde(with = "crate::date::option", default)]
    fecha_nacimiento: Option<NaiveDate>,
    #[serde(with = "crate::date::option", default)]
    fecha_ingreso: Option<NaiveDate>,
    #[serde(default)]
    celular: Option<String>,
    #[serde(default)]
    correo: Option<String>,
    #[serde(default)]
    estado_alumno_id: Option<u32>,
    #[serde(default)]
    notas_instructor: Option<String>,
    #[serde(default)]
    contacto_emergencia: Option<String>,
    #[serde(default)]
    parentezco_contacto_emergencia: Option<String>,
    #[serde(default)]
    condiciones_medicas: Option<String>,
}

impl AlumnoForm {
    pub fn new(
        nombre_completo: String,
        fecha_nacimiento: Option<NaiveDate>,
        fecha_ingreso: Option<NaiveDate>,
    ) -> Self {
        Self {
            nombre_completo,
            fecha_nacimiento,
            fecha_ingreso,
            ..Default::default()
        }
    }

    pub fn with_contact(mut self, celular: Option<String>, correo: Option<String>) -> Self {
        self.celular = celular;
        self.correo = correo;
        self
    }

    /// Trim the name and collapse its inner whitespaces.
    /// Blank optional fields are turned into `None`.
    pub fn normalized(self) -> Self {
        Self {
            nombre_completo: collapse_whitespaces(&self.nombre_completo),
            celular: non_blank(self.celular),
            correo: non_blank(self.correo),
            notas_instructor: non_blank(self.notas_instructor),
            contacto_emergencia: non_blank(self.contacto_emergencia),
            parentezco_contacto_emergencia: non_blank(self.parentezco_contacto_emergencia),
            condiciones_medicas: non_blank(self.condiciones_medicas),
            ..self
        }
    }
}

/// What the backend answers when a student is created or updated.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct AlumnoGuardado {
    #[serde(default)]
    msg: String,
    alumno: Alumno,
}

impl AlumnoGuardado {
    pub fn into_alumno(self) -> Alumno {
        self.alumno
    }
}

fn collapse_whitespaces(value: &str) -> String {
    value.split_whitespace().collect::<Vec<&str>>().join(" ")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const ALUMNO_ID: &str = "7c1e0f5a-2d4b-4a8e-9d36-0b1f5e2a9c11";
    pub const OTHER_ALUMNO_ID: &str = "b3f1a9d2-6e0c-4f7b-8a15-3c9d2e7f4b20";

    pub fn juan_perez() -> Alumno {
        Alumno::new(
            ALUMNO_ID.to_owned(),
            "Juan Pérez".to_owned(),
            NaiveDate::from_ymd_opt(1995, 4, 12).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        )
    }

    pub fn maria_lopez() -> Alumno {
        Alumno::new(
            OTHER_ALUMNO_ID.to_owned(),
            "María López".to_owned(),
            NaiveDate::from_ymd_opt(2001, 11, 3).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 17).unwrap(),
        )
    }

    pub const ALUMNO_AS_JSON: &str = r#"{
        "alumno_id": "7c1e0f5a-2d4b-4a8e-9d36-0b1f5e2a9c11",
        "nombre_completo": "Juan Pérez",
        "fecha_nacimiento": "1995-04-12T00:00:00.000Z",
        "fecha_ingreso": "2024-01-08T00:00:00.000Z",
        "celular": null,
        "correo": null
    }"#;

    #[test]
    fn should_deserialize_alumno_with_timestamps() {
        let alumno: Alumno = serde_json::from_str(ALUMNO_AS_JSON).unwrap();
        assert_eq!(juan_perez(), alumno);
    }

    #[test]
    fn should_flatten_alumno_with_status() {
        let alumno = AlumnoConEstado::new(juan_perez(), MembershipStatus::AboutToExpire);
        let value = serde_json::to_value(&alumno).unwrap();

        assert_eq!("Juan Pérez", value["nombre_completo"]);
        assert_eq!("1995-04-12", value["fecha_nacimiento"]);
        assert_eq!("Por Vencer", value["estado_membresia"]);
    }

    #[test]
    fn should_normalize_form() {
        let form = AlumnoForm::new("  Juan   Carlos  Pérez ".to_owned(), None, None)
            .with_contact(Some("   ".to_owned()), Some(" juan@correo.mx ".to_owned()));

        let form = form.normalized();

        assert_eq!("Juan Carlos Pérez", form.nombre_completo());
        assert_eq!(&None, form.celular());
        assert_eq!(&Some("juan@correo.mx".to_owned()), form.correo());
    }

    #[test]
    fn should_read_blank_form_dates_as_missing() {
        let form: AlumnoForm = serde_json::from_str(
            r#"{"nombre_completo": "Juan Pérez", "fecha_nacimiento": "", "fecha_ingreso": "2025-01-01"}"#,
        )
        .unwrap();

        assert_eq!(&None, form.fecha_nacimiento());
        assert_eq!(&NaiveDate::from_ymd_opt(2025, 1, 1), form.fecha_ingreso());
    }
}
