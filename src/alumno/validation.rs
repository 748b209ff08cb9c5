use crate::tools::normalize;
use dto::alumno::{Alumno, AlumnoForm};
use dto::validation::FieldErrors;
use regex::Regex;
use std::sync::LazyLock;

pub const NOMBRE_COMPLETO: &str = "nombre_completo";
pub const FECHA_NACIMIENTO: &str = "fecha_nacimiento";
pub const FECHA_INGRESO: &str = "fecha_ingreso";
pub const CELULAR: &str = "celular";
pub const CORREO: &str = "correo";

const NAME_MIN_LENGTH: usize = 3;
const CELULAR_LENGTH: usize = 10;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ\s]+$").unwrap());
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Check the student form before it is sent to the backend.
/// `edited_alumno_id` is the student being updated, whose own name is not a duplicate.
pub fn validate_alumno_form(
    form: &AlumnoForm,
    existing_alumnos: &[Alumno],
    edited_alumno_id: Option<&str>,
) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if let Some(message) = check_name(form.nombre_completo(), existing_alumnos, edited_alumno_id) {
        errors.add(NOMBRE_COMPLETO, message);
    }
    if form.fecha_nacimiento().is_none() {
        errors.add(FECHA_NACIMIENTO, "La fecha de nacimiento es obligatoria");
    }
    if form.fecha_ingreso().is_none() {
        errors.add(FECHA_INGRESO, "La fecha de ingreso es obligatoria");
    }
    if let Some(celular) = non_empty(form.celular()) {
        if celular.chars().count() != CELULAR_LENGTH {
            errors.add(CELULAR, "El celular debe tener 10 dígitos");
        }
    }
    if let Some(correo) = non_empty(form.correo()) {
        if !EMAIL_REGEX.is_match(correo) {
            errors.add(CORREO, "El formato del correo no es válido");
        }
    }

    errors
}

fn check_name(
    name: &str,
    existing_alumnos: &[Alumno],
    edited_alumno_id: Option<&str>,
) -> Option<&'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Some("El nombre es obligatorio");
    }
    if name.chars().count() < NAME_MIN_LENGTH {
        return Some("El nombre debe tener al menos 3 caracteres");
    }
    if !NAME_REGEX.is_match(name) {
        return Some("El nombre solo puede contener letras y espacios");
    }

    let normalized_name = normalize(name);
    let is_duplicate = existing_alumnos
        .iter()
        .filter(|alumno| Some(alumno.alumno_id().as_str()) != edited_alumno_id)
        .any(|alumno| normalize(alumno.nombre_completo()) == normalized_name);
    is_duplicate.then_some(
        "Ya existe un alumno con ese nombre, por favor proporciona uno distinto",
    )
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dto::alumno::tests::{ALUMNO_ID, juan_perez, maria_lopez};
    use parameterized::{ide, parameterized};

    ide!();

    fn form_named(name: &str) -> AlumnoForm {
        AlumnoForm::new(
            name.to_owned(),
            NaiveDate::from_ymd_opt(1998, 6, 21),
            NaiveDate::from_ymd_opt(2025, 3, 3),
        )
    }

    #[test]
    fn should_accept_valid_form() {
        let form = form_named("Ana Sofía Muñoz")
            .with_contact(Some("5512345678".to_owned()), Some("ana@correo.mx".to_owned()));

        let errors = validate_alumno_form(&form, &[juan_perez(), maria_lopez()], None);

        assert!(errors.is_empty());
    }

    #[parameterized(
        name = {"", "   ", "Al", "  Al  ", "Juan P3rez", "Juan_Pérez", "Ana-María"},
        expected_message = {
            "El nombre es obligatorio",
            "El nombre es obligatorio",
            "El nombre debe tener al menos 3 caracteres",
            "El nombre debe tener al menos 3 caracteres",
            "El nombre solo puede contener letras y espacios",
            "El nombre solo puede contener letras y espacios",
            "El nombre solo puede contener letras y espacios",
        }
    )]
    fn should_refuse_invalid_name(name: &str, expected_message: &str) {
        let errors = validate_alumno_form(&form_named(name), &[], None);

        assert_eq!(Some(expected_message), errors.get(NOMBRE_COMPLETO));
        assert_eq!(1, errors.len());
    }

    #[parameterized(name = {"Juan Pérez", "juan perez", "  JUAN   PÉREZ ", "maria lopez"})]
    fn should_refuse_duplicated_name(name: &str) {
        let errors = validate_alumno_form(&form_named(name), &[juan_perez(), maria_lopez()], None);

        assert_eq!(
            Some("Ya existe un alumno con ese nombre, por favor proporciona uno distinto"),
            errors.get(NOMBRE_COMPLETO)
        );
    }

    #[test]
    fn should_accept_own_name_when_editing() {
        let errors = validate_alumno_form(
            &form_named("Juan Perez"),
            &[juan_perez(), maria_lopez()],
            Some(ALUMNO_ID),
        );

        assert!(errors.is_empty());
    }

    #[test]
    fn should_refuse_other_alumno_name_when_editing() {
        let errors = validate_alumno_form(
            &form_named("María López"),
            &[juan_perez(), maria_lopez()],
            Some(ALUMNO_ID),
        );

        assert!(errors.get(NOMBRE_COMPLETO).is_some());
    }

    #[test]
    fn should_require_dates() {
        let form = AlumnoForm::new("Ana Sofía".to_owned(), None, None);

        let errors = validate_alumno_form(&form, &[], None);

        assert_eq!(
            Some("La fecha de nacimiento es obligatoria"),
            errors.get(FECHA_NACIMIENTO)
        );
        assert_eq!(Some("La fecha de ingreso es obligatoria"), errors.get(FECHA_INGRESO));
        assert_eq!(2, errors.len());
    }

    #[parameterized(
        celular = {"55123456", "551234567890", "5512345678", ""},
        is_valid = {false, false, true, true}
    )]
    fn should_check_celular_length(celular: &str, is_valid: bool) {
        let form = form_named("Ana Sofía").with_contact(Some(celular.to_owned()), None);

        let errors = validate_alumno_form(&form, &[], None);

        assert_eq!(is_valid, errors.get(CELULAR).is_none());
    }

    #[parameterized(
        correo = {"ana@correo.mx", "ana.sofia@dojo.com.mx", "ana@correo", "ana correo@dojo.mx", "@dojo.mx", "ana@@dojo.mx", ""},
        is_valid = {true, true, false, false, false, false, true}
    )]
    fn should_check_correo_format(correo: &str, is_valid: bool) {
        let form = form_named("Ana Sofía").with_contact(None, Some(correo.to_owned()));

        let errors = validate_alumno_form(&form, &[], None);

        assert_eq!(is_valid, errors.get(CORREO).is_none());
    }

    #[test]
    fn should_report_every_invalid_field() {
        let form = AlumnoForm::new("A1".to_owned(), None, None).with_contact(
            Some("123".to_owned()),
            Some("no es correo".to_owned()),
        );

        let errors = validate_alumno_form(&form, &[], None);

        assert_eq!(5, errors.len());
    }
}
