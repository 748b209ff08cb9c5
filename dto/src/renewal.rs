use crate::alert::Alert;
use crate::membresia::Membresia;
use crate::plan::Plan;
use chrono::{Days, NaiveDate};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Date range of a new membership.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Copy)]
pub struct RenewalPeriod {
    #[serde(with = "crate::date")]
    fecha_inicio: NaiveDate,
    #[serde(with = "crate::date")]
    fecha_fin: NaiveDate,
    /// Whether the membership starts after today, once the current one ends.
    programada: bool,
}

/// Compute the period of a new membership.
///
/// Without a current membership, or when the current one ended before today,
/// the new membership starts today. Otherwise it starts the day after the current one
/// ends, so that there is neither a gap nor an overlap between both.
pub fn compute_renewal_period(
    current_end_date: Option<&NaiveDate>,
    duration_days: u32,
    today: &NaiveDate,
) -> RenewalPeriod {
    let fecha_inicio = match current_end_date {
        Some(end_date) if end_date >= today => add_days(end_date, 1),
        _ => *today,
    };
    let fecha_fin = add_days(&fecha_inicio, u64::from(duration_days));

    RenewalPeriod {
        fecha_inicio,
        fecha_fin,
        programada: fecha_inicio > *today,
    }
}

fn add_days(date: &NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Steps of the renewal flow, as shown to the user.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum RenewalStep {
    Loading,
    #[serde(rename = "sin-membresia")]
    NoMembership,
    #[serde(rename = "con-membresia")]
    HasMembership,
    #[serde(rename = "seleccionar-plan")]
    SelectPlan,
    #[serde(rename = "confirmar")]
    Confirm,
    #[serde(rename = "completada")]
    Completed,
}

/// What the user picked. Without a plan, the current plan is renewed.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct RenewalChoice {
    alumno_id: String,
    #[serde(default)]
    plan_id: Option<String>,
}

impl RenewalChoice {
    pub fn new(alumno_id: String, plan_id: Option<String>) -> Self {
        Self { alumno_id, plan_id }
    }
}

/// State of a freshly loaded renewal flow.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct RenewalOptions {
    paso: RenewalStep,
    membresia_actual: Option<Membresia>,
    planes: Vec<Plan>,
    alertas: Vec<Alert>,
}

impl RenewalOptions {
    pub fn new(
        paso: RenewalStep,
        membresia_actual: Option<Membresia>,
        planes: Vec<Plan>,
        alertas: Vec<Alert>,
    ) -> Self {
        Self {
            paso,
            membresia_actual,
            planes,
            alertas,
        }
    }
}

/// What is displayed on the confirmation step.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct RenewalSummary {
    alumno_id: String,
    plan: Plan,
    periodo: RenewalPeriod,
}

impl RenewalSummary {
    pub fn new(alumno_id: String, plan: Plan, periodo: RenewalPeriod) -> Self {
        Self {
            alumno_id,
            plan,
            periodo,
        }
    }
}

/// Outcome of a renewal submission.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct RenewalOutcome {
    paso: RenewalStep,
    resumen: Option<RenewalSummary>,
    membresia: Option<Membresia>,
    alertas: Vec<Alert>,
}

impl RenewalOutcome {
    pub fn new(
        paso: RenewalStep,
        resumen: Option<RenewalSummary>,
        membresia: Option<Membresia>,
        alertas: Vec<Alert>,
    ) -> Self {
        Self {
            paso,
            resumen,
            membresia,
            alertas,
        }
    }
}
