use crate::membresia::Membresia;
use crate::membership_status::MembershipStatus::{AboutToExpire, Active, Expired, NoMembership};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A membership ending within this number of days is about to expire.
pub const ABOUT_TO_EXPIRE_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Hash, Clone, Copy)]
pub enum MembershipStatus {
    #[serde(rename = "Activo")]
    Active,
    #[serde(rename = "Por Vencer")]
    AboutToExpire,
    #[serde(rename = "Vencido")]
    Expired,
    #[serde(rename = "Sin Membresia")]
    NoMembership,
}

/// Number of whole days between today and the end date.
/// Zero when the membership ends today, negative once it has ended.
pub fn days_remaining(end_date: &NaiveDate, today: &NaiveDate) -> i64 {
    end_date.signed_duration_since(*today).num_days()
}

/// Compute the status of a student from the list of active memberships.
/// Only the first membership belonging to the student is considered:
/// the backend guarantees there is at most one active membership per student.
pub fn compute_membership_status(
    alumno_id: &str,
    memberships: &[Membresia],
    today: &NaiveDate,
) -> MembershipStatus {
    let membership = memberships
        .iter()
        .find(|membership| membership.alumno_id() == alumno_id);
    compute_status_of_membership(membership, today)
}

pub fn compute_status_of_membership(
    membership: Option<&Membresia>,
    today: &NaiveDate,
) -> MembershipStatus {
    match membership {
        None => NoMembership,
        Some(membership) if !membership.esta_activa() => Expired,
        Some(membership) => match days_remaining(membership.fecha_fin(), today) {
            days if days <= 0 => Expired,
            days if days <= ABOUT_TO_EXPIRE_DAYS => AboutToExpire,
            _ => Active,
        },
    }
}
