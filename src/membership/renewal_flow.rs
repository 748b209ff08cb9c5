//! Renewal of a student's membership, or assignment of a first one.
//!
//! The flow is loaded with the current membership and the plans, then walks through
//! the steps until the renewal is submitted. Alerts for the user go to the [Notifier].

use crate::backend::error::BackendError;
use crate::backend::error::BackendError::{Rejected, ScheduledRenewalConflict};
use crate::membership::error::FlowError::{InvalidTransition, UnknownPlan};
use crate::membership::error::Result;
use crate::membership::gateway::MembershipGateway;
use crate::membership::notifier::Notifier;
use chrono::NaiveDate;
use dto::alert::Alert;
use dto::membresia::{Membresia, RenovarMembresia};
use dto::plan::Plan;
use dto::renewal::RenewalStep::{
    Completed, Confirm, HasMembership, Loading, NoMembership, SelectPlan,
};
use dto::renewal::{RenewalStep, RenewalSummary, compute_renewal_period};
use log::{debug, warn};
use rocket::tokio;

pub const LOAD_FAILED_MESSAGE: &str = "Error al cargar la información de membresías";
pub const SCHEDULED_RENEWAL_MESSAGE: &str =
    "Ya tienes una renovación programada. No puedes programar otra hasta que esta inicie.";
pub const RENEWAL_FAILED_MESSAGE: &str = "Error al asignar la membresía";
pub const RENEWAL_SUCCEEDED_MESSAGE: &str = "Membresía asignada correctamente";

pub struct RenewalFlow<'a, G: MembershipGateway, N: Notifier> {
    gateway: &'a G,
    notifier: &'a N,
    alumno_id: String,
    today: NaiveDate,
    step: RenewalStep,
    current_membership: Option<Membresia>,
    plans: Vec<Plan>,
    selected_plan: Option<Plan>,
    load_error: Option<BackendError>,
    submission_error: Option<BackendError>,
}

impl<'a, G: MembershipGateway, N: Notifier> RenewalFlow<'a, G, N> {
    pub fn new(gateway: &'a G, notifier: &'a N, alumno_id: &str, today: NaiveDate) -> Self {
        Self {
            gateway,
            notifier,
            alumno_id: alumno_id.to_owned(),
            today,
            step: Loading,
            current_membership: None,
            plans: vec![],
            selected_plan: None,
            load_error: None,
            submission_error: None,
        }
    }

    pub fn step(&self) -> RenewalStep {
        self.step
    }

    pub fn current_membership(&self) -> Option<&Membresia> {
        self.current_membership.as_ref()
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn selected_plan(&self) -> Option<&Plan> {
        self.selected_plan.as_ref()
    }

    /// Why loading failed, if it did. The flow then went on as if the student had no membership.
    pub fn load_error(&self) -> Option<&BackendError> {
        self.load_error.as_ref()
    }

    /// Why the last submission failed, if it did.
    pub fn submission_error(&self) -> Option<&BackendError> {
        self.submission_error.as_ref()
    }

    pub fn into_parts(self) -> (RenewalStep, Option<Membresia>, Vec<Plan>) {
        (self.step, self.current_membership, self.plans)
    }

    /// Fetch the current membership and the plans at once.
    /// A membership that already ended is ignored, as if the student had none.
    pub async fn load(&mut self) -> Result<()> {
        self.ensure_step("load", &[Loading])?;
        let (membership, plans) = tokio::join!(
            self.gateway.active_membership(&self.alumno_id),
            self.gateway.plans()
        );

        match membership {
            Ok(membership) => {
                self.current_membership =
                    membership.filter(|membership| *membership.fecha_fin() >= self.today)
            }
            Err(error) => {
                warn!(
                    "Can't load current membership [alumno: {}, error: {error:?}]",
                    self.alumno_id
                );
                self.load_error = Some(error);
            }
        }
        match plans {
            Ok(plans) => self.plans = plans,
            Err(error) => {
                warn!("Can't load plans [error: {error:?}]");
                self.load_error.get_or_insert(error);
            }
        }

        if self.load_error.is_some() {
            self.notifier.notify(Alert::error(LOAD_FAILED_MESSAGE));
            self.current_membership = None;
        }
        let step = if self.current_membership.is_some() {
            HasMembership
        } else {
            NoMembership
        };
        self.move_to(step);
        Ok(())
    }

    /// Pick a plan, either as a first membership or in place of the current plan.
    pub fn select_plan(&mut self, plan_id: &str) -> Result<()> {
        self.ensure_step("select_plan", &[NoMembership, SelectPlan])?;
        let plan = self
            .plans
            .iter()
            .find(|plan| plan.plan_id() == plan_id)
            .cloned()
            .ok_or_else(|| UnknownPlan(plan_id.to_owned()))?;
        self.selected_plan = Some(plan);
        self.move_to(Confirm);
        Ok(())
    }

    pub fn renew_same_plan(&mut self) -> Result<()> {
        self.ensure_step("renew_same_plan", &[HasMembership])?;
        let Some(membership) = &self.current_membership else {
            return Err(self.invalid("renew_same_plan"));
        };
        // Plans may have changed since the membership was bought: prefer the up-to-date one.
        let plan = self
            .plans
            .iter()
            .find(|plan| plan.plan_id() == membership.plan_id())
            .cloned()
            .unwrap_or_else(|| Plan::from(membership.plan().clone()));
        self.selected_plan = Some(plan);
        self.move_to(Confirm);
        Ok(())
    }

    pub fn change_plan(&mut self) -> Result<()> {
        self.ensure_step("change_plan", &[HasMembership])?;
        self.move_to(SelectPlan);
        Ok(())
    }

    pub fn back(&mut self) -> Result<()> {
        self.ensure_step("back", &[SelectPlan, Confirm])?;
        self.selected_plan = None;
        let step = if self.current_membership.is_some() {
            HasMembership
        } else {
            NoMembership
        };
        self.move_to(step);
        Ok(())
    }

    /// Walk from a loaded flow to the confirmation step.
    /// Without a plan, the current plan is renewed.
    pub fn choose(&mut self, plan_id: Option<&str>) -> Result<()> {
        match (self.step, plan_id) {
            (HasMembership, None) => self.renew_same_plan(),
            (HasMembership, Some(plan_id))
                if self
                    .current_membership
                    .as_ref()
                    .is_some_and(|membership| membership.plan_id() == plan_id) =>
            {
                self.renew_same_plan()
            }
            (HasMembership, Some(plan_id)) => {
                self.change_plan()?;
                self.select_plan(plan_id).inspect_err(|_| {
                    self.step = HasMembership;
                })
            }
            (_, Some(plan_id)) => self.select_plan(plan_id),
            (_, None) => Err(self.invalid("choose")),
        }
    }

    /// What is about to be submitted, once a plan has been selected.
    pub fn summary(&self) -> Option<RenewalSummary> {
        let plan = self.selected_plan.as_ref()?;
        let current_end_date = self
            .current_membership
            .as_ref()
            .map(|membership| membership.fecha_fin());
        let period = compute_renewal_period(current_end_date, *plan.duracion_dias(), &self.today);
        Some(RenewalSummary::new(
            self.alumno_id.clone(),
            plan.clone(),
            period,
        ))
    }

    /// Submit the renewal to the backend.
    /// On failure, the flow stays at the confirmation step: the user may retry.
    pub async fn submit(&mut self) -> Result<Option<Membresia>> {
        self.ensure_step("submit", &[Confirm])?;
        let Some(plan) = &self.selected_plan else {
            return Err(self.invalid("submit"));
        };

        let renewal = RenovarMembresia::new(self.alumno_id.clone(), plan.plan_id().to_owned());
        let response = match self.gateway.renew(&renewal).await {
            Ok(response) => response,
            Err(error) => {
                self.notify_failure(&error);
                self.submission_error = Some(error);
                return Ok(None);
            }
        };

        let message = if response.message().trim().is_empty() {
            RENEWAL_SUCCEEDED_MESSAGE
        } else {
            response.message()
        };
        self.notifier.notify(Alert::success(message));
        self.submission_error = None;
        self.move_to(Completed);
        Ok(Some(response.membresia().clone()))
    }

    fn notify_failure(&self, error: &BackendError) {
        match error {
            ScheduledRenewalConflict(message) => {
                debug!("Renewal refused, one is already scheduled [message: {message}]");
                self.notifier.notify(Alert::error(SCHEDULED_RENEWAL_MESSAGE));
            }
            Rejected(message) => self.notifier.notify(Alert::error(message)),
            error => {
                warn!("Renewal failed [alumno: {}, error: {error:?}]", self.alumno_id);
                self.notifier.notify(Alert::error(RENEWAL_FAILED_MESSAGE));
            }
        }
    }

    fn ensure_step(&self, operation: &'static str, allowed_steps: &[RenewalStep]) -> Result<()> {
        if allowed_steps.contains(&self.step) {
            Ok(())
        } else {
            Err(self.invalid(operation))
        }
    }

    fn invalid(&self, operation: &'static str) -> crate::membership::error::FlowError {
        InvalidTransition {
            operation,
            step: self.step,
        }
    }

    fn move_to(&mut self, step: RenewalStep) {
        debug!(
            "Renewal flow moves [alumno: {}, from: {:?}, to: {step:?}]",
            self.alumno_id, self.step
        );
        self.step = step;
    }
}
