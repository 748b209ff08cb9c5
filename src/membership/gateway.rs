use crate::backend::error::Result;
use crate::backend::membresias::{renew_membership, retrieve_active_membership_of_alumno};
use crate::backend::planes::retrieve_plans;
use crate::backend::session::BackendSession;
use dto::membresia::{Membresia, RenovacionResponse, RenovarMembresia};
use dto::plan::Plan;

/// Backend operations the renewal flow relies on.
#[rocket::async_trait]
pub trait MembershipGateway: Send + Sync {
    /// `None` when the student has no active membership.
    async fn active_membership(&self, alumno_id: &str) -> Result<Option<Membresia>>;
    async fn plans(&self) -> Result<Vec<Plan>>;
    async fn renew(&self, renewal: &RenovarMembresia) -> Result<RenovacionResponse>;
}

#[rocket::async_trait]
impl MembershipGateway for BackendSession {
    async fn active_membership(&self, alumno_id: &str) -> Result<Option<Membresia>> {
        retrieve_active_membership_of_alumno(self.client(), self.base_url(), alumno_id).await
    }

    async fn plans(&self) -> Result<Vec<Plan>> {
        retrieve_plans(self.client(), self.base_url()).await
    }

    async fn renew(&self, renewal: &RenovarMembresia) -> Result<RenovacionResponse> {
        renew_membership(self.client(), self.base_url(), renewal).await
    }
}
