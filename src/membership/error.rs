use dto::renewal::RenewalStep;
use thiserror::Error;

pub type Result<T, E = FlowError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum FlowError {
    #[error("The operation {operation} can't be done while the flow is at step {step:?}.")]
    InvalidTransition {
        operation: &'static str,
        step: RenewalStep,
    },
    #[error("The plan {0} is not among the available plans.")]
    UnknownPlan(String),
}
