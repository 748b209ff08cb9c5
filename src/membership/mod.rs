pub mod error;
pub mod gateway;
pub mod notifier;
pub mod renewal_flow;
pub mod status;
