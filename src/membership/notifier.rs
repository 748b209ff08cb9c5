use crate::tools::log_error;
use dto::alert::Alert;
use log::debug;
use std::sync::Mutex;

/// Where alerts meant for the user are sent.
pub trait Notifier: Send + Sync {
    fn notify(&self, alert: Alert);
}

/// Keep alerts in memory, so that they can be returned along with the response.
#[derive(Debug, Default)]
pub struct AlertLog {
    alerts: Mutex<Vec<Alert>>,
}

impl AlertLog {
    pub fn into_alerts(self) -> Vec<Alert> {
        self.alerts.into_inner().unwrap_or_else(|poisoned| {
            log_error("Alert log has been poisoned");
            poisoned.into_inner()
        })
    }
}

impl Notifier for AlertLog {
    fn notify(&self, alert: Alert) {
        debug!("Alert raised [level: {:?}, message: {}]", alert.level(), alert.message());
        match self.alerts.lock() {
            Ok(mut alerts) => alerts.push(alert),
            Err(error) => log_error(error),
        }
    }
}
