//! Status model reported by the transcription service and the control
//! state derived from it.

use serde::{Deserialize, Serialize};

/// Status value the service reports in-band in every response body.
///
/// `success`/`warning`/`error` come back from the start/stop endpoints,
/// `running`/`stopped` from the status endpoint. Anything else lands in
/// `Unknown` so a newer service cannot break deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Success,
    Warning,
    Running,
    Stopped,
    Error,
    #[serde(other)]
    Unknown,
}

/// Parsed JSON body returned by every service endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: ServiceStatus,
    pub message: String,
}

/// Display styling bucket for a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Error,
    Neutral,
}

impl ServiceStatus {
    /// Display class for this status. `running` counts as success;
    /// everything that is neither success nor error is neutral.
    pub fn class(self) -> StatusClass {
        match self {
            ServiceStatus::Success | ServiceStatus::Running => StatusClass::Success,
            ServiceStatus::Error => StatusClass::Error,
            ServiceStatus::Warning | ServiceStatus::Stopped | ServiceStatus::Unknown => {
                StatusClass::Neutral
            }
        }
    }
}

/// Which panel actions are currently enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub can_start: bool,
    pub can_stop: bool,
}

impl Controls {
    /// Recompute enablement from a reported status. Only `running`
    /// disables start and only `stopped` disables stop, so an error or
    /// unrecognized report leaves both actions available.
    pub fn for_status(status: ServiceStatus) -> Self {
        Controls {
            can_start: status != ServiceStatus::Running,
            can_stop: status != ServiceStatus::Stopped,
        }
    }
}
