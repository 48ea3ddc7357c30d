//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{SubmitOutcome, TimerView};

/// Body of `PUT /input`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputRequest {
    pub raw: String,
}

/// Body of `POST /code`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeRequest {
    pub code: String,
}

/// API response structure for reactor actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub view: TimerView,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, view: TimerView) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            view,
        }
    }

    /// Response for an input update
    pub fn input(view: TimerView) -> Self {
        let message = if view.input_accepted {
            format!("Pending code set to '{}'", view.pending_input)
        } else {
            "Input ignored, reactor is locked".to_string()
        };
        Self::new("input".to_string(), message, view)
    }

    /// Response for a submission
    pub fn submitted(outcome: SubmitOutcome, view: TimerView) -> Self {
        let message = match outcome {
            SubmitOutcome::Penalized { deducted } | SubmitOutcome::Exploded { deducted } => {
                format!("{} ({} seconds deducted)", view.status_message, deducted)
            }
            SubmitOutcome::Stabilized => view.status_message.clone(),
            SubmitOutcome::Ignored => "Submission ignored, reactor is locked".to_string(),
        };
        Self::new(outcome.label().to_string(), message, view)
    }
}

/// Status response with server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub view: TimerView,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
