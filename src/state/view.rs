//! Read-only projection of the reactor used for rendering

use serde::{Deserialize, Serialize};

use super::ReactorStatus;

/// Snapshot of everything a renderer needs, derived on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerView {
    pub formatted_time: String,
    pub status_message: String,
    pub input_accepted: bool,
    pub raw_seconds_remaining: u32,
    pub status: ReactorStatus,
    pub pending_input: String,
}

/// Render seconds as `HH:MM:SS`, each field zero-padded to two digits
pub fn format_clock(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
