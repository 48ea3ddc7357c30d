//! State management module
//!
//! The reactor state machine, its status and view projection, and the shared
//! application state that serializes access to it.

pub mod status;
pub mod view;
pub mod timer_state;
pub mod app_state;

// Re-export main types
pub use status::ReactorStatus;
pub use view::{format_clock, TimerView};
pub use timer_state::{sanitize_code, SubmitOutcome, TimerState};
pub use app_state::AppState;
