//! Reactor Timer - a countdown and access-code panel
//!
//! A reactor counts down from ninety minutes. Operators have until it reaches
//! zero to enter the stabilization code; every wrong code costs five minutes.
//! This library holds the state machine, the clock that drives it and the
//! HTTP surface a panel renders from.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
pub use state::{AppState, TimerState, TimerView};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
