//! Background tasks module
//!
//! This module contains the driving clock that runs alongside the HTTP server.

pub mod countdown;

// Re-export main functions
pub use countdown::countdown_task;
