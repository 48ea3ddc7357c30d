//! Shared application state wrapping the reactor

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::error::AppError;
use super::{SubmitOutcome, TimerState, TimerView};

/// Main application state: the reactor plus server metadata
#[derive(Debug)]
pub struct AppState {
    /// The reactor state machine; every mutation goes through this lock
    pub reactor: Arc<Mutex<TimerState>>,
    /// Cadence of the driving clock
    pub tick_interval: Duration,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last operator action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Latest view, published after every change
    pub view_tx: watch::Sender<TimerView>,
    /// Keep the receiver alive to prevent channel closure
    pub _view_rx: watch::Receiver<TimerView>,
}

impl AppState {
    /// Create a new AppState with a fresh reactor
    pub fn new(port: u16, host: String, tick_interval: Duration) -> Self {
        Self::with_reactor(TimerState::new(), port, host, tick_interval)
    }

    /// Create an AppState around an existing reactor
    pub fn with_reactor(reactor: TimerState, port: u16, host: String, tick_interval: Duration) -> Self {
        let (view_tx, view_rx) = watch::channel(reactor.view());

        Self {
            reactor: Arc::new(Mutex::new(reactor)),
            tick_interval,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            view_tx,
            _view_rx: view_rx,
        }
    }

    /// Apply a mutation to the reactor and publish the resulting view.
    ///
    /// `action` is recorded as the last operator action when present.
    fn update_reactor<F, R>(&self, action: Option<&str>, updater: F) -> Result<(R, TimerView), AppError>
    where
        F: FnOnce(&mut TimerState) -> R,
    {
        let mut reactor = self.reactor.lock()?;
        let before = reactor.clone();
        let result = updater(&mut *reactor);
        let changed = *reactor != before;
        let view = reactor.view();
        drop(reactor); // Release the lock early

        if let Some(action) = action {
            if let Ok(mut last_action) = self.last_action.lock() {
                *last_action = Some(action.to_string());
            }
            if let Ok(mut last_time) = self.last_action_time.lock() {
                *last_time = Some(Utc::now());
            }
        }

        if changed {
            self.view_tx.send_replace(view.clone());
        }

        Ok((result, view))
    }

    /// Advance the countdown by one tick
    pub fn tick(&self) -> Result<TimerView, AppError> {
        let (_, view) = self.update_reactor(None, TimerState::tick)?;
        Ok(view)
    }

    /// Replace the pending code entry
    pub fn set_input(&self, raw: &str) -> Result<TimerView, AppError> {
        let (_, view) = self.update_reactor(Some("input"), |reactor| reactor.set_input(raw))?;
        Ok(view)
    }

    /// Submit the pending code entry
    pub fn submit(&self) -> Result<(SubmitOutcome, TimerView), AppError> {
        let result = self.update_reactor(Some("submit"), TimerState::submit)?;
        log_outcome(result.0);
        Ok(result)
    }

    /// Enter and submit a code under a single lock
    pub fn enter_code(&self, code: &str) -> Result<(SubmitOutcome, TimerView), AppError> {
        let result = self.update_reactor(Some("code"), |reactor| {
            reactor.set_input(code);
            reactor.submit()
        })?;
        log_outcome(result.0);
        Ok(result)
    }

    /// Get the current view
    pub fn view(&self) -> Result<TimerView, AppError> {
        Ok(self.reactor.lock()?.view())
    }

    /// Subscribe to view updates
    pub fn subscribe(&self) -> watch::Receiver<TimerView> {
        self.view_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

fn log_outcome(outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Ignored => warn!("Submission ignored, reactor already locked"),
        other => info!("Submission outcome: {}", other.label()),
    }
}
