//! Countdown background task driving the reactor clock

use std::sync::Arc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task that ticks the reactor until it reaches a terminal state.
///
/// The task also watches view updates so a successful submission stops the
/// clock without waiting for the next tick.
pub async fn countdown_task(state: Arc<AppState>) {
    info!("Starting countdown task, one tick every {:?}", state.tick_interval);

    let mut view_rx = state.subscribe();
    if !view_rx.borrow_and_update().input_accepted {
        info!("Reactor already locked, countdown not started");
        return;
    }

    let mut interval = interval(state.tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match state.tick() {
                    Ok(view) => {
                        debug!("Countdown at {}", view.formatted_time);
                        if !view.input_accepted {
                            info!("Reactor locked as {}, stopping countdown", view.status);
                            break;
                        }
                    }
                    Err(e) => {
                        error!("Failed to tick reactor: {}", e);
                        break;
                    }
                }
            }

            changed = view_rx.changed() => {
                if changed.is_err() {
                    error!("View channel closed, stopping countdown");
                    break;
                }
                let view = view_rx.borrow_and_update().clone();
                if !view.input_accepted {
                    info!("Reactor locked as {}, stopping countdown", view.status);
                    break;
                }
            }
        }
    }
}
