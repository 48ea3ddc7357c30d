//! Reactor timer state machine
//!
//! The machine never schedules itself: a driving clock calls [`TimerState::tick`]
//! once per second and the presentation layer calls [`TimerState::set_input`] and
//! [`TimerState::submit`]. Every operation is a plain synchronous transition.
//!
//! ```text
//! Idle/Error --correct code--> Success
//! Idle/Error --wrong code----> Error     (penalty leaves time)
//! Idle/Error --wrong code----> Exploded  (penalty reaches zero)
//! Idle/Error --tick to zero--> Exploded
//! ```

use tracing::{debug, info};

use crate::config::{ACCESS_CODE, CODE_LENGTH, INITIAL_SECONDS, PENALTY_SECONDS};

use super::{format_clock, ReactorStatus, TimerView};

/// What a call to [`TimerState::submit`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Code matched, timer frozen
    Stabilized,
    /// Code was wrong, `deducted` seconds removed and time remains
    Penalized { deducted: u32 },
    /// Code was wrong and the penalty drained the clock
    Exploded { deducted: u32 },
    /// Reactor already in a terminal state
    Ignored,
}

impl SubmitOutcome {
    pub fn label(self) -> &'static str {
        match self {
            Self::Stabilized => "stabilized",
            Self::Penalized { .. } => "penalized",
            Self::Exploded { .. } => "exploded",
            Self::Ignored => "ignored",
        }
    }
}

/// Countdown, status and pending code entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    seconds_remaining: u32,
    status: ReactorStatus,
    pending_input: String,
}

impl TimerState {
    /// Create a fresh reactor with the full countdown
    pub fn new() -> Self {
        Self::with_remaining(INITIAL_SECONDS)
    }

    /// Create a reactor partway through its countdown.
    ///
    /// The value is clamped to the initial duration; zero yields an exploded reactor.
    pub fn with_remaining(seconds: u32) -> Self {
        let seconds_remaining = seconds.min(INITIAL_SECONDS);
        let status = if seconds_remaining == 0 {
            ReactorStatus::Exploded
        } else {
            ReactorStatus::Idle
        };
        Self {
            seconds_remaining,
            status,
            pending_input: String::new(),
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn status(&self) -> ReactorStatus {
        self.status
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Advance the countdown by one second. Returns whether anything changed.
    pub fn tick(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            info!("Countdown reached zero, reactor exploded");
            self.status = ReactorStatus::Exploded;
        } else {
            debug!("Tick: {} seconds remaining", self.seconds_remaining);
        }
        true
    }

    /// Replace the pending entry with the first digits of `raw`.
    ///
    /// Non-digit characters are dropped; nothing happens once terminal.
    pub fn set_input(&mut self, raw: &str) {
        if self.is_terminal() {
            debug!("Ignoring input while reactor is {}", self.status);
            return;
        }

        self.pending_input = sanitize_code(raw);
    }

    /// Evaluate the pending entry against the access code
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_terminal() {
            debug!("Ignoring submission while reactor is {}", self.status);
            return SubmitOutcome::Ignored;
        }

        let correct = self.pending_input == ACCESS_CODE;
        self.pending_input.clear();

        if correct {
            info!("Access code accepted, reactor stabilized with {} seconds left", self.seconds_remaining);
            self.status = ReactorStatus::Success;
            return SubmitOutcome::Stabilized;
        }

        let deducted = PENALTY_SECONDS.min(self.seconds_remaining);
        self.seconds_remaining -= deducted;

        if self.seconds_remaining == 0 {
            info!("Wrong code, penalty drained the clock");
            self.status = ReactorStatus::Exploded;
            SubmitOutcome::Exploded { deducted }
        } else {
            info!("Wrong code, {} second penalty applied", deducted);
            self.status = ReactorStatus::Error;
            SubmitOutcome::Penalized { deducted }
        }
    }

    /// Project the current state for rendering
    pub fn view(&self) -> TimerView {
        TimerView {
            formatted_time: format_clock(self.seconds_remaining),
            status_message: self.status.message().to_string(),
            input_accepted: !self.is_terminal(),
            raw_seconds_remaining: self.seconds_remaining,
            status: self.status,
            pending_input: self.pending_input.clone(),
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep only ASCII digits, at most [`CODE_LENGTH`] of them
pub fn sanitize_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(CODE_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entered(code: &str) -> TimerState {
        let mut timer = TimerState::new();
        timer.set_input(code);
        timer
    }

    #[test]
    fn starts_idle_with_full_countdown() {
        let timer = TimerState::new();
        assert_eq!(timer.seconds_remaining(), INITIAL_SECONDS);
        assert_eq!(timer.status(), ReactorStatus::Idle);
        assert_eq!(timer.pending_input(), "");

        let view = timer.view();
        assert_eq!(view.formatted_time, "01:30:00");
        assert_eq!(view.status_message, "");
        assert!(view.input_accepted);
    }

    #[test]
    fn ticks_down_to_explosion() {
        let mut timer = TimerState::new();
        let mut previous = timer.seconds_remaining();

        for _ in 0..INITIAL_SECONDS - 1 {
            assert!(timer.tick());
            assert!(timer.seconds_remaining() < previous);
            assert_eq!(timer.status(), ReactorStatus::Idle);
            previous = timer.seconds_remaining();
        }

        assert!(timer.tick());
        assert_eq!(timer.seconds_remaining(), 0);
        assert_eq!(timer.status(), ReactorStatus::Exploded);
        assert!(!timer.tick());
        assert_eq!(timer.view().status_message, "reactor exploded, everyone is fired");
    }

    #[test]
    fn empty_submission_is_penalized() {
        let mut timer = TimerState::new();
        assert_eq!(timer.submit(), SubmitOutcome::Penalized { deducted: PENALTY_SECONDS });
        assert_eq!(timer.status(), ReactorStatus::Error);
        assert_eq!(timer.seconds_remaining(), 5100);
        assert_eq!(timer.view().status_message, "incorrect code");
    }

    #[test]
    fn correct_code_stabilizes_and_freezes() {
        let mut timer = entered("6647");
        for _ in 0..42 {
            timer.tick();
        }
        let before = timer.seconds_remaining();

        assert_eq!(timer.submit(), SubmitOutcome::Stabilized);
        assert_eq!(timer.status(), ReactorStatus::Success);
        assert_eq!(timer.seconds_remaining(), before);
        assert_eq!(timer.pending_input(), "");

        for _ in 0..1000 {
            assert!(!timer.tick());
        }
        assert_eq!(timer.seconds_remaining(), before);
        assert_eq!(timer.view().status_message, "reactor stabilized");
        assert!(!timer.view().input_accepted);
    }

    #[test]
    fn correct_code_after_error_still_stabilizes() {
        let mut timer = entered("1111");
        timer.submit();
        assert_eq!(timer.status(), ReactorStatus::Error);

        timer.set_input("6647");
        assert_eq!(timer.submit(), SubmitOutcome::Stabilized);
        assert_eq!(timer.seconds_remaining(), INITIAL_SECONDS - PENALTY_SECONDS);
    }

    #[test]
    fn penalty_larger_than_remaining_explodes() {
        let mut timer = TimerState::with_remaining(200);
        timer.set_input("0000");

        assert_eq!(timer.submit(), SubmitOutcome::Exploded { deducted: 200 });
        assert_eq!(timer.seconds_remaining(), 0);
        assert_eq!(timer.status(), ReactorStatus::Exploded);
    }

    #[test]
    fn penalty_landing_exactly_on_zero_explodes() {
        let mut timer = TimerState::with_remaining(PENALTY_SECONDS);
        assert_eq!(timer.submit(), SubmitOutcome::Exploded { deducted: PENALTY_SECONDS });
        assert_eq!(timer.status(), ReactorStatus::Exploded);
    }

    #[test]
    fn wrong_code_deducts_min_of_penalty_and_remaining() {
        for remaining in [1, 299, 300, 301, 1000, INITIAL_SECONDS] {
            let mut timer = TimerState::with_remaining(remaining);
            timer.set_input("1234");
            timer.submit();

            let expected = remaining - PENALTY_SECONDS.min(remaining);
            assert_eq!(timer.seconds_remaining(), expected);
            let status = if expected > 0 { ReactorStatus::Error } else { ReactorStatus::Exploded };
            assert_eq!(timer.status(), status);
        }
    }

    #[test]
    fn sanitizes_input() {
        let timer = entered("12a3#45");
        assert_eq!(timer.pending_input(), "1234");
        assert_eq!(sanitize_code("abc"), "");
        assert_eq!(sanitize_code("٣123"), "123");
    }

    #[test]
    fn set_input_is_idempotent() {
        let mut timer = entered("9x8y7z6w5");
        let once = timer.pending_input().to_string();
        timer.set_input(&once);
        assert_eq!(timer.pending_input(), once);
    }

    #[test]
    fn submission_clears_pending_input() {
        let mut timer = entered("12");
        timer.submit();
        assert_eq!(timer.pending_input(), "");
        assert_eq!(timer.view().pending_input, "");
    }

    #[test]
    fn terminal_states_ignore_everything() {
        let mut stabilized = entered("6647");
        stabilized.submit();
        let mut exploded = TimerState::with_remaining(1);
        exploded.tick();

        for timer in [&mut stabilized, &mut exploded] {
            let frozen = timer.clone();
            timer.tick();
            timer.set_input("6647");
            assert_eq!(timer.submit(), SubmitOutcome::Ignored);
            timer.set_input("1");
            assert_eq!(*timer, frozen);
        }
    }

    #[test]
    fn zero_remaining_starts_exploded() {
        let timer = TimerState::with_remaining(0);
        assert_eq!(timer.status(), ReactorStatus::Exploded);
        assert!(!timer.view().input_accepted);
    }

    #[test]
    fn remaining_is_clamped_to_initial() {
        let timer = TimerState::with_remaining(INITIAL_SECONDS + 100);
        assert_eq!(timer.seconds_remaining(), INITIAL_SECONDS);
    }
}
