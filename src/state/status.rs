//! Reactor status and its display message

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the reactor stands. `Success` and `Exploded` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactorStatus {
    /// Countdown running, no submission or a penalty already absorbed
    #[default]
    Idle,
    /// Correct code entered; timer frozen
    Success,
    /// Last submission was wrong but time remains
    Error,
    /// Countdown reached zero before the code was entered
    Exploded,
}

impl ReactorStatus {
    /// Check if no further transitions are possible
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Exploded)
    }

    /// Message shown to the operator for this status
    pub fn message(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Success => "reactor stabilized",
            Self::Error => "incorrect code",
            Self::Exploded => "reactor exploded, everyone is fired",
        }
    }
}

impl fmt::Display for ReactorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Success => "success",
            Self::Error => "error",
            Self::Exploded => "exploded",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!ReactorStatus::Idle.is_terminal());
        assert!(!ReactorStatus::Error.is_terminal());
        assert!(ReactorStatus::Success.is_terminal());
        assert!(ReactorStatus::Exploded.is_terminal());
    }

    #[test]
    fn idle_has_no_message() {
        assert_eq!(ReactorStatus::Idle.message(), "");
        assert_eq!(ReactorStatus::Error.message(), "incorrect code");
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ReactorStatus::Exploded).unwrap();
        assert_eq!(json, "\"exploded\"");
        assert_eq!(ReactorStatus::Success.to_string(), "success");
    }
}
