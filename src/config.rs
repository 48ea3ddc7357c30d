//! Configuration, CLI argument handling and the fixed game constants

use std::time::Duration;

use clap::Parser;

/// Countdown length the reactor starts with (90 minutes)
pub const INITIAL_SECONDS: u32 = 90 * 60;

/// The stabilization code
pub const ACCESS_CODE: &str = "6647";

/// Time deducted for every wrong submission (5 minutes)
pub const PENALTY_SECONDS: u32 = 5 * 60;

/// Maximum number of digits kept in the pending input
pub const CODE_LENGTH: usize = 4;

const _: () = assert!(ACCESS_CODE.len() == CODE_LENGTH);

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "reactor-timer")]
#[command(about = "Countdown and access-code reactor panel served over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Milliseconds between countdown ticks
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_millis: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["reactor-timer"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "reactor-timer", "-p", "8080", "--host", "0.0.0.0", "--tick-millis", "250", "-v",
        ])
        .unwrap();
        assert_eq!(config.address(), "0.0.0.0:8080");
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        assert!(Config::try_parse_from(["reactor-timer", "--tick-millis", "0"]).is_err());
    }

    #[test]
    fn access_code_is_all_digits() {
        assert!(ACCESS_CODE.chars().all(|c| c.is_ascii_digit()));
        assert!(PENALTY_SECONDS < INITIAL_SECONDS);
    }
}
