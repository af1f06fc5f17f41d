//! Configuration and CLI argument parsing for rconsole

use std::time::Duration;

use clap::Parser;

/// Default port for Source RCON servers
pub const DEFAULT_PORT: u16 = 27015;

/// Lowest valid port number
pub const PORT_MIN: u16 = 1;

/// Highest valid port number
pub const PORT_MAX: u16 = 65535;

/// Timeout for each connect/authenticate/command cycle, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// rconsole CLI arguments
///
/// Everything is optional: anything not supplied here is prompted for
/// interactively. Flags and environment variables only pre-fill the
/// first collection attempt; after a failed validation the operator is
/// prompted again for all fields.
#[derive(Parser, Debug, Clone)]
#[command(name = "rconsole")]
#[command(version)]
#[command(about = "Interactive console for administering Source RCON servers")]
pub struct Args {
    /// Server address to connect to
    #[arg(long, env = "RCONSOLE_HOST")]
    pub host: Option<String>,

    /// RCON port (raw; falls back to 27015 when invalid)
    #[arg(long, env = "RCONSOLE_PORT")]
    pub port: Option<String>,

    /// RCON password
    #[arg(long, env = "RCONSOLE_PASSWORD")]
    pub password: Option<String>,

    /// Connect/command timeout in seconds
    #[arg(long, default_value = "3", env = "RCONSOLE_TIMEOUT")]
    pub timeout: u64,
}

/// Parsed and validated configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-filled server address, if any
    pub host: Option<String>,

    /// Pre-filled raw port string, if any
    pub port: Option<String>,

    /// Pre-filled password, if any
    pub password: Option<String>,

    /// Per-attempt network timeout
    pub timeout: Duration,
}

impl Config {
    /// Create Config from CLI Args
    pub fn from_args(args: Args) -> Self {
        Config {
            host: sanitize_field(args.host),
            port: sanitize_field(args.port),
            password: sanitize_field(args.password),
            timeout: Duration::from_secs(args.timeout.max(1)),
        }
    }
}

/// Treat empty CLI/env values as not provided
fn sanitize_field(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Port normalization rules
///
/// Bounds are injected at construction rather than read from globals so
/// tests can exercise arbitrary ranges.
#[derive(Debug, Clone, Copy)]
pub struct PortValidator {
    default: u16,
    min: u16,
    max: u16,
}

impl PortValidator {
    /// Create a validator with explicit bounds
    pub fn new(default: u16, min: u16, max: u16) -> Self {
        Self { default, min, max }
    }

    /// The fallback port substituted for invalid input
    pub fn default_port(&self) -> u16 {
        self.default
    }

    /// Parse a raw port string, returning None when it is not a valid
    /// integer within bounds
    pub fn check(&self, raw: &str) -> Option<u16> {
        let port = raw.trim().parse::<i64>().ok()?;
        if (self.min as i64..=self.max as i64).contains(&port) {
            Some(port as u16)
        } else {
            None
        }
    }

    /// Normalize a raw port string, substituting the default (with an
    /// operator notice) when the input is absent, non-numeric, or out
    /// of range. Never fails.
    pub fn validate(&self, raw: &str) -> u16 {
        match self.check(raw) {
            Some(port) => port,
            None => {
                println!("Using default port {}.", self.default);
                self.default
            }
        }
    }
}

impl Default for PortValidator {
    fn default() -> Self {
        Self::new(DEFAULT_PORT, PORT_MIN, PORT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_in_range() {
        let v = PortValidator::default();
        assert_eq!(v.check("27016"), Some(27016));
        assert_eq!(v.check("1"), Some(1));
        assert_eq!(v.check("65535"), Some(65535));
    }

    #[test]
    fn test_check_trims_whitespace() {
        let v = PortValidator::default();
        assert_eq!(v.check("  27015 "), Some(27015));
    }

    #[test]
    fn test_check_out_of_range() {
        let v = PortValidator::default();
        assert_eq!(v.check("0"), None);
        assert_eq!(v.check("65536"), None);
        assert_eq!(v.check("-25"), None);
        assert_eq!(v.check("99999999999"), None);
    }

    #[test]
    fn test_check_not_numeric() {
        let v = PortValidator::default();
        assert_eq!(v.check(""), None);
        assert_eq!(v.check("abc"), None);
        assert_eq!(v.check("27015a"), None);
        assert_eq!(v.check("27.15"), None);
    }

    #[test]
    fn test_validate_falls_back_to_default() {
        let v = PortValidator::default();
        assert_eq!(v.validate("garbage"), DEFAULT_PORT);
        assert_eq!(v.validate(""), DEFAULT_PORT);
        assert_eq!(v.validate("70000"), DEFAULT_PORT);
        assert_eq!(v.validate("25575"), 25575);
    }

    #[test]
    fn test_validate_custom_bounds() {
        let v = PortValidator::new(4000, 1000, 5000);
        assert_eq!(v.validate("999"), 4000);
        assert_eq!(v.validate("1000"), 1000);
        assert_eq!(v.validate("5001"), 4000);
    }

    #[test]
    fn test_sanitize_field() {
        assert_eq!(sanitize_field(Some("host".into())), Some("host".to_string()));
        assert_eq!(sanitize_field(Some("".into())), None);
        assert_eq!(sanitize_field(None), None);
    }

    #[test]
    fn test_config_from_args_minimum_timeout() {
        let args = Args {
            host: None,
            port: None,
            password: None,
            timeout: 0,
        };
        let config = Config::from_args(args);
        assert_eq!(config.timeout, Duration::from_secs(1));
    }
}
