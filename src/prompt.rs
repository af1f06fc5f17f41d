//! Operator prompts and input classification
//!
//! Collects connection credentials from the terminal and classifies
//! command-loop input lines. The password prompt never echoes and the
//! collected value is never written to any log or error message.

use std::io::Write as _;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};

use crate::config::{Config, PortValidator};
use crate::console::ConnectionProfile;
use crate::error::{ConsoleError, Result};

/// One line of operator input in the command loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandInput {
    /// A command to forward to the server, verbatim
    Command(String),

    /// The exit sentinel; the caller decides how to terminate
    Exit,
}

impl CommandInput {
    /// Classify a raw input line
    ///
    /// The exit sentinel is matched after trimming surrounding
    /// whitespace, case-insensitively. Anything else is forwarded
    /// unmodified.
    pub fn parse(line: &str) -> Self {
        if line.trim().eq_ignore_ascii_case("exit") {
            CommandInput::Exit
        } else {
            CommandInput::Command(line.to_string())
        }
    }
}

/// Source of connection profiles
///
/// Split out as a trait so the orchestrator's retry loop can be tested
/// with scripted profiles instead of a live terminal.
#[async_trait]
pub trait Collector: Send {
    /// Produce one fresh ConnectionProfile
    async fn collect(&mut self) -> Result<ConnectionProfile>;
}

/// Values accepted from CLI flags or environment for the first attempt
#[derive(Debug, Clone, Default)]
struct Prefill {
    host: Option<String>,
    port: Option<String>,
    password: Option<String>,
}

/// Interactive credential collector
///
/// Prompts for address, raw port (normalized through PortValidator),
/// and password (masked, read on the blocking pool). CLI/env values
/// pre-fill the first collection only; retries always prompt fresh so
/// a bad flag value cannot wedge the retry loop.
pub struct TerminalCollector {
    validator: PortValidator,
    reader: BufReader<Stdin>,
    prefill: Option<Prefill>,
}

impl TerminalCollector {
    pub fn new(config: &Config) -> Self {
        Self {
            validator: PortValidator::default(),
            reader: BufReader::new(tokio::io::stdin()),
            prefill: Some(Prefill {
                host: config.host.clone(),
                port: config.port.clone(),
                password: config.password.clone(),
            }),
        }
    }

    /// Print a prompt and read one trimmed line from stdin
    async fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        std::io::stdout().flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line).await?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    async fn prompt_password(&self) -> Result<String> {
        let password =
            tokio::task::spawn_blocking(|| rpassword::prompt_password("Enter your password: "))
                .await
                .map_err(|e| ConsoleError::protocol(format!("password prompt failed: {e}")))??;
        Ok(password)
    }
}

#[async_trait]
impl Collector for TerminalCollector {
    async fn collect(&mut self) -> Result<ConnectionProfile> {
        let prefill = self.prefill.take().unwrap_or_default();

        let address = match prefill.host {
            Some(host) => host,
            None => self.prompt_line("Enter address: ").await?,
        };

        let raw_port = match prefill.port {
            Some(port) => port,
            None => {
                let prompt = format!("Enter port (default {}): ", self.validator.default_port());
                self.prompt_line(&prompt).await?
            }
        };
        let port = self.validator.validate(&raw_port);

        let password = match prefill.password {
            Some(password) => password,
            None => self.prompt_password().await?,
        };

        Ok(ConnectionProfile::new(address, port, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Args;

    #[test]
    fn test_parse_exit_sentinel() {
        assert_eq!(CommandInput::parse("exit"), CommandInput::Exit);
        assert_eq!(CommandInput::parse("EXIT"), CommandInput::Exit);
        assert_eq!(CommandInput::parse(" Exit "), CommandInput::Exit);
        assert_eq!(CommandInput::parse("\texit\n"), CommandInput::Exit);
    }

    #[test]
    fn test_parse_commands_pass_through_verbatim() {
        assert_eq!(
            CommandInput::parse("status"),
            CommandInput::Command("status".to_string())
        );
        assert_eq!(
            CommandInput::parse("say hello exit"),
            CommandInput::Command("say hello exit".to_string())
        );
        // Leading/trailing whitespace is preserved for non-sentinel input
        assert_eq!(
            CommandInput::parse("  kick player  "),
            CommandInput::Command("  kick player  ".to_string())
        );
        assert_eq!(CommandInput::parse(""), CommandInput::Command(String::new()));
    }

    #[test]
    fn test_parse_exit_with_arguments_is_a_command() {
        assert_eq!(
            CommandInput::parse("exit now"),
            CommandInput::Command("exit now".to_string())
        );
    }

    #[tokio::test]
    async fn test_collect_fully_prefilled_skips_prompts() {
        let args = Args {
            host: Some("10.0.0.5".to_string()),
            port: Some("bogus".to_string()),
            password: Some("secret".to_string()),
            timeout: 3,
        };
        let config = Config::from_args(args);
        let mut collector = TerminalCollector::new(&config);

        // All fields prefilled, so no stdin interaction happens.
        let profile = collector.collect().await.unwrap();
        assert_eq!(profile.address, "10.0.0.5");
        assert_eq!(profile.port, crate::config::DEFAULT_PORT);
        assert_eq!(profile.password, "secret");
    }
}
