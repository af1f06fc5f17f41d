//! Session establishment and the interactive command loop
//!
//! This is the composition layer: `SessionValidator` confirms a profile
//! with one bounded connect/authenticate/close cycle, `CommandSession`
//! drives the read-execute-display loop, and `SessionOrchestrator` ties
//! collection, validation, and the loop together.

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::timeout;
use tracing::debug;

use crate::console::{ConnectionProfile, ConsoleClient};
use crate::error::{ConsoleError, Result};
use crate::prompt::{Collector, CommandInput};

/// One full open-authenticate-run-close cycle
///
/// The handle is closed on both the success and the failure path; the
/// caller's timeout cancelling this future drops the handle, which
/// closes the socket as well.
async fn connect_run_close(
    client: &dyn ConsoleClient,
    profile: &ConnectionProfile,
    command: &str,
) -> Result<String> {
    let mut handle = client.open(profile).await?;
    let result = handle.run(command).await;
    handle.close().await;
    result
}

/// Confirms that a ConnectionProfile is usable
///
/// Performs a bounded connect-authenticate-close cycle without sending
/// any command. All failure kinds (unreachable host, rejected password,
/// timeout) collapse into `false`; no distinction is surfaced here.
pub struct SessionValidator {
    client: Arc<dyn ConsoleClient>,
    timeout: Duration,
}

impl SessionValidator {
    pub fn new(client: Arc<dyn ConsoleClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Attempt one connect-authenticate-close cycle
    pub async fn validate(&self, profile: &ConnectionProfile) -> bool {
        let attempt = async {
            let handle = self.client.open(profile).await?;
            handle.close().await;
            Ok::<(), ConsoleError>(())
        };

        match timeout(self.timeout, attempt).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                debug!("validation failed: {e}");
                false
            }
            Err(_) => {
                debug!("validation timed out after {}s", self.timeout.as_secs());
                false
            }
        }
    }
}

/// The interactive command loop over one validated profile
///
/// Each command pays a full connect/authenticate/close cycle; no
/// connection is held across commands. A failed command prints a notice
/// and the loop continues; only the exit sentinel, EOF, or an external
/// interrupt ends it.
pub struct CommandSession {
    client: Arc<dyn ConsoleClient>,
    profile: ConnectionProfile,
    timeout: Duration,
}

impl CommandSession {
    pub fn new(
        client: Arc<dyn ConsoleClient>,
        profile: ConnectionProfile,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            profile,
            timeout,
        }
    }

    /// Execute one command against the server
    ///
    /// The whole connect-run-close cycle shares a single timeout.
    pub async fn execute(&self, command: &str) -> Result<String> {
        match timeout(
            self.timeout,
            connect_run_close(self.client.as_ref(), &self.profile, command),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(ConsoleError::Timeout(self.timeout.as_secs())),
        }
    }

    /// Run the read-execute-display loop until the exit sentinel or EOF
    ///
    /// Returning `Ok(())` signals an operator-requested exit; the caller
    /// owns process termination.
    pub async fn run<R>(&self, mut input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin + Send,
    {
        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line).await? == 0 {
                // EOF on stdin behaves like the exit sentinel
                return Ok(());
            }

            match CommandInput::parse(line.trim_end_matches(['\r', '\n'])) {
                CommandInput::Exit => return Ok(()),
                CommandInput::Command(command) => match self.execute(&command).await {
                    Ok(response) => println!("got following response: {response}"),
                    Err(e) => println!("Unexpected error.\n{e}"),
                },
            }
        }
    }
}

/// Outer control loop: collect credentials until a profile validates,
/// then hand it to the command loop.
pub struct SessionOrchestrator<C: Collector> {
    collector: C,
    client: Arc<dyn ConsoleClient>,
    timeout: Duration,
}

impl<C: Collector> SessionOrchestrator<C> {
    pub fn new(collector: C, client: Arc<dyn ConsoleClient>, timeout: Duration) -> Self {
        Self {
            collector,
            client,
            timeout,
        }
    }

    /// Collect and validate profiles until one works
    ///
    /// There is no retry limit; the operator may try indefinitely.
    pub async fn establish(&mut self) -> Result<ConnectionProfile> {
        let validator = SessionValidator::new(Arc::clone(&self.client), self.timeout);
        loop {
            let profile = self.collector.collect().await?;
            if validator.validate(&profile).await {
                println!("connection successful.");
                return Ok(profile);
            }
            println!("wrong credentials or no connection possible. please try again.");
        }
    }

    /// Establish a session and run the command loop on stdin
    pub async fn run(&mut self) -> Result<()> {
        let profile = self.establish().await?;
        let session = CommandSession::new(Arc::clone(&self.client), profile, self.timeout);
        session.run(BufReader::new(tokio::io::stdin())).await
    }
}
