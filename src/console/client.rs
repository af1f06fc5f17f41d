//! RCON client boundary
//!
//! The console core only needs three capabilities from the protocol
//! layer: open-and-authenticate, run-a-command, close. They are
//! expressed as traits so the session logic can be tested against
//! scripted implementations, with `SourceClient` providing the real
//! thing on top of the `rcon` crate.

use async_trait::async_trait;
use rcon::Connection;
use tokio::net::TcpStream;
use tracing::debug;

use super::profile::ConnectionProfile;
use crate::error::Result;

/// Factory for authenticated RCON connections
#[async_trait]
pub trait ConsoleClient: Send + Sync {
    /// Open a connection and authenticate with the profile's password
    async fn open(&self, profile: &ConnectionProfile) -> Result<Box<dyn ConsoleHandle>>;
}

/// One live authenticated connection
#[async_trait]
pub trait ConsoleHandle: Send {
    /// Send a command and await the server's text response
    async fn run(&mut self, command: &str) -> Result<String>;

    /// Close the connection
    ///
    /// Invoked on every completed open, success or failure. Dropping a
    /// handle closes the underlying socket as well, which covers the
    /// cancellation-by-timeout path.
    async fn close(self: Box<Self>);
}

/// Source RCON client backed by the `rcon` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceClient;

impl SourceClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConsoleClient for SourceClient {
    async fn open(&self, profile: &ConnectionProfile) -> Result<Box<dyn ConsoleHandle>> {
        let endpoint = profile.endpoint();
        debug!("opening RCON connection to {}", endpoint);

        let connection = <Connection<TcpStream>>::builder()
            .connect(endpoint.as_str(), &profile.password)
            .await?;

        Ok(Box::new(SourceHandle { connection }))
    }
}

/// Live connection wrapper around `rcon::Connection`
struct SourceHandle {
    connection: Connection<TcpStream>,
}

#[async_trait]
impl ConsoleHandle for SourceHandle {
    async fn run(&mut self, command: &str) -> Result<String> {
        let response = self.connection.cmd(command).await?;
        Ok(response)
    }

    async fn close(self: Box<Self>) {
        // rcon has no explicit disconnect; dropping the connection
        // closes the TCP stream.
        debug!("RCON connection closed");
    }
}
