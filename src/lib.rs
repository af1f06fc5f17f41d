//! rconsole - An interactive console for administering Source RCON servers
//!
//! This crate provides a small terminal session manager: it collects
//! connection parameters from the operator, validates them against the
//! server, and then runs an interactive command loop, forwarding each
//! command over RCON and displaying the response.
//!
//! # Features
//!
//! - Interactive prompts for address, port, and password (masked input)
//! - Port normalization with fallback to the Source default (27015)
//! - Unbounded credential retry until a connection validates
//! - Per-command connect/authenticate/close cycle with a bounded timeout
//! - Exit via the `exit` sentinel or Ctrl+C, always with exit code 0
//!
//! # Example Usage (CLI)
//!
//! ```bash
//! rconsole
//! rconsole --host=192.168.1.100 --port=27015
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod prompt;
pub mod session;

// Re-exports for convenience
pub use config::{Args, Config, PortValidator, DEFAULT_PORT};
pub use console::{ConnectionProfile, ConsoleClient, ConsoleHandle, SourceClient};
pub use error::{ConsoleError, Result};
pub use prompt::{Collector, CommandInput, TerminalCollector};
pub use session::{CommandSession, SessionOrchestrator, SessionValidator};
