//! Console connection handling
//!
//! Profile data and the thin client boundary over the `rcon` protocol
//! crate.

pub mod client;
pub mod profile;

// Re-exports
pub use client::{ConsoleClient, ConsoleHandle, SourceClient};
pub use profile::ConnectionProfile;
