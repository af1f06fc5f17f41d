//! Connection profile
//!
//! The immutable per-attempt bundle of address, port, and password that
//! flows from credential collection through validation into the command
//! loop.

/// Connection parameters for one session attempt
///
/// Constructed fresh on every collection attempt and never mutated
/// afterwards. The password lives only in memory for the lifetime of
/// the process and is excluded from `Debug` output.
#[derive(Clone)]
pub struct ConnectionProfile {
    /// Server hostname or IP address, as typed by the operator
    pub address: String,

    /// RCON port, already normalized to [1, 65535]
    pub port: u16,

    /// RCON password
    pub password: String,
}

impl ConnectionProfile {
    /// Create a new profile
    pub fn new(address: impl Into<String>, port: u16, password: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port,
            password: password.into(),
        }
    }

    /// `address:port` form used for socket connects
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

impl std::fmt::Debug for ConnectionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionProfile")
            .field("address", &self.address)
            .field("port", &self.port)
            .field("password", &"<redacted>")
            .finish()
    }
}
