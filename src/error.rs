//! Unified error type.

use std::fmt;
use std::net::SocketAddr;

/// The error type for the server's fallible operations.
///
/// Application-level outcomes (the 404 for an unknown path) are HTTP
/// responses, not `Error`s. This type surfaces infrastructure failures:
/// binding the listener, or reading its address.
#[derive(Debug)]
pub enum Error {
    /// The listener could not be bound. The port is already taken, or the
    /// process lacks permission for it.
    Bind(SocketAddr, std::io::Error),
    /// Any other socket-level failure.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind(addr, e) => write!(f, "binding {addr}: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bind(_, e) | Self::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
