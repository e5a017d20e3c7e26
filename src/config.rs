//! Environment configuration.
//!
//! Two knobs, both optional: `HOST` and `PORT`. Absent or malformed values
//! fall back to the defaults, so a bare `cargo run` and the container image
//! behave identically: listening on `0.0.0.0:3000`, the port the
//! `Dockerfile` exposes.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration, read once at startup and passed to the server.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    /// Reads `HOST` and `PORT` from the environment.
    pub fn from_env() -> Self {
        Self {
            host: var_or("HOST", DEFAULT_HOST),
            port: var_or("PORT", DEFAULT_PORT),
        }
    }

    /// The address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

/// Reads an environment variable, falling back to `default` when the
/// variable is unset or does not parse.
fn var_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
