//! Server options.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// The options for the server.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// The local address the server listens on.
    ///
    /// If `PEOPLE_WEB_BIND_ADDR` is set in the environment, it will be read and used as the bind
    /// address when calling `ServerOptions::from_env`.
    pub bind_addr: SocketAddr,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        }
    }
}

/// An error that can occur when trying to get the server options from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ServerOptionsFromEnvError {
    /// An environment variable was not unicode.
    #[error("environment variable {name} was not unicode")]
    NotUnicode {
        /// The name of the environment variable.
        name: &'static str,
    },

    /// An error occurred while trying to parse the bind address from the environment.
    #[error(
        "failed to parse the bind address from environment variable {name} (was `{addr}`): {err}"
    )]
    BindAddr {
        /// The name of the environment variable.
        name: &'static str,

        /// The address that was attempted to be parsed.
        addr: String,

        /// The error that occurred.
        #[source]
        err: std::net::AddrParseError,
    },
}

impl ServerOptions {
    /// The environment variable name for the bind address.
    pub const PEOPLE_WEB_BIND_ADDR: &'static str = "PEOPLE_WEB_BIND_ADDR";

    fn env_var(name: &'static str) -> Result<Option<String>, ServerOptionsFromEnvError> {
        match std::env::var(name) {
            Ok(value) => Ok(if value.is_empty() { None } else { Some(value) }),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(ServerOptionsFromEnvError::NotUnicode { name })
            }
        }
    }

    /// Get the server options from the environment.
    pub fn from_env() -> Result<Self, ServerOptionsFromEnvError> {
        tracing::info!("Reading server options from the environment...");

        let bind_addr = Self::env_var(Self::PEOPLE_WEB_BIND_ADDR)?
            .map(|addr| {
                addr.parse()
                    .map_err(|err| ServerOptionsFromEnvError::BindAddr {
                        name: Self::PEOPLE_WEB_BIND_ADDR,
                        addr: addr.clone(),
                        err,
                    })
            })
            .transpose()?;

        match bind_addr {
            Some(bind_addr) => {
                tracing::info!(
                    "{} was set: using `{bind_addr}` as the bind address.",
                    Self::PEOPLE_WEB_BIND_ADDR
                );

                Ok(Self { bind_addr })
            }
            None => {
                let options = Self::default();

                tracing::info!(
                    "{} was not set: using the default bind address `{}`.",
                    Self::PEOPLE_WEB_BIND_ADDR,
                    options.bind_addr
                );

                Ok(options)
            }
        }
    }
}
