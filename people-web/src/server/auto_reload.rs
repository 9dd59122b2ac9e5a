//! Auto-reload facilities.
//!
//! Lets the server adopt a TCP listener inherited from
//! [systemfd](https://github.com/mitsuhiko/systemfd) through its companion crate
//! [listenfd](https://github.com/mitsuhiko/listenfd), so that a freshly rebuilt binary takes over
//! pending connections instead of dropping them.

use listenfd::ListenFd;
use tokio::net::{TcpListener, ToSocketAddrs};

/// An error that can occur when acquiring a TCP listener.
#[derive(Debug, thiserror::Error)]
pub enum GetTcpListenerError {
    /// The listener handed over by the environment could not be adopted.
    #[error("failed to adopt the inherited TCP listener: {0}")]
    Inherit(std::io::Error),

    /// An error occurred while binding to the local address.
    #[error("failed to bind to a local address: {0}")]
    Bind(std::io::Error),
}

/// Get a TCP listener from the listen fd environment, falling back to binding to the given local
/// address when none was inherited.
pub async fn get_or_bind_tcp_listener(
    addr: impl ToSocketAddrs,
) -> Result<TcpListener, GetTcpListenerError> {
    let inherited = ListenFd::from_env()
        .take_tcp_listener(0)
        .map_err(GetTcpListenerError::Inherit)?;

    match inherited {
        Some(listener) => {
            tracing::debug!("Adopting the TCP listener inherited from `listenfd`.");

            listener
                .set_nonblocking(true)
                .map_err(GetTcpListenerError::Inherit)?;

            TcpListener::from_std(listener).map_err(GetTcpListenerError::Inherit)
        }
        None => {
            tracing::debug!("No inherited TCP listener: binding to the local address.");

            TcpListener::bind(addr)
                .await
                .map_err(GetTcpListenerError::Bind)
        }
    }
}
