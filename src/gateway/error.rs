//! Errors raised while running the socket server.

use std::io;
use std::net::SocketAddr;
use thiserror::Error;

/// Failures of the gateway server itself, as opposed to per-frame errors
/// which are answered on the client channel.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The listening socket could not be bound.
    #[error("failed to bind gateway listener on {addr}: {source}")]
    Bind {
        /// Requested listen address.
        addr: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The server loop terminated with an I/O error.
    #[error("gateway server failed: {0}")]
    Serve(#[source] io::Error),
}
