//! Server error types.

use std::io;
use std::net::SocketAddr;

/// Errors that stop the server.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The accept loop returned an error.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
