use std::net::SocketAddr;

/// problems found while reading the environment, reported before anything is bound
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("BACKEND_HOST `{0}` is not a valid ip address")]
    InvalidHost(String),
    #[error("BACKEND_PORT `{0}` is not a valid port")]
    InvalidPort(String),
    #[error("cors origin `{0}` is not a valid header value")]
    InvalidOrigin(String),
}

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("could not bind to {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: hyper::Error,
    },
    #[error("server terminated unexpectedly")]
    Serve(#[from] hyper::Error),
}
