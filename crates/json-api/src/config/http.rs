//! Listener settings.

use clap::Args;

/// Where the storefront API listens.
#[derive(Debug, Args)]
pub struct HttpConfig {
    /// Interface to bind; `0.0.0.0` accepts connections from anywhere
    #[arg(short = 'H', long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port, also reported in the startup log line
    #[arg(short, long, env = "PORT", default_value_t = 4000)]
    pub port: u16,
}

impl HttpConfig {
    /// `host:port`, as accepted by the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
