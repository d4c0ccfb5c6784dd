//! Stop signals

use std::{fmt, io};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::{error, info};

/// A request from the OS to stop serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for StopSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interrupt => "interrupt",
            Self::Terminate => "terminate",
        })
    }
}

#[derive(Debug, Error)]
#[error("could not listen for {signal} signals: {source}")]
pub(crate) struct SignalInstallError {
    signal: StopSignal,
    #[source]
    source: io::Error,
}

#[cfg(unix)]
async fn terminate() -> Result<(), SignalInstallError> {
    let mut stream = signal::unix::signal(signal::unix::SignalKind::terminate()).map_err(
        |source| SignalInstallError {
            signal: StopSignal::Terminate,
            source,
        },
    )?;

    stream.recv().await;

    Ok(())
}

/// Only Ctrl+C exists off unix.
#[cfg(not(unix))]
async fn terminate() -> Result<(), SignalInstallError> {
    std::future::pending().await
}

/// Resolve with whichever stop signal arrives first.
pub(crate) async fn wait_for_stop_signal() -> Result<StopSignal, SignalInstallError> {
    let interrupt = async {
        signal::ctrl_c()
            .await
            .map_err(|source| SignalInstallError {
                signal: StopSignal::Interrupt,
                source,
            })
    };

    tokio::select! {
        result = interrupt => result.map(|()| StopSignal::Interrupt),
        result = terminate() => result.map(|()| StopSignal::Terminate),
    }
}

/// Drain in-flight requests once a stop signal arrives.
pub(crate) fn spawn_listener(handle: ServerHandle) {
    tokio::spawn(async move {
        match wait_for_stop_signal().await {
            Ok(signal) => {
                info!(%signal, "stopping server gracefully");

                handle.stop_graceful(None);
            }
            Err(install_error) => error!("{install_error}"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_errors_name_the_signal() {
        let error = SignalInstallError {
            signal: StopSignal::Terminate,
            source: io::Error::other("no signal driver"),
        };

        assert_eq!(
            error.to_string(),
            "could not listen for terminate signals: no signal driver"
        );
    }
}
