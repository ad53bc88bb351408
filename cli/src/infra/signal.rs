//! Shutdown signals for long-running commands.
//!
//! A command that owns scratch state races its work against
//! [`shutdown_signal`]. Dropping the losing future runs its destructors,
//! which removes temp directories and kills `kill_on_drop` children.

use std::future::Future;

use tracing::info;

/// Wait for SIGINT (Ctrl-C) or, on unix, SIGTERM. Returns the signal name.
///
/// # Errors
///
/// Returns an error if a signal handler cannot be installed.
pub async fn shutdown_signal() -> std::io::Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        let name = tokio::select! {
            result = tokio::signal::ctrl_c() => result.map(|()| "SIGINT")?,
            _ = terminate.recv() => "SIGTERM",
        };
        info!(signal = name, "received shutdown signal");
        Ok(name)
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        info!("received shutdown signal");
        Ok("Ctrl-C")
    }
}

/// Run `work` to completion unless a shutdown signal arrives first, in which
/// case `work` is dropped and `interrupted` builds the error.
///
/// Handlers are installed before `work` is first polled. If they cannot be
/// installed, `work` runs unguarded.
pub async fn until_shutdown<T, E>(
    work: impl Future<Output = Result<T, E>>,
    interrupted: impl FnOnce(&'static str) -> E,
) -> Result<T, E> {
    tokio::select! {
        biased;
        Ok(name) = shutdown_signal() => Err(interrupted(name)),
        result = work => result,
    }
}
