//! Accept loop: binds the listening socket and spawns one thread per
//! accepted connection to run the session driver.

use std::net::{SocketAddr, TcpListener, TcpStream};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use core::config::RuntimeConfig;
use core::error::SessionOutcome;
use socket2::{Domain, Socket, Type};

/// Binds `config.bind` and accepts connections until the process is killed,
/// spawning one OS thread per accepted connection.
///
/// A panicking session thread is caught (matching the corpus's
/// panic-isolation intent for its daemon accept loop) and logged; it never
/// brings down the listener, which keeps accepting on every other
/// connection.
pub fn serve(config: RuntimeConfig) -> std::io::Result<()> {
    let listener = bind(config.bind)?;
    let config = Arc::new(config);
    tracing::info!(bind = %config.bind, "listening for connections");

    loop {
        let (stream, peer) = listener.accept()?;
        let config = Arc::clone(&config);
        thread::spawn(move || handle_connection(stream, peer, &config));
    }
}

/// Binds a [`TcpListener`] via `socket2`, so `SO_REUSEADDR` can be set
/// before the bind the way the corpus's socket setup does for its listening
/// sockets, then disables Nagle's algorithm on accepted streams.
fn bind(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv6() { Domain::IPV6 } else { Domain::IPV4 };
    let socket = Socket::new(domain, Type::STREAM, None)?;
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;
    socket.set_nonblocking(false)?;
    Ok(socket.into())
}

fn handle_connection(stream: TcpStream, peer: SocketAddr, config: &RuntimeConfig) {
    if let Err(error) = stream.set_nodelay(true) {
        tracing::warn!(%peer, %error, "failed to disable Nagle's algorithm");
    }
    if let Err(error) = stream.set_read_timeout(Some(config.timeouts.normal)) {
        tracing::warn!(%peer, %error, "failed to set the initial read timeout");
        return;
    }

    tracing::info!(%peer, "session starting");
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| crate::session::run(stream, config)));

    match outcome {
        Ok(SessionOutcome::Completed) => tracing::info!(%peer, "session completed"),
        Ok(SessionOutcome::Disconnected) => tracing::info!(%peer, "peer disconnected or timed out"),
        Ok(SessionOutcome::Faulted(fault)) => {
            tracing::warn!(%peer, %fault, "session faulted");
        }
        Err(_) => tracing::error!(%peer, "session thread panicked; connection dropped"),
    }
}
