use std::future::Future;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use tokio::net::TcpSocket;
use tokio::time::timeout;
use tracing::{debug, trace};

/// Attempts a full TCP handshake with `address:port` and reports whether it
/// completed within `probe_timeout`.
///
/// Every failure (malformed address, socket creation, refusal, timeout) is
/// reported as `false`. The socket is dropped before returning on all paths.
pub async fn probe(address: &str, port: u16, probe_timeout: Duration) -> bool {
    let Ok(ip) = address.parse::<Ipv4Addr>() else {
        debug!("{address} is not an IPv4 address, skipping port {port}");
        return false;
    };

    let socket: TcpSocket = match TcpSocket::new_v4() {
        Ok(socket) => socket,
        Err(e) => {
            debug!("could not open socket for port {port}: {e}");
            return false;
        }
    };

    let socket_addr: SocketAddr = SocketAddr::new(IpAddr::V4(ip), port);
    let open: bool = within_deadline(socket.connect(socket_addr), probe_timeout).await;

    trace!("{socket_addr} {}", if open { "open" } else { "not open" });
    open
}

/// Drives a pending connection attempt until it settles or `limit` elapses.
///
/// Only a successful completion before the deadline counts; a connection that
/// settles afterwards is abandoned.
pub async fn within_deadline<F, T>(attempt: F, limit: Duration) -> bool
where
    F: Future<Output = io::Result<T>>,
{
    match timeout(limit, attempt).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(_refused)) => false,
        Err(_elapsed) => false,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
