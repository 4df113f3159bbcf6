//! The sequential scan loop.
//!
//! Ports are probed one at a time in ascending order. Each open port is handed
//! to the caller as soon as it is found, so output streams while the scan is
//! still running. Nothing is shared between probes; the only state carried
//! across iterations is the [`ScanOutcome`] accumulator returned at the end.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use knock_common::network::range::PortRange;
use tracing::debug;

use crate::network::tcp;
use crate::resolver::ResolvedAddress;

/// What a finished scan found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Open ports, ascending.
    pub open_ports: Vec<u16>,
}

impl ScanOutcome {
    pub fn found_any(&self) -> bool {
        !self.open_ports.is_empty()
    }
}

/// Walks `range` and asks `prober` about each port, in order, awaiting every
/// answer before moving on.
///
/// `on_open` is called once per open port, immediately. An error from it stops
/// the scan and is returned unchanged.
pub async fn scan_ports<F, Fut, O, E>(
    range: PortRange,
    mut prober: F,
    mut on_open: O,
) -> Result<ScanOutcome, E>
where
    F: FnMut(u16) -> Fut,
    Fut: Future<Output = bool>,
    O: FnMut(u16) -> Result<(), E>,
{
    let mut outcome = ScanOutcome::default();

    for port in range.to_iter() {
        if prober(port).await {
            on_open(port)?;
            outcome.open_ports.push(port);
        }
    }

    debug!(
        "probed {} port(s), {} open",
        range.len(),
        outcome.open_ports.len()
    );
    Ok(outcome)
}

/// Decides whether a single port on a resolved address is open.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, address: &ResolvedAddress, port: u16, timeout: Duration) -> bool;
}

/// Full-handshake probing with one bounded connection attempt per port.
pub struct TcpConnectProber;

#[async_trait]
impl Prober for TcpConnectProber {
    async fn probe(&self, address: &ResolvedAddress, port: u16, timeout: Duration) -> bool {
        tcp::probe(address.as_str(), port, timeout).await
    }
}

/// Scans `address` over `range` with `prober`, streaming open ports to `on_open`.
pub async fn scan_address<P, O, E>(
    prober: &P,
    address: &ResolvedAddress,
    range: PortRange,
    probe_timeout: Duration,
    on_open: O,
) -> Result<ScanOutcome, E>
where
    P: Prober + ?Sized,
    O: FnMut(u16) -> Result<(), E>,
{
    debug!("scanning {address} ports {range}, {probe_timeout:?} per port");
    scan_ports(
        range,
        |port| prober.probe(address, port, probe_timeout),
        on_open,
    )
    .await
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
