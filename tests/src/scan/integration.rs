#![cfg(test)]
use knock_common::config::ScanConfig;
use knock_common::network::range::PortRange;
use knock_common::network::target::Target;
use knock_core::resolver::{self, ResolvedAddress, SystemLookup};
use knock_core::scanner::{self, ScanOutcome, TcpConnectProber};
use std::convert::Infallible;
use std::str::FromStr;
use std::time::Duration;
use tokio::net::TcpListener;

const PROBE_TIMEOUT: Duration = Duration::from_millis(200);

async fn listen() -> (TcpListener, u16) {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();
    (listener, port)
}

/// Binds a second listener as close to `port` as the host allows.
async fn listen_near(port: u16) -> (TcpListener, u16) {
    let above = (1..=64u16).filter_map(|offset| port.checked_add(offset));
    let below = (1..=64u16)
        .filter_map(|offset| port.checked_sub(offset))
        .filter(|candidate| *candidate != 0);

    for candidate in above.chain(below) {
        if let Ok(listener) = TcpListener::bind(("127.0.0.1", candidate)).await {
            return (listener, candidate);
        }
    }
    panic!("no free loopback port within 64 of {port}");
}

/// A port that was just in use and has since been released.
async fn closed_port() -> u16 {
    let (_listener, port) = listen().await;
    port
}

async fn scan(cfg: &ScanConfig) -> (ScanOutcome, Vec<u16>) {
    let address: ResolvedAddress = resolver::resolve(&cfg.target, &SystemLookup).await.unwrap();
    let mut streamed: Vec<u16> = Vec::new();

    let outcome = scanner::scan_address(&TcpConnectProber, &address, cfg.ports, cfg.timeout, |port| {
        streamed.push(port);
        Ok::<(), Infallible>(())
    })
    .await
    .unwrap();

    (outcome, streamed)
}

fn loopback(start: u16, end: u16) -> ScanConfig {
    ScanConfig::new(
        Target::from_str("127.0.0.1").unwrap(),
        start as i64,
        end as i64,
        PROBE_TIMEOUT.as_millis() as u64,
    )
}

/// A listening loopback service is reported open and streamed exactly once.
#[tokio::test]
async fn scan_finds_loopback_listener() {
    let (_listener, port) = listen().await;

    let (outcome, streamed) = scan(&loopback(port, port)).await;

    assert_eq!(outcome.open_ports, vec![port]);
    assert_eq!(streamed, vec![port]);
}

#[tokio::test]
async fn scan_reports_nothing_for_released_port() {
    let port: u16 = closed_port().await;

    let (outcome, streamed) = scan(&loopback(port, port)).await;

    assert!(!outcome.found_any());
    assert!(streamed.is_empty());
}

/// Scanning the same live target twice gives the same answer.
#[tokio::test]
async fn repeated_loopback_scans_agree() {
    let (_listener, port) = listen().await;
    let cfg: ScanConfig = loopback(port, port);

    let (first, _) = scan(&cfg).await;
    let (second, _) = scan(&cfg).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn reversed_range_still_scans_every_listener() {
    let (_a, port_a) = listen().await;
    let (_b, port_b) = listen_near(port_a).await;
    let (lo, hi) = (port_a.min(port_b), port_a.max(port_b));

    let cfg: ScanConfig = loopback(hi, lo);
    assert_eq!(cfg.ports, PortRange { start: lo, end: hi });

    let (outcome, _) = scan(&cfg).await;

    assert!(outcome.open_ports.contains(&lo));
    assert!(outcome.open_ports.contains(&hi));
    assert!(outcome.open_ports.iter().all(|p| cfg.ports.to_iter().contains(p)));
    assert!(outcome.open_ports.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn unresolvable_target_is_reported_before_scanning() {
    let target: Target = Target::from_str("not a real host!!").unwrap();

    let err = resolver::resolve(&target, &SystemLookup).await.unwrap_err();

    assert_eq!(err.exit_code(), 2);
}
