use std::io::{self, Write};
use std::str::FromStr;

use anyhow::Context;
use knock_common::Error;
use knock_common::config::ScanConfig;
use knock_common::network::target::Target;
use knock_core::resolver::{self, Lookup, SystemLookup};
use knock_core::scanner::{self, Prober, ScanOutcome, TcpConnectProber};
use tracing::debug;

use crate::commands::CommandLine;
use crate::terminal::{print, prompt};

/// Gathers input, then runs one scan against the real network.
pub async fn scan(commands: CommandLine) -> anyhow::Result<()> {
    let cfg: ScanConfig = match commands.target {
        Some(target) => {
            let Ok(target) = Target::from_str(&target);
            ScanConfig::new(target, commands.start_port, commands.end_port, commands.timeout_ms)
        }
        None => prompt::gather(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    run(&cfg, &SystemLookup, &TcpConnectProber, &mut io::stdout()).await?;
    Ok(())
}

/// Resolves the target once, then scans the whole range, writing the report
/// to `out` as it goes.
///
/// A resolution failure returns before anything is written or probed.
pub async fn run<L, P, W>(
    cfg: &ScanConfig,
    lookup: &L,
    prober: &P,
    out: &mut W,
) -> anyhow::Result<ScanOutcome>
where
    L: Lookup + ?Sized,
    P: Prober + ?Sized,
    W: Write,
{
    let address = resolver::resolve(&cfg.target, lookup).await?;
    debug!("{} resolved to {address}", cfg.target);

    print::banner(out, cfg, &address).context("writing scan banner")?;

    let outcome: ScanOutcome = scanner::scan_address(prober, &address, cfg.ports, cfg.timeout, |port| {
        print::open_port(out, port)
    })
    .await
    .context("writing scan results")?;

    print::summary(out, &outcome).context("writing scan summary")?;
    Ok(outcome)
}

/// Exit status for a failed run: the taxonomy's code when known, 1 otherwise.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<Error>().map_or(1, Error::exit_code)
}
