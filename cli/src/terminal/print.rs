//! The scan report written to stdout.
//!
//! Plain, line-oriented text with no colors so scripts can match on it.
//! Each line is flushed as soon as it is written.

use std::io::{self, Write};

use knock_common::config::ScanConfig;
use knock_core::resolver::ResolvedAddress;
use knock_core::scanner::ScanOutcome;

pub fn banner<W: Write>(out: &mut W, cfg: &ScanConfig, address: &ResolvedAddress) -> io::Result<()> {
    writeln!(
        out,
        "Scanning {} ({}) ports {} with timeout {} ms",
        cfg.target,
        address,
        cfg.ports,
        cfg.timeout_ms()
    )?;
    writeln!(out)?;
    out.flush()
}

pub fn open_port<W: Write>(out: &mut W, port: u16) -> io::Result<()> {
    writeln!(out, "Port {port} is OPEN")?;
    out.flush()
}

pub fn summary<W: Write>(out: &mut W, outcome: &ScanOutcome) -> io::Result<()> {
    writeln!(out)?;
    if outcome.found_any() {
        writeln!(out, "Scan complete.")?;
    } else {
        writeln!(out, "No open ports found in range.")?;
    }
    out.flush()
}
