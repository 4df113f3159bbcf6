//! # Scan Target Model
//!
//! A target is whatever the user typed as the host to scan:
//! * An IPv4 literal (e.g. `192.168.1.5`), used as-is.
//! * Anything else, treated as a hostname and resolved later.

use std::convert::Infallible;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A dotted-quad IPv4 address, no lookup required.
    Literal { addr: Ipv4Addr },
    /// A name that has to go through DNS.
    Hostname { name: String },
}

impl FromStr for Target {
    type Err = Infallible;

    /// Parses user input into a `Target`.
    ///
    /// Surrounding whitespace is ignored. Anything that is not an IPv4 literal
    /// becomes a hostname, blank input included; those fail at resolution.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(target) = parse_literal(s) {
            return Ok(target);
        }

        Ok(Target::Hostname { name: s.to_string() })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Literal { addr } => write!(f, "{addr}"),
            Target::Hostname { name } => write!(f, "{name}"),
        }
    }
}

fn parse_literal(s: &str) -> Option<Target> {
    s.parse::<Ipv4Addr>()
        .ok()
        .map(|addr| Target::Literal { addr })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
