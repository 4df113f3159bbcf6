//! Turns a [`Target`] into exactly one IPv4 address.
//!
//! Literals are returned without touching the network. Hostnames go through a
//! [`Lookup`] and the first IPv4 answer wins; IPv6 answers are ignored, so a
//! name with only AAAA records fails to resolve.

use std::fmt;
use std::io;
use std::net::{IpAddr, Ipv4Addr};

use async_trait::async_trait;
use knock_common::network::target::Target;
use knock_common::{Error, Result};
use tracing::debug;

/// A forward DNS lookup.
#[async_trait]
pub trait Lookup: Send + Sync {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// The platform resolver, as exposed by tokio.
pub struct SystemLookup;

#[async_trait]
impl Lookup for SystemLookup {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let answers = tokio::net::lookup_host((host, 0)).await?;
        Ok(answers.map(|socket_addr| socket_addr.ip()).collect())
    }
}

/// An IPv4 address in canonical dotted-quad form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedAddress(String);

impl ResolvedAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Ipv4Addr> for ResolvedAddress {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr.to_string())
    }
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub async fn resolve<L>(target: &Target, lookup: &L) -> Result<ResolvedAddress>
where
    L: Lookup + ?Sized,
{
    match target {
        Target::Literal { addr } => Ok(ResolvedAddress::from(*addr)),
        Target::Hostname { name } => resolve_hostname(name, lookup).await,
    }
}

async fn resolve_hostname<L>(name: &str, lookup: &L) -> Result<ResolvedAddress>
where
    L: Lookup + ?Sized,
{
    let unresolved = || Error::Resolution {
        target: name.to_string(),
    };

    let answers: Vec<IpAddr> = lookup.lookup(name).await.map_err(|e| {
        debug!("lookup for {name} failed: {e}");
        unresolved()
    })?;

    debug!("lookup for {name} returned {} answer(s)", answers.len());

    first_ipv4(&answers)
        .map(ResolvedAddress::from)
        .ok_or_else(unresolved)
}

fn first_ipv4(answers: &[IpAddr]) -> Option<Ipv4Addr> {
    answers.iter().find_map(|ip| match ip {
        IpAddr::V4(v4) => Some(*v4),
        IpAddr::V6(_) => None,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
