use std::fmt;
use std::ops::RangeInclusive;

use tracing::debug;

pub const MIN_PORT: u16 = 1;
pub const MAX_PORT: u16 = u16::MAX;

/// An inclusive range of TCP ports, always within `[MIN_PORT, MAX_PORT]`
/// with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

impl PortRange {
    /// Builds a range from raw user input.
    ///
    /// Both bounds are clamped into the valid port space, then swapped if they
    /// arrive in descending order.
    pub fn new(start: i64, end: i64) -> Self {
        let mut lo: u16 = clamp_port(start);
        let mut hi: u16 = clamp_port(end);

        if lo as i64 != start || hi as i64 != end {
            debug!("port range {start}-{end} clamped to {lo}-{hi}");
        }

        if hi < lo {
            std::mem::swap(&mut lo, &mut hi);
        }

        Self { start: lo, end: hi }
    }

    pub fn to_iter(&self) -> RangeInclusive<u16> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

fn clamp_port(raw: i64) -> u16 {
    raw.clamp(MIN_PORT as i64, MAX_PORT as i64) as u16
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
