use std::time::Duration;

use crate::network::range::PortRange;
use crate::network::target::Target;

pub const DEFAULT_START_PORT: i64 = 1;
pub const DEFAULT_END_PORT: i64 = 100;
pub const DEFAULT_TIMEOUT_MS: u64 = 300;

/// Everything a single scan needs, gathered once before scanning starts.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    pub target: Target,
    pub ports: PortRange,
    /// Upper bound on each individual connection attempt.
    pub timeout: Duration,
}

impl ScanConfig {
    pub fn new(target: Target, start: i64, end: i64, timeout_ms: u64) -> Self {
        Self {
            target,
            ports: PortRange::new(start, end),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    pub fn timeout_ms(&self) -> u128 {
        self.timeout.as_millis()
    }
}
