pub mod scan;

use clap::Parser;
use knock_common::config::{DEFAULT_END_PORT, DEFAULT_START_PORT, DEFAULT_TIMEOUT_MS};

#[derive(Parser, Debug)]
#[command(name = "knock", version)]
#[command(about = "A sequential TCP connect scanner.")]
pub struct CommandLine {
    /// IPv4 address or hostname to scan; prompts for everything when omitted
    pub target: Option<String>,

    /// First port of the range (clamped to 1-65535)
    #[arg(default_value_t = DEFAULT_START_PORT, allow_negative_numbers = true)]
    pub start_port: i64,

    /// Last port of the range (clamped to 1-65535)
    #[arg(default_value_t = DEFAULT_END_PORT, allow_negative_numbers = true)]
    pub end_port: i64,

    /// Per-port connection timeout in milliseconds
    #[arg(default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Diagnostic output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_interactive() {
        let cli = CommandLine::try_parse_from(["knock"]).unwrap();

        assert!(cli.target.is_none());
        assert_eq!(cli.start_port, 1);
        assert_eq!(cli.end_port, 100);
        assert_eq!(cli.timeout_ms, 300);
    }

    #[test]
    fn positional_arguments_in_order() {
        let cli = CommandLine::try_parse_from(["knock", "scanme.example", "20", "25", "150"]).unwrap();

        assert_eq!(cli.target.as_deref(), Some("scanme.example"));
        assert_eq!((cli.start_port, cli.end_port, cli.timeout_ms), (20, 25, 150));
    }

    #[test]
    fn out_of_range_ports_are_accepted_for_clamping() {
        let cli = CommandLine::try_parse_from(["knock", "10.0.0.1", "-5", "999999"]).unwrap();

        assert_eq!(cli.start_port, -5);
        assert_eq!(cli.end_port, 999_999);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert!(CommandLine::try_parse_from(["knock", "10.0.0.1", "twenty"]).is_err());
        assert!(CommandLine::try_parse_from(["knock", "10.0.0.1", "1", "2", "-300"]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        let cli = CommandLine::try_parse_from(["knock", "-vv", "10.0.0.1"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
