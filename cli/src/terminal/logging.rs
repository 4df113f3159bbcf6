use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Diagnostics go to stderr; stdout carries only the scan report.
pub fn init_logging(verbose: u8) {
    let default_level: &str = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(KnockFormatter)
        .try_init();
}

/// Writes `[-] message` for failures; debug and trace lines are tagged with
/// the module that emitted them (`[?] tcp: ...`).
pub struct KnockFormatter;

impl<S, N> FormatEvent<S, N> for KnockFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let level: Level = *meta.level();

        write!(writer, "{} ", level_symbol(level))?;

        if level == Level::DEBUG || level == Level::TRACE {
            write!(writer, "{}: ", module_name(meta.target()).bright_black())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_symbol(level: Level) -> ColoredString {
    if level == Level::ERROR {
        "[-]".red().bold()
    } else if level == Level::WARN {
        "[*]".yellow().bold()
    } else if level == Level::DEBUG {
        "[?]".blue()
    } else {
        "[ ]".dimmed()
    }
}

/// Last path segment of an event target: `knock_core::network::tcp` -> `tcp`.
fn module_name(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}
