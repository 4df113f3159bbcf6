//! Interactive input, used when no target is given on the command line.

use std::io::{BufRead, Write};
use std::str::FromStr;

use knock_common::config::{DEFAULT_END_PORT, DEFAULT_START_PORT, DEFAULT_TIMEOUT_MS, ScanConfig};
use knock_common::network::target::Target;
use knock_common::{Error, Result};

/// Asks for target, start port, end port and timeout, in that order.
///
/// An empty target answer aborts immediately. Whitespace is not empty: it goes
/// on to resolution like any other name. Blank numeric answers take the
/// default shown in the prompt.
pub fn gather<R, W>(input: &mut R, out: &mut W) -> Result<ScanConfig>
where
    R: BufRead,
    W: Write,
{
    let answer: String = ask(input, out, "Enter target IP or hostname: ")?;
    if answer.is_empty() {
        return Err(Error::Input("No target provided. Exiting.".into()));
    }
    let Ok(target) = answer.parse::<Target>();

    let start: i64 = ask_number(
        input,
        out,
        &format!("Start port (default {DEFAULT_START_PORT}): "),
        DEFAULT_START_PORT,
    )?;
    let end: i64 = ask_number(
        input,
        out,
        &format!("End port (default {DEFAULT_END_PORT}): "),
        DEFAULT_END_PORT,
    )?;
    let timeout_ms: u64 = ask_number(
        input,
        out,
        &format!("Timeout ms (default {DEFAULT_TIMEOUT_MS}): "),
        DEFAULT_TIMEOUT_MS,
    )?;

    Ok(ScanConfig::new(target, start, end, timeout_ms))
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}

fn ask_number<R, W, T>(input: &mut R, out: &mut W, question: &str, default: T) -> Result<T>
where
    R: BufRead,
    W: Write,
    T: FromStr,
{
    let answer: String = ask(input, out, question)?;
    let answer: &str = answer.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .parse::<T>()
        .map_err(|_| Error::Input(format!("Not a valid number: {answer}")))
}
