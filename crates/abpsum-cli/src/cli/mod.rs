//! CLI for abpsum: read a subscription on stdin, write it signed to stdout.

use abpsum_core::{add_checksum, read_document, write_document, Clock, SystemClock};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};

/// Refresh `! Version:` / `! Last modified:` and add a `! Checksum:` line.
#[derive(Debug, Parser)]
#[command(name = "abpsum", version)]
#[command(
    about = "Add a checksum to a filter-list subscription",
    long_about = "Reads a UTF-8 subscription from stdin, refreshes its version and \
                  last-modified header lines, and writes it to stdout with a \
                  `! Checksum:` line under the first line.\n\n\
                  Example: abpsum < subscription.txt > subscriptionSigned.txt"
)]
pub struct Cli {}

/// Parse arguments and sign stdin to stdout using the system clock.
pub fn run_from_args() -> Result<()> {
    let _cli = Cli::parse();
    run(io::stdin().lock(), io::stdout().lock(), &SystemClock)
}

/// Sign the document from `input` and write it to `output`.
///
/// Nothing is written unless the whole document was read and signed.
pub fn run<R: Read, W: Write>(input: R, output: W, clock: &dyn Clock) -> Result<()> {
    let text = read_document(input).context("reading subscription from stdin")?;
    let signed = add_checksum(&text, clock).context("signing subscription")?;
    tracing::info!(
        checksum = %signed.checksum,
        version = %signed.timestamps.version,
        "subscription signed"
    );
    write_document(output, &signed.text).context("writing subscription to stdout")?;
    Ok(())
}
