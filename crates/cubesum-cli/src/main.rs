//! `cubesum` binary
//!
//! Reads one line from stdin, prints its cube-sum checksum and ten copies
//! of the line annotated with their 1-based position. Logging goes to
//! stderr and is enabled through `RUST_LOG`; stdout carries only the
//! report.

use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use clap::Command;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("cubesum")
        .version(cubesum_core::VERSION)
        .about("Prints the cube-sum checksum of a line and ten annotated copies")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let _matches = cli().get_matches();

    let stdin = io::stdin();
    let stdout = io::stdout();

    // Interactive runs get the prompt; piped input keeps stdout to the
    // report alone.
    if stdin.is_terminal() {
        print!("Enter a string: ");
        stdout.lock().flush().context("failed to flush prompt")?;
    }

    let sum = cubesum_core::run(stdin.lock(), stdout.lock())
        .context("failed to produce report")?;
    tracing::info!("done, checksum {}", sum);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn cli_accepts_bare_invocation() {
        assert!(cli().try_get_matches_from(["cubesum"]).is_ok());
    }

    #[test]
    fn cli_rejects_unknown_argument() {
        assert!(cli().try_get_matches_from(["cubesum", "--bogus"]).is_err());
    }
}
