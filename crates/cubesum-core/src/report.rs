//! Report input and rendering
//!
//! The straight-line procedure behind the binary: read one line of bytes,
//! print its cube-sum checksum, then the ten annotated copies.

use std::io::{BufRead, Write};

use crate::annotate::{replicate, Annotated, COPY_COUNT};
use crate::checksum::CubeSum;

/// Errors at the report I/O boundary
///
/// The computation itself cannot fail; only reading the line or writing the
/// report can.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Reading the input line failed
    #[error("failed to read input line: {0}")]
    ReadInput(#[source] std::io::Error),

    /// Writing the report failed
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
}

/// Read one `\n`-terminated line of bytes
///
/// The terminating `\n` is stripped; every other byte is preserved as-is,
/// including `\r` and non-UTF-8 sequences. End of stream before any byte
/// yields the empty line.
///
/// # Errors
/// Returns [`ReportError::ReadInput`] on an underlying I/O failure.
pub fn read_line<R: BufRead>(mut input: R) -> Result<Vec<u8>, ReportError> {
    let mut line = Vec::new();
    input
        .read_until(b'\n', &mut line)
        .map_err(ReportError::ReadInput)?;
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    tracing::debug!("read input line of {} bytes", line.len());
    Ok(line)
}

/// Render the full report for `line` into `out`
///
/// Writes the checksum line, the `Appended strings:` header, and the ten
/// annotated copies in position order, then returns the checksum that was
/// printed.
///
/// # Errors
/// Returns [`ReportError::WriteReport`] on an underlying I/O failure.
pub fn write_report<W: Write>(mut out: W, line: &[u8]) -> Result<CubeSum, ReportError> {
    let sum = CubeSum::of(line);
    writeln!(out, "Result: {}", sum).map_err(ReportError::WriteReport)?;

    let copies = replicate(line, COPY_COUNT);
    writeln!(out, "Appended strings:").map_err(ReportError::WriteReport)?;
    for annotated in Annotated::new(&copies) {
        out.write_all(&annotated).map_err(ReportError::WriteReport)?;
        out.write_all(b"\n").map_err(ReportError::WriteReport)?;
    }

    tracing::debug!("report written, checksum {}", sum);
    Ok(sum)
}

/// Run the whole procedure: read a line from `input`, report it on `output`
///
/// # Errors
/// Propagates [`ReportError`] from either side of the I/O boundary.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<CubeSum, ReportError> {
    let line = read_line(input)?;
    write_report(output, &line)
}
