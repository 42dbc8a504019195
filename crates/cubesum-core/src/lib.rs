//! Cubesum Core
//!
//! The full procedure behind the `cubesum` demo binary: read one line of
//! bytes, fold it into a cube-sum checksum, and render a report of ten
//! annotated copies.
//!
//! # Core Concepts
//!
//! - [`CubeSum`]: wrapping 64-bit accumulator over cubed byte values
//! - [`replicate`] / [`Annotated`]: ten independent copies of the line,
//!   each annotated with its 1-based position
//! - [`run`]: the complete read → checksum → annotate → print procedure
//!   over generic readers and writers
//!
//! # Example
//!
//! ```rust
//! use cubesum_core::run;
//! use std::io::Cursor;
//!
//! let mut out = Vec::new();
//! let sum = run(Cursor::new(&b"A\n"[..]), &mut out).unwrap();
//! assert_eq!(sum.value(), 274_625);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod annotate;
mod checksum;
mod report;

// Re-exports
pub use annotate::{replicate, Annotated, COPY_COUNT};
pub use checksum::CubeSum;
pub use report::{read_line, run, write_report, ReportError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
