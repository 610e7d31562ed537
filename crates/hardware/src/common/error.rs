//! Error definitions.
//!
//! The simulator absorbs architectural anomalies locally (an unrecognized
//! encoding becomes a no-op, out-of-range accesses read zero), so the only
//! fallible boundary is loading the program image before simulation starts.

use std::io;

use thiserror::Error;

/// Errors produced while loading a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program file '{path}': {source}")]
    Io {
        /// Path that failed to open or read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line did not start with a 32-bit hexadecimal machine word.
    #[error("line {line}: '{token}' is not a 32-bit hex machine word")]
    BadWord {
        /// 1-based line number in the program file.
        line: usize,
        /// The offending token.
        token: String,
    },
}
