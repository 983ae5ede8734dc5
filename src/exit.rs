// src/exit.rs
//! Standardized process exit codes for `dimrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::DimrankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DimrankExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (I/O, config).
    Error = 1,
    /// Input validation failed (malformed DIMACS data).
    InvalidInput = 2,
    /// Caller-supplied parameter out of range (damping factor, threshold,
    /// empty graph).
    InvalidParameter = 3,
}

impl DimrankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Maps an error onto the exit-code contract.
    #[must_use]
    pub fn from_error(err: &DimrankError) -> Self {
        match err {
            DimrankError::Io { .. } => Self::Error,
            DimrankError::Malformed(_) => Self::InvalidInput,
            DimrankError::InvalidParameter(_) => Self::InvalidParameter,
        }
    }
}

impl Termination for DimrankExit {
    fn report(self) -> std::process::ExitCode {
        // Rust's std::process::ExitCode implies usage of `u8` on many unix-likes,
        // but we cast to standard 0..255 range implicitly via `u8`.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
