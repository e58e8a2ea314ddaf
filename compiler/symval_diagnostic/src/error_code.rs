//! Error codes for constant-evaluation diagnostics.
//!
//! Codes follow the `E####` scheme; the `E7xxx` block belongs to constant
//! evaluation.

use std::fmt;

/// Error codes for constant-evaluation diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Operation could not be folded (unclassified)
    E7001,
    /// Expression too large to evaluate at compile time
    E7002,
    /// Control flow loop found during evaluation
    E7003,
    /// Integer overflow during evaluation
    E7004,
    /// Trap reached during evaluation
    E7005,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E7001,
        ErrorCode::E7002,
        ErrorCode::E7003,
        ErrorCode::E7004,
        ErrorCode::E7005,
    ];

    /// Get the numeric code as a string (e.g., "E7001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E7001 => "E7001",
            ErrorCode::E7002 => "E7002",
            ErrorCode::E7003 => "E7003",
            ErrorCode::E7004 => "E7004",
            ErrorCode::E7005 => "E7005",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
