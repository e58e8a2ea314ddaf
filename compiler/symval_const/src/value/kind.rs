//! Public classification of symbolic values and unknown reasons.

use std::fmt;

use symval_diagnostic::ErrorCode;

/// Semantic kind of a [`SymbolicValue`](crate::SymbolicValue).
///
/// Coarser than the physical encoding: an integer held by a literal
/// instruction and one held in the arena are both `Integer`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Kind {
    /// Evaluation failed; carries the offending node and a reason.
    Unknown,
    /// A type used as a value.
    Metatype,
    Function,
    Integer,
    Float,
    String,
    /// Struct, tuple or array elements.
    Aggregate,
    /// Enum case without a payload.
    Enum,
    EnumWithPayload,
    /// A memory object, optionally narrowed by an access path.
    Address,
    /// Memory that has been allocated but not written.
    UninitMemory,
}

impl Kind {
    pub const ALL: &'static [Kind] = &[
        Kind::Unknown,
        Kind::Metatype,
        Kind::Function,
        Kind::Integer,
        Kind::Float,
        Kind::String,
        Kind::Aggregate,
        Kind::Enum,
        Kind::EnumWithPayload,
        Kind::Address,
        Kind::UninitMemory,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Kind::Unknown => "unknown",
            Kind::Metatype => "metatype",
            Kind::Function => "function",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Aggregate => "aggregate",
            Kind::Enum => "enum",
            Kind::EnumWithPayload => "enum_with_payload",
            Kind::Address => "address",
            Kind::UninitMemory => "uninit_memory",
        }
    }

    /// `false` exactly for `Unknown` and `UninitMemory`.
    pub const fn is_constant(self) -> bool {
        !matches!(self, Kind::Unknown | Kind::UninitMemory)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why an evaluation produced an unknown value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum UnknownReason {
    /// Catch-all for failures nobody has classified yet.
    #[default]
    Unclassified,
    /// The evaluator hit its instruction budget.
    TooManyInstructions,
    /// A control flow loop was found.
    Loop,
    /// Integer arithmetic overflowed.
    Overflow,
    /// A trap (runtime fault) was reached.
    Trap,
}

impl UnknownReason {
    pub const ALL: &'static [UnknownReason] = &[
        UnknownReason::Unclassified,
        UnknownReason::TooManyInstructions,
        UnknownReason::Loop,
        UnknownReason::Overflow,
        UnknownReason::Trap,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            UnknownReason::Unclassified => "unclassified",
            UnknownReason::TooManyInstructions => "too_many_instructions",
            UnknownReason::Loop => "loop",
            UnknownReason::Overflow => "overflow",
            UnknownReason::Trap => "trap",
        }
    }

    /// Main message of the explanatory note.
    pub const fn message(self) -> &'static str {
        match self {
            UnknownReason::Unclassified => "could not fold operation",
            UnknownReason::TooManyInstructions => {
                "expression is too large to evaluate at compile-time"
            }
            UnknownReason::Loop => "control flow loop found",
            UnknownReason::Overflow => "integer overflow detected",
            UnknownReason::Trap => "trap detected",
        }
    }

    /// Text of the label placed on the offending node.
    pub const fn label(self) -> &'static str {
        match self {
            UnknownReason::Unclassified => "cannot be evaluated at compile-time",
            UnknownReason::TooManyInstructions => "evaluation step limit reached here",
            UnknownReason::Loop => "loop found here",
            UnknownReason::Overflow => "this operation overflows",
            UnknownReason::Trap => "trap reached here",
        }
    }

    pub const fn error_code(self) -> ErrorCode {
        match self {
            UnknownReason::Unclassified => ErrorCode::E7001,
            UnknownReason::TooManyInstructions => ErrorCode::E7002,
            UnknownReason::Loop => ErrorCode::E7003,
            UnknownReason::Overflow => ErrorCode::E7004,
            UnknownReason::Trap => ErrorCode::E7005,
        }
    }
}

impl fmt::Display for UnknownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
