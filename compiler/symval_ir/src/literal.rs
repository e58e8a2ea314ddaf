//! Literal instructions as seen through an [`IrContext`](crate::IrContext).

use std::fmt;

use crate::{ApFloat, ApInt};

/// Which kind of literal a constant-producing instruction holds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum LiteralKind {
    Integer,
    Float,
    String,
}

/// The value held by a literal instruction, borrowed from the IR.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Literal<'a> {
    Integer(&'a ApInt),
    Float(&'a ApFloat),
    /// UTF-8 string bytes.
    String(&'a str),
}

impl Literal<'_> {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::Integer(_) => LiteralKind::Integer,
            Literal::Float(_) => LiteralKind::Float,
            Literal::String(_) => LiteralKind::String,
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::Integer => write!(f, "integer_literal"),
            LiteralKind::Float => write!(f, "float_literal"),
            LiteralKind::String => write!(f, "string_literal"),
        }
    }
}
