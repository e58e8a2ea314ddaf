//! Arbitrary-format floating point payloads.
//!
//! An `ApFloat` is a format tag plus the raw bit pattern. No arithmetic is
//! provided; the evaluator folds floats elsewhere and hands the bits over.
//! Equality is bitwise: `-0.0 != +0.0`, and NaNs compare equal only when
//! their payloads match.

use std::fmt;

use crate::ApInt;

/// Floating point format of an [`ApFloat`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum FloatSemantics {
    IeeeHalf,
    IeeeSingle,
    IeeeDouble,
    X87DoubleExtended,
    IeeeQuad,
}

impl FloatSemantics {
    /// Every supported format.
    pub const ALL: [FloatSemantics; 5] = [
        FloatSemantics::IeeeHalf,
        FloatSemantics::IeeeSingle,
        FloatSemantics::IeeeDouble,
        FloatSemantics::X87DoubleExtended,
        FloatSemantics::IeeeQuad,
    ];

    /// Storage width of the format in bits.
    pub const fn bit_width(self) -> u32 {
        match self {
            FloatSemantics::IeeeHalf => 16,
            FloatSemantics::IeeeSingle => 32,
            FloatSemantics::IeeeDouble => 64,
            FloatSemantics::X87DoubleExtended => 80,
            FloatSemantics::IeeeQuad => 128,
        }
    }

    /// Short name used when printing values.
    pub const fn name(self) -> &'static str {
        match self {
            FloatSemantics::IeeeHalf => "f16",
            FloatSemantics::IeeeSingle => "f32",
            FloatSemantics::IeeeDouble => "f64",
            FloatSemantics::X87DoubleExtended => "f80",
            FloatSemantics::IeeeQuad => "f128",
        }
    }
}

/// A floating point value in one of the [`FloatSemantics`] formats.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct ApFloat {
    semantics: FloatSemantics,
    bits: ApInt,
}

impl ApFloat {
    /// Create from a raw bit pattern.
    ///
    /// # Panics
    /// Panics if `bits` is not exactly as wide as the format.
    #[track_caller]
    pub fn from_bits(semantics: FloatSemantics, bits: ApInt) -> Self {
        assert_eq!(
            bits.bit_width(),
            semantics.bit_width(),
            "bit pattern width does not match {}",
            semantics.name()
        );
        ApFloat { semantics, bits }
    }

    pub fn from_f32(value: f32) -> Self {
        ApFloat {
            semantics: FloatSemantics::IeeeSingle,
            bits: ApInt::from_u64(32, u64::from(value.to_bits())),
        }
    }

    pub fn from_f64(value: f64) -> Self {
        ApFloat {
            semantics: FloatSemantics::IeeeDouble,
            bits: ApInt::from_u64(64, value.to_bits()),
        }
    }

    #[inline]
    pub fn semantics(&self) -> FloatSemantics {
        self.semantics
    }

    /// The raw bit pattern.
    #[inline]
    pub fn bits(&self) -> &ApInt {
        &self.bits
    }

    /// Convert to a host double for single and double formats.
    pub fn to_f64(&self) -> Option<f64> {
        let raw = self.bits.to_u64()?;
        match self.semantics {
            FloatSemantics::IeeeSingle => {
                u32::try_from(raw).ok().map(|b| f64::from(f32::from_bits(b)))
            }
            FloatSemantics::IeeeDouble => Some(f64::from_bits(raw)),
            _ => None,
        }
    }
}

impl fmt::Display for ApFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_f64() {
            Some(value) => write!(f, "{value:?}"),
            None => {
                write!(f, "0x")?;
                for word in self.bits.words().iter().rev() {
                    write!(f, "{word:016x}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for ApFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.semantics.name(), self)
    }
}
