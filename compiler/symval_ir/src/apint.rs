//! Fixed-width arbitrary-precision integers.
//!
//! `ApInt` is sign-less: it is a bag of `bit_width` bits stored as
//! little-endian `u64` limbs. Signedness is chosen by the reader
//! (`to_i64` vs `to_u64`, `to_bigint_signed` vs `to_biguint`).
//!
//! Limbs are kept canonical: bits above `bit_width` in the top limb are
//! always zero, so derived equality and hashing compare values, not noise.

use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use smallvec::SmallVec;

/// Error when building an `ApInt` from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApIntError {
    #[error("integer bit width must be non-zero")]
    ZeroWidth,
    #[error("invalid radix {0}: must be between 2 and 36")]
    InvalidRadix(u32),
    #[error("`{text}` is not a valid base-{radix} integer")]
    InvalidDigits { text: String, radix: u32 },
    #[error("`{text}` does not fit in {bit_width} bits")]
    TooWide { text: String, bit_width: u32 },
}

/// A fixed-width integer of arbitrary bit width.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApInt {
    bit_width: u32,
    words: SmallVec<[u64; 2]>,
}

/// Number of `u64` limbs needed for `bit_width` bits.
#[inline]
pub(crate) fn words_for_width(bit_width: u32) -> usize {
    bit_width.div_ceil(64) as usize
}

impl ApInt {
    /// Create from little-endian limbs.
    ///
    /// Missing limbs are zero; extra limbs and bits above `bit_width`
    /// are discarded.
    ///
    /// # Panics
    /// Panics if `bit_width` is zero.
    #[track_caller]
    pub fn new(bit_width: u32, words: &[u64]) -> Self {
        assert!(bit_width > 0, "ApInt bit width must be non-zero");
        let len = words_for_width(bit_width);
        let mut limbs: SmallVec<[u64; 2]> = words.iter().copied().take(len).collect();
        limbs.resize(len, 0);
        let mut value = ApInt {
            bit_width,
            words: limbs,
        };
        value.clear_unused_bits();
        value
    }

    /// The zero value of the given width.
    #[track_caller]
    pub fn zero(bit_width: u32) -> Self {
        Self::new(bit_width, &[])
    }

    /// Create from an unsigned value, truncating to `bit_width`.
    #[track_caller]
    pub fn from_u64(bit_width: u32, value: u64) -> Self {
        Self::new(bit_width, &[value])
    }

    /// Create from a signed value, sign-extending then truncating to `bit_width`.
    #[track_caller]
    pub fn from_i64(bit_width: u32, value: i64) -> Self {
        assert!(bit_width > 0, "ApInt bit width must be non-zero");
        let fill = if value < 0 { u64::MAX } else { 0 };
        let mut words: SmallVec<[u64; 2]> = SmallVec::from_elem(fill, words_for_width(bit_width));
        words[0] = u64::from_le_bytes(value.to_le_bytes());
        Self::new(bit_width, &words)
    }

    /// Create from a big integer using two's complement truncation.
    #[track_caller]
    pub fn from_bigint(bit_width: u32, value: &BigInt) -> Self {
        assert!(bit_width > 0, "ApInt bit width must be non-zero");
        let modulus = BigInt::from(1u8) << bit_width;
        let mut rem = value % &modulus;
        if rem.sign() == Sign::Minus {
            rem += &modulus;
        }
        let bytes = rem.magnitude().to_bytes_le();
        let words: SmallVec<[u64; 2]> = bytes
            .chunks(8)
            .map(|chunk| {
                let mut buf = [0u8; 8];
                buf[..chunk.len()].copy_from_slice(chunk);
                u64::from_le_bytes(buf)
            })
            .collect();
        Self::new(bit_width, &words)
    }

    /// Parse `text` in `radix`, accepting anything representable in
    /// `bit_width` bits as either a signed or an unsigned value.
    pub fn from_str_radix(text: &str, radix: u32, bit_width: u32) -> Result<Self, ApIntError> {
        if bit_width == 0 {
            return Err(ApIntError::ZeroWidth);
        }
        if !(2..=36).contains(&radix) {
            return Err(ApIntError::InvalidRadix(radix));
        }
        let value = BigInt::parse_bytes(text.as_bytes(), radix).ok_or_else(|| {
            ApIntError::InvalidDigits {
                text: text.to_owned(),
                radix,
            }
        })?;
        let min = -(BigInt::from(1u8) << (bit_width - 1));
        let max = (BigInt::from(1u8) << bit_width) - BigInt::from(1u8);
        if value < min || value > max {
            return Err(ApIntError::TooWide {
                text: text.to_owned(),
                bit_width,
            });
        }
        Ok(Self::from_bigint(bit_width, &value))
    }

    /// Width in bits.
    #[inline]
    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// Little-endian limbs; always `ceil(bit_width / 64)` long.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Whether the sign bit is set.
    pub fn is_negative(&self) -> bool {
        let top = self.bit_width - 1;
        (self.words[(top / 64) as usize] >> (top % 64)) & 1 == 1
    }

    /// Whether every bit is zero.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// The value read as unsigned, if it fits in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        if self.words[1..].iter().any(|&w| w != 0) {
            return None;
        }
        Some(self.words[0])
    }

    /// The value read as signed, if it fits in an `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.to_bigint_signed()).ok()
    }

    /// The value read as unsigned.
    pub fn to_biguint(&self) -> BigUint {
        let bytes: Vec<u8> = self.words.iter().flat_map(|w| w.to_le_bytes()).collect();
        BigUint::from_bytes_le(&bytes)
    }

    /// The value read as two's complement signed.
    pub fn to_bigint_signed(&self) -> BigInt {
        let magnitude = BigInt::from(self.to_biguint());
        if self.is_negative() {
            magnitude - (BigInt::from(1u8) << self.bit_width)
        } else {
            magnitude
        }
    }

    fn clear_unused_bits(&mut self) {
        let used = self.bit_width % 64;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << used) - 1;
            }
        }
    }
}

/// Signed decimal, matching how literals are usually written.
impl fmt::Display for ApInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_bigint_signed())
    }
}

impl fmt::Debug for ApInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{} {}", self.bit_width, self)
    }
}

#[cfg(test)]
mod tests;
