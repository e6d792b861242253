//! Missing-value markers
//!
//! Doubles use a dedicated NaN payload so that "missing" can be told apart
//! from the NaN produced by arithmetic. The payload sits in the low 32 bits.

use std::fmt;

/// Low word of the missing-double payload.
const NA_REAL_LOW_WORD: u64 = 1954;

/// Bit pattern of `NA_REAL`: a quiet NaN carrying `NA_REAL_LOW_WORD`.
const NA_REAL_BITS: u64 = 0x7FF8_0000_0000_0000 | NA_REAL_LOW_WORD;

/// The canonical missing double.
pub const NA_REAL: f64 = f64::from_bits(NA_REAL_BITS);

/// Check whether `x` is the missing double (not merely any NaN).
#[inline]
pub fn is_na_real(x: f64) -> bool {
    x.is_nan() && (x.to_bits() & 0xFFFF_FFFF) == NA_REAL_LOW_WORD
}

/// Complex number with double components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// Missing complex: both components are `NA_REAL`.
    pub const NA: Complex = Complex {
        re: NA_REAL,
        im: NA_REAL,
    };

    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// A complex is missing when either component is.
    pub fn is_na(&self) -> bool {
        is_na_real(self.re) || is_na_real(self.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_na() {
            return write!(f, "NA");
        }
        if self.im.is_sign_negative() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
