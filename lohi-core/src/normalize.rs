//! # Operand Normalization
//!
//! Every lenient entry point of [`Int64`] funnels its input through
//! [`lohi_from_one`], which turns a loosely-typed [`Operand`] into a canonical
//! `[low, high]` pair of unsigned 32-bit halves.
//!
//! ## Fallback rule
//!
//! Normalization never fails. Two inputs degrade to zero instead of raising:
//!
//! - a non-numeric operand (strings, `None`, `bool`, `()`) becomes `[0, 0]`
//! - a numeric operand that is fractional, non-finite, or outside
//!   `[-0x80000000, 0xFFFFFFFF]` is replaced by `0` before sign extension
//!
//! Each substitution emits a `debug` event on the `lohi_core::normalize`
//! target so a caller can tell a genuine zero from a coerced one.

use crate::value::Int64;
use tracing::debug;

/// Smallest integer accepted as a 32-bit half (`i32::MIN`)
pub const MIN_HALF: i128 = -0x8000_0000;

/// Largest integer accepted as a 32-bit half (`u32::MAX`)
pub const MAX_HALF: i128 = 0xFFFF_FFFF;

/// A loosely-typed value that can stand in for a 64-bit integer.
///
/// Every Rust integer type converts to [`Operand::Integer`], floats convert to
/// [`Operand::Float`], and anything without a numeric reading converts to
/// [`Operand::NonNumeric`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// An existing 64-bit value, copied half for half
    Int64(Int64),
    /// An exact integer, possibly outside the 32-bit range
    Integer(i128),
    /// A floating point number, possibly fractional or non-finite
    Float(f64),
    /// Input with no numeric meaning
    NonNumeric,
}

impl Operand {
    /// Whether this operand is a plain number (integer or float).
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Operand::Integer(_) | Operand::Float(_))
    }

    /// The operand as an integer in `[MIN_HALF, MAX_HALF]`, or `None` when it
    /// is not a number, not integral, or out of range.
    ///
    /// An [`Operand::Int64`] is never a valid half.
    pub fn as_half(&self) -> Option<i64> {
        let n = match *self {
            Operand::Integer(n) => n,
            Operand::Float(x) if x.is_finite() && x.fract() == 0.0 => x as i128,
            _ => return None,
        };
        if (MIN_HALF..=MAX_HALF).contains(&n) {
            Some(n as i64)
        } else {
            None
        }
    }

    /// Apply the normalization rule, returning a fresh `[low, high]` pair.
    pub fn to_lohi(&self) -> [u32; 2] {
        if let Operand::Int64(value) = *self {
            return [value.low(), value.high()];
        }
        if !self.is_numeric() {
            debug!("non-numeric operand, substituting 0");
            return [0, 0];
        }
        let n = self.as_half().unwrap_or_else(|| {
            debug!(operand = ?self, "operand is not a 32-bit integer, substituting 0");
            0
        });
        sign_extend(n)
    }
}

/// Sign-extend an integer from the half range into a `[low, high]` pair.
///
/// `n` is reinterpreted as its unsigned 32-bit pattern; the high half is all
/// ones when `n` is negative.
#[inline]
pub(crate) fn sign_extend(n: i64) -> [u32; 2] {
    let low = (n as u64 & 0xFFFF_FFFF) as u32;
    let high = if n < 0 { u32::MAX } else { 0 };
    [low, high]
}

/// Normalize one loosely-typed input to a `[low, high]` pair.
///
/// This is cheaper than building an [`Int64`] when only the halves are
/// needed. The returned array is a copy; nothing aliases the source value.
///
/// ```
/// use lohi_core::lohi_from_one;
///
/// assert_eq!(lohi_from_one(5), [5, 0]);
/// assert_eq!(lohi_from_one(-1), [0xFFFF_FFFF, 0xFFFF_FFFF]);
/// assert_eq!(lohi_from_one(0x1_0000_0000u64), [0, 0]);
/// assert_eq!(lohi_from_one("0x10"), [0, 0]);
/// ```
#[inline]
pub fn lohi_from_one(value: impl Into<Operand>) -> [u32; 2] {
    value.into().to_lohi()
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_operand_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                #[inline]
                fn from(val: $t) -> Self {
                    Operand::Integer(val as i128)
                }
            }
        )*
    };
}

impl_operand_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Operand {
    #[inline]
    fn from(val: f64) -> Self {
        Operand::Float(val)
    }
}

impl From<f32> for Operand {
    #[inline]
    fn from(val: f32) -> Self {
        Operand::Float(val as f64)
    }
}

impl From<Int64> for Operand {
    #[inline]
    fn from(val: Int64) -> Self {
        Operand::Int64(val)
    }
}

impl From<&Int64> for Operand {
    #[inline]
    fn from(val: &Int64) -> Self {
        Operand::Int64(*val)
    }
}

// Strings are never parsed here: a string is simply not a number.
impl From<&str> for Operand {
    #[inline]
    fn from(_: &str) -> Self {
        Operand::NonNumeric
    }
}

impl From<String> for Operand {
    #[inline]
    fn from(_: String) -> Self {
        Operand::NonNumeric
    }
}

impl From<bool> for Operand {
    #[inline]
    fn from(_: bool) -> Self {
        Operand::NonNumeric
    }
}

impl From<()> for Operand {
    #[inline]
    fn from(_: ()) -> Self {
        Operand::NonNumeric
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    #[inline]
    fn from(val: Option<T>) -> Self {
        val.map_or(Operand::NonNumeric, Into::into)
    }
}
