//! # 64-bit Value Type
//!
//! [`Int64`] is an immutable 64-bit integer stored as two 32-bit limbs:
//!
//! ```text
//! bits 63..32   bits 31..0
//! +----------+ +----------+
//! |   high   | |   low    |
//! +----------+ +----------+
//! ```
//!
//! Arithmetic wraps exactly like native two's-complement `u64`/`i64`, but is
//! carried out limb by limb through a `u64` accumulator so the carry out of
//! each half is explicit.
//!
//! ## Construction
//!
//! There are two entry points with deliberately different contracts:
//!
//! - [`Int64::new`] takes explicit halves and rejects anything that is not a
//!   32-bit integer with [`Int64Error::InvalidArgument`].
//! - [`Int64::from_loose`] takes a single loosely-typed value and never fails;
//!   see [`crate::normalize`] for the fallback rule.
//!
//! ```
//! use lohi_core::Int64;
//!
//! let a = Int64::new(0xFFFF_FFFFu32, 0).unwrap();
//! let b = a.wrapping_add(1);
//! assert_eq!((b.low(), b.high()), (0, 1));
//! assert_eq!(b.to_string(), "0x0000000100000000");
//! ```

use crate::error::{Half, Int64Error, Result};
use crate::normalize::{lohi_from_one, sign_extend, Operand};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Immutable 64-bit integer built from two unsigned 32-bit halves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Int64 {
    /// `[low, high]`
    limbs: [u32; 2],
}

impl Int64 {
    /// Limb size in bits
    pub const LIMB_BITS: u32 = 32;

    /// Number of limbs
    pub const NUM_LIMBS: usize = 2;

    /// Total bits
    pub const TOTAL_BITS: u32 = Self::LIMB_BITS * Self::NUM_LIMBS as u32;

    /// Limb mask, kept as `u64` so it can be applied to carry accumulators
    pub const LIMB_MASK: u64 = 0xFFFF_FFFF;

    pub const ZERO: Self = Self::from_halves(0, 0);

    /// Most negative value (`i64::MIN`); negating it wraps back to itself
    pub const MIN: Self = Self::from_halves(0, 0x8000_0000);

    /// Most positive value (`i64::MAX`)
    pub const MAX: Self = Self::from_halves(0xFFFF_FFFF, 0x7FFF_FFFF);

    /// Strict construction from explicit halves.
    ///
    /// Each half must be a numeric integer in `[-0x80000000, 0xFFFFFFFF]`;
    /// negative halves are stored as their unsigned 32-bit bit pattern. The
    /// low half is checked first.
    pub fn new(low: impl Into<Operand>, high: impl Into<Operand>) -> Result<Self> {
        let low = low
            .into()
            .as_half()
            .ok_or(Int64Error::InvalidArgument { half: Half::Low })?;
        let high = high
            .into()
            .as_half()
            .ok_or(Int64Error::InvalidArgument { half: Half::High })?;
        Ok(Self::from_halves(truncate(low as u64), truncate(high as u64)))
    }

    /// Lenient construction from a single value. Never fails.
    ///
    /// An [`Int64`] is copied, a number in the 32-bit range is sign-extended,
    /// and everything else becomes zero.
    #[inline]
    pub fn from_loose(value: impl Into<Operand>) -> Self {
        Self {
            limbs: lohi_from_one(value),
        }
    }

    /// Exact construction from halves that are already unsigned.
    #[inline]
    pub const fn from_halves(low: u32, high: u32) -> Self {
        Self { limbs: [low, high] }
    }

    /// Split a native 64-bit pattern into halves.
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self::from_halves(bits as u32, (bits >> 32) as u32)
    }

    /// Low half as unsigned
    #[inline]
    pub const fn low(&self) -> u32 {
        self.limbs[0]
    }

    /// High half as unsigned
    #[inline]
    pub const fn high(&self) -> u32 {
        self.limbs[1]
    }

    /// Low half reinterpreted as signed
    #[doc(alias = "bot")]
    #[inline]
    pub const fn signed_low(&self) -> i32 {
        self.limbs[0] as i32
    }

    /// High half reinterpreted as signed
    #[doc(alias = "top")]
    #[inline]
    pub const fn signed_high(&self) -> i32 {
        self.limbs[1] as i32
    }

    /// Both halves as `[low, high]`
    #[inline]
    pub const fn limbs(&self) -> [u32; 2] {
        self.limbs
    }

    /// Materialize the full 64-bit pattern
    #[inline]
    pub const fn to_bits(&self) -> u64 {
        (self.limbs[0] as u64) | ((self.limbs[1] as u64) << Self::LIMB_BITS)
    }

    /// Materialize as a signed 64-bit integer
    #[inline]
    pub const fn to_i64(&self) -> i64 {
        self.to_bits() as i64
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.limbs[0] == 0 && self.limbs[1] == 0
    }

    /// Add two limb pairs plus an incoming carry, discarding the carry out of
    /// bit 63. Negation and subtraction reuse this with complemented limbs.
    #[inline]
    fn add_with_carry(a: [u32; 2], b: [u32; 2], carry_in: u64) -> Self {
        let low = a[0] as u64 + b[0] as u64 + carry_in;
        let carry = (low > Self::LIMB_MASK) as u64;
        let high = a[1] as u64 + b[1] as u64 + carry;
        Self::from_halves(truncate(low), truncate(high))
    }

    /// Two's-complement negation: `!self + 1`
    #[inline]
    pub fn wrapping_neg(self) -> Self {
        Self::add_with_carry([!self.limbs[0], !self.limbs[1]], [0, 0], 1)
    }

    /// Wrapping addition. `rhs` goes through the lenient normalizer.
    #[inline]
    pub fn wrapping_add(self, rhs: impl Into<Operand>) -> Self {
        Self::add_with_carry(self.limbs, lohi_from_one(rhs), 0)
    }

    /// Wrapping subtraction as `self + !rhs + 1`. `rhs` goes through the
    /// lenient normalizer.
    #[inline]
    pub fn wrapping_sub(self, rhs: impl Into<Operand>) -> Self {
        let [low, high] = lohi_from_one(rhs);
        Self::add_with_carry(self.limbs, [!low, !high], 1)
    }

    /// Both halves equal those of the normalized `rhs`.
    #[inline]
    pub fn equals(&self, rhs: impl Into<Operand>) -> bool {
        self.limbs == lohi_from_one(rhs)
    }

    #[inline]
    pub fn not_equals(&self, rhs: impl Into<Operand>) -> bool {
        !self.equals(rhs)
    }

    /// Render as hex, high half first.
    ///
    /// Compact: `0xHHHHHHHHLLLLLLLL`. Pretty: `0xHHHH_HHHH_LLLL_LLLL`.
    pub fn to_hex_string(&self, pretty: bool) -> String {
        let [low, high] = self.limbs;
        if pretty {
            format!(
                "0x{:04x}_{:04x}_{:04x}_{:04x}",
                high >> 16,
                high & 0xFFFF,
                low >> 16,
                low & 0xFFFF
            )
        } else {
            format!("0x{:08x}{:08x}", high, low)
        }
    }
}

#[inline]
fn truncate(acc: u64) -> u32 {
    (acc & Int64::LIMB_MASK) as u32
}

impl fmt::Debug for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Int64(low: {:#010x}, high: {:#010x})",
            self.limbs[0], self.limbs[1]
        )
    }
}

/// `{}` renders the compact form, `{:#}` the grouped one.
impl fmt::Display for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string(f.alternate()))
    }
}

impl fmt::LowerHex for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_bits(), f)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Neg for Int64 {
    type Output = Self;

    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl<T: Into<Operand>> Add<T> for Int64 {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        self.wrapping_add(rhs)
    }
}

impl<T: Into<Operand>> Sub<T> for Int64 {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl<T: Into<Operand>> AddAssign<T> for Int64 {
    fn add_assign(&mut self, rhs: T) {
        *self = self.wrapping_add(rhs);
    }
}

impl<T: Into<Operand>> SubAssign<T> for Int64 {
    fn sub_assign(&mut self, rhs: T) {
        *self = self.wrapping_sub(rhs);
    }
}

impl PartialEq<i32> for Int64 {
    fn eq(&self, other: &i32) -> bool {
        self.equals(*other)
    }
}

impl PartialEq<u32> for Int64 {
    fn eq(&self, other: &u32) -> bool {
        self.equals(*other)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i32> for Int64 {
    #[inline]
    fn from(val: i32) -> Self {
        Self {
            limbs: sign_extend(val as i64),
        }
    }
}

impl From<u32> for Int64 {
    #[inline]
    fn from(val: u32) -> Self {
        Self::from_halves(val, 0)
    }
}

impl From<Int64> for u64 {
    #[inline]
    fn from(val: Int64) -> u64 {
        val.to_bits()
    }
}

impl From<Int64> for i64 {
    #[inline]
    fn from(val: Int64) -> i64 {
        val.to_i64()
    }
}
