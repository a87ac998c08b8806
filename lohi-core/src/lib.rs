//! # lohi
//!
//! Exact 64-bit integers assembled from two 32-bit halves.
//!
//! ## Key Features
//! - Immutable [`Int64`] value stored as `[low, high]` unsigned limbs
//! - Two's-complement negation, addition and subtraction with wraparound
//! - Strict construction from halves ([`Int64::new`]) and lenient
//!   construction from any loosely-typed value ([`Int64::from_loose`])
//! - Unsigned and signed views of each half
//! - Compact (`0x0000abcd00001234`) and grouped (`0x0000_abcd_0000_1234`) hex
//! - Named object layout and unit constants ([`layout`])

pub mod error;
pub mod layout;
pub mod normalize;
pub mod value;

pub use error::{Half, Int64Error, Result};
pub use normalize::{lohi_from_one, Operand, MAX_HALF, MIN_HALF};
pub use value::Int64;
