//! # complex_core - Complex Number Value Type
//!
//! `complex_core` provides [`Complex`], a `Copy` value made of two `f64` parts,
//! together with the arithmetic and text I/O that go with it.
//!
//! ## Design Philosophy
//!
//! - **Plain values**: binary operators return new values, compound operators
//!   mutate the receiver
//! - **Native float semantics**: no validation; NaN and infinities propagate
//! - **No comparisons**: the type has no equality or ordering
//! - **Structured errors**: only text parsing can fail
//!
//! ## Quick Start
//!
//! ```rust
//! use complex_core::Complex;
//!
//! let a = Complex::new(1.0, 2.0);
//! let b = Complex::new(3.0, -1.0);
//!
//! let sum = a + b;
//! assert_eq!(sum.to_string(), "4+1i");
//!
//! let scaled = 2.0 * a - 1.0;
//! assert_eq!(scaled.to_string(), "1+4i");
//!
//! let parsed: Complex = "3 4 i".parse().unwrap();
//! assert_eq!(parsed.abs(), 5.0);
//! ```
//!
//! ## Modules
//!
//! - [`complex`] - The value type, conversions and in-place arithmetic
//! - [`ops`] - Operator overloads
//! - [`text_io`] - Formatting, parsing and stream extraction
//! - [`errors`] - Structured error types

pub mod complex;
pub mod errors;
pub mod ops;
pub mod text_io;

// Re-export commonly used types at crate root for convenience
pub use complex::Complex;
pub use errors::{ComplexError, ComplexResult};
pub use text_io::{Extraction, TokenReader};
