//! # Operator Implementations
//!
//! `std::ops` sugar for [`Complex`]. Binary operators return a new value;
//! compound assignment operators delegate to the chaining methods on
//! [`Complex`].
//!
//! A real scalar on either side acts as a number with zero imaginary part,
//! but is applied to the parts directly rather than through a full complex
//! product, so `z * 2.0` scales `re` and `im` exactly.
//!
//! ```rust
//! use complex_core::Complex;
//!
//! let z = 5.0 - Complex::new(2.0, 3.0);
//! assert_eq!((z.re, z.im), (3.0, -3.0));
//!
//! let w = Complex::new(2.0, 3.0) - 5.0;
//! assert_eq!((w.re, w.im), (-3.0, 3.0));
//! ```

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::complex::Complex;

// ============================================================================
// Complex ∘ Complex
// ============================================================================

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Self::Output {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Self::Output {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Self::Output {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

// ============================================================================
// Complex ∘ f64
// ============================================================================

impl Add<f64> for Complex {
    type Output = Complex;
    fn add(self, rhs: f64) -> Self::Output {
        Complex::new(self.re + rhs, self.im)
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;
    fn sub(self, rhs: f64) -> Self::Output {
        Complex::new(self.re - rhs, self.im)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;
    fn mul(self, rhs: f64) -> Self::Output {
        Complex::new(self.re * rhs, self.im * rhs)
    }
}

impl Div<f64> for Complex {
    type Output = Complex;
    fn div(self, rhs: f64) -> Self::Output {
        Complex::new(self.re / rhs, self.im / rhs)
    }
}

// ============================================================================
// f64 ∘ Complex
// ============================================================================

impl Add<Complex> for f64 {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Self::Output {
        Complex::new(self + rhs.re, rhs.im)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Self::Output {
        Complex::new(self - rhs.re, -rhs.im)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Self::Output {
        Complex::new(self * rhs.re, self * rhs.im)
    }
}

// ============================================================================
// Compound assignment (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_assign {
    ($trait:ident, $method:ident, $rhs:ty, $delegate:ident) => {
        impl $trait<$rhs> for Complex {
            fn $method(&mut self, rhs: $rhs) {
                self.$delegate(rhs);
            }
        }
    };
}

impl_assign!(AddAssign, add_assign, Complex, add_in_place);
impl_assign!(SubAssign, sub_assign, Complex, sub_in_place);
impl_assign!(MulAssign, mul_assign, Complex, mul_in_place);
impl_assign!(AddAssign, add_assign, f64, add_scalar_in_place);
impl_assign!(SubAssign, sub_assign, f64, sub_scalar_in_place);
impl_assign!(MulAssign, mul_assign, f64, mul_scalar_in_place);
impl_assign!(DivAssign, div_assign, f64, div_scalar_in_place);

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(z: Complex) -> (f64, f64) {
        (z.re, z.im)
    }

    #[test]
    fn test_complex_arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -4.0);
        assert_eq!(parts(a + b), (4.0, -2.0));
        assert_eq!(parts(b + a), (4.0, -2.0));
        assert_eq!(parts(a - b), (-2.0, 6.0));
        // (1 + 2i)(3 - 4i) = 3 - 4i + 6i + 8 = 11 + 2i
        assert_eq!(parts(a * b), (11.0, 2.0));
    }

    #[test]
    fn test_i_squared_is_minus_one() {
        let i = Complex::new(0.0, 1.0);
        assert_eq!(parts(i * i), (-1.0, 0.0));
    }

    #[test]
    fn test_scalar_arithmetic() {
        let z = Complex::new(2.0, 3.0);
        assert_eq!(parts(z + 1.5), (3.5, 3.0));
        assert_eq!(parts(1.5 + z), (3.5, 3.0));
        assert_eq!(parts(z * 2.0), (4.0, 6.0));
        assert_eq!(parts(2.0 * z), (4.0, 6.0));
        assert_eq!(parts(z / 2.0), (1.0, 1.5));
    }

    #[test]
    fn test_scalar_subtraction_asymmetry() {
        let z = Complex::new(2.0, 3.0);
        assert_eq!(parts(5.0 - z), (3.0, -3.0));
        assert_eq!(parts(z - 5.0), (-3.0, 3.0));
    }

    #[test]
    fn test_divide_by_zero_scalar() {
        let z = Complex::new(1.0, 1.0) / 0.0;
        assert_eq!(z.re, f64::INFINITY);
        assert_eq!(z.im, f64::INFINITY);

        let nan = Complex::new(0.0, -1.0) / 0.0;
        assert!(nan.re.is_nan());
        assert_eq!(nan.im, f64::NEG_INFINITY);
    }

    #[test]
    fn test_compound_multiply_matches_binary() {
        let samples = [
            (1.0, 2.0, 3.0, 4.0),
            (-0.5, 7.25, 1e-3, -2.0),
            (123.456, -0.001, 3.3, 9.9),
            (0.1, 0.2, 0.3, 0.4),
        ];
        for &(a, b, c, d) in &samples {
            let mut z = Complex::new(a, b);
            z *= Complex::new(c, d);
            let expected = Complex::new(a, b) * Complex::new(c, d);
            assert_eq!(parts(z), parts(expected));
        }
    }

    #[test]
    fn test_compound_operators() {
        let mut z = Complex::new(1.0, 1.0);
        z += Complex::new(2.0, 3.0);
        assert_eq!(parts(z), (3.0, 4.0));
        z -= Complex::new(1.0, 1.0);
        assert_eq!(parts(z), (2.0, 3.0));
        z += 1.0;
        assert_eq!(parts(z), (3.0, 3.0));
        z -= 4.0;
        assert_eq!(parts(z), (-1.0, 3.0));
        z *= 2.0;
        assert_eq!(parts(z), (-2.0, 6.0));
        z /= 4.0;
        assert_eq!(parts(z), (-0.5, 1.5));
    }

    #[test]
    fn test_binary_operators_leave_operands_untouched() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);
        let _ = a * b + a - b;
        assert_eq!(parts(a), (1.0, 2.0));
        assert_eq!(parts(b), (3.0, 4.0));
    }
}
