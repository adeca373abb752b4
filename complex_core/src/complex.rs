//! # Complex Value Type
//!
//! [`Complex`] is a plain `Copy` pair of `f64` parts. It performs no validation:
//! NaN and infinities are stored as given and propagate through every operation
//! following native floating-point rules.
//!
//! The in-place methods here mutate the receiver and hand back `&mut Self`, so
//! compound updates can be chained. The `+=`-style operators in [`ops`](crate::ops)
//! delegate to them.
//!
//! ## Example
//!
//! ```rust
//! use complex_core::Complex;
//!
//! let mut z = Complex::new(1.0, 2.0);
//! z.add_in_place(Complex::new(1.0, 1.0)).mul_scalar_in_place(2.0);
//! assert_eq!((z.re, z.im), (4.0, 6.0));
//!
//! // Converting to a number yields the magnitude
//! assert_eq!(Complex::new(3.0, 4.0).to_scalar(), 5.0);
//! ```

/// A complex number with real part `re` and imaginary part `im`.
///
/// Equality and ordering are intentionally absent; compare parts directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// Create a complex number from its real and imaginary parts.
    pub fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Create a complex number with a zero imaginary part.
    pub fn real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// The zero complex number, same as `Complex::default()`.
    pub fn zero() -> Self {
        Complex { re: 0.0, im: 0.0 }
    }

    /// Overwrite both parts.
    pub fn set(&mut self, re: f64, im: f64) {
        self.re = re;
        self.im = im;
    }

    /// Overwrite the real part and reset the imaginary part to zero.
    pub fn set_real(&mut self, re: f64) {
        self.set(re, 0.0);
    }

    /// Euclidean norm `sqrt(re² + im²)`.
    pub fn abs(&self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Numeric conversion of the value.
    ///
    /// Returns the magnitude, not the real part. Use [`Complex::re`] for the latter.
    pub fn to_scalar(&self) -> f64 {
        self.abs()
    }

    /// Copy both parts from `other`.
    pub fn assign(&mut self, other: Complex) -> &mut Self {
        self.re = other.re;
        self.im = other.im;
        self
    }

    /// Assign a real scalar: `re = value`, `im = 0`.
    pub fn assign_scalar(&mut self, value: f64) -> &mut Self {
        self.re = value;
        self.im = 0.0;
        self
    }

    // ========================================================================
    // In-place arithmetic
    // ========================================================================

    pub fn add_in_place(&mut self, rhs: Complex) -> &mut Self {
        self.re += rhs.re;
        self.im += rhs.im;
        self
    }

    pub fn sub_in_place(&mut self, rhs: Complex) -> &mut Self {
        self.re -= rhs.re;
        self.im -= rhs.im;
        self
    }

    /// Complex product in place.
    pub fn mul_in_place(&mut self, rhs: Complex) -> &mut Self {
        // the imaginary part needs the real part from before the update
        let re = self.re;
        self.re = self.re * rhs.re - self.im * rhs.im;
        self.im = self.im * rhs.re + re * rhs.im;
        self
    }

    /// Add a real scalar; only the real part changes.
    pub fn add_scalar_in_place(&mut self, rhs: f64) -> &mut Self {
        self.re += rhs;
        self
    }

    /// Subtract a real scalar; only the real part changes.
    pub fn sub_scalar_in_place(&mut self, rhs: f64) -> &mut Self {
        self.re -= rhs;
        self
    }

    pub fn mul_scalar_in_place(&mut self, rhs: f64) -> &mut Self {
        self.re *= rhs;
        self.im *= rhs;
        self
    }

    /// Divide both parts by a real scalar. Division by zero yields IEEE
    /// infinities or NaN.
    pub fn div_scalar_in_place(&mut self, rhs: f64) -> &mut Self {
        self.re /= rhs;
        self.im /= rhs;
        self
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::real(re)
    }
}

impl From<Complex> for f64 {
    fn from(z: Complex) -> Self {
        z.to_scalar()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_construction_defaults() {
        let z = Complex::default();
        assert_eq!((z.re, z.im), (0.0, 0.0));

        let r = Complex::real(2.5);
        assert_eq!((r.re, r.im), (2.5, 0.0));

        let c = Complex::new(1.0, -1.0);
        assert_eq!((c.re, c.im), (1.0, -1.0));

        let s = Complex::from(-4.5);
        assert_eq!((s.re, s.im), (-4.5, 0.0));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Complex::new(1.0, 2.0);
        let mut copy = original;
        copy.set(7.0, 8.0);
        assert_eq!((original.re, original.im), (1.0, 2.0));
        assert_eq!((copy.re, copy.im), (7.0, 8.0));
    }

    #[test]
    fn test_set_real_clears_imaginary() {
        let mut z = Complex::new(3.0, 4.0);
        z.set_real(9.0);
        assert_eq!((z.re, z.im), (9.0, 0.0));
    }

    #[test]
    fn test_abs() {
        assert_eq!(Complex::new(3.0, 4.0).abs(), 5.0);
        assert_eq!(Complex::zero().abs(), 0.0);

        for &(re, im) in &[(1.5, -2.25), (-1e3, 7.0), (0.1, 0.2)] {
            let z = Complex::new(re, im);
            assert!(approx(z.abs(), (re * re + im * im).sqrt()));
        }
    }

    #[test]
    fn test_abs_propagates_nan() {
        assert!(Complex::new(f64::NAN, 1.0).abs().is_nan());
        assert_eq!(Complex::new(f64::INFINITY, 0.0).abs(), f64::INFINITY);
    }

    #[test]
    fn test_to_scalar_is_magnitude() {
        let z = Complex::new(-6.0, 8.0);
        assert_eq!(z.to_scalar(), 10.0);
        assert_eq!(f64::from(z), 10.0);
    }

    #[test]
    fn test_assign() {
        let mut z = Complex::new(1.0, 1.0);
        z.assign(Complex::new(-2.0, 5.0));
        assert_eq!((z.re, z.im), (-2.0, 5.0));

        z.assign_scalar(4.0);
        assert_eq!((z.re, z.im), (4.0, 0.0));
    }

    #[test]
    fn test_in_place_chaining() {
        let mut z = Complex::new(1.0, 1.0);
        z.add_in_place(Complex::new(1.0, 2.0))
            .sub_scalar_in_place(1.0)
            .mul_scalar_in_place(3.0)
            .div_scalar_in_place(2.0);
        assert_eq!((z.re, z.im), (1.5, 4.5));
    }

    #[test]
    fn test_scalar_in_place_only_touches_real() {
        let mut z = Complex::new(1.0, 2.0);
        z.add_scalar_in_place(5.0);
        assert_eq!((z.re, z.im), (6.0, 2.0));
        z.sub_scalar_in_place(10.0);
        assert_eq!((z.re, z.im), (-4.0, 2.0));
    }

    #[test]
    fn test_mul_in_place_uses_original_real() {
        let mut z = Complex::new(0.0, 1.0);
        z.mul_in_place(Complex::new(0.0, 1.0));
        assert_eq!((z.re, z.im), (-1.0, 0.0));

        let mut w = Complex::new(2.0, 3.0);
        w.mul_in_place(Complex::new(4.0, -5.0));
        // (2 + 3i)(4 - 5i) = 8 - 10i + 12i + 15 = 23 + 2i
        assert_eq!((w.re, w.im), (23.0, 2.0));
    }

    #[test]
    fn test_div_scalar_by_zero() {
        let mut z = Complex::new(1.0, 1.0);
        z.div_scalar_in_place(0.0);
        assert_eq!(z.re, f64::INFINITY);
        assert_eq!(z.im, f64::INFINITY);
    }
}
