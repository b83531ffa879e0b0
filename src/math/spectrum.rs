use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Color_and_Radiometry/Spectral_Representation

/// A spectral power distribution stored as RGB.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spectrum {
    /// The r component of the spd.
    pub r: f32,
    /// The g component of the spd.
    pub g: f32,
    /// The b component of the spd.
    pub b: f32,
}

impl Spectrum {
    /// Constructs a new `Spectrum`.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        let s = Self { r, g, b };
        debug_assert!(!s.has_nans());
        s
    }

    /// Constructs a black `Spectrum`.
    #[inline]
    pub fn zeros() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0 }
    }

    /// Constructs a white `Spectrum`.
    #[inline]
    pub fn ones() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0 }
    }

    /// Returns `true` if any component is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    /// Returns `true` if all components are zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }
}

impl Add for Spectrum {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }
}

impl AddAssign for Spectrum {
    fn add_assign(&mut self, other: Self) {
        self.r += other.r;
        self.g += other.g;
        self.b += other.b;
    }
}

impl Sub for Spectrum {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            r: self.r - other.r,
            g: self.g - other.g,
            b: self.b - other.b,
        }
    }
}

impl SubAssign for Spectrum {
    fn sub_assign(&mut self, other: Self) {
        self.r -= other.r;
        self.g -= other.g;
        self.b -= other.b;
    }
}

// Component-wise product, used for attenuating carried light
impl Mul for Spectrum {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
        }
    }
}

impl MulAssign for Spectrum {
    fn mul_assign(&mut self, other: Self) {
        self.r *= other.r;
        self.g *= other.g;
        self.b *= other.b;
    }
}

impl Mul<f32> for Spectrum {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self {
            r: self.r * s,
            g: self.g * s,
            b: self.b * s,
        }
    }
}

impl MulAssign<f32> for Spectrum {
    fn mul_assign(&mut self, s: f32) {
        self.r *= s;
        self.g *= s;
        self.b *= s;
    }
}

impl Div<f32> for Spectrum {
    type Output = Self;

    fn div(self, s: f32) -> Self {
        Self {
            r: self.r / s,
            g: self.g / s,
            b: self.b / s,
        }
    }
}

impl DivAssign<f32> for Spectrum {
    fn div_assign(&mut self, s: f32) {
        self.r /= s;
        self.g /= s;
        self.b /= s;
    }
}

impl AbsDiffEq for Spectrum {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl RelativeEq for Spectrum {
    fn default_max_relative() -> Self::Epsilon {
        f32::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.g.relative_eq(&other.g, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::Spectrum;

    #[test]
    fn black() {
        assert!(Spectrum::zeros().is_black());
        assert!(!Spectrum::new(0.0, 0.1, 0.0).is_black());
    }

    #[test]
    fn ops() {
        let a = Spectrum::new(0.2, 0.4, 0.8);
        assert_eq!(a + Spectrum::ones(), Spectrum::new(1.2, 1.4, 1.8));
        assert_eq!(a - a, Spectrum::zeros());
        assert_eq!(a * Spectrum::new(0.5, 0.5, 0.5), Spectrum::new(0.1, 0.2, 0.4));
        assert_eq!(a * 2.0, Spectrum::new(0.4, 0.8, 1.6));
        assert_eq!(a / 2.0, Spectrum::new(0.1, 0.2, 0.4));

        let mut s = Spectrum::ones();
        s *= a;
        assert_eq!(s, a);
        s += a;
        assert_eq!(s, a * 2.0);
        s /= 2.0;
        assert_eq!(s, a);
    }
}
