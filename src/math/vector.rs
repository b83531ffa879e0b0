use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// A two-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec2 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
}

/// A three-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
    /// The z component of the vector.
    pub z: f32,
}

macro_rules! impl_vec {
    ( $( $vec_type:ident
         [ $( $component:ident )+ ]
         $shorthand:ident
       ),+
    ) => {
        $(
            impl $vec_type {
                /// Constructs a new vector.
                ///
                /// Has a debug assert that checks for NaNs.
                #[inline]
                pub fn new($($component: f32),+) -> Self {
                    let v = Self { $($component),+ };
                    debug_assert!(!v.has_nans());
                    v
                }

                /// Constructs a new vector of 0s.
                #[inline]
                pub fn zeros() -> Self {
                    Self {
                        $($component: 0.0,)+
                    }
                }

                /// Constructs a new vector of 1s.
                #[inline]
                pub fn ones() -> Self {
                    Self {
                        $($component: 1.0,)+
                    }
                }

                /// Returns `true` if any component is NaN.
                #[inline]
                pub fn has_nans(&self) -> bool {
                    $(self.$component.is_nan())||+
                }

                /// Returns the dot product of the two vectors.
                #[inline]
                pub fn dot(&self, other: Self) -> f32 {
                    debug_assert!(!self.has_nans());
                    debug_assert!(!other.has_nans());

                    0.0 $(+ self.$component * other.$component)+
                }

                /// Returns the vector's squared length.
                #[inline]
                pub fn len_sqr(&self) -> f32 {
                    self.dot(*self)
                }

                /// Returns the vector's length.
                #[inline]
                pub fn len(&self) -> f32 {
                    self.len_sqr().sqrt()
                }

                /// Returns the normalized vector.
                #[inline]
                pub fn normalized(&self) -> Self {
                    *self / self.len()
                }

                /// Returns the component-wise minimum of the two vectors.
                #[inline]
                pub fn min(&self, other: Self) -> Self {
                    Self {
                        $($component: self.$component.min(other.$component),)+
                    }
                }

                /// Returns the component-wise maximum of the two vectors.
                #[inline]
                pub fn max(&self, other: Self) -> Self {
                    Self {
                        $($component: self.$component.max(other.$component),)+
                    }
                }
            }

            /// Shorthand constructor
            #[inline]
            pub fn $shorthand($($component: f32),+) -> $vec_type {
                // Use new() to catch NaNs
                $vec_type::new($($component),+)
            }

            impl Neg for $vec_type {
                type Output = Self;

                fn neg(self) -> Self {
                    Self {
                        $($component: -self.$component,)+
                    }
                }
            }

            impl Add for $vec_type {
                type Output = Self;

                fn add(self, other: Self) -> Self {
                    Self {
                        $($component: self.$component + other.$component,)+
                    }
                }
            }

            impl AddAssign for $vec_type {
                fn add_assign(&mut self, other: Self) {
                    $(self.$component += other.$component;)+
                }
            }

            impl Sub for $vec_type {
                type Output = Self;

                fn sub(self, other: Self) -> Self {
                    Self {
                        $($component: self.$component - other.$component,)+
                    }
                }
            }

            impl SubAssign for $vec_type {
                fn sub_assign(&mut self, other: Self) {
                    $(self.$component -= other.$component;)+
                }
            }

            impl Mul<f32> for $vec_type {
                type Output = Self;

                fn mul(self, s: f32) -> Self {
                    Self {
                        $($component: self.$component * s,)+
                    }
                }
            }

            impl MulAssign<f32> for $vec_type {
                fn mul_assign(&mut self, s: f32) {
                    $(self.$component *= s;)+
                }
            }

            impl Div<f32> for $vec_type {
                type Output = Self;

                fn div(self, s: f32) -> Self {
                    Self {
                        $($component: self.$component / s,)+
                    }
                }
            }

            impl DivAssign<f32> for $vec_type {
                fn div_assign(&mut self, s: f32) {
                    $(self.$component /= s;)+
                }
            }

            impl AbsDiffEq for $vec_type {
                type Epsilon = f32;

                fn default_epsilon() -> Self::Epsilon {
                    f32::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                    $(self.$component.abs_diff_eq(&other.$component, epsilon))&&+
                }
            }

            impl RelativeEq for $vec_type {
                fn default_max_relative() -> Self::Epsilon {
                    f32::default_max_relative()
                }

                fn relative_eq(
                    &self,
                    other: &Self,
                    epsilon: Self::Epsilon,
                    max_relative: Self::Epsilon,
                ) -> bool {
                    $(self.$component.relative_eq(&other.$component, epsilon, max_relative))&&+
                }
            }
        )+
    };
}
impl_vec!(
    Vec2 [x y] vec2,
    Vec3 [x y z] vec3
);

impl Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index {} out of bounds", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index {} out of bounds", i),
        }
    }
}

impl Vec3 {
    /// Returns the cross product of the two vectors.
    //
    // Always uses `f64` internally to avoid errors on "catastrophic cancellation".
    // http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html#DotandCrossProduct
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        let v1x = f64::from(self.x);
        let v1y = f64::from(self.y);
        let v1z = f64::from(self.z);
        let v2x = f64::from(other.x);
        let v2y = f64::from(other.y);
        let v2z = f64::from(other.z);
        Self {
            x: ((v1y * v2z) - (v1z * v2y)) as f32,
            y: ((v1z * v2x) - (v1x * v2z)) as f32,
            z: ((v1x * v2y) - (v1y * v2x)) as f32,
        }
    }

    /// Returns `true` if the vector is close to zero in all components.
    #[inline]
    pub fn near_zero(&self) -> bool {
        const EPSILON: f32 = 1e-8;
        self.x.abs() < EPSILON && self.y.abs() < EPSILON && self.z.abs() < EPSILON
    }
}

/// Reflects `v` around the surface normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * (2.0 * v.dot(n))
}

/// Refracts unit vector `v` through the surface with normal `n` and the given
/// ratio of refractive indices.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta_ratio: f32) -> Vec3 {
    let cos_theta = (-v).dot(n).min(1.0);
    let r_perpendicular = (v + n * cos_theta) * eta_ratio;
    let r_parallel = n * -(1.0 - r_perpendicular.len_sqr()).abs().sqrt();
    r_perpendicular + r_parallel
}
