use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

use super::vector::{Vec2, Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

/// A position in 2D space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point2 {
    /// The x component of the point.
    pub x: f32,
    /// The y component of the point.
    pub y: f32,
}

/// A position in 3D space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3 {
    /// The x component of the point.
    pub x: f32,
    /// The y component of the point.
    pub y: f32,
    /// The z component of the point.
    pub z: f32,
}

macro_rules! impl_point {
    ( $( $point_type:ident
         $vec_type:ident
         [ $( $component:ident )+ ]
         $shorthand:ident
       ),+
    ) => {
        $(
            impl $point_type {
                /// Constructs a new point.
                ///
                /// Has a debug assert that checks for NaNs.
                #[inline]
                pub fn new($($component: f32),+) -> Self {
                    let p = Self { $($component),+ };
                    debug_assert!(!p.has_nans());
                    p
                }

                /// Constructs a new point at the origin.
                #[inline]
                pub fn zeros() -> Self {
                    Self {
                        $($component: 0.0,)+
                    }
                }

                /// Returns `true` if any component is NaN.
                #[inline]
                pub fn has_nans(&self) -> bool {
                    $(self.$component.is_nan())||+
                }

                /// Returns the component-wise minimum of the two points.
                #[inline]
                pub fn min(&self, other: Self) -> Self {
                    Self {
                        $($component: self.$component.min(other.$component),)+
                    }
                }

                /// Returns the component-wise maximum of the two points.
                #[inline]
                pub fn max(&self, other: Self) -> Self {
                    Self {
                        $($component: self.$component.max(other.$component),)+
                    }
                }
            }

            /// Shorthand constructor
            #[inline]
            pub fn $shorthand($($component: f32),+) -> $point_type {
                // Use new() to catch NaNs
                $point_type::new($($component),+)
            }

            impl From<$point_type> for $vec_type {
                fn from(p: $point_type) -> Self {
                    Self::new($(p.$component),+)
                }
            }

            impl Add<$vec_type> for $point_type {
                type Output = Self;

                fn add(self, v: $vec_type) -> Self {
                    Self {
                        $($component: self.$component + v.$component,)+
                    }
                }
            }

            impl AddAssign<$vec_type> for $point_type {
                fn add_assign(&mut self, v: $vec_type) {
                    $(self.$component += v.$component;)+
                }
            }

            impl Sub<$vec_type> for $point_type {
                type Output = Self;

                fn sub(self, v: $vec_type) -> Self {
                    Self {
                        $($component: self.$component - v.$component,)+
                    }
                }
            }

            impl SubAssign<$vec_type> for $point_type {
                fn sub_assign(&mut self, v: $vec_type) {
                    $(self.$component -= v.$component;)+
                }
            }

            impl Sub for $point_type {
                type Output = $vec_type;

                fn sub(self, other: Self) -> $vec_type {
                    $vec_type {
                        $($component: self.$component - other.$component,)+
                    }
                }
            }

            impl AbsDiffEq for $point_type {
                type Epsilon = f32;

                fn default_epsilon() -> Self::Epsilon {
                    f32::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                    $(self.$component.abs_diff_eq(&other.$component, epsilon))&&+
                }
            }

            impl RelativeEq for $point_type {
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
impl_point!(
    Point2 Vec2 [x y] point2,
    Point3 Vec3 [x y z] point3
);

impl Index<usize> for Point3 {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point3 index {} out of bounds", i),
        }
    }
}

impl IndexMut<usize> for Point3 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Point3 index {} out of bounds", i),
        }
    }
}
