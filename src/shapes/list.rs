use std::sync::Arc;

use super::Shape;
use crate::{
    hit::Hit,
    math::{Bounds3, Ray},
};

/// A flat aggregate of [Shape]s.
#[derive(Default)]
pub struct ShapeList {
    shapes: Vec<Arc<dyn Shape>>,
}

impl ShapeList {
    /// Creates an empty `ShapeList`.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds a [Shape] to this `ShapeList`.
    pub fn add(&mut self, shape: Arc<dyn Shape>) {
        self.shapes.push(shape);
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

impl Shape for ShapeList {
    fn intersect(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        // Linear scan, shrinking the valid range to the closest hit so far
        let mut closest_t = t_max;
        let mut closest_hit = None;
        for shape in &self.shapes {
            if let Some(hit) = shape.intersect(ray, t_min, closest_t) {
                closest_t = hit.t;
                closest_hit = Some(hit);
            }
        }
        closest_hit
    }

    fn world_bound(&self) -> Option<Bounds3> {
        let mut bounds: Option<Bounds3> = None;
        for shape in &self.shapes {
            // An unbounded child leaves the whole aggregate unbounded
            let bb = shape.world_bound()?;
            bounds = Some(match bounds {
                Some(acc) => acc.union_b(bb),
                None => bb,
            });
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_abs_diff_eq;

    use super::ShapeList;
    use crate::{
        materials::{Material, Matte},
        math::{point3, vec3, Ray, Spectrum},
        shapes::{Shape, Sphere},
        textures::ConstantTexture,
    };

    fn test_material() -> Arc<dyn Material> {
        Arc::new(Matte::new(Arc::new(ConstantTexture::new(Spectrum::ones()))))
    }

    #[test]
    fn closest_hit() {
        // The nearer sphere wins regardless of insertion order
        for flip in [false, true] {
            let mut list = ShapeList::new();
            let near = Arc::new(Sphere::new(point3(0.0, 0.0, 0.0), 0.5, test_material()));
            let far = Arc::new(Sphere::new(point3(0.0, 0.0, -5.0), 0.5, test_material()));
            if flip {
                list.add(far.clone());
                list.add(near.clone());
            } else {
                list.add(near.clone());
                list.add(far.clone());
            }

            let ray = Ray::new(point3(0.0, 0.0, 2.0), vec3(0.0, 0.0, -1.0));
            let hit = list.intersect(ray, 0.001, f32::INFINITY).unwrap();
            assert_abs_diff_eq!(hit.t, 1.5);
        }
    }

    #[test]
    fn empty() {
        let list = ShapeList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        let ray = Ray::new(point3(0.0, 0.0, 2.0), vec3(0.0, 0.0, -1.0));
        assert!(list.intersect(ray, 0.001, f32::INFINITY).is_none());
        assert!(list.world_bound().is_none());
    }

    #[test]
    fn world_bound() {
        let mut list = ShapeList::new();
        list.add(Arc::new(Sphere::new(
            point3(-2.0, 0.0, 0.0),
            1.0,
            test_material(),
        )));
        list.add(Arc::new(Sphere::new(
            point3(3.0, 1.0, 0.0),
            1.0,
            test_material(),
        )));

        let bb = list.world_bound().unwrap();
        assert_eq!(bb.p_min, point3(-3.0, -1.0, -1.0));
        assert_eq!(bb.p_max, point3(4.0, 2.0, 1.0));
    }
}
