use std::{cmp::Ordering, sync::Arc};

use rand::Rng;

use crate::{
    hit::Hit,
    math::{Bounds3, Ray},
    shapes::Shape,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Primitives_and_Intersection_Acceleration/Bounding_Volume_Hierarchies.html

/// A node of a bounding volume hierarchy over a set of [Shape]s.
///
/// The tree is built once at scene construction and immutable afterwards.
pub struct BvhNode {
    left: Arc<dyn Shape>,
    right: Arc<dyn Shape>,
    bounds: Bounds3,
}

impl BvhNode {
    /// Builds a new hierarchy over `shapes`.
    ///
    /// Fails if `shapes` is empty or contains an unbounded [Shape].
    pub fn new(mut shapes: Vec<Arc<dyn Shape>>, rng: &mut impl Rng) -> Result<Self, String> {
        if shapes.is_empty() {
            return Err("Cannot build a BVH over an empty shape set".into());
        }
        Self::build(&mut shapes, rng)
    }

    fn build(shapes: &mut [Arc<dyn Shape>], rng: &mut impl Rng) -> Result<Self, String> {
        // Splitting along a random axis is enough to keep sibling bounds from
        // degenerating on axis-aligned scene layouts
        let axis = rng.gen_range(0..3usize);
        let comparator = |a: &Arc<dyn Shape>, b: &Arc<dyn Shape>| -> Ordering {
            bound_min(a, axis)
                .partial_cmp(&bound_min(b, axis))
                .unwrap_or(Ordering::Equal)
        };

        let (left, right): (Arc<dyn Shape>, Arc<dyn Shape>) = match shapes.len() {
            // A lone shape goes in both slots and gets tested twice
            1 => (shapes[0].clone(), shapes[0].clone()),
            2 => {
                if comparator(&shapes[0], &shapes[1]) == Ordering::Less {
                    (shapes[0].clone(), shapes[1].clone())
                } else {
                    (shapes[1].clone(), shapes[0].clone())
                }
            }
            len => {
                shapes.sort_unstable_by(comparator);

                // Median split by index keeps the tree depth logarithmic
                // regardless of the spatial distribution
                let (lower, upper) = shapes.split_at_mut(len / 2);
                (
                    Arc::new(Self::build(lower, rng)?),
                    Arc::new(Self::build(upper, rng)?),
                )
            }
        };

        let bounds = match (left.world_bound(), right.world_bound()) {
            (Some(lb), Some(rb)) => lb.union_b(rb),
            _ => return Err("Shape without a world bound in BVH construction".into()),
        };

        Ok(Self {
            left,
            right,
            bounds,
        })
    }
}

// Sort key for the split: the minimum bound coordinate along the chosen axis.
// An unbounded shape sorts arbitrarily and fails the build at its leaf node.
fn bound_min(shape: &Arc<dyn Shape>, axis: usize) -> f32 {
    shape
        .world_bound()
        .map_or(f32::NAN, |bb| bb.p_min[axis])
}

impl Shape for BvhNode {
    fn intersect(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        if !self.bounds.intersect(ray, t_min, t_max) {
            return None;
        }

        // A left hit tightens the range for the right subtree, pruning its
        // children that cannot contain a closer hit
        let left_hit = self.left.intersect(ray, t_min, t_max);
        let right_max = left_hit.as_ref().map_or(t_max, |hit| hit.t);
        let right_hit = self.right.intersect(ray, t_min, right_max);

        right_hit.or(left_hit)
    }

    fn world_bound(&self) -> Option<Bounds3> {
        Some(self.bounds)
    }
}
