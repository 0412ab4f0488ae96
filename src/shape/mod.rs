mod aabb;
mod circle;

pub use aabb::*;
pub use circle::*;

pub type Point = euclid::default::Point2D<f32>;
pub type Vector = euclid::default::Vector2D<f32>;

/// Rendering surface a collider draws its debug outline on.
pub trait Canvas {
    fn circle(&mut self, center: Point, radius: f32);
}

/// Narrow-phase test between `Self` and a `T`.
pub trait Collide<T: ?Sized> {
    /// Whether the two shapes strictly overlap. Touching is not overlapping.
    fn overlap(&self, other: &T) -> bool;

    /// Displacement to add to `self` so that it no longer overlaps `other`.
    /// Zero when they don't overlap.
    fn collide(&self, other: &T) -> Vector;
}

/// Everything a generic collision system needs from a collider, whatever its shape.
///
/// The trait is object safe so colliders can be handled as `&dyn Collider`:
/// ```rust
/// use flat_collider::shape::{CircleCollider, Collider};
///
/// let a = CircleCollider::new([2.0, 2.0], 1.0, [0.0, 0.0]).unwrap();
/// let b = CircleCollider::new([3.0, 2.0], 1.0, [0.0, 0.0]).unwrap();
///
/// let colliders: Vec<&dyn Collider> = vec![&a];
/// assert!(colliders[0].overlap(&b));
/// assert_eq!(colliders[0].collide(&b).x, -1.0);
/// ```
pub trait Collider: Collide<CircleCollider> {
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Extents of the collider on both axes.
    fn size(&self) -> Vector;

    fn left(&self) -> f32;
    fn right(&self) -> f32;
    fn top(&self) -> f32;
    fn bottom(&self) -> f32;

    fn bbox(&self) -> AABB {
        AABB {
            ll: Point::new(self.left(), self.top()),
            ur: Point::new(self.right(), self.bottom()),
        }
    }
}
