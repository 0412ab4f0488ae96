use super::{Canvas, Collide, Collider, Point, Vector};
use crate::error::ColliderError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A circle collider. Its center is fixed at construction as `anchor + offset`.
///
/// ```rust
/// use flat_collider::shape::{CircleCollider, Collide};
///
/// let a = CircleCollider::new([2.0, 2.0], 1.0, [0.0, 0.0]).unwrap();
/// let b = CircleCollider::new([2.0, 3.0], 1.0, [0.0, 0.0]).unwrap();
///
/// assert!(a.overlap(&b));
/// assert_eq!(a.collide(&b).to_array(), [0.0, -1.0]); // a is pushed up, away from b
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CircleCollider {
    center: Point,
    radius: f32,
}

impl CircleCollider {
    /// Creates a collider centered on `anchor + offset`.
    /// Fails if the radius is negative or not finite, or if the center is not finite.
    pub fn new(
        anchor: impl Into<Point>,
        radius: f32,
        offset: impl Into<Vector>,
    ) -> Result<Self, ColliderError> {
        if !radius.is_finite() || radius < 0.0 {
            log::debug!("rejecting circle collider with radius {}", radius);
            return Err(ColliderError::InvalidRadius(radius));
        }

        let center = anchor.into() + offset.into();
        if !center.x.is_finite() || !center.y.is_finite() {
            log::debug!("rejecting circle collider centered on {:?}", center);
            return Err(ColliderError::NonFiniteCenter {
                x: center.x,
                y: center.y,
            });
        }

        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Moves the collider, the radius is kept.
    pub fn set_center(&mut self, center: impl Into<Point>) {
        self.center = center.into();
    }

    /// Moves the collider by `v`, usually the result of [`Collide::collide`].
    pub fn translate(&mut self, v: impl Into<Vector>) {
        self.center += v.into();
    }
}

impl Default for CircleCollider {
    fn default() -> Self {
        Self {
            center: Point::origin(),
            radius: 0.0,
        }
    }
}

impl CircleCollider {
    // hypot keeps far and tiny circles out of f32 overflow and underflow
    fn distance_to(&self, other: &CircleCollider) -> (Vector, f32) {
        let d = self.center - other.center;
        (d, d.x.hypot(d.y))
    }
}

impl Collide<CircleCollider> for CircleCollider {
    fn overlap(&self, other: &CircleCollider) -> bool {
        let (_, dist) = self.distance_to(other);
        dist < self.radius + other.radius
    }

    fn collide(&self, other: &CircleCollider) -> Vector {
        let (d, dist) = self.distance_to(other);
        let sum = self.radius + other.radius;
        if dist >= sum {
            return Vector::zero();
        }

        // Coincident centers have no direction, always push along +x.
        if dist == 0.0 {
            log::trace!("coincident centers at {:?}, resolving along x", self.center);
            return Vector::new(sum, 0.0);
        }

        d / dist * (sum - dist)
    }
}

impl Collider for CircleCollider {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.circle(self.center, self.radius);
    }

    fn size(&self) -> Vector {
        Vector::new(2.0 * self.radius, 2.0 * self.radius)
    }

    fn left(&self) -> f32 {
        self.center.x - self.radius
    }

    fn right(&self) -> f32 {
        self.center.x + self.radius
    }

    fn top(&self) -> f32 {
        self.center.y - self.radius
    }

    fn bottom(&self) -> f32 {
        self.center.y + self.radius
    }
}
