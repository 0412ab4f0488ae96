use super::{Point, Vector};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB {
    /// Lower left of the AABB
    pub ll: Point,
    /// Upper right of the AABB
    pub ur: Point,
}

impl AABB {
    pub fn new(p1: impl Into<Point>, p2: impl Into<Point>) -> Self {
        let (p1, p2) = (p1.into(), p2.into());
        AABB {
            ll: p1.min(p2),
            ur: p1.max(p2),
        }
    }

    pub fn contains(&self, p: impl Into<Point>) -> bool {
        let p = p.into();
        p.x >= self.ll.x && p.y >= self.ll.y && p.x <= self.ur.x && p.y <= self.ur.y
    }

    /// Inclusive: boxes sharing an edge intersect.
    /// Compares doubled center distance against summed extents on each axis.
    pub fn intersects(&self, b: &AABB) -> bool {
        let a = self;
        let x =
            f32::abs((a.ll.x + a.ur.x) - (b.ll.x + b.ur.x)) <= (a.ur.x - a.ll.x + b.ur.x - b.ll.x);
        let y =
            f32::abs((a.ll.y + a.ur.y) - (b.ll.y + b.ur.y)) <= (a.ur.y - a.ll.y + b.ur.y - b.ll.y);

        x && y
    }

    pub fn size(&self) -> Vector {
        self.ur - self.ll
    }
}
