//!
//! flat_collider is a small narrow-phase collision crate: circle colliders that can tell whether
//! they overlap and how far they must move to stop overlapping.
//!
//! Colliders are exposed through the object safe [`Collider`] trait so a collision system can
//! handle them as `&dyn Collider`, whatever their concrete shape.
//!
//! ```rust
//! use flat_collider::{CircleCollider, Collide, Collider};
//!
//! let mut a = CircleCollider::new([2.0, 2.0], 1.0, [0.0, 0.0])?;
//! let b = CircleCollider::new([3.0, 2.0], 1.0, [0.0, 0.0])?;
//!
//! assert!(a.overlap(&b));
//! a.translate(a.collide(&b)); // Push a out of b
//! assert!(!a.overlap(&b));
//! assert_eq!(a.left(), 0.0);
//! # Ok::<(), flat_collider::ColliderError>(())
//! ```
//!

pub mod error;
pub mod shape;

pub use error::ColliderError;
pub use shape::{CircleCollider, Collide, Collider};
