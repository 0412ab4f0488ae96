use thiserror::Error;

/// Reasons a collider cannot be built.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ColliderError {
    /// Radius was negative, NaN or infinite.
    #[error("invalid radius {0}: must be finite and non-negative")]
    InvalidRadius(f32),
    /// Anchor + offset produced a non-finite center.
    #[error("center ({x}, {y}) is not finite")]
    NonFiniteCenter { x: f32, y: f32 },
}
