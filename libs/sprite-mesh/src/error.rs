//! # Shape Errors
//!
//! Error types for shape parameter validation.
//!
//! Validation is the only failure path in the kernel: once parameters pass,
//! every build produces geometry, degenerate or not. Negative radii are not
//! errors; builders flip their sign before use.

use thiserror::Error;

/// Errors reported when shape parameters cannot produce a mesh.
///
/// ## Example
///
/// ```rust
/// use sprite_mesh::{build_ellipse, ValidationError};
///
/// match build_ellipse(1.0, 1.0, 1) {
///     Err(ValidationError::SidesTooFew { sides }) => assert_eq!(sides, 1),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Fewer than two sides were requested for a fan shape.
    #[error("sides count can't be less than two: {sides}")]
    SidesTooFew {
        /// The rejected side count.
        sides: u32,
    },

    /// A radius was exactly zero.
    #[error("radius can't be equal to zero")]
    ZeroRadius,
}

/// Result type alias for shape builds.
pub type ShapeResult<T> = Result<T, ValidationError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let sides = ValidationError::SidesTooFew { sides: 1 };
        assert!(sides.to_string().contains("less than two"));
        assert!(sides.to_string().contains('1'));

        assert!(ValidationError::ZeroRadius.to_string().contains("zero"));
    }

    /// Test error types are Send + Sync so results can cross thread boundaries.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }
}
