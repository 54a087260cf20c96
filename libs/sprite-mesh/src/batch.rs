//! # Batch Building
//!
//! Builds many shapes at once on the rayon thread pool. Builders share no
//! state, so each item runs independently and one bad parameter set never
//! affects its neighbours.

use crate::error::ShapeResult;
use crate::shapes::{ShapeMesh, ShapeParams};
use rayon::prelude::*;

/// Builds every shape in `params` in parallel.
///
/// Results come back in input order, one per entry.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::{build_all, EllipseParams, ShapeParams};
///
/// let params = [
///     ShapeParams::from(EllipseParams::circle(1.0, 8)),
///     ShapeParams::from(EllipseParams::circle(1.0, 1)),
/// ];
/// let results = build_all(&params);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn build_all(params: &[ShapeParams]) -> Vec<ShapeResult<ShapeMesh>> {
    let results: Vec<_> = params.par_iter().map(ShapeParams::build).collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    log::debug!("Batch: built {} shape(s), {failed} failed", results.len() - failed);

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::shapes::{EllipseParams, PointedCircleParams, QuadrangleInput};
    use glam::DVec2;

    #[test]
    fn test_empty_batch() {
        assert!(build_all(&[]).is_empty());
    }

    #[test]
    fn test_results_keep_input_order() {
        let params: Vec<ShapeParams> = (2..40u32)
            .map(|sides| EllipseParams::circle(1.0, sides).into())
            .collect();
        let results = build_all(&params);

        assert_eq!(results.len(), params.len());
        for (sides, result) in (2..40usize).zip(&results) {
            let shape = result.as_ref().unwrap();
            assert_eq!(shape.mesh.triangle_count(), sides);
        }
    }

    #[test]
    fn test_failures_stay_isolated() {
        let params = [
            ShapeParams::from(PointedCircleParams::new(1.0, 8, DVec2::new(3.0, 0.0))),
            ShapeParams::from(EllipseParams::new(0.0, 1.0, 8)),
            ShapeParams::from(QuadrangleInput::from([DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y])),
            ShapeParams::from(PointedCircleParams::new(1.0, 0, DVec2::ZERO)),
        ];
        let results = build_all(&params);

        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(ValidationError::ZeroRadius));
        assert!(results[2].is_ok());
        assert_eq!(results[3], Err(ValidationError::SidesTooFew { sides: 0 }));
    }

    #[test]
    fn test_batch_matches_sequential_builds() {
        let params = [
            ShapeParams::from(EllipseParams::new(2.0, 0.5, 13)),
            ShapeParams::from(PointedCircleParams::new(0.7, 9, DVec2::new(-1.0, 2.0))),
        ];
        let results = build_all(&params);
        for (p, r) in params.iter().zip(results) {
            assert_eq!(r, p.build());
        }
    }
}
