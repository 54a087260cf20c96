//! WASM-facing entry points for the sprite shape builders.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests call the `*_internal` helpers, which return
//! Rust types and need no JS host.
//!
//! ```
//! let shape = sprite_wasm::build_ellipse_internal(1.0, 1.0, 8).unwrap();
//! assert_eq!(shape.triangle_count(), 8);
//! ```

use config::constants::DEFAULT_SIDES;
use glam::DVec2;
use sprite_mesh::{shapes, QuadrangleInput, ValidationError};
use thiserror::Error;
use wasm_bindgen::prelude::*;

mod shape_handle;

pub use shape_handle::ShapeHandle;

/// Errors raised while turning JavaScript arguments into a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// The flat point buffer did not hold exactly four `(x, y)` pairs.
    #[error("quadrangle needs 8 coordinates, got {len}")]
    InvalidPoints {
        /// Length of the rejected buffer.
        len: usize,
    },
    /// Shape parameters failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

fn to_js(err: BuildError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "sprite-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` output to the browser console.
///
/// Calling it more than once is harmless. On native targets it does nothing.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::debug!("Logger already initialized");
        }
    }
}

/// Returns the default number of sides for round shapes.
///
/// # Examples
/// ```
/// assert!(sprite_wasm::default_sides() >= 2);
/// ```
#[wasm_bindgen]
pub fn default_sides() -> u32 {
    DEFAULT_SIDES
}

// =============================================================================
// QUADRANGLE
// =============================================================================

/// Builds a quadrangle from `[x0, y0, x1, y1, x2, y2, x3, y3]`.
///
/// # Errors
/// Returns a JavaScript error if the buffer does not hold eight numbers.
#[wasm_bindgen]
pub fn build_quadrangle(points: &[f64]) -> Result<ShapeHandle, JsValue> {
    build_quadrangle_internal(points).map_err(to_js)
}

/// Host-only variant of [`build_quadrangle`].
///
/// # Examples
/// ```
/// let shape = sprite_wasm::build_quadrangle_internal(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]).unwrap();
/// assert_eq!(shape.triangle_count(), 2);
/// ```
pub fn build_quadrangle_internal(points: &[f64]) -> Result<ShapeHandle, BuildError> {
    let [x0, y0, x1, y1, x2, y2, x3, y3] = <[f64; 8]>::try_from(points)
        .map_err(|_| BuildError::InvalidPoints { len: points.len() })?;

    let input = QuadrangleInput::new(
        DVec2::new(x0, y0),
        DVec2::new(x1, y1),
        DVec2::new(x2, y2),
        DVec2::new(x3, y3),
    );
    Ok(ShapeHandle::from_shape(shapes::build_quadrangle(&input)))
}

// =============================================================================
// ROUND SHAPES
// =============================================================================

/// Builds an ellipse (a circle when both radii match).
///
/// # Errors
/// Returns a JavaScript error if `sides < 2` or either radius is zero.
#[wasm_bindgen]
pub fn build_ellipse(
    radius_horizontal: f64,
    radius_vertical: f64,
    sides: u32,
) -> Result<ShapeHandle, JsValue> {
    build_ellipse_internal(radius_horizontal, radius_vertical, sides).map_err(to_js)
}

/// Host-only variant of [`build_ellipse`].
pub fn build_ellipse_internal(
    radius_horizontal: f64,
    radius_vertical: f64,
    sides: u32,
) -> Result<ShapeHandle, BuildError> {
    let shape = shapes::build_ellipse(radius_horizontal, radius_vertical, sides)?;
    Ok(ShapeHandle::from_shape(shape))
}

/// Builds a circle whose anchor vertex is moved to `(shift_x, shift_y)`.
///
/// # Errors
/// Returns a JavaScript error if `sides < 2` or the radius is zero.
#[wasm_bindgen]
pub fn build_pointed_circle(
    radius: f64,
    sides: u32,
    shift_x: f64,
    shift_y: f64,
) -> Result<ShapeHandle, JsValue> {
    build_pointed_circle_internal(radius, sides, shift_x, shift_y).map_err(to_js)
}

/// Host-only variant of [`build_pointed_circle`].
pub fn build_pointed_circle_internal(
    radius: f64,
    sides: u32,
    shift_x: f64,
    shift_y: f64,
) -> Result<ShapeHandle, BuildError> {
    let shape = shapes::build_pointed_circle(radius, sides, DVec2::new(shift_x, shift_y))?;
    Ok(ShapeHandle::from_shape(shape))
}
