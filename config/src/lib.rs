//! # Config Crate
//!
//! Centralized configuration constants for the procedural sprite mesh
//! pipeline. Angles, side-count limits, default shape parameters and mesh
//! attribute literals are defined here so the geometry kernel and its adapters
//! agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{FULL_TURN, DEFAULT_SIDES};
//!
//! // Angular step between rim vertices of a default fan
//! let delta = FULL_TURN / DEFAULT_SIDES as f64;
//! assert!(delta > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Dependency-Free**: Plain `std` only

pub mod constants;
