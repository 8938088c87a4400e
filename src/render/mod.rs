//! Rasterization primitives.
//!
//! Provides the drawing vocabulary the icon renderer composes: filled
//! circles, rings, and straight or stroked line segments.
//!
//! # Algorithms
//!
//! - **Midpoint Circle**: filled circle rendering via horizontal scan spans
//! - **Bresenham's Line**: fast non-antialiased line drawing
//! - **Scanline Annulus**: gap-free ring fills for circle outlines
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod primitives;

pub use primitives::{draw_circle, draw_line, draw_ring, draw_stroked_line};
