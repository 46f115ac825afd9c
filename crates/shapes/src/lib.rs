//! Shapes domain module (colored geometry with per-variant formulas).
//!
//! The `Shape` trait is the abstract base: it cannot be instantiated, only
//! the concrete variants are. Geometry is immutable after construction;
//! color is not.

pub mod shape;

pub use shape::{Circle, Rectangle, Shape};
