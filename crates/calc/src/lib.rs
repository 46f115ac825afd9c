//! Checked arithmetic helpers.

pub mod calculator;

pub use calculator::{add, divide, is_even, multiply, subtract};
