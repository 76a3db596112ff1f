//! Foundation layer: math types and frame timing

pub mod math;
pub mod time;
