//! Reduction of the control state into shader uniforms, and GPU packing.

pub mod gpu;
pub mod reducer;
pub mod uniforms;
