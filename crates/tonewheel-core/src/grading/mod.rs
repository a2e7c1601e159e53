//! Grading controls and the panel that owns them.

pub mod gain;
pub mod panel;
pub mod sliders;
pub mod temperature;
pub mod wheels;
