//! Tonewheel Core — parameter model for primary color grading.
//!
//! Turns pointer gestures and modifier keys into lift/gamma/gain/offset wheel
//! channels and bounded slider values, then reduces everything into the flat
//! uniform set a grading shader consumes. No rendering or framework
//! dependencies.

pub mod config;
pub mod error;
pub mod grading;
pub mod input;
pub mod observers;
pub mod transform;

// Re-exports for convenience.
pub use config::GradingConfig;
pub use error::ConfigError;
pub use glam;
pub use grading::gain::{Channel, ChannelView, GainChannelView, IdentityView};
pub use grading::panel::{GradingChange, GradingPanel, SliderKind};
pub use grading::sliders::ScalarParameter;
pub use grading::temperature::{TemperatureParameter, color_from_kelvin};
pub use grading::wheels::{ColorWheelState, WheelChannels, WheelKind};
pub use input::{ModifierMask, MotionRegion};
pub use transform::gpu::GradingUniformsGpu;
pub use transform::reducer::{GradingReducer, bwfade};
pub use transform::uniforms::{GradingUniforms, UniformValue};
