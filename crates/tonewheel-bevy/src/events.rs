//! Bevy messages into and out of the grading panel.

use bevy::prelude::*;
use tonewheel_core::{GradingUniforms, GradingUniformsGpu, ModifierMask, SliderKind, WheelKind};

/// UI input routed to the panel.
///
/// Positions and regions are in the same space (typically logical window
/// pixels); the panel only uses their ratios.
#[derive(Message, Debug, Clone)]
pub enum GradingCommand {
    /// Pointer pressed on a wheel.
    BeginDrag {
        wheel: WheelKind,
        position: Vec2,
        /// Held modifiers. `None` uses the keyboard state sampled this frame.
        modifiers: Option<ModifierMask>,
    },
    /// Pointer moved while pressed.
    UpdateDrag {
        wheel: WheelKind,
        position: Vec2,
        /// The wheel's interactive rectangle.
        region: Rect,
    },
    /// Pointer released or drag cancelled.
    EndDrag { wheel: WheelKind },
    /// Zero one wheel.
    ResetWheel { wheel: WheelKind },
    /// Set a slider to an absolute value (clamped).
    SetSlider { slider: SliderKind, value: f32 },
    /// Set a slider from a pointer fraction across its track.
    SetSliderFraction { slider: SliderKind, fraction: f32 },
    /// Set the temperature slider position in `[0, 1]`.
    SetTemperatureNormalized(f32),
    /// Set the temperature by mapped value on `[6, 4000]`.
    SetTemperatureMapped(f32),
    /// Reset every wheel and slider.
    ResetGrade,
}

/// Fired once per frame when the panel changed.
#[derive(Message, Debug, Clone)]
pub struct UniformsUpdated {
    /// Full-precision uniforms.
    pub uniforms: GradingUniforms,
    /// Same values packed for a uniform buffer.
    pub gpu: GradingUniformsGpu,
}
