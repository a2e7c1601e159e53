//! Bevy systems for the grading panel.
//!
//! These systems are the only place panel state changes inside the ECS.
//! UI code sends `GradingCommand`, the panel processes it, and fresh
//! uniforms go out as `UniformsUpdated` once per frame.

use bevy::prelude::*;
use tonewheel_core::glam::DVec2;
use tonewheel_core::{GradingUniformsGpu, ModifierMask, MotionRegion};

use crate::events::{GradingCommand, UniformsUpdated};
use crate::resources::{ActiveModifiers, GradingPanelState, LatestUniforms};

/// Convert a Bevy pointer position to the panel's coordinate type.
pub fn to_dvec2(v: Vec2) -> DVec2 {
    DVec2::new(f64::from(v.x), f64::from(v.y))
}

/// Convert a Bevy rectangle to a motion region.
pub fn to_motion_region(rect: Rect) -> MotionRegion {
    let size = rect.size();
    MotionRegion::new(
        f64::from(rect.min.x),
        f64::from(rect.min.y),
        f64::from(size.x),
        f64::from(size.y),
    )
}

/// Left or right variant of each modifier counts as held.
pub fn modifiers_from_keys(keys: &ButtonInput<KeyCode>) -> ModifierMask {
    let mut mask = ModifierMask::empty();
    mask.set(
        ModifierMask::ALT,
        keys.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]),
    );
    mask.set(
        ModifierMask::CTRL,
        keys.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]),
    );
    mask.set(
        ModifierMask::SHIFT,
        keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
    );
    mask
}

/// Sample modifier keys into `ActiveModifiers`.
///
/// Leaves the resource untouched when no keyboard input is registered, so
/// hosts without `InputPlugin` can set it themselves.
pub fn sample_modifiers(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut active: ResMut<ActiveModifiers>,
) {
    let Some(keys) = keys else {
        return;
    };
    let mask = modifiers_from_keys(&keys);
    if active.0 != mask {
        active.0 = mask;
    }
}

/// Process inbound grading commands from the UI.
pub fn handle_grading_commands(
    mut commands: MessageReader<GradingCommand>,
    mut state: ResMut<GradingPanelState>,
    modifiers: Res<ActiveModifiers>,
) {
    let state = &mut *state;

    for cmd in commands.read() {
        match cmd {
            GradingCommand::BeginDrag {
                wheel,
                position,
                modifiers: held,
            } => {
                let held = held.unwrap_or(modifiers.0);
                state.panel.begin_drag(*wheel, held, to_dvec2(*position));
            }
            GradingCommand::UpdateDrag {
                wheel,
                position,
                region,
            } => {
                if !state.panel.wheel(*wheel).is_dragging() {
                    tracing::warn!("UpdateDrag: {} wheel is not dragging", wheel.label());
                    continue;
                }
                state.panel.update_drag(
                    *wheel,
                    to_dvec2(*position),
                    &to_motion_region(*region),
                );
                state.dirty = true;
            }
            GradingCommand::EndDrag { wheel } => {
                state.panel.end_drag(*wheel);
            }
            GradingCommand::ResetWheel { wheel } => {
                state.panel.reset_wheel(*wheel);
                state.dirty = true;
            }
            GradingCommand::SetSlider { slider, value } => {
                state.panel.set_slider(*slider, f64::from(*value));
                state.dirty = true;
            }
            GradingCommand::SetSliderFraction { slider, fraction } => {
                state.panel.set_slider_fraction(*slider, f64::from(*fraction));
                state.dirty = true;
            }
            GradingCommand::SetTemperatureNormalized(t) => {
                state.panel.set_temperature_normalized(f64::from(*t));
                state.dirty = true;
            }
            GradingCommand::SetTemperatureMapped(v) => {
                state.panel.set_temperature_mapped(f64::from(*v));
                state.dirty = true;
            }
            GradingCommand::ResetGrade => {
                state.panel.reset_all();
                state.dirty = true;
                tracing::info!("grade reset");
            }
        }
    }
}

/// Publish uniforms when the panel changed this frame.
pub fn publish_uniforms(
    mut state: ResMut<GradingPanelState>,
    mut latest: ResMut<LatestUniforms>,
    mut updated: MessageWriter<UniformsUpdated>,
) {
    if !state.dirty {
        return;
    }
    state.dirty = false;

    let uniforms = state.panel.grading();
    latest.0 = Some(uniforms);
    updated.write(UniformsUpdated {
        uniforms,
        gpu: GradingUniformsGpu::from(&uniforms),
    });
    tracing::debug!("published grading uniforms");
}
