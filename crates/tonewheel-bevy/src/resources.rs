//! Bevy resources for the grading panel.

use bevy::prelude::*;
use tonewheel_core::{GradingConfig, GradingPanel, GradingUniforms, ModifierMask};

/// Bevy resource holding the grading panel.
///
/// This is the single source of truth for grading state within the ECS.
/// Mutate it through `GradingCommand` so that `dirty` stays accurate.
#[derive(Resource)]
pub struct GradingPanelState {
    /// The panel.
    pub panel: GradingPanel,
    /// Whether the panel changed since uniforms were last published.
    pub dirty: bool,
}

impl GradingPanelState {
    pub fn new(config: &GradingConfig) -> Self {
        Self {
            panel: GradingPanel::new(config),
            dirty: true,
        }
    }
}

impl Default for GradingPanelState {
    fn default() -> Self {
        Self::new(&GradingConfig::default())
    }
}

/// Modifier keys held this frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct ActiveModifiers(pub ModifierMask);

/// Most recently published uniforms, for systems that poll instead of
/// reading `UniformsUpdated`.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LatestUniforms(pub Option<GradingUniforms>);
