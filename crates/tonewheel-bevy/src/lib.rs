//! Tonewheel Bevy Plugin — hosts the grading panel inside Bevy's ECS.
//!
//! Provides `TonewheelPlugin`, which owns a [`GradingPanel`] as a resource,
//! accepts UI input as [`GradingCommand`] messages, and publishes fresh
//! uniforms as [`UniformsUpdated`] whenever the panel changed.
//!
//! [`GradingPanel`]: tonewheel_core::GradingPanel

pub mod events;
pub mod resources;
pub mod systems;

use bevy::prelude::*;
use tonewheel_core::GradingConfig;

use events::{GradingCommand, UniformsUpdated};
use resources::{ActiveModifiers, GradingPanelState, LatestUniforms};
use systems::{handle_grading_commands, publish_uniforms, sample_modifiers};

/// Main Bevy plugin for the grading panel.
///
/// Registers resources, messages, and systems for:
/// - Sampling ALT/CTRL/SHIFT from keyboard input each frame
/// - Routing `GradingCommand` messages into the panel
/// - Publishing `UniformsUpdated` once per frame after a change
pub struct TonewheelPlugin {
    /// Config the panel is built from.
    pub config: GradingConfig,
}

impl TonewheelPlugin {
    pub fn new(config: GradingConfig) -> Self {
        Self { config }
    }
}

impl Default for TonewheelPlugin {
    /// Reads the config named by `TONEWHEEL_CONFIG`, or defaults.
    fn default() -> Self {
        Self::new(GradingConfig::from_env())
    }
}

impl Plugin for TonewheelPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<GradingCommand>()
            .add_message::<UniformsUpdated>()
            .insert_resource(GradingPanelState::new(&self.config))
            .init_resource::<ActiveModifiers>()
            .init_resource::<LatestUniforms>()
            .add_systems(PreUpdate, sample_modifiers)
            .add_systems(
                Update,
                (
                    handle_grading_commands,
                    publish_uniforms.after(handle_grading_commands),
                ),
            );
        tracing::info!("tonewheel grading panel registered");
    }
}
