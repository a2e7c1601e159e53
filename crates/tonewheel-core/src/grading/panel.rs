//! The full primary grading panel: four wheels, five sliders, temperature.
//!
//! The panel is the single owner of the control state. Hosts mutate it only
//! through the routing methods below, so every change fires the child's own
//! observers followed by one panel-level [`GradingChange`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::gain::{GainChannelView, IdentityView};
use super::sliders::ScalarParameter;
use super::temperature::TemperatureParameter;
use super::wheels::{ColorWheelState, WheelChannels, WheelKind, WheelReadout};
use crate::config::{GradingConfig, SliderRange};
use crate::input::{ModifierMask, MotionRegion};
use crate::observers::Observers;
use crate::transform::reducer::GradingReducer;
use crate::transform::uniforms::GradingUniforms;

/// Identifies one of the scalar sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SliderKind {
    Contrast,
    Pivot,
    Saturation,
    Hue,
    UnsharpMask,
}

impl SliderKind {
    pub const ALL: [SliderKind; 5] = [
        SliderKind::Contrast,
        SliderKind::Pivot,
        SliderKind::Saturation,
        SliderKind::Hue,
        SliderKind::UnsharpMask,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Contrast => "Contrast",
            Self::Pivot => "Pivot",
            Self::Saturation => "Saturation",
            Self::Hue => "Hue shift",
            Self::UnsharpMask => "Unsharp mask",
        }
    }
}

/// What changed on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradingChange {
    Wheel(WheelKind),
    Slider(SliderKind),
    Temperature,
}

/// Owner of all primary grading controls.
#[derive(Debug)]
pub struct GradingPanel {
    lift: ColorWheelState,
    gamma: ColorWheelState,
    gain: ColorWheelState,
    offset: ColorWheelState,
    gain_view: GainChannelView,
    contrast: ScalarParameter,
    pivot: ScalarParameter,
    saturation: ScalarParameter,
    hue: ScalarParameter,
    unsharp_mask: ScalarParameter,
    temperature: TemperatureParameter,
    observers: Observers<GradingChange>,
}

impl Default for GradingPanel {
    fn default() -> Self {
        Self::new(&GradingConfig::default())
    }
}

impl GradingPanel {
    /// Build a panel from a config.
    ///
    /// # Panics
    /// If a slider range is inverted. [`GradingConfig::validate`] rejects
    /// those, so validated configs never panic.
    pub fn new(config: &GradingConfig) -> Self {
        let slider = |kind: SliderKind, range: SliderRange| {
            ScalarParameter::new(kind.label(), range.min, range.max, range.default)
        };
        let s = &config.sliders;
        Self {
            lift: ColorWheelState::new(config.drag),
            gamma: ColorWheelState::new(config.drag),
            gain: ColorWheelState::new(config.drag),
            offset: ColorWheelState::new(config.drag),
            gain_view: GainChannelView::new(config.gain),
            contrast: slider(SliderKind::Contrast, s.contrast),
            pivot: slider(SliderKind::Pivot, s.pivot),
            saturation: slider(SliderKind::Saturation, s.saturation),
            hue: slider(SliderKind::Hue, s.hue),
            unsharp_mask: slider(SliderKind::UnsharpMask, s.unsharp_mask),
            temperature: TemperatureParameter::new(config.temperature.initial_normalized),
            observers: Observers::new(),
        }
    }

    // ── Read access ─────────────────────────────────────────────────────

    pub fn wheel(&self, kind: WheelKind) -> &ColorWheelState {
        match kind {
            WheelKind::Lift => &self.lift,
            WheelKind::Gamma => &self.gamma,
            WheelKind::Gain => &self.gain,
            WheelKind::Offset => &self.offset,
        }
    }

    pub fn slider(&self, kind: SliderKind) -> &ScalarParameter {
        match kind {
            SliderKind::Contrast => &self.contrast,
            SliderKind::Pivot => &self.pivot,
            SliderKind::Saturation => &self.saturation,
            SliderKind::Hue => &self.hue,
            SliderKind::UnsharpMask => &self.unsharp_mask,
        }
    }

    pub fn temperature(&self) -> &TemperatureParameter {
        &self.temperature
    }

    pub fn gain_view(&self) -> &GainChannelView {
        &self.gain_view
    }

    /// Channels as the reducer sees them: gain-scaled for the gain wheel.
    pub fn wheel_channels(&self, kind: WheelKind) -> WheelChannels {
        match kind {
            WheelKind::Gain => self.gain.channels_viewed(&self.gain_view),
            other => self.wheel(other).channels(),
        }
    }

    /// Label values of a wheel. `None` for Y on wheels that hide it.
    pub fn readout(&self, kind: WheelKind) -> (Option<f64>, WheelReadout) {
        let readout = match kind {
            WheelKind::Gain => self.gain.readout(&self.gain_view),
            other => self.wheel(other).readout(&IdentityView),
        };
        (kind.shows_y().then_some(readout.y), readout)
    }

    // ── Observers ───────────────────────────────────────────────────────

    /// Panel-level observers, fired after every routed mutation.
    pub fn observers_mut(&mut self) -> &mut Observers<GradingChange> {
        &mut self.observers
    }

    /// Per-wheel observers, fired before the panel-level notification.
    pub fn wheel_observers_mut(&mut self, kind: WheelKind) -> &mut Observers<WheelChannels> {
        self.wheel_mut(kind).observers_mut()
    }

    pub fn slider_observers_mut(&mut self, kind: SliderKind) -> &mut Observers<f64> {
        self.slider_mut(kind).observers_mut()
    }

    pub fn temperature_observers_mut(&mut self) -> &mut Observers<f64> {
        self.temperature.observers_mut()
    }

    // ── Wheel input ─────────────────────────────────────────────────────

    pub fn begin_drag(&mut self, kind: WheelKind, modifiers: ModifierMask, origin: DVec2) {
        self.wheel_mut(kind).begin_drag(modifiers, origin);
    }

    pub fn update_drag(&mut self, kind: WheelKind, current: DVec2, region: &MotionRegion) {
        let wheel = self.wheel_mut(kind);
        if !wheel.is_dragging() {
            tracing::warn!(wheel = kind.label(), "drag update without an active drag; ignored");
            return;
        }
        wheel.update_drag(current, region);
        self.emit(GradingChange::Wheel(kind));
    }

    pub fn end_drag(&mut self, kind: WheelKind) {
        self.wheel_mut(kind).end_drag();
    }

    pub fn reset_wheel(&mut self, kind: WheelKind) {
        self.wheel_mut(kind).reset();
        self.emit(GradingChange::Wheel(kind));
    }

    /// Set a wheel's raw channels directly.
    pub fn set_wheel_channels(&mut self, kind: WheelKind, channels: WheelChannels) {
        self.wheel_mut(kind).set_channels(channels);
        self.emit(GradingChange::Wheel(kind));
    }

    // ── Slider input ────────────────────────────────────────────────────

    pub fn set_slider(&mut self, kind: SliderKind, value: f64) {
        self.slider_mut(kind).set_value(value);
        self.emit(GradingChange::Slider(kind));
    }

    pub fn set_slider_fraction(&mut self, kind: SliderKind, fraction: f64) {
        self.slider_mut(kind).set_fraction(fraction);
        self.emit(GradingChange::Slider(kind));
    }

    pub fn set_temperature_normalized(&mut self, t: f64) {
        self.temperature.set_normalized(t);
        self.emit(GradingChange::Temperature);
    }

    pub fn set_temperature_mapped(&mut self, value: f64) {
        self.temperature.set_mapped(value);
        self.emit(GradingChange::Temperature);
    }

    /// Zero every wheel and return every slider to its initial value.
    ///
    /// The temperature is left alone.
    pub fn reset_all(&mut self) {
        for kind in WheelKind::ALL {
            self.reset_wheel(kind);
        }
        for kind in SliderKind::ALL {
            self.slider_mut(kind).reset();
            self.emit(GradingChange::Slider(kind));
        }
        tracing::debug!("grading panel reset");
    }

    // ── Output ──────────────────────────────────────────────────────────

    pub fn reducer(&self) -> GradingReducer<'_> {
        GradingReducer {
            lift: &self.lift,
            gamma: &self.gamma,
            gain: &self.gain,
            offset: &self.offset,
            gain_view: &self.gain_view,
            contrast: &self.contrast,
            pivot: &self.pivot,
            saturation: &self.saturation,
            hue: &self.hue,
            unsharp_mask: &self.unsharp_mask,
            temperature: &self.temperature,
        }
    }

    /// Current uniform set.
    pub fn grading(&self) -> GradingUniforms {
        self.reducer().compute()
    }

    fn wheel_mut(&mut self, kind: WheelKind) -> &mut ColorWheelState {
        match kind {
            WheelKind::Lift => &mut self.lift,
            WheelKind::Gamma => &mut self.gamma,
            WheelKind::Gain => &mut self.gain,
            WheelKind::Offset => &mut self.offset,
        }
    }

    fn slider_mut(&mut self, kind: SliderKind) -> &mut ScalarParameter {
        match kind {
            SliderKind::Contrast => &mut self.contrast,
            SliderKind::Pivot => &mut self.pivot,
            SliderKind::Saturation => &mut self.saturation,
            SliderKind::Hue => &mut self.hue,
            SliderKind::UnsharpMask => &mut self.unsharp_mask,
        }
    }

    fn emit(&mut self, change: GradingChange) {
        self.observers.notify(&change);
    }
}
