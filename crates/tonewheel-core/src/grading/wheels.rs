//! Lift / Gamma / Gain / Offset wheel state and drag interaction.
//!
//! A wheel stores five channels. The 2D trackball moves blue (x) and red
//! (y); green is never driven by a gesture. Modifiers held at press time pick
//! which channel a drag edits:
//!
//! ```text
//!   ALT    y     = y0     + dx × 0.1
//!   CTRL   white = white0 + dx × 0.02
//!   (none) blue  = blue0  + dx × 0.1
//!          red   = red0   − dy × 0.1
//! ```
//!
//! `dx`/`dy` are pointer deltas since the press, divided by the motion region
//! size. Values are always recomputed from the snapshot taken at press time,
//! so long drags do not drift.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::gain::{Channel, ChannelView};
use crate::input::{ModifierMask, MotionRegion};
use crate::observers::Observers;

/// Identifies which grading wheel a state belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WheelKind {
    Lift,
    Gamma,
    Gain,
    Offset,
}

impl WheelKind {
    pub const ALL: [WheelKind; 4] = [
        WheelKind::Lift,
        WheelKind::Gamma,
        WheelKind::Gain,
        WheelKind::Offset,
    ];

    /// Human-readable caption shown above the wheel.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lift => "Lift",
            Self::Gamma => "Gamma",
            Self::Gain => "Gain",
            Self::Offset => "Offset",
        }
    }

    /// Offset has no additive Y term, so its Y readout is hidden.
    pub const fn shows_y(self) -> bool {
        !matches!(self, Self::Offset)
    }
}

/// The five scalar channels of one wheel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelChannels {
    pub y: f64,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub white: f64,
}

impl WheelChannels {
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Y => self.y,
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::White => self.white,
        }
    }

    /// Apply `view` to every channel.
    pub fn viewed(&self, view: &impl ChannelView) -> Self {
        Self {
            y: view.read(Channel::Y, self.y),
            red: view.read(Channel::Red, self.red),
            green: view.read(Channel::Green, self.green),
            blue: view.read(Channel::Blue, self.blue),
            white: view.read(Channel::White, self.white),
        }
    }
}

/// Per-mode drag gains and the opt-in variants of the shift behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragBehavior {
    /// ALT drag: Y change per region width.
    pub y_gain: f64,
    /// CTRL drag: white change per region width.
    pub white_gain: f64,
    /// Plain drag: red/blue change per region size.
    pub track_gain: f64,
    /// With ALT or CTRL held, SHIFT multiplies the step by ten.
    pub coarse_with_shift: bool,
    /// SHIFT places the puck at the absolute pointer position instead of
    /// falling through to the relative update.
    pub shift_places_directly: bool,
}

impl Default for DragBehavior {
    fn default() -> Self {
        Self {
            y_gain: 0.1,
            white_gain: 0.02,
            track_gain: 0.1,
            coarse_with_shift: false,
            shift_places_directly: false,
        }
    }
}

/// Snapshot captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub modifiers: ModifierMask,
    pub origin: DVec2,
    pub channels: WheelChannels,
}

/// Channel values after the gain view, as shown in the per-wheel labels.
///
/// Every value already has white added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WheelReadout {
    pub y: f64,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// State of one color wheel.
#[derive(Debug, Default)]
pub struct ColorWheelState {
    channels: WheelChannels,
    anchor: Option<DragAnchor>,
    behavior: DragBehavior,
    observers: Observers<WheelChannels>,
}

impl ColorWheelState {
    pub fn new(behavior: DragBehavior) -> Self {
        Self {
            channels: WheelChannels::default(),
            anchor: None,
            behavior,
            observers: Observers::new(),
        }
    }

    pub fn channels(&self) -> WheelChannels {
        self.channels
    }

    pub fn channels_viewed(&self, view: &impl ChannelView) -> WheelChannels {
        self.channels.viewed(view)
    }

    pub fn behavior(&self) -> DragBehavior {
        self.behavior
    }

    pub fn observers_mut(&mut self) -> &mut Observers<WheelChannels> {
        &mut self.observers
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<&DragAnchor> {
        self.anchor.as_ref()
    }

    /// Zero every channel.
    pub fn reset(&mut self) {
        self.channels = WheelChannels::default();
        tracing::debug!("wheel reset");
        self.emit();
    }

    /// Overwrite all channels, e.g. to restore a snapshot.
    pub fn set_channels(&mut self, channels: WheelChannels) {
        self.channels = channels;
        self.emit();
    }

    /// Start a gesture. Replaces any previous anchor.
    pub fn begin_drag(&mut self, modifiers: ModifierMask, origin: DVec2) {
        tracing::debug!(?modifiers, x = origin.x, y = origin.y, "wheel drag begin");
        self.anchor = Some(DragAnchor {
            modifiers,
            origin,
            channels: self.channels,
        });
    }

    /// Apply the pointer at `current` relative to the active anchor.
    ///
    /// Without an anchor the call is ignored.
    pub fn update_drag(&mut self, current: DVec2, region: &MotionRegion) {
        let Some(anchor) = self.anchor else {
            tracing::warn!("wheel drag update without an active drag; ignored");
            return;
        };
        if region.is_degenerate() {
            tracing::warn!(?region, "wheel motion region has zero size");
        }

        let delta = (current - anchor.origin) / region.size;
        let mods = anchor.modifiers;
        let start = anchor.channels;
        let behavior = self.behavior;
        let coarse = if behavior.coarse_with_shift && mods.contains(ModifierMask::SHIFT) {
            10.0
        } else {
            1.0
        };

        if mods.contains(ModifierMask::ALT) {
            self.channels.y = start.y + delta.x * behavior.y_gain * coarse;
            tracing::trace!(y = self.channels.y, "wheel drag: Y");
            self.emit();
            return;
        }

        if mods.contains(ModifierMask::CTRL) {
            self.channels.white = start.white + delta.x * behavior.white_gain * coarse;
            tracing::trace!(white = self.channels.white, "wheel drag: white");
            self.emit();
            return;
        }

        if mods.contains(ModifierMask::SHIFT) {
            let placed = region.normalize(current);
            if behavior.shift_places_directly {
                self.channels.blue = placed.x * 2.0 - 1.0;
                self.channels.red = 1.0 - placed.y * 2.0;
                tracing::trace!(red = self.channels.red, blue = self.channels.blue, "wheel drag: placed");
                self.emit();
                return;
            }
            // Superseded by the relative update below.
            self.channels.blue = placed.x * 2.0 - 1.0;
            self.channels.red = placed.y * 2.0 - 1.0;
        }

        self.channels.blue = start.blue + delta.x * behavior.track_gain;
        self.channels.red = start.red - delta.y * behavior.track_gain;
        tracing::trace!(red = self.channels.red, blue = self.channels.blue, "wheel drag: track");
        self.emit();
    }

    /// Finish the gesture and drop the anchor.
    pub fn end_drag(&mut self) {
        if self.anchor.take().is_some() {
            tracing::debug!("wheel drag end");
        }
    }

    /// Label values: each channel plus white, after `view`.
    pub fn readout(&self, view: &impl ChannelView) -> WheelReadout {
        let v = self.channels.viewed(view);
        WheelReadout {
            y: v.y + v.white,
            red: v.red + v.white,
            green: v.green + v.white,
            blue: v.blue + v.white,
        }
    }

    /// Offset of the trackball puck from the region center.
    ///
    /// Red/blue beyond the unit circle are pulled back onto its edge.
    pub fn puck_offset(&self, region: &MotionRegion) -> DVec2 {
        let (blue, red) = (self.channels.blue, self.channels.red);
        let excess = (blue * blue + red * red).max(1.0).sqrt();
        DVec2::new(
            blue / excess * 0.5 * region.width(),
            -red / excess * 0.5 * region.height(),
        )
    }

    /// Signed sweep of the outer white ring, starting at 90°.
    pub fn ring_sweep_degrees(&self) -> f64 {
        self.channels.white.clamp(-1.0, 1.0) * -180.0
    }

    fn emit(&mut self) {
        let channels = self.channels;
        self.observers.notify(&channels);
    }
}
