//! Read-time channel transforms.
//!
//! All four wheels store their channels the same way. The gain wheel differs
//! only in how those raw values are read: positive values are stretched so
//! the same drag distance reaches much brighter highlights, negative values
//! pass through untouched.
//!
//! ```text
//!   view(c, v) = v          if v ≤ 0
//!              = v × k(c)   otherwise
//!
//!   k(y) = k(white) = 15,   k(red) = k(green) = k(blue) = 2
//! ```

use serde::{Deserialize, Serialize};

/// One scalar component of a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Y,
    Red,
    Green,
    Blue,
    White,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Y,
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::White,
    ];

    /// The color channels, in uniform order.
    pub const RGB: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Short label used in readouts.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Y => "Y",
            Self::Red => "R",
            Self::Green => "G",
            Self::Blue => "B",
            Self::White => "W",
        }
    }
}

/// Strategy for reading a stored channel value.
pub trait ChannelView {
    fn read(&self, channel: Channel, raw: f64) -> f64;
}

/// Reads channels as stored. Used by lift, gamma, and offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IdentityView;

impl ChannelView for IdentityView {
    fn read(&self, _channel: Channel, raw: f64) -> f64 {
        raw
    }
}

/// Positive-side multipliers of the gain view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GainFactors {
    /// Applied to Y and white.
    pub luma: f64,
    /// Applied to red, green, and blue.
    pub chroma: f64,
}

impl Default for GainFactors {
    fn default() -> Self {
        Self {
            luma: 15.0,
            chroma: 2.0,
        }
    }
}

/// The asymmetric gain rescaling.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GainChannelView {
    factors: GainFactors,
}

impl GainChannelView {
    pub const fn new(factors: GainFactors) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> GainFactors {
        self.factors
    }

    pub fn gain_factor(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Y | Channel::White => self.factors.luma,
            Channel::Red | Channel::Green | Channel::Blue => self.factors.chroma,
        }
    }

    /// Inverse of [`ChannelView::read`]: maps a gain-space value back to the
    /// raw value that produces it.
    pub fn unread(&self, channel: Channel, viewed: f64) -> f64 {
        if viewed <= 0.0 {
            viewed
        } else {
            viewed / self.gain_factor(channel)
        }
    }
}

impl ChannelView for GainChannelView {
    fn read(&self, channel: Channel, raw: f64) -> f64 {
        if raw <= 0.0 {
            raw
        } else {
            raw * self.gain_factor(channel)
        }
    }
}
