//! Pointer input primitives shared by the wheels and the host UI.

use bitflags::bitflags;
use glam::DVec2;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifier keys held when a drag gesture starts.
    ///
    /// Bit values are local to this crate; hosts translate their own key
    /// state into this set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ModifierMask: u8 {
        const ALT = 1 << 0;
        const CTRL = 1 << 1;
        const SHIFT = 1 << 2;
    }
}

/// Interactive rectangle of a wheel, in the same coordinate space as the
/// pointer positions fed to it. Drag deltas are normalized by its size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionRegion {
    /// Top-left corner.
    pub origin: DVec2,
    /// Width and height.
    pub size: DVec2,
}

impl MotionRegion {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn center(&self) -> DVec2 {
        self.origin + self.size * 0.5
    }

    /// Position of `point` relative to the region, in 0..1 per axis when inside.
    pub fn normalize(&self, point: DVec2) -> DVec2 {
        (point - self.origin) / self.size
    }

    /// Whether either side is zero, which makes drag deltas non-finite.
    pub fn is_degenerate(&self) -> bool {
        self.size.x == 0.0 || self.size.y == 0.0
    }
}
