//! White-balance temperature slider.
//!
//! The slider stores a normalized position `t ∈ [0, 1]` and exposes a
//! Kelvin-like value on `[6, 4000]` (hundreds of Kelvin, so 66 ≈ 6600K).
//! The mapping first stretches the middle of the slider, then pushes the
//! result through a sixth power so most of the travel lands on the
//! photographic range:
//!
//! ```text
//!   u = t − 0.5
//!   s = −0.5 if u < 0 else 0.5          (u = 0 takes the positive branch)
//!   w = |2u|² × s + 0.5
//!   mapped(t) = w⁶ × (4000 − 6) + 6
//! ```
//!
//! [`unmapped`] is the exact algebraic inverse.

use palette::Srgb;

use crate::observers::Observers;

/// Lower end of the mapped scale.
pub const MAPPED_MIN: f64 = 6.0;
/// Upper end of the mapped scale.
pub const MAPPED_MAX: f64 = 4000.0;

const STRETCH: f64 = 2.0;
const POWER: f64 = 6.0;

/// Half-sign used by both directions of the mapping. Zero is positive.
fn half_sign(u: f64) -> f64 {
    if u < 0.0 { -0.5 } else { 0.5 }
}

/// Normalized slider position to mapped temperature.
pub fn mapped(t: f64) -> f64 {
    let u = t - 0.5;
    let w = (u + u).abs().powf(STRETCH) * half_sign(u) + 0.5;
    w.powf(POWER) * (MAPPED_MAX - MAPPED_MIN) + MAPPED_MIN
}

/// Mapped temperature to normalized slider position.
///
/// Values below [`MAPPED_MIN`] have no real sixth root and yield NaN.
pub fn unmapped(value: f64) -> f64 {
    let w = ((value - MAPPED_MIN) / (MAPPED_MAX - MAPPED_MIN)).powf(1.0 / POWER);
    let u = w - 0.5;
    (u + u).abs().powf(1.0 / STRETCH) * half_sign(u) + 0.5
}

/// Approximate display color of a temperature given in hundreds of Kelvin.
///
/// Tanner Helland's curve fit. Each channel is truncated to an integer before
/// being clamped to `0..=255`; non-finite intermediates land on 0.
pub fn color_from_kelvin(temperature: f64) -> Srgb<u8> {
    fn channel(value: f64) -> u8 {
        (value as i32).clamp(0, 255) as u8
    }

    if temperature <= 66.0 {
        let g = channel(99.4708025861 * temperature.ln() - 161.1195681661);
        let b = if temperature >= 19.0 {
            channel(138.5177312231 * (temperature - 10.0).ln() - 305.0447927307)
        } else {
            0
        };
        return Srgb::new(255, g, b);
    }

    let r = channel(329.698727446 * (temperature - 60.0).powf(-0.1332047592));
    let g = channel(288.1221695283 * (temperature - 60.0).powf(-0.0755148492));
    Srgb::new(r, g, 255)
}

/// Slider holding a normalized position and reporting a mapped temperature.
#[derive(Debug, Default)]
pub struct TemperatureParameter {
    normalized: f64,
    observers: Observers<f64>,
}

impl TemperatureParameter {
    /// Start at a normalized position, clamped to `[0, 1]`.
    pub fn new(normalized: f64) -> Self {
        Self {
            normalized: normalized.clamp(0.0, 1.0),
            observers: Observers::new(),
        }
    }

    /// Start at a mapped temperature.
    pub fn from_mapped(value: f64) -> Self {
        Self {
            normalized: unmapped(value),
            observers: Observers::new(),
        }
    }

    /// Observers receive the mapped value.
    pub fn observers_mut(&mut self) -> &mut Observers<f64> {
        &mut self.observers
    }

    pub fn normalized(&self) -> f64 {
        self.normalized
    }

    /// Current mapped temperature.
    pub fn value(&self) -> f64 {
        mapped(self.normalized)
    }

    pub fn set_normalized(&mut self, t: f64) {
        self.normalized = t.clamp(0.0, 1.0);
        let value = self.value();
        tracing::trace!(normalized = self.normalized, value, "temperature set");
        self.observers.notify(&value);
    }

    /// Store the position that maps to `value`.
    ///
    /// `value` is not range-checked; outside `[6, 4000]` the stored position
    /// leaves `[0, 1]` or becomes NaN.
    pub fn set_mapped(&mut self, value: f64) {
        self.normalized = unmapped(value);
        if !(0.0..=1.0).contains(&self.normalized) {
            tracing::warn!(value, normalized = self.normalized, "temperature outside mapped range");
        }
        self.observers.notify(&value);
    }

    /// Pointer position as a fraction of the slider width.
    pub fn set_fraction(&mut self, fraction: f64) {
        self.set_normalized(fraction);
    }

    /// Display color of the current value.
    pub fn color(&self) -> Srgb<u8> {
        color_from_kelvin(self.value())
    }

    /// Gradient stops filling the slider up to the current position.
    ///
    /// Returns `steps + 1` pairs of (offset in 0..1, color).
    pub fn gradient_stops(&self, steps: usize) -> Vec<(f64, Srgb<u8>)> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| {
                let at = i as f64 / steps as f64;
                (at, color_from_kelvin(mapped(self.normalized * at)))
            })
            .collect()
    }

    pub fn label(&self) -> String {
        format!("White balance: {:.2}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mapped_endpoints() {
        assert_relative_eq!(mapped(0.0), MAPPED_MIN);
        assert_relative_eq!(mapped(1.0), MAPPED_MAX);
        assert_relative_eq!(mapped(0.5), 0.5_f64.powi(6) * 3994.0 + 6.0);
    }

    #[test]
    fn test_mapped_is_monotonic_on_unit_interval() {
        let mut previous = mapped(0.0);
        for i in 1..=200 {
            let next = mapped(i as f64 / 200.0);
            assert!(next > previous, "not increasing at step {i}");
            previous = next;
        }
    }

    #[test]
    fn test_round_trip_over_mapped_range() {
        let mut v = MAPPED_MIN;
        while v <= MAPPED_MAX {
            assert_relative_eq!(mapped(unmapped(v)), v, max_relative = 1e-9);
            v += 7.3;
        }
        assert_relative_eq!(mapped(unmapped(MAPPED_MAX)), MAPPED_MAX, max_relative = 1e-9);
    }

    #[test]
    fn test_midpoint_maps_back_to_center() {
        // Rounding can land just below 0.5, where the square root amplifies it.
        assert_relative_eq!(unmapped(mapped(0.5)), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_set_normalized_clamps() {
        let mut temperature = TemperatureParameter::default();
        temperature.set_normalized(1.7);
        assert_eq!(temperature.normalized(), 1.0);
        temperature.set_normalized(-0.2);
        assert_eq!(temperature.normalized(), 0.0);
        assert_relative_eq!(temperature.value(), MAPPED_MIN);
    }

    #[test]
    fn test_set_mapped_round_trips_value() {
        let mut temperature = TemperatureParameter::default();
        temperature.set_mapped(66.0);
        assert_relative_eq!(temperature.value(), 66.0, max_relative = 1e-9);
    }

    #[test]
    fn test_set_mapped_does_not_reject_out_of_range() {
        let mut temperature = TemperatureParameter::default();
        temperature.set_mapped(9000.0);
        assert!(temperature.normalized() > 1.0);
        temperature.set_mapped(0.0);
        assert!(temperature.normalized().is_nan());
    }

    #[test]
    fn test_observers_receive_mapped_value() {
        use std::sync::{Arc, Mutex};
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut temperature = TemperatureParameter::default();
        let sink = Arc::clone(&seen);
        temperature
            .observers_mut()
            .subscribe(move |value| sink.lock().unwrap().push(*value));
        temperature.set_normalized(1.0);
        temperature.set_mapped(120.0);
        assert_eq!(*seen.lock().unwrap(), vec![MAPPED_MAX, 120.0]);
    }

    #[test]
    fn test_kelvin_warm_and_cool_ends() {
        assert_eq!(color_from_kelvin(10.0), Srgb::new(255, 67, 0));
        let daylight = color_from_kelvin(65.0);
        assert_eq!(daylight.red, 255);
        assert!(daylight.green > 240);
        let cool = color_from_kelvin(200.0);
        assert_eq!(cool.blue, 255);
        assert!(cool.red < cool.green);
    }

    #[test]
    fn test_kelvin_is_continuous_at_seam() {
        let below = color_from_kelvin(65.999);
        let above = color_from_kelvin(66.001);
        for (a, b) in [
            (below.red, above.red),
            (below.green, above.green),
            (below.blue, above.blue),
        ] {
            assert!(a.abs_diff(b) <= 8, "seam jump {a} vs {b}");
        }
    }

    #[test]
    fn test_kelvin_never_panics_on_garbage() {
        for t in [f64::NAN, -5.0, 0.0, 60.0, f64::INFINITY] {
            let _ = color_from_kelvin(t);
        }
        assert_eq!(color_from_kelvin(0.0), Srgb::new(255, 0, 0));
    }

    #[test]
    fn test_gradient_stops_span_current_position() {
        let mut temperature = TemperatureParameter::default();
        temperature.set_normalized(1.0);
        let stops = temperature.gradient_stops(20);
        assert_eq!(stops.len(), 21);
        assert_eq!(stops[0].0, 0.0);
        assert_eq!(stops[20].0, 1.0);
        assert_eq!(stops[0].1, color_from_kelvin(MAPPED_MIN));
        assert_eq!(stops[20].1, temperature.color());
    }
}
