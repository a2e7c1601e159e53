//! Bounded scalar sliders (contrast, pivot, saturation, hue, unsharp mask).

use crate::observers::Observers;

/// A captioned scalar clamped to `[minimum, maximum]` on every write.
#[derive(Debug)]
pub struct ScalarParameter {
    caption: String,
    minimum: f64,
    maximum: f64,
    default: f64,
    value: f64,
    observers: Observers<f64>,
}

impl ScalarParameter {
    /// # Panics
    /// If `minimum > maximum` or either bound is NaN.
    pub fn new(caption: impl Into<String>, minimum: f64, maximum: f64, initial: f64) -> Self {
        assert!(
            minimum <= maximum,
            "slider minimum {minimum} must not exceed maximum {maximum}"
        );
        let value = initial.clamp(minimum, maximum);
        Self {
            caption: caption.into(),
            minimum,
            maximum,
            default: value,
            value,
            observers: Observers::new(),
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Value the slider was built with, after clamping.
    pub fn default_value(&self) -> f64 {
        self.default
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Observers receive the clamped value.
    pub fn observers_mut(&mut self) -> &mut Observers<f64> {
        &mut self.observers
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value.clamp(self.minimum, self.maximum);
        tracing::trace!(slider = %self.caption, value = self.value, "slider set");
        let current = self.value;
        self.observers.notify(&current);
    }

    /// Set from a pointer position given as a fraction of the slider width.
    pub fn set_fraction(&mut self, fraction: f64) {
        self.set_value(fraction * (self.maximum - self.minimum) + self.minimum);
    }

    /// Filled share of the slider track. Zero for an empty range.
    pub fn fill_fraction(&self) -> f64 {
        let span = self.maximum - self.minimum;
        if span == 0.0 {
            return 0.0;
        }
        (self.value - self.minimum) / span
    }

    pub fn reset(&mut self) {
        self.set_value(self.default);
    }

    pub fn label(&self) -> String {
        format!("{}: {:.2}", self.caption, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_set_value_clamps_into_range() {
        let mut slider = ScalarParameter::new("Contrast", 0.0, 2.0, 1.0);
        for (input, expected) in [(-3.0, 0.0), (0.7, 0.7), (2.0, 2.0), (9.5, 2.0)] {
            slider.set_value(input);
            assert_eq!(slider.value(), expected);
        }
    }

    #[test]
    fn test_initial_value_is_clamped() {
        let slider = ScalarParameter::new("Hue shift", -6.0, 6.0, 12.0);
        assert_eq!(slider.value(), 6.0);
        assert_eq!(slider.default_value(), 6.0);
    }

    #[test]
    #[should_panic(expected = "must not exceed")]
    fn test_inverted_bounds_panic() {
        let _ = ScalarParameter::new("Broken", 1.0, 0.0, 0.5);
    }

    #[test]
    fn test_fraction_maps_across_range() {
        let mut slider = ScalarParameter::new("Unsharp mask", -1.0, 1.0, 0.0);
        slider.set_fraction(0.75);
        assert!((slider.value() - 0.5).abs() < EPSILON);
        assert!((slider.fill_fraction() - 0.75).abs() < EPSILON);
        slider.set_fraction(1.4);
        assert_eq!(slider.value(), 1.0);
    }

    #[test]
    fn test_reset_restores_initial_value() {
        let mut slider = ScalarParameter::new("Pivot", 0.0, 1.0, 0.435);
        slider.set_value(0.9);
        slider.reset();
        assert_eq!(slider.value(), 0.435);
    }

    #[test]
    fn test_label_formats_two_decimals() {
        let slider = ScalarParameter::new("Saturation", 0.0, 2.0, 1.0);
        assert_eq!(slider.label(), "Saturation: 1.00");
    }

    #[test]
    fn test_set_value_notifies_with_clamped_value() {
        use std::sync::{Arc, Mutex};
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut slider = ScalarParameter::new("Contrast", 0.0, 2.0, 1.0);
        let sink = Arc::clone(&seen);
        slider
            .observers_mut()
            .subscribe(move |value| sink.lock().unwrap().push(*value));
        slider.set_value(5.0);
        slider.set_value(0.25);
        assert_eq!(*seen.lock().unwrap(), vec![2.0, 0.25]);
    }

    #[test]
    fn test_degenerate_range_is_fixed() {
        let mut slider = ScalarParameter::new("Fixed", 0.5, 0.5, 0.0);
        slider.set_value(3.0);
        assert_eq!(slider.value(), 0.5);
        assert_eq!(slider.fill_fraction(), 0.0);
    }
}
