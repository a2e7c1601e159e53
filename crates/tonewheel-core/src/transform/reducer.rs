//! Folds wheel and slider state into [`GradingUniforms`].
//!
//! # Formula
//! For each channel `c` in `{R, G, B}`:
//! ```text
//!   lift[c]   = bwfade(lift.c + lift.y, lift.white)
//!   gamma[c]  = bwfade(gamma.c + gamma.y, gamma.white)
//!   gain[c]   = bwfade(G(c, gain.c) + G(y, gain.y), G(white, gain.white))
//!   offset[c] = bwfade(offset.c, offset.white)
//! ```
//! where `G` is the gain view. Offset has no Y term.
//!
//! `bwfade` blends a value toward white (`+1`) for positive weights and
//! toward black (`−1`) for negative weights:
//! ```text
//!   bwfade(a, w) = a + (sign(w) − a) × |w|        (sign(0) = +1)
//! ```

use crate::grading::gain::{Channel, ChannelView, GainChannelView, IdentityView};
use crate::grading::sliders::ScalarParameter;
use crate::grading::temperature::TemperatureParameter;
use crate::grading::wheels::ColorWheelState;
use crate::transform::uniforms::GradingUniforms;

/// Black/white fade of `a` by weight `w`.
pub fn bwfade(a: f64, w: f64) -> f64 {
    let (target, w) = if w < 0.0 { (-1.0, -w) } else { (1.0, w) };
    a + (target - a) * w
}

/// Borrowed view of every input to the uniform reduction.
///
/// Reading never mutates the sources; build one whenever uniforms are needed.
#[derive(Debug, Clone, Copy)]
pub struct GradingReducer<'a> {
    pub lift: &'a ColorWheelState,
    pub gamma: &'a ColorWheelState,
    pub gain: &'a ColorWheelState,
    pub offset: &'a ColorWheelState,
    pub gain_view: &'a GainChannelView,
    pub contrast: &'a ScalarParameter,
    pub pivot: &'a ScalarParameter,
    pub saturation: &'a ScalarParameter,
    pub hue: &'a ScalarParameter,
    pub unsharp_mask: &'a ScalarParameter,
    pub temperature: &'a TemperatureParameter,
}

impl GradingReducer<'_> {
    pub fn compute(&self) -> GradingUniforms {
        GradingUniforms {
            lift: fold_with_y(self.lift, &IdentityView),
            gamma: fold_with_y(self.gamma, &IdentityView),
            gain: fold_with_y(self.gain, self.gain_view),
            offset: fold_without_y(self.offset),
            contrast: self.contrast.value(),
            contrast_pivot: self.pivot.value(),
            saturation: self.saturation.value(),
            hue: self.hue.value(),
            temperature: self.temperature.value(),
            unsharp_mask: self.unsharp_mask.value(),
        }
    }
}

fn fold_with_y(wheel: &ColorWheelState, view: &impl ChannelView) -> [f64; 3] {
    let v = wheel.channels_viewed(view);
    Channel::RGB.map(|c| bwfade(v.get(c) + v.y, v.white))
}

fn fold_without_y(wheel: &ColorWheelState) -> [f64; 3] {
    let v = wheel.channels();
    Channel::RGB.map(|c| bwfade(v.get(c), v.white))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::wheels::WheelChannels;

    const EPSILON: f64 = 1e-12;

    struct Fixture {
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
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                lift: ColorWheelState::default(),
                gamma: ColorWheelState::default(),
                gain: ColorWheelState::default(),
                offset: ColorWheelState::default(),
                gain_view: GainChannelView::default(),
                contrast: ScalarParameter::new("Contrast", 0.0, 2.0, 1.0),
                pivot: ScalarParameter::new("Pivot", 0.0, 1.0, 0.435),
                saturation: ScalarParameter::new("Saturation", 0.0, 2.0, 1.0),
                hue: ScalarParameter::new("Hue shift", -6.0, 6.0, 0.0),
                unsharp_mask: ScalarParameter::new("Unsharp mask", -1.0, 1.0, 0.0),
                temperature: TemperatureParameter::default(),
            }
        }

        fn compute(&self) -> GradingUniforms {
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
            .compute()
        }
    }

    fn channels(y: f64, red: f64, blue: f64, white: f64) -> WheelChannels {
        WheelChannels {
            y,
            red,
            green: 0.0,
            blue,
            white,
        }
    }

    #[test]
    fn test_bwfade_boundaries() {
        for a in [-2.0, -0.3, 0.0, 0.42, 1.7] {
            assert_eq!(bwfade(a, 0.0), a);
            assert!((bwfade(a, 1.0) - 1.0).abs() < EPSILON);
            assert!((bwfade(a, -1.0) + 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_bwfade_half_weight_is_midpoint() {
        assert!((bwfade(0.2, 0.5) - 0.6).abs() < EPSILON);
        assert!((bwfade(0.2, -0.5) + 0.4).abs() < EPSILON);
    }

    #[test]
    fn test_neutral_state_reduces_to_identity_uniforms() {
        let u = Fixture::new().compute();
        assert_eq!(u.lift, [0.0; 3]);
        assert_eq!(u.gamma, [0.0; 3]);
        assert_eq!(u.gain, [0.0; 3]);
        assert_eq!(u.offset, [0.0; 3]);
        assert_eq!(u.contrast, 1.0);
        assert_eq!(u.contrast_pivot, 0.435);
        assert_eq!(u.saturation, 1.0);
        assert_eq!(u.hue, 0.0);
        assert_eq!(u.temperature, 6.0);
        assert_eq!(u.unsharp_mask, 0.0);
    }

    #[test]
    fn test_lift_adds_y_then_fades() {
        let mut f = Fixture::new();
        f.lift.set_channels(channels(0.1, 0.2, -0.1, 0.5));
        let u = f.compute();
        assert!((u.lift[0] - bwfade(0.3, 0.5)).abs() < EPSILON);
        assert!((u.lift[1] - bwfade(0.1, 0.5)).abs() < EPSILON);
        assert!((u.lift[2] - bwfade(0.0, 0.5)).abs() < EPSILON);
    }

    #[test]
    fn test_gamma_uses_its_own_wheel() {
        let mut f = Fixture::new();
        f.gamma.set_channels(channels(0.0, 0.4, 0.0, -0.25));
        let u = f.compute();
        assert_eq!(u.lift, [0.0; 3]);
        assert!((u.gamma[0] - bwfade(0.4, -0.25)).abs() < EPSILON);
    }

    #[test]
    fn test_gain_reads_through_gain_view() {
        let mut f = Fixture::new();
        f.gain.set_channels(channels(0.02, 0.1, -0.1, 0.01));
        let u = f.compute();
        // y 0.02 → 0.3, red 0.1 → 0.2, blue −0.1 stays, white 0.01 → 0.15
        assert!((u.gain[0] - bwfade(0.2 + 0.3, 0.15)).abs() < EPSILON);
        assert!((u.gain[1] - bwfade(0.3, 0.15)).abs() < EPSILON);
        assert!((u.gain[2] - bwfade(-0.1 + 0.3, 0.15)).abs() < EPSILON);
    }

    #[test]
    fn test_offset_ignores_y() {
        let mut f = Fixture::new();
        f.offset.set_channels(channels(0.9, 0.1, 0.0, 0.0));
        let u = f.compute();
        assert_eq!(u.offset, [0.1, 0.0, 0.0]);
    }

    #[test]
    fn test_scalars_pass_through() {
        let mut f = Fixture::new();
        f.contrast.set_value(1.5);
        f.pivot.set_value(0.2);
        f.saturation.set_value(0.0);
        f.hue.set_value(-3.0);
        f.unsharp_mask.set_value(0.4);
        f.temperature.set_mapped(66.0);
        let u = f.compute();
        assert_eq!(
            (u.contrast, u.contrast_pivot, u.saturation, u.hue, u.unsharp_mask),
            (1.5, 0.2, 0.0, -3.0, 0.4)
        );
        assert!((u.temperature - 66.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_does_not_mutate_sources() {
        let mut f = Fixture::new();
        f.gain.set_channels(channels(0.1, 0.1, 0.1, 0.1));
        let before = f.gain.channels();
        let first = f.compute();
        let second = f.compute();
        assert_eq!(first, second);
        assert_eq!(f.gain.channels(), before);
    }
}
