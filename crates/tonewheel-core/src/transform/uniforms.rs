//! The flat uniform set handed to the grading shader.
//!
//! Field names serialize to the shader's uniform names so a UI bridge or a
//! name-based binder can use them directly.

use serde::{Deserialize, Serialize};

/// Every uniform the grading shader reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradingUniforms {
    #[serde(rename = "uLift")]
    pub lift: [f64; 3],
    #[serde(rename = "uGamma")]
    pub gamma: [f64; 3],
    #[serde(rename = "uGain")]
    pub gain: [f64; 3],
    #[serde(rename = "uOffset")]
    pub offset: [f64; 3],
    #[serde(rename = "uContrast")]
    pub contrast: f64,
    #[serde(rename = "uContrastPivot")]
    pub contrast_pivot: f64,
    #[serde(rename = "uSaturation")]
    pub saturation: f64,
    #[serde(rename = "uHue")]
    pub hue: f64,
    /// Mapped temperature on `[6, 4000]`.
    #[serde(rename = "uTemperature")]
    pub temperature: f64,
    #[serde(rename = "uUnsharpMask")]
    pub unsharp_mask: f64,
}

/// A single uniform value, as a GLSL-style binder sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Vec3([f32; 3]),
    Float(f32),
}

impl GradingUniforms {
    /// Number of uniforms in the set.
    pub const COUNT: usize = 10;

    /// Uniforms as `(shader name, value)` pairs, narrowed to `f32`.
    pub fn named(&self) -> [(&'static str, UniformValue); Self::COUNT] {
        let vec3 = |v: [f64; 3]| UniformValue::Vec3(v.map(|c| c as f32));
        let float = |v: f64| UniformValue::Float(v as f32);
        [
            ("uLift", vec3(self.lift)),
            ("uGamma", vec3(self.gamma)),
            ("uGain", vec3(self.gain)),
            ("uOffset", vec3(self.offset)),
            ("uContrast", float(self.contrast)),
            ("uContrastPivot", float(self.contrast_pivot)),
            ("uSaturation", float(self.saturation)),
            ("uHue", float(self.hue)),
            ("uTemperature", float(self.temperature)),
            ("uUnsharpMask", float(self.unsharp_mask)),
        ]
    }
}
