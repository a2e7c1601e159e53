//! Uniform-buffer layout of [`GradingUniforms`].
//!
//! WGSL/std140 align `vec3<f32>` to 16 bytes, so each color triple is stored
//! as a `vec4` with `w = 0`. The six scalars follow, padded to a 16-byte
//! multiple.
//!
//! ```text
//!   offset  0  lift.rgb   _
//!   offset 16  gamma.rgb  _
//!   offset 32  gain.rgb   _
//!   offset 48  offset.rgb _
//!   offset 64  contrast  pivot  saturation  hue
//!   offset 80  temperature  unsharp_mask  _  _
//! ```

use bytemuck::{Pod, Zeroable};

use crate::transform::uniforms::GradingUniforms;

/// GPU-side mirror of [`GradingUniforms`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GradingUniformsGpu {
    pub lift: [f32; 4],
    pub gamma: [f32; 4],
    pub gain: [f32; 4],
    pub offset: [f32; 4],
    pub contrast: f32,
    pub contrast_pivot: f32,
    pub saturation: f32,
    pub hue: f32,
    pub temperature: f32,
    pub unsharp_mask: f32,
    pub _pad: [f32; 2],
}

impl GradingUniformsGpu {
    /// Size of the uniform buffer in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

fn vec4(rgb: [f64; 3]) -> [f32; 4] {
    [rgb[0] as f32, rgb[1] as f32, rgb[2] as f32, 0.0]
}

impl From<&GradingUniforms> for GradingUniformsGpu {
    fn from(u: &GradingUniforms) -> Self {
        Self {
            lift: vec4(u.lift),
            gamma: vec4(u.gamma),
            gain: vec4(u.gain),
            offset: vec4(u.offset),
            contrast: u.contrast as f32,
            contrast_pivot: u.contrast_pivot as f32,
            saturation: u.saturation as f32,
            hue: u.hue as f32,
            temperature: u.temperature as f32,
            unsharp_mask: u.unsharp_mask as f32,
            _pad: [0.0; 2],
        }
    }
}
