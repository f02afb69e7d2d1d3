// GPU-facing types; layouts must match shaders/mesh.wgsl

use crate::frame::TextureFraming;

/// One mesh vertex: displaced position plus the rest position used as UV.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

/// Texture repeat/offset applied to the UVs in the fragment stage.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FramingUniform {
    pub repeat: [f32; 2],
    pub offset: [f32; 2],
}

impl Default for FramingUniform {
    fn default() -> Self {
        Self::from(TextureFraming::IDENTITY)
    }
}

impl From<TextureFraming> for FramingUniform {
    fn from(f: TextureFraming) -> Self {
        Self {
            repeat: f.repeat.to_array(),
            offset: f.offset.to_array(),
        }
    }
}
