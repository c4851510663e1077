//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    use crate::sim::SegmentShade;

    const fn rgba(r: u8, g: u8, b: u8, a: f32) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a]
    }

    pub const BACKDROP: [f32; 4] = rgba(0x0a, 0x19, 0x31, 1.0);
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    pub const SEGMENT_SLATE: [f32; 4] = rgba(0x2d, 0x40, 0x59, 1.0);
    pub const SEGMENT_STEEL: [f32; 4] = rgba(0x4a, 0x65, 0x72, 1.0);
    pub const SEGMENT_FOG: [f32; 4] = rgba(0x5b, 0x7b, 0x8a, 1.0);
    pub const SEGMENT_TEXTURE: [f32; 4] = [1.0, 1.0, 1.0, 0.1];
    pub const SEGMENT_BORDER: [f32; 4] = rgba(0x00, 0xff, 0x88, 1.0);

    pub const PLAYER_BODY: [f32; 4] = rgba(0x00, 0xff, 0x88, 1.0);
    pub const PLAYER_LEGS: [f32; 4] = rgba(0xff, 0x66, 0x00, 1.0);
    pub const PLAYER_ARMS: [f32; 4] = rgba(0x00, 0xff, 0x88, 1.0);
    pub const PLAYER_HEAD: [f32; 4] = rgba(0xff, 0xcc, 0x00, 1.0);
    pub const PLAYER_EYES: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PLAYER_GLOW: [f32; 4] = rgba(0x00, 0xff, 0x88, 0.3);

    pub fn segment(shade: SegmentShade) -> [f32; 4] {
        match shade {
            SegmentShade::Slate => SEGMENT_SLATE,
            SegmentShade::Steel => SEGMENT_STEEL,
            SegmentShade::Fog => SEGMENT_FOG,
        }
    }
}
