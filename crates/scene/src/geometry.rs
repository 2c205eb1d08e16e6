use glam::{Vec2, Vec3};

/// A subdivided plane in its local XY plane, facing +Z.
///
/// Vertices are laid out row by row from the top edge (`+y`) down, so the
/// UV origin sits at the bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
    pub segments_x: u32,
    pub segments_y: u32,
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32, segments_x: u32, segments_y: u32) -> Self {
        let sx = segments_x.max(1);
        let sy = segments_y.max(1);
        let cols = sx + 1;

        let seg_w = width / sx as f32;
        let seg_h = height / sy as f32;
        let half_w = width / 2.0;
        let half_h = height / 2.0;

        let vertex_count = ((sx + 1) * (sy + 1)) as usize;
        let mut positions = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);
        for iy in 0..=sy {
            let y = iy as f32 * seg_h - half_h;
            for ix in 0..=sx {
                let x = ix as f32 * seg_w - half_w;
                positions.push(Vec3::new(x, -y, 0.0));
                uvs.push(Vec2::new(
                    ix as f32 / sx as f32,
                    1.0 - iy as f32 / sy as f32,
                ));
            }
        }

        let mut indices = Vec::with_capacity((sx * sy * 6) as usize);
        for iy in 0..sy {
            for ix in 0..sx {
                let a = ix + cols * iy;
                let b = ix + cols * (iy + 1);
                let c = (ix + 1) + cols * (iy + 1);
                let d = (ix + 1) + cols * iy;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        tracing::debug!(
            "plane geometry {width}x{height}, {sx}x{sy} segments, {} vertices",
            positions.len()
        );

        Self {
            width,
            height,
            segments_x: sx,
            segments_y: sy,
            positions,
            uvs,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
