//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in design-space pixels
//! (origin top-left, y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (x2, y2) = (x + w, y + h);
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x2, y, color),
        Vertex::new(x, y2, color),
        Vertex::new(x, y2, color),
        Vertex::new(x2, y, color),
        Vertex::new(x2, y2, color),
    ]
}

/// Generate vertices for a rectangle outline with the stroke centered on the edge
pub fn rect_outline(
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    thickness: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let half = thickness / 2.0;
    let mut vertices = Vec::with_capacity(24);
    // Top and bottom span the full outer width
    vertices.extend(rect(x - half, y - half, w + thickness, thickness, color));
    vertices.extend(rect(x - half, y + h - half, w + thickness, thickness, color));
    // Sides fill the gap between them
    vertices.extend(rect(x - half, y + half, thickness, h - thickness, color));
    vertices.extend(rect(x + w - half, y + half, thickness, h - thickness, color));
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let v = rect(10.0, 20.0, 30.0, 40.0, [1.0; 4]);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_outline_bounds() {
        let v = rect_outline(0.0, 0.0, 200.0, 100.0, 2.0, [1.0; 4]);
        assert_eq!(v.len(), 24);
        assert!(v.iter().all(|v| v.position[0] >= -1.0 && v.position[0] <= 201.0));
        assert!(v.iter().all(|v| v.position[1] >= -1.0 && v.position[1] <= 101.0));
    }

    #[test]
    fn test_circle_radius() {
        let v = circle(Vec2::new(5.0, 5.0), 3.0, [1.0; 4], 12);
        assert_eq!(v.len(), 36);
        for vertex in &v {
            let d = Vec2::from(vertex.position).distance(Vec2::new(5.0, 5.0));
            assert!(d < 3.0 + 1e-4);
        }
    }
}
