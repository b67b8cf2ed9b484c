use glam::Vec3;

use crate::types::Vertex;

pub const FRONT_COLOR: [f32; 3] = [0.1, 0.8, 0.2];
pub const BACK_COLOR: [f32; 3] = [0.85, 0.15, 0.1];
pub const BOTTOM_COLOR: [f32; 3] = [0.05, 0.05, 0.05];
pub const BODY_COLOR: [f32; 3] = [0.6, 0.6, 0.65];
pub const WHEEL_COLOR: [f32; 3] = [0.15, 0.15, 0.18];
const GRID_COLOR: [f32; 3] = [0.35, 0.35, 0.35];

pub const GRID_SIZE: f32 = 10.0;
pub const GRID_DIVISIONS: usize = 10;
pub const AXIS_LENGTH: f32 = 3.0;

/// Geometry shown for the rigid body being replayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ProxyModel {
    #[default]
    Wheelchair,
    Motorcycle,
}

// Outward normal plus two in-plane axes with u x v = normal, so quads wind counter-clockwise
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

/// Colors the proxy so its heading reads at a glance: +Y front, -Y back, -Z bottom
pub fn heading_colors(normal: Vec3) -> [f32; 3] {
    if normal == Vec3::Y {
        FRONT_COLOR
    } else if normal == Vec3::NEG_Y {
        BACK_COLOR
    } else if normal == Vec3::NEG_Z {
        BOTTOM_COLOR
    } else {
        BODY_COLOR
    }
}

/// Creates a box at position with size as a triangle list, coloring each face by its normal
pub fn box_at<F>(position: Vec3, size: Vec3, face_color: F) -> Vec<Vertex>
where
    F: Fn(Vec3) -> [f32; 3],
{
    let half = size * 0.5;
    FACES
        .iter()
        .flat_map(|&(n, u, v)| {
            let center = position + n * half.dot(n.abs());
            let du = u * half.dot(u.abs());
            let dv = v * half.dot(v.abs());
            let corners = [
                center - du - dv,
                center + du - dv,
                center + du + dv,
                center - du + dv,
            ];
            let color = face_color(n);
            [0, 1, 2, 0, 2, 3].map(|i| Vertex::new(corners[i].to_array(), color))
        })
        .collect()
}

fn solid(color: [f32; 3]) -> impl Fn(Vec3) -> [f32; 3] {
    move |_| color
}

impl ProxyModel {
    /// Triangle list centered on the origin, facing +Y with +Z up
    pub fn vertices(self) -> Vec<Vertex> {
        let parts: Vec<Vec<Vertex>> = match self {
            ProxyModel::Wheelchair => vec![
                box_at(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.15), heading_colors),
                box_at(Vec3::new(0.0, -0.45, 0.5), Vec3::new(1.0, 0.1, 0.9), heading_colors),
                box_at(Vec3::new(-0.55, -0.1, -0.1), Vec3::new(0.08, 0.9, 0.9), solid(WHEEL_COLOR)),
                box_at(Vec3::new(0.55, -0.1, -0.1), Vec3::new(0.08, 0.9, 0.9), solid(WHEEL_COLOR)),
                box_at(Vec3::new(0.0, 0.6, -0.35), Vec3::new(0.8, 0.2, 0.05), heading_colors),
            ],
            ProxyModel::Motorcycle => vec![
                box_at(Vec3::new(0.0, 0.0, 0.1), Vec3::new(0.4, 1.8, 0.4), heading_colors),
                box_at(Vec3::new(0.0, 0.9, -0.3), Vec3::new(0.12, 0.7, 0.7), solid(WHEEL_COLOR)),
                box_at(Vec3::new(0.0, -0.9, -0.3), Vec3::new(0.12, 0.7, 0.7), solid(WHEEL_COLOR)),
                box_at(Vec3::new(0.0, 0.75, 0.45), Vec3::new(0.9, 0.08, 0.08), solid(WHEEL_COLOR)),
                box_at(Vec3::new(0.0, -0.3, 0.35), Vec3::new(0.35, 0.8, 0.1), heading_colors),
            ],
        };
        parts.concat()
    }
}

/// Ground grid in the XY plane as a line list
pub fn grid_lines(size: f32, divisions: usize) -> Vec<Vertex> {
    let half = size * 0.5;
    let step = size / divisions as f32;
    (0..=divisions)
        .flat_map(|i| {
            let offset = -half + i as f32 * step;
            [
                Vertex::new([offset, -half, 0.0], GRID_COLOR),
                Vertex::new([offset, half, 0.0], GRID_COLOR),
                Vertex::new([-half, offset, 0.0], GRID_COLOR),
                Vertex::new([half, offset, 0.0], GRID_COLOR),
            ]
        })
        .collect()
}

/// X, Y, Z axes from the origin in red, green, blue
pub fn axis_lines(length: f32) -> Vec<Vertex> {
    [
        (Vec3::X, [1.0, 0.0, 0.0]),
        (Vec3::Y, [0.0, 1.0, 0.0]),
        (Vec3::Z, [0.0, 0.0, 1.0]),
    ]
    .iter()
    .flat_map(|&(axis, color)| {
        [
            Vertex::new([0.0; 3], color),
            Vertex::new((axis * length).to_array(), color),
        ]
    })
    .collect()
}

/// Static line geometry drawn under the proxy
pub fn scene_lines() -> Vec<Vertex> {
    let mut lines = grid_lines(GRID_SIZE, GRID_DIVISIONS);
    lines.extend(axis_lines(AXIS_LENGTH));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_has_two_triangles_per_face() {
        let vertices = box_at(Vec3::ZERO, Vec3::ONE, heading_colors);
        assert_eq!(vertices.len(), 36);
    }

    #[test]
    fn front_face_is_green_and_faces_plus_y() {
        let vertices = box_at(Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0), heading_colors);
        let front: Vec<_> = vertices.iter().filter(|v| v.color == FRONT_COLOR).collect();
        assert_eq!(front.len(), 6);
        assert!(front.iter().all(|v| v.position[1] == 2.0));
    }

    #[test]
    fn faces_wind_counter_clockwise_from_outside() {
        let vertices = box_at(Vec3::ZERO, Vec3::ONE, heading_colors);
        for tri in vertices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|v| Vec3::from_array(v.position));
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn grid_lies_flat() {
        let lines = grid_lines(GRID_SIZE, GRID_DIVISIONS);
        assert_eq!(lines.len(), (GRID_DIVISIONS + 1) * 4);
        assert!(lines.iter().all(|v| v.position[2] == 0.0));
    }

    #[test]
    fn both_models_build() {
        assert_eq!(ProxyModel::Wheelchair.vertices().len(), 36 * 5);
        assert_eq!(ProxyModel::Motorcycle.vertices().len(), 36 * 5);
    }
}
