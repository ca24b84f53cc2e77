/// Hard-coded demo geometry
///
/// Meshes are indexed triangle lists with one RGB color per vertex, the same
/// layout the demos upload as vertex and element buffers.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
}

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and return its index
    pub fn push_vertex(&mut self, position: [f32; 3], color: [f32; 3]) -> u16 {
        let index = self.positions.len() as u16;
        self.positions.push(position);
        self.colors.push(color);
        index
    }

    pub fn push_triangle(&mut self, a: u16, b: u16, c: u16) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex indices of triangle `i`
    pub fn triangle(&self, i: usize) -> [usize; 3] {
        let base = i * 3;
        [
            self.indices[base] as usize,
            self.indices[base + 1] as usize,
            self.indices[base + 2] as usize,
        ]
    }

    /// Two triangles covering the whole viewport, drawn flat at z = 0
    pub fn colored_quad_2d() -> Self {
        let mut mesh = Self::new();

        let corners = [
            ([-1.0, -1.0], BLUE),
            ([1.0, -1.0], GREEN),
            ([1.0, 1.0], RED),
            ([-1.0, 1.0], GREEN),
            ([1.0, 1.0], RED),
            ([-1.0, -1.0], BLUE),
        ];
        for ([x, y], color) in corners {
            mesh.push_vertex([x, y, 0.0], color);
        }
        mesh.push_triangle(0, 1, 2);
        mesh.push_triangle(3, 4, 5);

        mesh
    }

    /// A single triangle with a different color at each corner
    pub fn colored_triangle() -> Self {
        let mut mesh = Self::new();
        let a = mesh.push_vertex([-1.0, -1.0, 0.0], BLUE);
        let b = mesh.push_vertex([1.0, -1.0, 0.0], GREEN);
        let c = mesh.push_vertex([1.0, 1.0, 0.0], RED);
        mesh.push_triangle(a, b, c);
        mesh
    }

    /// Unit cube spanning [-1, 1] on every axis with one color per face
    pub fn colored_cube() -> Self {
        let faces: [([[f32; 3]; 4], [f32; 3]); 6] = [
            // Back
            (
                [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
                YELLOW,
            ),
            // Front
            (
                [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
                BLUE,
            ),
            // Left
            (
                [[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0]],
                CYAN,
            ),
            // Right
            (
                [[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]],
                RED,
            ),
            // Bottom
            (
                [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, -1.0, -1.0]],
                MAGENTA,
            ),
            // Top
            (
                [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
                GREEN,
            ),
        ];

        let mut mesh = Self::new();
        for (corners, color) in faces {
            let first = mesh.vertex_count() as u16;
            for corner in corners {
                mesh.push_vertex(corner, color);
            }
            mesh.push_triangle(first, first + 1, first + 2);
            mesh.push_triangle(first, first + 2, first + 3);
        }

        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let cube = Mesh::colored_cube();
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.colors.len(), cube.positions.len());
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.vertex_count()));
    }

    #[test]
    fn test_cube_faces_are_flat_colored() {
        let cube = Mesh::colored_cube();
        for t in 0..cube.triangle_count() {
            let [a, b, c] = cube.triangle(t);
            assert_eq!(cube.colors[a], cube.colors[b]);
            assert_eq!(cube.colors[b], cube.colors[c]);
        }
    }

    #[test]
    fn test_quad_indices() {
        let quad = Mesh::colored_quad_2d();
        assert_eq!(quad.indices, vec![0, 1, 2, 3, 4, 5]);
        assert!(quad.positions.iter().all(|p| p[2] == 0.0));
    }

    #[test]
    fn test_triangle() {
        let tri = Mesh::colored_triangle();
        assert_eq!(tri.triangle_count(), 1);
        assert_eq!(tri.triangle(0), [0, 1, 2]);
    }
}
