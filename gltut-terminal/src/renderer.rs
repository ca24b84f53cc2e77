/// ASCII rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use gltut_core::{Matrix4, Mesh};
use nalgebra::{Vector3, Vector4};
use std::io::Write;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// A vertex after projection: cell coordinates plus NDC depth
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScreenVertex {
    x: f32,
    y: f32,
    depth: f32,
}

/// ASCII renderer that converts meshes to colored terminal characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.char_buffer.fill(' ');
        self.color_buffer.fill(Color::Reset);
    }

    #[cfg(test)]
    fn cell(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    pub fn render_mesh(
        &mut self,
        mesh: &Mesh,
        projection: &Matrix4,
        view: &Matrix4,
        model: &Matrix4,
    ) {
        let model_view = view * model;
        let mvp = projection * model_view;

        for t in 0..mesh.triangle_count() {
            let corners = mesh.triangle(t);

            let mut screen = [ScreenVertex {
                x: 0.0,
                y: 0.0,
                depth: 0.0,
            }; 3];
            let mut eye = [Vector3::zeros(); 3];
            let mut visible = true;
            for (i, &v) in corners.iter().enumerate() {
                let [x, y, z] = mesh.positions[v];
                let p = Vector4::new(x, y, z, 1.0);
                eye[i] = (model_view * p).xyz();
                match self.project(&(mvp * p)) {
                    Some(s) => screen[i] = s,
                    None => {
                        visible = false;
                        break;
                    }
                }
            }
            if !visible {
                continue;
            }

            let brightness = facing_brightness(&eye);
            let character = shade_char(brightness);
            let color = shade_color(
                [
                    mesh.colors[corners[0]],
                    mesh.colors[corners[1]],
                    mesh.colors[corners[2]],
                ],
                brightness,
            );

            self.rasterize_triangle(&screen, character, color);
        }
    }

    /// Perspective divide and viewport mapping. `None` for points at or
    /// behind the eye.
    fn project(&self, clip: &Vector4<f32>) -> Option<ScreenVertex> {
        if clip.w <= 1e-6 {
            return None;
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let depth = clip.z / clip.w;

        Some(ScreenVertex {
            x: (ndc_x + 1.0) * 0.5 * self.width as f32,
            y: (1.0 - ndc_y) * 0.5 * self.height as f32,
            depth,
        })
    }

    fn rasterize_triangle(&mut self, coords: &[ScreenVertex; 3], character: char, color: Color) {
        let [v0, v1, v2] = *coords;

        // Bounding box
        let min_x = v0.x.min(v1.x).min(v2.x).floor() as i32;
        let max_x = v0.x.max(v1.x).max(v2.x).ceil() as i32;
        let min_y = v0.y.min(v1.y).min(v2.y).floor() as i32;
        let max_y = v0.y.max(v1.y).max(v2.y).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                let Some((w0, w1, w2)) =
                    barycentric((v0.x, v0.y), (v1.x, v1.y), (v2.x, v2.y), (px, py))
                else {
                    continue;
                };
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * v0.depth + w1 * v1.depth + w2 * v2.depth;
                // Same test as GL's LEQUAL depth function
                if !(-1.0..=1.0).contains(&depth) {
                    continue;
                }

                let idx = y as usize * self.width + x as usize;
                if depth <= self.depth_buffer[idx] {
                    self.depth_buffer[idx] = depth;
                    self.char_buffer[idx] = character;
                    self.color_buffer[idx] = color;
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current = Color::Reset;
        writer.queue(ResetColor)?;

        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                let color = self.color_buffer[idx];
                if color != current {
                    writer.queue(SetForegroundColor(color))?;
                    current = color;
                }
                writer.queue(Print(self.char_buffer[idx]))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// How directly a triangle faces the eye, in [0, 1]. Degenerate triangles
/// count as facing.
fn facing_brightness(eye: &[Vector3<f32>; 3]) -> f32 {
    let normal = (eye[1] - eye[0]).cross(&(eye[2] - eye[0]));
    let length = normal.norm();
    if length < 1e-9 {
        return 1.0;
    }
    (normal.z / length).abs()
}

fn shade_char(brightness: f32) -> char {
    let index = (brightness * (LUMINOSITY_RAMP.len() - 1) as f32).round() as usize;
    LUMINOSITY_RAMP[index.min(LUMINOSITY_RAMP.len() - 1)]
}

/// Average face color, dimmed for faces seen edge-on
fn shade_color(colors: [[f32; 3]; 3], brightness: f32) -> Color {
    let scale = 0.35 + 0.65 * brightness;
    let channel = |c: usize| {
        let avg = (colors[0][c] + colors[1][c] + colors[2][c]) / 3.0;
        (avg * scale * 255.0).round().clamp(0.0, 255.0) as u8
    };
    Color::Rgb {
        r: channel(0),
        g: channel(1),
        b: channel(2),
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gltut_core::transform;

    #[test]
    fn test_flat_quad_fills_screen() {
        let mut renderer = AsciiRenderer::new(20, 10);
        let id = transform::identity();
        renderer.render_mesh(&Mesh::colored_quad_2d(), &id, &id, &id);

        for y in 0..10 {
            for x in 0..20 {
                assert_eq!(renderer.cell(x, y), '@', "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_cube_in_front_of_camera_is_drawn() {
        let mut renderer = AsciiRenderer::new(40, 20);
        let projection = gltut_core::perspective_projection(40.0, 1.0, 1.0, 100.0);
        let mut view = transform::identity();
        transform::translate_z(&mut view, -10.0);

        renderer.render_mesh(&Mesh::colored_cube(), &projection, &view, &transform::identity());
        assert_ne!(renderer.cell(20, 10), ' ');
        assert_eq!(renderer.cell(0, 0), ' ');
    }

    #[test]
    fn test_geometry_behind_eye_is_skipped() {
        let mut renderer = AsciiRenderer::new(40, 20);
        let projection = gltut_core::perspective_projection(40.0, 1.0, 1.0, 100.0);
        let mut view = transform::identity();
        transform::translate_z(&mut view, 10.0);

        renderer.render_mesh(&Mesh::colored_cube(), &projection, &view, &transform::identity());
        assert!((0..20).all(|y| (0..40).all(|x| renderer.cell(x, y) == ' ')));
    }

    #[test]
    fn test_clear_resets_buffers() {
        let mut renderer = AsciiRenderer::new(4, 4);
        let id = transform::identity();
        renderer.render_mesh(&Mesh::colored_quad_2d(), &id, &id, &id);
        renderer.clear();
        assert_eq!(renderer.cell(1, 1), ' ');
    }

    #[test]
    fn test_shade_color_scales_channels() {
        let red = [[1.0, 0.0, 0.0]; 3];
        assert_eq!(shade_color(red, 1.0), Color::Rgb { r: 255, g: 0, b: 0 });
        match shade_color(red, 0.0) {
            Color::Rgb { r, g, b } => {
                assert!(r < 100);
                assert_eq!((g, b), (0, 0));
            }
            other => panic!("unexpected color {:?}", other),
        }
    }

    #[test]
    fn test_barycentric_degenerate() {
        assert!(barycentric((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.5, 0.5)).is_none());
    }
}
