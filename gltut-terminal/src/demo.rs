/// Per-scene state: mesh, model/view matrices and the drag controls
use gltut_core::transform::{self, Matrix4};
use gltut_core::{DragButton, DragController, Mesh, PerspectiveParams, PointerEvent, SurfaceSize};

use crate::cli::DemoKind;
use crate::config::DemoConfig;

/// Spin rates in radians per millisecond, applied Z then X then Y
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spin {
    x: f32,
    y: f32,
    z: f32,
}

pub struct Demo {
    kind: DemoKind,
    mesh: Mesh,
    model: Matrix4,
    view: Matrix4,
    spin: Spin,
    rotating: DragController,
    translating: DragController,
}

impl Demo {
    pub fn new(kind: DemoKind, config: &DemoConfig) -> Self {
        let mesh = match kind {
            DemoKind::Triangle => Mesh::colored_quad_2d(),
            DemoKind::SpinningTriangle => Mesh::colored_triangle(),
            DemoKind::RotatingCube | DemoKind::MouseCube => Mesh::colored_cube(),
        };

        let spin = match kind {
            DemoKind::SpinningTriangle => Spin {
                x: 0.003,
                y: 0.002,
                z: 0.001,
            },
            DemoKind::RotatingCube => Spin {
                x: 0.0,
                y: 0.002,
                z: 0.0,
            },
            DemoKind::Triangle | DemoKind::MouseCube => Spin {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
        };
        let spin = Spin {
            x: spin.x * config.spin_scale,
            y: spin.y * config.spin_scale,
            z: spin.z * config.spin_scale,
        };

        let mut view = transform::identity();
        if kind != DemoKind::Triangle {
            transform::translate_z(&mut view, -config.camera_distance);
        }

        Self {
            kind,
            mesh,
            model: transform::identity(),
            view,
            spin,
            rotating: DragController::new(
                DragButton::Left,
                config.sensitivity,
                config.amortization,
            ),
            translating: DragController::new(
                DragButton::Right,
                config.sensitivity,
                config.amortization,
            ),
        }
    }

    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn model(&self) -> &Matrix4 {
        &self.model
    }

    pub fn view(&self) -> &Matrix4 {
        &self.view
    }

    pub fn rotating(&self) -> &DragController {
        &self.rotating
    }

    pub fn translating(&self) -> &DragController {
        &self.translating
    }

    /// The flat triangle is already in clip space and skips projection
    pub fn projection(&self, params: &PerspectiveParams) -> Matrix4 {
        match self.kind {
            DemoKind::Triangle => transform::identity(),
            _ => params.matrix(),
        }
    }

    /// Feed pointer input to the drag controls. Only the mouse cube listens.
    pub fn handle_pointer(&mut self, event: &PointerEvent, surface: SurfaceSize) {
        if self.kind != DemoKind::MouseCube {
            return;
        }
        self.rotating.handle(event, surface);
        self.translating.handle(event, surface);
    }

    /// Advance one frame, `dt_ms` milliseconds after the previous one
    pub fn update(&mut self, dt_ms: f32) {
        match self.kind {
            DemoKind::Triangle => {}
            DemoKind::SpinningTriangle | DemoKind::RotatingCube => {
                transform::rotate_z(&mut self.model, self.spin.z * dt_ms);
                transform::rotate_x(&mut self.model, self.spin.x * dt_ms);
                transform::rotate_y(&mut self.model, self.spin.y * dt_ms);
            }
            DemoKind::MouseCube => {
                transform::reset_to_identity(&mut self.model);

                self.rotating.animate_amortization();
                self.translating.animate_amortization();

                transform::translate_x(&mut self.model, self.translating.theta());
                transform::translate_y(&mut self.model, -self.translating.phi());

                transform::rotate_x(&mut self.model, self.rotating.theta());
                transform::rotate_y(&mut self.model, self.rotating.phi());
            }
        }
    }
}
