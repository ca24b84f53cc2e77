/// gltut web - WASM bindings for the browser demos
///
/// Exposes the matrix helpers over `Float32Array`s and a `MouseDrag` class
/// that the page's `requestAnimationFrame` loop drives. WebGL setup and DOM
/// listener registration stay in the page scripts.
use gltut_core::drag::{DEFAULT_AMORTIZATION, DEFAULT_SENSITIVITY};
use gltut_core::transform::{self, Matrix4};
use gltut_core::{DragButton, DragController, PointerButton, SurfaceSize};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

/// A matrix argument that is not 16 floats long
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected a 4x4 matrix of 16 floats, got {0} values")]
pub struct MatrixLengthError(pub usize);

impl From<MatrixLengthError> for JsValue {
    fn from(err: MatrixLengthError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Run `op` on a column-major JS array in place
fn with_matrix(m: &mut [f32], op: impl FnOnce(&mut Matrix4)) -> Result<(), MatrixLengthError> {
    if m.len() != 16 {
        return Err(MatrixLengthError(m.len()));
    }

    let mut matrix = Matrix4::from_column_slice(m);
    op(&mut matrix);
    m.copy_from_slice(matrix.as_slice());
    Ok(())
}

#[wasm_bindgen(js_name = degToRad)]
pub fn deg_to_rad(angle: f32) -> f32 {
    transform::deg_to_rad(angle)
}

#[wasm_bindgen]
pub fn identity() -> Vec<f32> {
    transform::identity().as_slice().to_vec()
}

#[wasm_bindgen(js_name = setIdentity)]
pub fn set_identity(m: &mut [f32]) -> Result<(), JsValue> {
    with_matrix(m, transform::reset_to_identity)?;
    Ok(())
}

#[wasm_bindgen]
pub fn projection(fov_y_degrees: f32, aspect: f32, z_near: f32, z_far: f32) -> Vec<f32> {
    gltut_core::perspective_projection(fov_y_degrees, aspect, z_near, z_far)
        .as_slice()
        .to_vec()
}

#[wasm_bindgen(js_name = rotateX)]
pub fn rotate_x(m: &mut [f32], angle: f32) -> Result<(), JsValue> {
    with_matrix(m, |m| transform::rotate_x(m, angle))?;
    Ok(())
}

#[wasm_bindgen(js_name = rotateY)]
pub fn rotate_y(m: &mut [f32], angle: f32) -> Result<(), JsValue> {
    with_matrix(m, |m| transform::rotate_y(m, angle))?;
    Ok(())
}

#[wasm_bindgen(js_name = rotateZ)]
pub fn rotate_z(m: &mut [f32], angle: f32) -> Result<(), JsValue> {
    with_matrix(m, |m| transform::rotate_z(m, angle))?;
    Ok(())
}

#[wasm_bindgen(js_name = translateX)]
pub fn translate_x(m: &mut [f32], t: f32) -> Result<(), JsValue> {
    with_matrix(m, |m| transform::translate_x(m, t))?;
    Ok(())
}

#[wasm_bindgen(js_name = translateY)]
pub fn translate_y(m: &mut [f32], t: f32) -> Result<(), JsValue> {
    with_matrix(m, |m| transform::translate_y(m, t))?;
    Ok(())
}

#[wasm_bindgen(js_name = translateZ)]
pub fn translate_z(m: &mut [f32], t: f32) -> Result<(), JsValue> {
    with_matrix(m, |m| transform::translate_z(m, t))?;
    Ok(())
}

/// Drag tracking for one mouse button of a canvas
#[wasm_bindgen]
pub struct MouseDrag {
    inner: DragController,
}

#[wasm_bindgen]
impl MouseDrag {
    /// `kind` is `"left-click"`; anything else tracks the right button.
    #[wasm_bindgen(constructor)]
    pub fn new(kind: &str, drag_sensitivity: Option<f32>, amortization: Option<f32>) -> MouseDrag {
        let button = match kind {
            "left-click" => DragButton::Left,
            _ => DragButton::Right,
        };
        MouseDrag {
            inner: DragController::new(
                button,
                drag_sensitivity.unwrap_or(DEFAULT_SENSITIVITY),
                amortization.unwrap_or(DEFAULT_AMORTIZATION),
            ),
        }
    }

    #[wasm_bindgen(js_name = mouseDown)]
    pub fn mouse_down(&mut self, event: &MouseEvent) {
        self.press(event.button(), event.page_x() as f32, event.page_y() as f32);
    }

    /// `width`/`height` are the canvas size the drag is scaled against
    #[wasm_bindgen(js_name = mouseMove)]
    pub fn mouse_move(&mut self, event: &MouseEvent, width: f32, height: f32) {
        if !self.inner.is_dragging() {
            return;
        }
        event.prevent_default();
        self.move_to(event.page_x() as f32, event.page_y() as f32, width, height);
    }

    #[wasm_bindgen(js_name = mouseUp)]
    pub fn mouse_up(&mut self) {
        self.inner.pointer_up();
    }

    #[wasm_bindgen(js_name = mouseLeave)]
    pub fn mouse_leave(&mut self) {
        self.inner.pointer_leave();
    }

    /// Press with a DOM button code (0 left, 1 middle, 2 right)
    pub fn press(&mut self, button: i16, x: f32, y: f32) {
        self.inner.pointer_down(PointerButton::from(button), x, y);
    }

    #[wasm_bindgen(js_name = moveTo)]
    pub fn move_to(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.inner.pointer_move(x, y, SurfaceSize::new(width, height));
    }

    #[wasm_bindgen(js_name = animateAmortization)]
    pub fn animate_amortization(&mut self) {
        self.inner.animate_amortization();
    }

    #[wasm_bindgen(getter = THETA)]
    pub fn theta(&self) -> f32 {
        self.inner.theta()
    }

    #[wasm_bindgen(getter = PHI)]
    pub fn phi(&self) -> f32 {
        self.inner.phi()
    }

    #[wasm_bindgen(getter = dX)]
    pub fn d_x(&self) -> f32 {
        self.inner.d_theta()
    }

    #[wasm_bindgen(getter = dY)]
    pub fn d_y(&self) -> f32 {
        self.inner.d_phi()
    }

    #[wasm_bindgen(getter = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    if console_log::init_with_level(log::Level::Info).is_err() {
        // A logger was already installed by another module
        return;
    }
    log::info!("gltut web bindings loaded");
}
