/// Mouse-drag tracking with post-release momentum
///
/// A [`DragController`] follows one mouse button. While that button is held,
/// pointer motion is converted into two accumulated angles (`theta` from the
/// horizontal motion, `phi` from the vertical). After release, each frame's
/// [`DragController::animate_amortization`] keeps applying the last motion,
/// shrunk by the amortization factor, so the object coasts to a stop.
use std::f32::consts::PI;

pub const DEFAULT_SENSITIVITY: f32 = 2.0;
pub const DEFAULT_AMORTIZATION: f32 = 0.95;

/// A physical pointer button as reported by the event source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    Other(i16),
}

impl From<i16> for PointerButton {
    /// Map a DOM `MouseEvent.button` code
    fn from(code: i16) -> Self {
        match code {
            0 => PointerButton::Left,
            1 => PointerButton::Middle,
            2 => PointerButton::Right,
            other => PointerButton::Other(other),
        }
    }
}

/// The button a controller tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragButton {
    Left,
    Right,
}

impl DragButton {
    pub fn matches(self, button: PointerButton) -> bool {
        matches!(
            (self, button),
            (DragButton::Left, PointerButton::Left) | (DragButton::Right, PointerButton::Right)
        )
    }
}

/// Size of the surface pointer coordinates are measured on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Pointer input delivered to a controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { button: PointerButton, x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    /// The pointer left the tracked surface; ends a drag like `Up`
    Leave,
}

#[derive(Debug, Clone)]
pub struct DragController {
    button: DragButton,
    sensitivity: f32,
    amortization: f32,
    theta: f32,
    phi: f32,
    d_theta: f32,
    d_phi: f32,
    is_dragging: bool,
    last: (f32, f32),
}

impl DragController {
    /// No range checks are made on `sensitivity` or `amortization`.
    pub fn new(button: DragButton, sensitivity: f32, amortization: f32) -> Self {
        Self {
            button,
            sensitivity,
            amortization,
            theta: 0.0,
            phi: 0.0,
            d_theta: 0.0,
            d_phi: 0.0,
            is_dragging: false,
            last: (0.0, 0.0),
        }
    }

    pub fn with_defaults(button: DragButton) -> Self {
        Self::new(button, DEFAULT_SENSITIVITY, DEFAULT_AMORTIZATION)
    }

    pub fn button(&self) -> DragButton {
        self.button
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn amortization(&self) -> f32 {
        self.amortization
    }

    /// Accumulated horizontal angle
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Accumulated vertical angle
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Most recent horizontal delta (decayed after release)
    pub fn d_theta(&self) -> f32 {
        self.d_theta
    }

    /// Most recent vertical delta (decayed after release)
    pub fn d_phi(&self) -> f32 {
        self.d_phi
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Dispatch an event to the matching handler
    pub fn handle(&mut self, event: &PointerEvent, surface: SurfaceSize) {
        match *event {
            PointerEvent::Down { button, x, y } => self.pointer_down(button, x, y),
            PointerEvent::Move { x, y } => self.pointer_move(x, y, surface),
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    pub fn pointer_down(&mut self, button: PointerButton, x: f32, y: f32) {
        if self.is_dragging || !self.button.matches(button) {
            return;
        }

        log::trace!("{:?} drag started at ({}, {})", self.button, x, y);
        self.is_dragging = true;
        self.last = (x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, surface: SurfaceSize) {
        if !self.is_dragging {
            return;
        }

        let (last_x, last_y) = self.last;
        self.d_theta = (x - last_x) * self.sensitivity * PI / surface.width;
        self.d_phi = (y - last_y) * self.sensitivity * PI / surface.height;

        self.theta += self.d_theta;
        self.phi += self.d_phi;

        self.last = (x, y);
    }

    pub fn pointer_up(&mut self) {
        if self.is_dragging {
            log::trace!(
                "{:?} drag released, theta={} phi={}",
                self.button,
                self.theta,
                self.phi
            );
        }
        self.is_dragging = false;
    }

    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Per-frame settle step. Only decays while idle; a drag in progress is
    /// never damped.
    pub fn animate_amortization(&mut self) {
        if self.is_dragging {
            return;
        }

        self.d_theta *= self.amortization;
        self.d_phi *= self.amortization;
        self.theta += self.d_theta;
        self.phi += self.d_phi;
    }
}
