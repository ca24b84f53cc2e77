/// gltut core - matrix helpers and drag controls shared by the demo frontends
///
/// Everything here is plain in-memory state: no rendering, no I/O.

pub mod drag;
pub mod geometry;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use drag::{DragButton, DragController, PointerButton, PointerEvent, SurfaceSize};
pub use geometry::Mesh;
pub use projection::{perspective_projection, PerspectiveParams};
pub use transform::Matrix4;
