pub mod camera;
pub mod gizmo_surface;
pub mod surface;
pub mod viewport;

pub use gizmo_surface::GizmoSurface;
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use viewport::SurfaceRect;
