pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod rendering;
pub mod simulation;

// Curated re-exports
pub use app::field_loop::FieldLoop;
pub use app::headless::{run_headless, HeadlessReport};
pub use app::network::{LastTick, NetworkField, ParticleNetworkPlugin};
pub use core::config::NetworkConfig;
pub use core::resources::{ConfigLoadReport, RngSeed};
pub use rendering::{DrawCommand, RecordingSurface, Surface};
pub use simulation::{Bounds, FieldError, FieldSettings, Particle, ParticleField, PointerState};
