pub mod error;
pub mod field;
pub mod particle;
pub mod settings;
pub mod states;

pub use error::FieldError;
pub use field::{ConnectionStats, ParticleField, TickStats};
pub use particle::Particle;
pub use settings::FieldSettings;
pub use states::{Bounds, PointerState};
