pub mod config;

pub use config::{
    ConnectionConfig, MotionConfig, NetworkConfig, ParticleConfig, PointerConfig, WindowConfig,
};
