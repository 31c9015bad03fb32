use bevy::prelude::*;

/// Deterministic RNG seed for the field (set from the CLI for reproducible runs).
#[derive(Resource, Debug, Copy, Clone)]
pub struct RngSeed(pub u64);

/// Outcome of the startup config load, logged once the log plugin is up.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigLoadReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
}
