use std::io::Write;
use std::path::Path;

use particle_network::NetworkConfig;

#[test]
fn shipped_config_parses_and_is_clean() {
    let cfg = NetworkConfig::load_from_file("assets/config/network.ron").expect("shipped config");
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    assert_eq!(cfg.particles.count, 120);
}

#[test]
fn local_layer_overrides_single_fields() {
    let mut local = tempfile::NamedTempFile::new().unwrap();
    write!(local, "(particles: (count: 40), pointer: (enabled: false))").unwrap();
    let (cfg, used, errors) =
        NetworkConfig::load_layered([Path::new("assets/config/network.ron"), local.path()]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.particles.count, 40);
    assert!(!cfg.pointer.enabled);
    assert_eq!(cfg.connections.max_distance, 180.0);
    assert!(!cfg.field_settings().pointer_enabled);
}

#[test]
fn malformed_layer_is_reported_and_skipped() {
    let mut bad = tempfile::NamedTempFile::new().unwrap();
    write!(bad, "(particles: (count: ").unwrap();
    let (cfg, used, errors) = NetworkConfig::load_layered([bad.path()]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(cfg, NetworkConfig::default());
}
