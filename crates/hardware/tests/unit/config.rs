//! Configuration tests.

use rv32pipe_core::Config;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.general.start_pc, 0);
    assert_eq!(config.memory.data_bytes, 1024);
    assert!(config.pipeline.forwarding);
}

#[test]
fn deserializes_full_json() {
    let json = r#"{
        "general": { "start_pc": 0 },
        "memory": { "data_bytes": 4096 },
        "pipeline": { "forwarding": false }
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.memory.data_bytes, 4096);
    assert!(!config.pipeline.forwarding);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let config: Config = serde_json::from_str(r#"{ "pipeline": { "forwarding": false } }"#).unwrap();
    assert!(!config.pipeline.forwarding);
    assert_eq!(config.memory.data_bytes, 1024);
    assert_eq!(config.general.start_pc, 0);
}

#[test]
fn empty_object_is_all_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert!(config.pipeline.forwarding);
    assert_eq!(config.memory.data_bytes, 1024);
}
