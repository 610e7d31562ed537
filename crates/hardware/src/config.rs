//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline constants (data-memory size, start PC, forwarding).
//! 2. **Structures:** Hierarchical config for general, memory, and pipeline
//!    settings, deserializable from JSON.
//!
//! Forwarding on/off is a static run configuration: it is chosen when the
//! simulator is constructed (typically from a JSON config file) and never
//! changes during a run.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Size of the flat data memory in bytes.
    pub const DATA_MEMORY_BYTES: usize = 1024;

    /// Initial program counter.
    pub const START_PC: u32 = 0;

    /// Whether operand forwarding (bypassing) is enabled.
    pub const FORWARDING: bool = true;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rv32pipe_core::config::Config;
///
/// let config = Config::default();
/// assert!(config.pipeline.forwarding);
/// assert_eq!(config.memory.data_bytes, 1024);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use rv32pipe_core::config::Config;
///
/// let json = r#"{
///     "general": { "start_pc": 0 },
///     "memory": { "data_bytes": 4096 },
///     "pipeline": { "forwarding": false }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.memory.data_bytes, 4096);
/// assert!(!config.pipeline.forwarding);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data-memory configuration.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Pipeline configuration.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Initial program counter value.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u32 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_pc: defaults::START_PC,
        }
    }
}

/// Data-memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Size of the flat byte-addressable data memory.
    #[serde(default = "MemoryConfig::default_data_bytes")]
    pub data_bytes: usize,
}

impl MemoryConfig {
    /// Returns the default data-memory size in bytes.
    const fn default_data_bytes() -> usize {
        defaults::DATA_MEMORY_BYTES
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_bytes: defaults::DATA_MEMORY_BYTES,
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Enable operand forwarding. When disabled, the hazard unit falls back
    /// to its stricter stalling policy; architectural results are identical
    /// either way, only cycle counts differ.
    #[serde(default = "PipelineConfig::default_forwarding")]
    pub forwarding: bool,
}

impl PipelineConfig {
    /// Returns the default forwarding setting.
    const fn default_forwarding() -> bool {
        defaults::FORWARDING
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            forwarding: defaults::FORWARDING,
        }
    }
}
