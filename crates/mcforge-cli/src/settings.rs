//! Settings file (TOML)
//!
//! The whole file and every section are optional; absent values fall back
//! to the original plugin defaults. Example:
//!
//! ```toml
//! [server]
//! address = "127.0.0.1"
//! port = 25563
//! secure = false
//! reject_unauthorized = false
//!
//! [target]
//! world = "world"
//! password = ""
//!
//! [generator]
//! program = "php"
//! index_file = "index.php"
//!
//! [chain]
//! relative = true
//! origin = { x = 5, y = 5, z = 5 }
//! dimensions = { x = 5, z = 5 }
//! ```

use std::path::{Path, PathBuf};

use mcforge_core::{BlockPos, EndpointConfig, Footprint, PlacementConfig, Sensitive};
use serde::Deserialize;
use tracing::debug;

/// All mcforge settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: EndpointConfig,
    pub target: TargetSettings,
    pub generator: GeneratorSettings,
    pub chain: ChainSettings,
}

/// Target world and credential
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetSettings {
    /// Name (or UUID) of the target world
    pub world: String,
    /// Listener password
    pub password: Sensitive<String>,
}

/// External generator configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Generator program invoked with the source file path
    pub program: String,
    /// Default source file when none is given on the command line
    pub index_file: PathBuf,
}

/// Chain placement settings (`dimensions` is the layer footprint)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChainSettings {
    pub relative: bool,
    pub origin: BlockPos,
    pub dimensions: Footprint,
}

impl Default for TargetSettings {
    fn default() -> Self {
        Self {
            world: "world".to_string(),
            password: Sensitive::default(),
        }
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            program: "php".to_string(),
            index_file: PathBuf::from("index.php"),
        }
    }
}

impl Default for ChainSettings {
    fn default() -> Self {
        let placement = PlacementConfig::default();
        Self {
            relative: placement.relative,
            origin: placement.origin,
            dimensions: placement.footprint,
        }
    }
}

impl ChainSettings {
    /// The placement configuration the compiler consumes
    pub fn placement(&self) -> PlacementConfig {
        PlacementConfig {
            relative: self.relative,
            origin: self.origin,
            footprint: self.dimensions,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    ///
    /// # Errors
    /// Read failures other than not-found, and TOML parse failures.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        let settings: Settings = toml::from_str(&text)?;
        Ok(settings)
    }
}
