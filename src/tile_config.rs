use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_CONTROL_PATH: &str = "/sys/class/leds/torch-light0/brightness";

/// Tokens the driver understands. The stock driver reads "100" as on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TorchEncoding {
    pub on: String,
    pub off: String,
}

impl Default for TorchEncoding {
    fn default() -> Self {
        TorchEncoding {
            on: "100".to_string(),
            off: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TileConfig {
    pub control_path: PathBuf,
    #[serde(default)]
    pub encoding: TorchEncoding,
}

impl Default for TileConfig {
    fn default() -> Self {
        TileConfig {
            control_path: PathBuf::from(DEFAULT_CONTROL_PATH),
            encoding: TorchEncoding::default(),
        }
    }
}

impl TileConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        if self.encoding.on == self.encoding.off {
            return Err(ConfigError::Invalid(format!(
                "on and off tokens are both {:?}",
                self.encoding.on
            )));
        }
        if self.encoding.on.is_empty() {
            return Err(ConfigError::Invalid("on token is empty".to_string()));
        }
        Ok(self)
    }
}

/// Loads `path` (any format the `config` crate knows by extension) over the
/// built-in defaults. A missing file yields the defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<TileConfig, ConfigError> {
    let defaults = TorchEncoding::default();
    let settings = config::Config::builder()
        .set_default("control_path", DEFAULT_CONTROL_PATH)?
        .set_default("encoding.on", defaults.on)?
        .set_default("encoding.off", defaults.off)?
        .add_source(config::File::from(path.as_ref()).required(false))
        .build()?;
    settings.try_deserialize::<TileConfig>()?.validate()
}
