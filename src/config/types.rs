use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Single origin shared by all four prediction paths.
    pub base_url: String,
    #[serde(default)]
    pub image_contract: ImageContract,
}

/// Which field name the digit backend accepts for the encoded raster.
///
/// The backend revisions disagree on the field name, so the contract is an
/// explicit configuration choice rather than a guess baked into the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageContract {
    /// Current backend: the raster goes under `image_base64`.
    #[default]
    Base64V2,
    /// Earlier backend revision, which named the field `image_pixels`.
    PixelsV1,
}

impl ImageContract {
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Base64V2 => "image_base64",
            Self::PixelsV1 => "image_pixels",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
