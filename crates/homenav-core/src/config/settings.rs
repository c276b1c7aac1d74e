use crate::Result;
use homenav_types::Application;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;
use tracing::warn;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Applications in directory order
    #[serde(default)]
    pub apps: Vec<Application>,

    #[serde(default)]
    pub home_menu: HomeMenuConfig,

    /// Application current at startup (first app when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_app: Option<String>,
}

impl Config {
    /// Load config from file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        super::validation::warn_unknown_fields(&content, "config.json");
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Home menu presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeMenuConfig {
    #[serde(default)]
    pub background: HomeBackground,

    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,

    #[serde(default = "default_empty_message")]
    pub empty_message: String,

    /// Show the home menu instead of the start app when the shell launches
    #[serde(default)]
    pub open_on_start: bool,
}

fn default_search_placeholder() -> String {
    "Search apps...".to_string()
}
fn default_empty_message() -> String {
    "No apps found".to_string()
}

impl Default for HomeMenuConfig {
    fn default() -> Self {
        Self {
            background: HomeBackground::default(),
            search_placeholder: default_search_placeholder(),
            empty_message: default_empty_message(),
            open_on_start: false,
        }
    }
}

/// Named background styles for the home menu overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HomeBackground {
    #[default]
    Default,
    Ocean,
    Sunset,
    Forest,
    Midnight,
    Aurora,
    Corporate,
}

impl HomeBackground {
    pub const ALL: [Self; 7] = [
        Self::Default,
        Self::Ocean,
        Self::Sunset,
        Self::Forest,
        Self::Midnight,
        Self::Aurora,
        Self::Corporate,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
            Self::Forest => "forest",
            Self::Midnight => "midnight",
            Self::Aurora => "aurora",
            Self::Corporate => "corporate",
        }
    }

    /// Parse a style name; unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name))
    }

    /// Gradient stops as `#RRGGBB`, top to bottom.
    #[must_use]
    pub fn gradient(self) -> &'static [&'static str] {
        match self {
            Self::Default => &["#004AAD", "#1A1F25"],
            Self::Ocean => &["#0077B6", "#023E8A", "#03045E"],
            Self::Sunset => &["#F2A900", "#E85D04", "#9D0208"],
            Self::Forest => &["#0DBF6F", "#2D6A4F", "#1B4332"],
            Self::Midnight => &["#1A1F25", "#0D1117"],
            Self::Aurora => &["#004AAD", "#7B2CBF", "#E040FB"],
            Self::Corporate => &["#1e3a5f", "#0d1b2a"],
        }
    }
}

impl Serialize for HomeBackground {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// Unknown style names fall back to the default style instead of failing the whole config
impl<'de> Deserialize<'de> for HomeBackground {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name).unwrap_or_else(|| {
            warn!("Unknown home menu background '{name}', using default");
            Self::Default
        }))
    }
}
