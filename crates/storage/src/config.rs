use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TRAINERS_DOCUMENT: &str = "data/trainers.json";

/// Locations of the exercise data service and the static trainers document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub base_url: String,
    pub trainers_document: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            trainers_document: DEFAULT_TRAINERS_DOCUMENT.to_string(),
        }
    }
}
