use regex::Regex;
use std::sync::LazyLock;

use crate::error::WeatherError;

pub const DEFAULT_RESOURCE_ROOT: &str = "resources/";

static ICON_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z_]+\.gif").expect("icon token pattern compiles"));

/// Maps feed icon references such as `/ig/images/weather/sunny.gif` onto
/// local resource paths.
#[derive(Debug, Clone)]
pub struct IconResolver {
    root: String,
}

impl IconResolver {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// Uses the first `[a-z_]+.gif` token found in `raw`.
    pub fn resolve(&self, raw: &str) -> Result<String, WeatherError> {
        let token = ICON_TOKEN
            .find(raw)
            .ok_or_else(|| WeatherError::MalformedIconReference(raw.to_owned()))?;

        Ok(format!("{}{}", self.root, token.as_str()))
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCE_ROOT)
    }
}
