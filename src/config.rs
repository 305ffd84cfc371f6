//! Configuration
//!
//! Compiled-in defaults, overridable per browser through `localStorage`.

use log::Level;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://fsa-crud-2aa9294fe819.herokuapp.com/api";
/// Default cohort path segment
pub const DEFAULT_COHORT: &str = "2507";

const API_BASE_KEY: &str = "party_planner.api_base";
const COHORT_KEY: &str = "party_planner.cohort";
const LOG_LEVEL_KEY: &str = "party_planner.log_level";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub log_level: Level,
}

impl Config {
    /// Read overrides from local storage, falling back to defaults
    pub fn load() -> Self {
        Self::from_overrides(stored(API_BASE_KEY), stored(COHORT_KEY), stored(LOG_LEVEL_KEY))
    }

    pub fn from_overrides(
        api_base: Option<String>,
        cohort: Option<String>,
        log_level: Option<String>,
    ) -> Self {
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(Level::Info);
        Self {
            api: ApiConfig::new(api_base, cohort),
            log_level,
        }
    }
}

/// Where the remote CRUD API lives
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base: String,
    cohort: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl ApiConfig {
    /// Blank values count as unset. Slashes at the joins are normalized.
    pub fn new(base: Option<String>, cohort: Option<String>) -> Self {
        let base = non_blank(base).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let cohort = non_blank(cohort).unwrap_or_else(|| DEFAULT_COHORT.to_string());
        Self {
            base: base.trim_end_matches('/').to_string(),
            cohort: cohort.trim_matches('/').to_string(),
        }
    }

    /// `{base}/{cohort}`
    pub fn root(&self) -> String {
        format!("{}/{}", self.base, self.cohort)
    }

    /// Full URL of a resource path such as `events/3`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.root(), path.trim_start_matches('/'))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn stored(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_overrides(None, None, None);
        assert_eq!(config.api.root(), format!("{}/{}", DEFAULT_API_BASE, DEFAULT_COHORT));
        assert_eq!(config.log_level, Level::Info);
    }

    #[test]
    fn test_overrides_are_normalized() {
        let api = ApiConfig::new(Some("http://localhost:3000/api/".into()), Some("/2601/".into()));
        assert_eq!(api.endpoint("/events/4"), "http://localhost:3000/api/2601/events/4");
        assert_eq!(api.endpoint("guests"), "http://localhost:3000/api/2601/guests");
    }

    #[test]
    fn test_blank_overrides_fall_back() {
        let config = Config::from_overrides(Some("  ".into()), Some(String::new()), Some("verbose".into()));
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.log_level, Level::Info);
    }

    #[test]
    fn test_log_level_override() {
        let config = Config::from_overrides(None, None, Some("debug".into()));
        assert_eq!(config.log_level, Level::Debug);
    }
}
