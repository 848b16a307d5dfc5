//! Application configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Brand;
use crate::infrastructure::cache::DEFAULT_CACHE_CAPACITY;

/// Codepoints most often requested by chat clients, preloaded at startup.
pub const POPULAR_EMOJIS: &[&str] = &[
    "2614", "2615", "2648", "2649", "2650", "2661", "2662", "2663", "2664", "2665", "26A0", "26A1",
    "2600", "2601", "2602", "2764", "2665", "2666", "2667", "2668",
];

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Directory holding the brand documents.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Document file name per brand, relative to `assets_dir`.
    #[serde(default = "default_brands")]
    pub brands: BTreeMap<String, String>,

    /// Cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Preload configuration.
    #[serde(default)]
    pub preload: PreloadConfig,
}

/// Cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of emojis kept in memory.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Re-check unterminated values with a full document parse.
    #[serde(default = "default_true")]
    pub full_parse_fallback: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            full_parse_fallback: true,
        }
    }
}

/// Startup preload configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreloadConfig {
    /// Brand the popular set is preloaded for.
    #[serde(default = "default_preload_brand")]
    pub brand: String,

    /// Codepoints to preload.
    #[serde(default = "default_popular")]
    pub codepoints: Vec<String>,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            brand: default_preload_brand(),
            codepoints: default_popular(),
        }
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("emoji")
}

fn default_brands() -> BTreeMap<String, String> {
    BTreeMap::from([("apple".to_string(), "emoji-apple-image.json".to_string())])
}

fn default_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

fn default_preload_brand() -> String {
    "apple".to_string()
}

fn default_popular() -> Vec<String> {
    POPULAR_EMOJIS.iter().map(ToString::to_string).collect()
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(assets_dir) = &args.assets_dir {
            self.assets_dir.clone_from(assets_dir);
        }
        if let Some(capacity) = args.capacity {
            self.cache.capacity = capacity;
        }
        if args.no_preload {
            self.preload.codepoints.clear();
        }
    }

    /// Returns the configured brands with their document file names.
    #[must_use]
    pub fn brand_files(&self) -> BTreeMap<Brand, String> {
        self.brands
            .iter()
            .map(|(brand, file)| (Brand::new(brand.as_str()), file.clone()))
            .collect()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            assets_dir: default_assets_dir(),
            brands: default_brands(),
            cache: CacheConfig::default(),
            preload: PreloadConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_match_reference_deployment() {
        let config = AppConfig::default();

        assert_eq!(config.cache.capacity, 200);
        assert!(config.cache.full_parse_fallback);
        assert_eq!(config.preload.brand, "apple");
        assert_eq!(config.preload.codepoints.len(), 20);
        assert_eq!(
            config.brands.get("apple").map(String::as_str),
            Some("emoji-apple-image.json")
        );
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            assets_dir = "/srv/emoji"
            log_level = "debug"

            [brands]
            apple = "apple.json"
            google = "google.json"

            [cache]
            capacity = 50

            [preload]
            codepoints = ["2764"]
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.assets_dir, PathBuf::from("/srv/emoji"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.brands.len(), 2);
        assert_eq!(config.cache.capacity, 50);
        assert!(config.cache.full_parse_fallback);
        assert_eq!(config.preload.brand, "apple");
        assert_eq!(config.preload.codepoints, vec!["2764".to_string()]);
    }

    #[test]
    fn test_merge_with_args() {
        let args = CliArgs::parse_from([
            "emoji-vault",
            "--log-level",
            "warn",
            "--assets-dir",
            "/tmp/emoji",
            "--capacity",
            "10",
            "--no-preload",
            "lookup",
            "apple",
            "2764",
        ]);

        let mut config = AppConfig::default();
        config.merge_with_args(&args);

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.assets_dir, PathBuf::from("/tmp/emoji"));
        assert_eq!(config.cache.capacity, 10);
        assert!(config.preload.codepoints.is_empty());
    }

    #[test]
    fn test_brand_files() {
        let files = AppConfig::default().brand_files();
        assert_eq!(
            files.get(&Brand::new("apple")).map(String::as_str),
            Some("emoji-apple-image.json")
        );
    }
}
