//! Configuration management for RW transforms.
//!
//! Parses `rw.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. The result is the
//! immutable [`PipelineConfig`] consumed by [`rw_transforms::Pipeline`].
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [callout]
//! default_variant = "info"
//! title = "Note"
//! directive_names = ["info", "warning"]
//! aliases = { note = "info", error = "danger" }
//! icons = { info = "i" }
//!
//! [embed.providers.loom]
//! src = "https://www.loom.com/embed/{id}"
//! class = "embed embed-loom"
//!
//! [link_preview]
//! class_name = "card"
//! exclude_domains = ["internal.example.com"]
//!
//! [pipeline]
//! on_error = "abort"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rw_transforms::{EmbedProvider, FailurePolicy, PipelineConfig, Variant};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rw.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the pipeline failure policy.
    pub on_error: Option<FailurePolicy>,
}

/// Application configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Resolved pipeline configuration.
    pub pipeline: PipelineConfig,
    /// Path to the config file, if one was loaded.
    pub config_path: Option<PathBuf>,
}

/// Raw configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    callout: RawCallout,
    embed: RawEmbed,
    link_preview: RawLinkPreview,
    pipeline: RawPipeline,
}

/// Raw `[callout]` section (variant names as strings).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCallout {
    default_variant: Option<String>,
    title: Option<String>,
    directive_names: Option<Vec<String>>,
    aliases: BTreeMap<String, String>,
    icons: BTreeMap<String, String>,
}

/// Raw `[embed]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEmbed {
    providers: BTreeMap<String, RawProvider>,
}

/// Raw `[embed.providers.<key>]` entry.
#[derive(Debug, Deserialize)]
struct RawProvider {
    src: String,
    #[serde(default)]
    class: String,
}

/// Raw `[link_preview]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLinkPreview {
    class_name: Option<String>,
    exclude_domains: Vec<String>,
}

/// Raw `[pipeline]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPipeline {
    on_error: Option<OnError>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum OnError {
    Collect,
    Abort,
}

impl From<OnError> for FailurePolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Collect => Self::Collect,
            OnError::Abort => Self::Abort,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Parse a variant name, naming the offending field on failure.
fn parse_variant(name: &str, field: &str) -> Result<Variant, ConfigError> {
    name.trim()
        .to_lowercase()
        .parse()
        .map_err(|err| ConfigError::Validation(format!("{field}: {err}")))
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rw.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Validation` for invalid values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(Self {
            pipeline: raw.resolve()?,
            config_path: None,
        })
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(on_error) = settings.on_error {
            self.pipeline.on_error = on_error;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        discover_from(&current)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}

/// Search `start` and its ancestors for `rw.toml`.
fn discover_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

impl RawConfig {
    /// Validate raw values and build the pipeline configuration.
    fn resolve(self) -> Result<PipelineConfig, ConfigError> {
        let mut config = PipelineConfig::default();
        self.callout.apply(&mut config.callout)?;
        self.embed.apply(&mut config.embed)?;
        self.link_preview.apply(&mut config.link_preview)?;
        if let Some(on_error) = self.pipeline.on_error {
            config.on_error = on_error.into();
        }
        Ok(config)
    }
}

impl RawCallout {
    fn apply(self, callout: &mut rw_transforms::CalloutConfig) -> Result<(), ConfigError> {
        if let Some(name) = &self.default_variant {
            callout.default_variant = parse_variant(name, "callout.default_variant")?;
        }

        if let Some(title) = self.title {
            callout.title_override = Some(title).filter(|title| !title.is_empty());
        }

        if let Some(names) = &self.directive_names {
            callout.directive_names = names
                .iter()
                .map(|name| parse_variant(name, "callout.directive_names"))
                .collect::<Result<_, _>>()?;
        }

        for (word, name) in self.aliases {
            require_non_empty(&word, "callout.aliases key")?;
            let variant = parse_variant(&name, &format!("callout.aliases.{word}"))?;
            callout.aliases.insert(word, variant);
        }

        for (name, icon) in self.icons {
            let variant = parse_variant(&name, "callout.icons")?;
            callout.icons.insert(variant, icon);
        }

        Ok(())
    }
}

impl RawEmbed {
    fn apply(self, embed: &mut rw_transforms::EmbedConfig) -> Result<(), ConfigError> {
        let mut providers = Vec::with_capacity(self.providers.len());
        for (key, provider) in self.providers {
            require_non_empty(&key, "embed.providers key")?;
            require_non_empty(&provider.src, &format!("embed.providers.{key}.src"))?;
            providers.push((
                key.trim().to_owned(),
                EmbedProvider::new(provider.src, provider.class),
            ));
        }

        *embed = std::mem::take(embed).with_providers(providers);
        Ok(())
    }
}

impl RawLinkPreview {
    fn apply(self, link_preview: &mut rw_transforms::LinkPreviewConfig) -> Result<(), ConfigError> {
        if let Some(class_name) = self.class_name {
            link_preview.class_name = class_name;
        }

        for domain in &self.exclude_domains {
            require_non_empty(domain, "link_preview.exclude_domains entry")?;
        }
        link_preview.excluded_domains = self.exclude_domains;

        Ok(())
    }
}
