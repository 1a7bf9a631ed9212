use crate::{OutputSettings, TracingSettings};
use config::{Config, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use token_tags_logic::{ChainEndpoints, FetcherSettings, TagTemplate};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub chain_id: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Query the public endpoint of the chain. `api_key` must not be set then.
    #[serde(default)]
    pub public_mode: bool,

    #[serde(default)]
    pub chains: ChainEndpoints,
    #[serde(default)]
    pub fetcher: FetcherSettings,
    #[serde(default)]
    pub tags: TagTemplate,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub tracing: TracingSettings,
}

impl Settings {
    pub const SERVICE_NAME: &'static str = "TOKEN_TAGS_EXTRACTOR";

    /// Reads the settings file (if any) overlaid by `TOKEN_TAGS_EXTRACTOR__*` environment variables.
    pub fn build(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path_name = format!("{}__CONFIG", Self::SERVICE_NAME);
        let env_config_path = std::env::var(&config_path_name).ok();
        // must not reach the environment source as a `config` key
        std::env::remove_var(&config_path_name);
        let config_path = config_path
            .map(Path::to_path_buf)
            .or_else(|| env_config_path.map(PathBuf::from));

        let mut builder = Config::builder();
        if let Some(config_path) = config_path {
            builder = builder.add_source(File::from(config_path));
        };
        // Use `__` so that it would be possible to address keys with underscores in names (e.g. `api_key`)
        builder = builder.add_source(
            config::Environment::with_prefix(Self::SERVICE_NAME)
                .separator("__")
                .ignore_empty(true),
        );

        let settings: Self = builder.build()?.try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.fetcher.page_size == 0 {
            return Err(anyhow::anyhow!("`fetcher.page_size` must be positive"));
        }
        if self.fetcher.max_records == 0 {
            return Err(anyhow::anyhow!("`fetcher.max_records` must be positive"));
        }
        if !self.public_mode && self.api_key.is_none() {
            return Err(anyhow::anyhow!(
                "`api_key` must be set unless `public_mode` is enabled"
            ));
        }
        if self.public_mode && self.api_key.is_some() {
            return Err(anyhow::anyhow!(
                "`api_key` must not be set if `public_mode` is enabled"
            ));
        }

        Ok(())
    }
}
