pub(crate) use {
    crate::error::NftCheckerCliError,
    anyhow::{anyhow, Result as AnyResult},
    clap::{Parser, Subcommand},
    colored::Colorize,
    nft_checker_sdk::{
        format::{compact_number, signed_percent, wei_to_eth},
        opensea::{
            Asset,
            Collection,
            CollectionStats,
            EmptyAssetPage,
            ErrorKind,
            OpenSeaClient,
            OpenSeaError,
            OPENSEA_API_BASE,
        },
    },
    serde::{Deserialize, Serialize},
    std::{
        io::Write,
        path::{Path, PathBuf},
    },
};

// Where to find config file.
pub(crate) const CLI_CONF_PATH: &str = "~/.nft-checker/conf.toml";
// Environment variables overriding the config file.
pub(crate) const API_KEY_ENV: &str = "OPENSEA_API_KEY";
pub(crate) const API_URL_ENV: &str = "OPENSEA_API_URL";

/// Struct holding the config structure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct CliConf {
    #[serde(default)]
    pub(crate) opensea: OpenSeaConf,
}

impl CliConf {
    /// Load the configuration from [`CLI_CONF_PATH`]. A missing file yields
    /// the default configuration.
    pub(crate) async fn load() -> AnyResult<Self> {
        let conf_path = expand_tilde(CLI_CONF_PATH)?;

        Self::load_from_path(&conf_path).await
    }

    pub(crate) async fn load_from_path(path: &Path) -> AnyResult<Self> {
        if !tokio::fs::try_exists(path).await? {
            log::debug!("No configuration at {}, using defaults", path.display());

            return Ok(Self::default());
        }

        let conf = tokio::fs::read_to_string(path).await?;

        toml::from_str(&conf)
            .map_err(|e| anyhow!("Failed to parse configuration {}: {e}", path.display()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct OpenSeaConf {
    pub(crate) base_url: Option<String>,
    pub(crate) api_key: Option<String>,
}

/// Settings the OpenSea client is built from.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ApiSettings {
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
}

impl ApiSettings {
    /// Environment first, then the config file, then the defaults.
    pub(crate) fn resolve(conf: &CliConf) -> Self {
        let base_url = env_var(API_URL_ENV)
            .or_else(|| conf.opensea.base_url.clone())
            .unwrap_or_else(|| OPENSEA_API_BASE.to_string());
        let api_key = env_var(API_KEY_ENV).or_else(|| conf.opensea.api_key.clone());

        if api_key.is_none() {
            log::info!("{API_KEY_ENV} is not set, requests are subject to lower rate limits");
        }

        Self { base_url, api_key }
    }

    pub(crate) fn client(self) -> OpenSeaClient {
        OpenSeaClient::builder()
            .with_base_url(&self.base_url)
            .with_api_key(self.api_key)
            .build()
    }
}

/// Contract addresses are told apart from slugs by their prefix.
pub(crate) fn is_contract_address(identifier: &str) -> bool {
    identifier.starts_with("0x")
}

/// Expands `~/` to the user's home directory in paths.
pub(crate) fn expand_tilde(path: &str) -> AnyResult<PathBuf> {
    if let Some(path) = path.strip_prefix("~/") {
        match home::home_dir() {
            Some(home) => return Ok(home.join(path)),
            None => return Err(anyhow!("Could not find home directory")),
        }
    }

    Ok(path.into())
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
