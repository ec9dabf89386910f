use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the config file when none is given (`folio.toml`, `folio.yaml`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "folio";
/// Prefix of environment overrides, e.g. `FOLIO__CONTENT__PROJECT_ID`.
pub const ENV_PREFIX: &str = "FOLIO";

#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a required config file, then applies `FOLIO__SECTION__KEY` environment
/// overrides on top.
///
/// `path` may omit the extension; it defaults to [`DEFAULT_CONFIG_FILE`] in the working
/// directory.
///
/// # Errors
/// Fails when the file is missing or the merged values don't fit `T`.
///
/// # Example
/// ```rust,no_run
/// use folio_kernel::config::load_config;
/// use folio_kernel::domain::config::SiteConfig;
///
/// let cfg: SiteConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());
    info!("Loading config from {}", path.display());

    Config::builder()
        .add_source(File::from(path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
