use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Every section of the site configuration file.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub assets: AssetsConfig,
    pub contact: ContactConfig,
    pub site: SiteSection,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub runtime: RuntimeSettings,
}

/// Arc-wrapped config, cheap to clone into handlers and clients.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Headless content store connection.
///
/// With `enabled = false` (or no `project_id`) every page renders bundled content.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub enabled: bool,
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    /// Overrides the derived `https://<project>.api(cdn).sanity.io` origin.
    pub base_url: Option<String>,
    pub token: Option<String>,
    /// Per-request timeout. Unset means requests wait for the store.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub cdn_base: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Takes precedence over the endpoint stored in the contact document.
    pub form_endpoint: Option<String>,
    /// Prefix for endpoints given as a bare form id.
    pub submit_base_url: String,
    pub recaptcha_site_key: Option<String>,
}

/// Site identity and home page copy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    pub description: String,
    pub owner: String,
    pub headline_phrases: Vec<String>,
    pub resume_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

/// Optional tuning applied on top of the server runtime preset.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub worker_threads: Option<usize>,
    pub stack_size: Option<usize>,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 3000, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            project_id: String::new(),
            dataset: "production".to_owned(),
            api_version: "2024-01-01".to_owned(),
            use_cdn: true,
            base_url: None,
            token: None,
            timeout_secs: None,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self { cdn_base: "https://cdn.sanity.io/images".to_owned() }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_endpoint: None,
            submit_base_url: "https://formspree.io/f".to_owned(),
            recaptcha_site_key: None,
        }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Aman Kushwaha ~ Portfolio".to_owned(),
            description: "Aman Kushwaha a passionate Full Stack Developer specializing in MERN stack \
                          development, Machine Learning, etc."
                .to_owned(),
            owner: "Aman Kushwaha".to_owned(),
            headline_phrases: ["Full Stack Developer", "AI/ML Developer", "Machine Learning Enthusiast"]
                .map(str::to_owned)
                .to_vec(),
            resume_path: Some("/resume.pdf".to_owned()),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { static_dir: PathBuf::from("public") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}

impl ContentConfig {
    /// Whether the store should be queried at all.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.project_id.trim().is_empty()
    }
}
