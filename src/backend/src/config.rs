use anyhow::{Context, Result};
use log::info;
use std::{env, path::PathBuf, sync::OnceLock};

/// Application configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// UI server configuration
    pub ui: UiConfig,

    /// ClearPass REST API configuration
    pub clearpass: ClearPassConfig,

    /// Optional TLS certificate; plain HTTP is served without it
    pub certificate: Option<CertificateConfig>,
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    pub port: u16,
    /// Directory holding `index.html` and the shell assets
    pub static_dir: PathBuf,
}

#[derive(Clone)]
pub struct ClearPassConfig {
    /// Base URL of the REST API, always ending in `/api`
    pub api_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub verify_tls: bool,
}

// Hand-written so the client secret never ends up in logs
impl std::fmt::Debug for ClearPassConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClearPassConfig")
            .field("api_url", &self.api_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &mask_secret(&self.client_secret))
            .field("verify_tls", &self.verify_tls)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct CertificateConfig {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

impl AppConfig {
    /// Get or load the application configuration
    ///
    /// Returns a reference to the cached configuration. On first call, it loads
    /// and validates all configuration from environment variables. Subsequent
    /// calls return the cached instance.
    ///
    /// # Panics
    /// Panics if configuration loading fails. This is intentional as the
    /// application cannot function without valid configuration.
    pub fn get() -> &'static Self {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();
        APP_CONFIG.get_or_init(|| {
            Self::load_internal().expect("failed to load application configuration")
        })
    }

    fn load_internal() -> Result<Self> {
        let ui = UiConfig::load()?;
        let clearpass = ClearPassConfig::load()?;
        let certificate = CertificateConfig::load();

        Ok(Self {
            ui,
            clearpass,
            certificate,
        })
    }

    /// Log the effective configuration with secrets masked
    pub fn log_summary(&self) {
        info!("ClearPass API: {}", self.clearpass.api_url);
        info!("ClearPass client id: {}", self.clearpass.client_id);
        info!(
            "ClearPass client secret: {}",
            mask_secret(&self.clearpass.client_secret)
        );
        if !self.clearpass.verify_tls {
            info!("ClearPass TLS certificate verification disabled");
        }
    }
}

impl UiConfig {
    fn load() -> Result<Self> {
        let port = env::var("UI_PORT")
            .unwrap_or_else(|_| "5001".to_string())
            .parse::<u16>()
            .context("failed to parse UI_PORT: invalid format")?;

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "static".to_string())
            .into();

        Ok(Self { port, static_dir })
    }
}

impl ClearPassConfig {
    fn load() -> Result<Self> {
        let verify_tls = match env::var("CLEARPASS_VERIFY_TLS") {
            Ok(value) => parse_bool(&value)
                .context("failed to parse CLEARPASS_VERIFY_TLS: expected true or false")?,
            Err(_) => true,
        };

        #[cfg(any(test, feature = "mock"))]
        {
            let base_url = env::var("CLEARPASS_BASE_URL")
                .unwrap_or_else(|_| "https://clearpass.test".to_string());
            let client_id =
                env::var("CLEARPASS_CLIENT_ID").unwrap_or_else(|_| "test-client".to_string());
            let client_secret =
                env::var("CLEARPASS_CLIENT_SECRET").unwrap_or_else(|_| "test-secret".to_string());

            Ok(Self {
                api_url: api_url(&base_url),
                client_id,
                client_secret,
                verify_tls,
            })
        }

        #[cfg(not(any(test, feature = "mock")))]
        {
            let base_url =
                env::var("CLEARPASS_BASE_URL").context("failed to get CLEARPASS_BASE_URL")?;
            let client_id =
                env::var("CLEARPASS_CLIENT_ID").context("failed to get CLEARPASS_CLIENT_ID")?;
            let client_secret = env::var("CLEARPASS_CLIENT_SECRET")
                .context("failed to get CLEARPASS_CLIENT_SECRET")?;

            anyhow::ensure!(
                !base_url.trim().is_empty(),
                "failed to load ClearPass configuration: CLEARPASS_BASE_URL is empty"
            );

            Ok(Self {
                api_url: api_url(&base_url),
                client_id,
                client_secret,
                verify_tls,
            })
        }
    }
}

impl CertificateConfig {
    /// TLS is enabled only if both paths are configured
    fn load() -> Option<Self> {
        let cert_path = env::var("CERT_PATH").ok()?.into();
        let key_path = env::var("KEY_PATH").ok()?.into();

        Some(Self {
            cert_path,
            key_path,
        })
    }
}

/// Normalize a ClearPass base URL to its REST API root
///
/// Strips trailing slashes and appends `/api` unless already present.
pub fn api_url(base_url: &str) -> String {
    let base_url = base_url.trim().trim_end_matches('/');

    if base_url.ends_with("/api") {
        base_url.to_string()
    } else {
        format!("{base_url}/api")
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn mask_secret(secret: &str) -> &'static str {
    if secret.is_empty() {
        "Not set"
    } else {
        "********"
    }
}
