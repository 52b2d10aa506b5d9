use std::time::Duration;

const DEFAULT_BACKEND_URL: &str = "http://localhost:9090";
const DEFAULT_ADMIN_USERNAME: &str = "0114440780";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_base_url: String,
    pub use_mock_data: bool,
    pub admin_username: String,
    pub admin_password: String,
    pub port: u16,
    pub auth_timeout: Duration,
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_base_url: DEFAULT_BACKEND_URL.to_string(),
            use_mock_data: false,
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            port: 8000,
            auth_timeout: Duration::from_secs(5),
            fetch_timeout: Duration::from_secs(3),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Every variable is optional; missing values fall back to the defaults in
    /// [`Config::default`]. Present values are validated.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            backend_base_url: lookup("JAVA_API_URL")
                .map(|url| parse_base_url(&url))
                .transpose()?
                .unwrap_or(defaults.backend_base_url),
            use_mock_data: lookup("USE_MOCK_DATA")
                .map(|flag| flag.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.use_mock_data),
            admin_username: lookup("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: lookup("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            port: lookup("PORT")
                .map(|port| {
                    port.trim().parse::<u16>().map_err(|_| {
                        anyhow::anyhow!("PORT must be a valid number between 1-65535")
                    })
                })
                .transpose()?
                .unwrap_or(defaults.port),
            auth_timeout: lookup("AUTH_TIMEOUT_SECS")
                .map(|secs| parse_timeout("AUTH_TIMEOUT_SECS", &secs))
                .transpose()?
                .unwrap_or(defaults.auth_timeout),
            fetch_timeout: lookup("FETCH_TIMEOUT_SECS")
                .map(|secs| parse_timeout("FETCH_TIMEOUT_SECS", &secs))
                .transpose()?
                .unwrap_or(defaults.fetch_timeout),
        };

        // Never log the password
        tracing::debug!("Backend URL: {}", config.backend_base_url);
        tracing::debug!("Admin user: {}", config.admin_username);
        tracing::debug!("Mock data mode: {}", config.use_mock_data);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    /// Label reported by the liveness endpoint.
    pub fn mode_label(&self) -> &'static str {
        if self.use_mock_data {
            "Mock Data Mode"
        } else {
            "Live Production Mode"
        }
    }
}

fn parse_base_url(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("JAVA_API_URL cannot be empty");
    }
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| anyhow::anyhow!("JAVA_API_URL is not a valid URL: {}", e))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!("JAVA_API_URL must start with http:// or https://");
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn parse_timeout(name: &str, raw: &str) -> anyhow::Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => anyhow::bail!("{} must be a positive number of seconds", name),
    }
}
