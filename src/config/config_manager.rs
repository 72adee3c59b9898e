use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_PAGE_SIZE};
use crate::errors::{LabelscopeError, LabelscopeResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::config::Config;
use crate::structs::connection::Connection;

const SAMPLE_CONFIG: &str = r#"# Labelscope configuration

[connection]
# URL of the forwarding proxy (run `labelscope proxy` or deploy your own)
proxy_url = "http://127.0.0.1:8787"

# Jira Cloud host, without scheme
host = "your-team.atlassian.net"

# Account e-mail used together with the API token
email = "you@example.com"

# Project key to report on
project = "PROJ"

# Environment variable that holds the API token. The token is never stored here.
token_env = "JIRA_API_TOKEN"

# Issues requested per page
page_size = 100

# Seconds before a request to the proxy is abandoned
request_timeout_secs = 30

# Saved filters (written by `labelscope report --save`)
[filters]
# updated_from = "2024-01-01"
# updated_to = "2024-12-31"
# created_from = "2024-01-01"
# created_to = "2024-12-31"
# domain = "domene-1"
# statuses = ["10001", "3"]
# assignees = ["Kari Hansen"]

# Local forwarding proxy
[proxy]
bind = "127.0.0.1"
port = 8787
allowed_host_suffix = ".atlassian.net"
upstream_scheme = "https"
upstream_timeout_secs = 30
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_path() -> LabelscopeResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                LabelscopeError::config_error(
                    "Could not determine the home directory",
                    None,
                    Some("Pass --config <path>"),
                )
            })
    }

    pub fn resolve_path(path: Option<&Path>) -> LabelscopeResult<PathBuf> {
        path.map_or_else(Self::default_path, |p| Ok(p.to_path_buf()))
    }

    /// Missing files yield the default configuration.
    pub fn load(path: &Path) -> LabelscopeResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> LabelscopeResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| LabelscopeError::file_error(&path.display().to_string(), "read", &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(config: &Config, path: &Path) -> LabelscopeResult<()> {
        let content = toml::to_string_pretty(config)?;
        Self::write(path, &content)?;
        log::info!("💾 Saved config to: {}", path.display());
        Ok(())
    }

    pub fn create_sample_config(path: &Path, force: bool) -> LabelscopeResult<()> {
        if path.exists() && !force {
            return Err(LabelscopeError::config_error(
                &format!("{} already exists", path.display()),
                None,
                Some("Use --force to overwrite it"),
            ));
        }
        Self::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    fn write(path: &Path, content: &str) -> LabelscopeResult<()> {
        let display = path.display().to_string();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| LabelscopeError::file_error(&display, "create directory", &e.to_string()))?;
        }
        fs::write(path, content).map_err(|e| LabelscopeError::file_error(&display, "write", &e.to_string()))
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let connection = &config.connection;

        if connection.proxy_url.is_empty() {
            errors.push("connection.proxy_url is not set".to_string());
        } else if !connection.proxy_url.starts_with("http://") && !connection.proxy_url.starts_with("https://") {
            errors.push(format!("connection.proxy_url must start with http:// or https://: {}", connection.proxy_url));
        }
        if connection.host.is_empty() {
            errors.push("connection.host is not set".to_string());
        }
        if !connection.email.contains('@') {
            errors.push(format!("connection.email does not look like an e-mail address: '{}'", connection.email));
        }
        if connection.project.is_empty() {
            errors.push("connection.project is not set".to_string());
        }
        if connection.page_size == 0 || connection.page_size > MAX_PAGE_SIZE {
            errors.push(format!("connection.page_size must be between 1 and {}", MAX_PAGE_SIZE));
        }
        if connection.request_timeout_secs == 0 {
            errors.push("connection.request_timeout_secs must be greater than 0".to_string());
        }

        let filters = &config.filters;
        if let (Some(from), Some(to)) = (filters.updated_from, filters.updated_to) {
            if from > to {
                errors.push(format!("filters.updated_from ({}) is after filters.updated_to ({})", from, to));
            }
        }
        if let (Some(from), Some(to)) = (filters.created_from, filters.created_to) {
            if from > to {
                errors.push(format!("filters.created_from ({}) is after filters.created_to ({})", from, to));
            }
        }

        if !matches!(config.proxy.upstream_scheme.as_str(), "http" | "https") {
            errors.push(format!("proxy.upstream_scheme must be http or https: {}", config.proxy.upstream_scheme));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Builds the connection, reading the token from `token` or the configured
    /// environment variable.
    pub fn connection(config: &Config, token: Option<String>) -> LabelscopeResult<Connection> {
        let settings = &config.connection;

        let token = token
            .filter(|t| !t.is_empty())
            .or_else(|| std::env::var(&settings.token_env).ok().filter(|t| !t.is_empty()))
            .ok_or_else(|| {
                LabelscopeError::config_error(
                    "No API token available",
                    Some(&settings.token_env),
                    Some(&format!("Export {} or pass --token", settings.token_env)),
                )
            })?;

        let required = [
            ("connection.proxy_url", &settings.proxy_url),
            ("connection.host", &settings.host),
            ("connection.email", &settings.email),
            ("connection.project", &settings.project),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(LabelscopeError::config_error(
                    "Missing connection setting",
                    Some(field),
                    Some("Run 'labelscope init' and edit the configuration file"),
                ));
            }
        }

        if settings.page_size == 0 || settings.page_size > MAX_PAGE_SIZE {
            return Err(LabelscopeError::config_error(
                &format!("page_size must be between 1 and {}", MAX_PAGE_SIZE),
                Some("connection.page_size"),
                None,
            ));
        }
        if settings.request_timeout_secs == 0 {
            return Err(LabelscopeError::config_error(
                "request_timeout_secs must be greater than 0",
                Some("connection.request_timeout_secs"),
                None,
            ));
        }

        Ok(Connection {
            proxy_url: ConfigHelper::normalize_proxy_url(&settings.proxy_url),
            host: ConfigHelper::normalize_host(&settings.host),
            email: settings.email.trim().to_string(),
            token,
            project: ConfigHelper::normalize_project(&settings.project),
        })
    }
}
