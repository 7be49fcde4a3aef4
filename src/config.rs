use crate::Args;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{
    net::{IpAddr, SocketAddr},
    path::Path,
};

/// Paths served by the operational routes, which the alerts prefix may not shadow
const RESERVED_PATHS: [&str; 2] = ["/alive", "/metrics"];

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub http: Http,
    pub alerts: Alerts,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Http {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Alerts {
    pub prefix: String,
}

impl Default for Http {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for Alerts {
    fn default() -> Self {
        Self {
            prefix: "/alerts".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading config from {}", path.display());

        let config = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file {}", path.display()))?;

        Self::from_yaml(&config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_norway::from_str(yaml).context("Invalid config file")
    }

    /// Load the config file named on the command line, or the defaults
    pub fn load(args: &Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => {
                tracing::info!("No config file given, using defaults");
                Self::default()
            }
        };

        config.with_overrides(args).validate()
    }

    /// Apply command line overrides on top of the file values
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(host) = &args.host {
            self.http.host = host.clone();
        }

        if let Some(port) = args.port {
            self.http.port = port;
        }

        if let Some(prefix) = &args.prefix {
            self.alerts.prefix = prefix.clone();
        }

        self
    }

    /// Normalize and check the configuration
    pub fn validate(mut self) -> Result<Self> {
        self.alerts.prefix = normalize_prefix(&self.alerts.prefix);

        if RESERVED_PATHS.contains(&self.alerts.prefix.as_str()) {
            bail!(
                "Alerts prefix '{}' collides with a built-in route",
                self.alerts.prefix
            );
        }

        if self.alerts.prefix.contains(['{', '}', '*', ':', '?', '#']) {
            bail!(
                "Alerts prefix '{}' must be a literal path",
                self.alerts.prefix
            );
        }

        self.http.socket_addr()?;

        Ok(self)
    }
}

impl Http {
    /// Address the web server listens on. The host must be an IP literal;
    /// IPv6 hosts may be given with or without brackets.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse()
            .with_context(|| format!("Invalid listen host '{}', expected an IP address", self.host))?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Strip trailing slashes and ensure a leading one. The root prefix becomes "".
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');

    match trimmed {
        "" => String::new(),
        path => format!("/{path}"),
    }
}
