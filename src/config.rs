//! Server configuration module
//!
//! Parses the YAML file that decides which server roles run, where they
//! listen and where the proxy forwards to. Every section is optional; a
//! missing section disables that role.

use crate::servers::RedirectMap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::net::{Ipv4Addr, SocketAddrV4};
use std::path::{Path, PathBuf};

/// Maximum length of the patch server's welcome message, in characters.
pub const WELCOME_MESSAGE_MAX: usize = 512;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address every listener binds to and that redirects point at.
    #[serde(default = "default_address")]
    pub address: Ipv4Addr,

    #[serde(default)]
    pub patch: Option<PatchConfig>,

    /// BB authentication server. Redirects to the data server.
    #[serde(default)]
    pub auth: Option<AuthConfig>,

    #[serde(default)]
    pub data: Option<DataConfig>,

    #[serde(default)]
    pub login: Option<LoginConfig>,

    /// Known accounts. Empty means every login is accepted.
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,

    #[serde(default)]
    pub proxy: Option<ProxyConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchConfig {
    #[serde(default = "default_patch_port")]
    pub port: u16,

    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_auth_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_port")]
    pub port: u16,

    /// Directory whose files are offered in the download phase.
    #[serde(default)]
    pub files_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default = "default_login_port")]
    pub port: u16,

    pub next_address: Ipv4Addr,
    pub next_port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameVersion {
    Pc,
    Bb,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Default remote address for entries that don't set their own.
    pub remote_address: Ipv4Addr,

    #[serde(default)]
    pub servers: Vec<ProxyServerConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyServerConfig {
    pub name: String,
    pub version: GameVersion,
    pub bind_port: u16,

    #[serde(default)]
    pub remote_address: Option<Ipv4Addr>,
    pub remote_port: u16,
}

// ============================================
// Default value functions
// ============================================

fn default_address() -> Ipv4Addr {
    Ipv4Addr::LOCALHOST
}

fn default_patch_port() -> u16 {
    11000
}

fn default_auth_port() -> u16 {
    12000
}

fn default_data_port() -> u16 {
    12001
}

fn default_login_port() -> u16 {
    12010
}

fn default_welcome_message() -> String {
    "Welcome to Phantasmal World.".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            patch: Some(PatchConfig {
                port: default_patch_port(),
                welcome_message: default_welcome_message(),
            }),
            auth: Some(AuthConfig {
                port: default_auth_port(),
            }),
            data: Some(DataConfig {
                port: default_data_port(),
                files_dir: None,
            }),
            login: None,
            accounts: Vec::new(),
            proxy: None,
        }
    }
}

impl ProxyServerConfig {
    pub fn remote(&self, default_address: Ipv4Addr) -> SocketAddrV4 {
        SocketAddrV4::new(
            self.remote_address.unwrap_or(default_address),
            self.remote_port,
        )
    }
}

impl ProxyConfig {
    /// Maps each proxied remote to the local listener that fronts it.
    pub fn redirect_map(&self, address: Ipv4Addr) -> RedirectMap {
        self.servers
            .iter()
            .map(|s| {
                (
                    s.remote(self.remote_address),
                    SocketAddrV4::new(address, s.bind_port),
                )
            })
            .collect()
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ServerConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML in {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_str(contents: &str) -> Result<Self> {
        let config: ServerConfig =
            serde_yaml::from_str(contents).context("Failed to parse YAML")?;

        config.validate()?;

        Ok(config)
    }

    /// The data server endpoint the auth server redirects to.
    pub fn data_endpoint(&self) -> Option<SocketAddrV4> {
        self.data
            .as_ref()
            .map(|d| SocketAddrV4::new(self.address, d.port))
    }

    fn validate(&self) -> Result<()> {
        if let Some(patch) = &self.patch {
            let len = patch.welcome_message.chars().count();
            anyhow::ensure!(
                len <= WELCOME_MESSAGE_MAX,
                "welcome_message too long: {} chars (max {})",
                len,
                WELCOME_MESSAGE_MAX
            );
        }

        anyhow::ensure!(
            self.auth.is_none() || self.data.is_some(),
            "auth server needs a data section to redirect to"
        );

        let mut usernames = HashSet::new();
        for account in &self.accounts {
            anyhow::ensure!(!account.username.is_empty(), "account username cannot be empty");
            anyhow::ensure!(
                account.username.len() <= 16 && account.password.len() <= 16,
                "account {}: username and password are limited to 16 bytes",
                account.username
            );
            anyhow::ensure!(
                usernames.insert(account.username.as_str()),
                "duplicate account: {}",
                account.username
            );
        }

        let mut ports = HashSet::new();
        for port in [
            self.patch.as_ref().map(|p| p.port),
            self.auth.as_ref().map(|a| a.port),
            self.data.as_ref().map(|d| d.port),
            self.login.as_ref().map(|l| l.port),
        ]
        .into_iter()
        .flatten()
        {
            anyhow::ensure!(ports.insert(port), "port {} is used twice", port);
        }

        if let Some(proxy) = &self.proxy {
            let mut names = HashSet::new();
            for server in &proxy.servers {
                anyhow::ensure!(
                    !server.name.is_empty()
                        && server
                            .name
                            .chars()
                            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                    "invalid proxy server name: {:?} (allowed: A-Z a-z 0-9 - _)",
                    server.name
                );
                anyhow::ensure!(
                    names.insert(server.name.as_str()),
                    "duplicate proxy server name: {}",
                    server.name
                );
                anyhow::ensure!(
                    ports.insert(server.bind_port),
                    "proxy server {}: port {} is used twice",
                    server.name,
                    server.bind_port
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ServerConfig::from_str("{}").unwrap();
        assert_eq!(config.address, Ipv4Addr::LOCALHOST);
        assert!(config.patch.is_none());
        assert!(config.proxy.is_none());
        assert!(config.accounts.is_empty());
    }

    #[test]
    fn test_section_defaults() {
        let config = ServerConfig::from_str(
            r#"
address: 192.168.0.10
patch: {}
auth: {}
data:
  files_dir: ./data/files
"#,
        )
        .unwrap();
        let patch = config.patch.as_ref().unwrap();
        assert_eq!(patch.port, 11000);
        assert_eq!(patch.welcome_message, default_welcome_message());
        assert_eq!(config.auth.as_ref().unwrap().port, 12000);
        assert_eq!(
            config.data.as_ref().unwrap().files_dir,
            Some(PathBuf::from("./data/files"))
        );
        assert_eq!(
            config.data_endpoint(),
            Some(SocketAddrV4::new(Ipv4Addr::new(192, 168, 0, 10), 12001))
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        ServerConfig::default().validate().unwrap();
    }

    #[test]
    fn test_proxy_redirect_map() {
        let config = ServerConfig::from_str(
            r#"
address: 127.0.0.1
proxy:
  remote_address: 10.0.0.1
  servers:
    - { name: patch, version: pc, bind_port: 21000, remote_port: 11000 }
    - { name: ship_1, version: bb, bind_port: 21001, remote_address: 10.0.0.2, remote_port: 5000 }
"#,
        )
        .unwrap();
        let proxy = config.proxy.as_ref().unwrap();
        assert_eq!(proxy.servers[0].version, GameVersion::Pc);
        assert_eq!(proxy.servers[1].version, GameVersion::Bb);

        let map = proxy.redirect_map(config.address);
        assert_eq!(map.len(), 2);
        assert_eq!(
            map[&SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 1), 11000)],
            SocketAddrV4::new(Ipv4Addr::LOCALHOST, 21000)
        );
        assert_eq!(
            map[&SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 2), 5000)],
            SocketAddrV4::new(Ipv4Addr::LOCALHOST, 21001)
        );
    }

    #[test]
    fn test_rejects_bad_proxy_name() {
        let err = ServerConfig::from_str(
            r#"
proxy:
  remote_address: 10.0.0.1
  servers:
    - { name: "bad name", version: pc, bind_port: 21000, remote_port: 11000 }
"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_duplicate_ports() {
        let err = ServerConfig::from_str(
            r#"
patch: { port: 11000 }
proxy:
  remote_address: 10.0.0.1
  servers:
    - { name: patch, version: pc, bind_port: 11000, remote_port: 11000 }
"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_long_welcome_message() {
        let yaml = format!("patch: {{ welcome_message: \"{}\" }}", "x".repeat(513));
        assert!(ServerConfig::from_str(&yaml).is_err());
    }

    #[test]
    fn test_auth_requires_data() {
        assert!(ServerConfig::from_str("auth: {}").is_err());
    }

    #[test]
    fn test_accounts() {
        let config = ServerConfig::from_str(
            r#"
accounts:
  - { username: alice, password: secret }
"#,
        )
        .unwrap();
        assert_eq!(config.accounts[0].username, "alice");

        let dup = "accounts: [{ username: a, password: x }, { username: a, password: y }]";
        assert!(ServerConfig::from_str(dup).is_err());
    }

    #[test]
    fn test_unknown_version_rejected() {
        let yaml = r#"
proxy:
  remote_address: 10.0.0.1
  servers:
    - { name: x, version: gc, bind_port: 1, remote_port: 2 }
"#;
        assert!(ServerConfig::from_str(yaml).is_err());
    }
}
