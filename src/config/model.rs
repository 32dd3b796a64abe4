//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so an empty or missing file works.

use crate::app::event::ConnectOptions;
use serde::{Deserialize, Serialize};

use super::nickname::generate_nickname;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub defaults: ConnectDefaults,
    #[serde(default)]
    pub servers: Vec<ServerConfig>,
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            defaults: ConnectDefaults::default(),
            servers: Vec::new(),
            journal: JournalConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Nick for `server`: its own, else the connect defaults, else a generated one.
    pub fn nick_for(&self, server: &ServerConfig) -> String {
        server
            .nickname
            .clone()
            .or_else(|| self.defaults.nick.clone())
            .unwrap_or_else(generate_nickname)
    }
}

/// Values prefilled in the connect form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectDefaults {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub tls: bool,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(default)]
    pub channels: Vec<String>,
}

impl Default for ConnectDefaults {
    fn default() -> Self {
        Self {
            name: None,
            host: None,
            port: default_port(),
            tls: true,
            nick: None,
            channels: Vec::new(),
        }
    }
}

/// A server to connect to at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// Hostname or IP address.
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub tls: bool,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub realname: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub auto_connect: bool,
}

impl ServerConfig {
    /// `host:port`, bracketing IPv6 literals.
    pub fn address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    pub fn options(&self) -> ConnectOptions {
        ConnectOptions {
            name: self.name.clone(),
            tls: self.tls,
            password: self.password.clone(),
            username: self.username.clone(),
            realname: self.realname.clone(),
            channels: self.channels.clone(),
        }
    }
}

/// On-disk journal of applied events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_journal_dir")]
    pub dir: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_journal_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Print the tab list to stderr when the input closes.
    #[serde(default)]
    pub show_tabs: bool,
    #[serde(default = "default_tab_width")]
    pub tab_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_tabs: false,
            tab_width: default_tab_width(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_port() -> u16 {
    6697
}
fn default_true() -> bool {
    true
}
fn default_journal_dir() -> String {
    "~/.local/share/ircsync/journal".to_string()
}
fn default_tab_width() -> u16 {
    32
}
