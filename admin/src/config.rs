//! Runtime configuration.
//!
//! Every key is optional; a missing file section falls back to the
//! defaults below.
//!
//! ```toml
//! [app]
//! anchor = "#app"
//! title = "Admin"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 9999
//! static_dir = "static"
//! wasm_module = "/static/admin.js"
//! ```

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file `{}`", path.display())]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`AdminConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `app.anchor` is not an `#id` selector.
    #[error("app.anchor `{anchor}` must be an id selector such as `#app`")]
    InvalidAnchor {
        /// The configured selector.
        anchor: String,
    },
}

/// Whole configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminConfig {
    /// Client application settings.
    pub app: AppConfig,
    /// Development server settings.
    pub server: ServerConfig,
}

/// Client application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Selector of the mount anchor. Must be an id selector (`#app`), the
    /// only form the server's in-memory document can resolve.
    pub anchor: String,
    /// Brand and document title.
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            anchor: String::from(crate::ANCHOR),
            title: String::from("Admin"),
        }
    }
}

impl AppConfig {
    /// Id of the anchor element, `None` unless `anchor` is a plain `#id`.
    pub fn anchor_id(&self) -> Option<&str> {
        let id = self.anchor.trim().strip_prefix('#')?;

        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        valid.then_some(id)
    }
}

/// Development server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory served under `/static/`.
    pub static_dir: PathBuf,
    /// URL of the client's JS glue module.
    pub wasm_module: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 9999,
            static_dir: PathBuf::from("static"),
            wasm_module: String::from("/static/admin.js"),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AdminConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;

        Ok(config)
    }

    /// Check values the types alone do not constrain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app.anchor_id().is_none() {
            return Err(ConfigError::InvalidAnchor {
                anchor: self.app.anchor.clone(),
            });
        }

        Ok(())
    }

    /// Read and parse the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AdminConfig::from_toml("").unwrap();

        assert_eq!(config, AdminConfig::default());
        assert_eq!(config.app.anchor, "#app");
        assert_eq!(config.server.address(), "127.0.0.1:9999");
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = AdminConfig::from_toml(
            r#"
            [app]
            title = "Clinic"

            [server]
            port = 8080
            "#,
        )
        .unwrap();

        assert_eq!(config.app.title, "Clinic");
        assert_eq!(config.app.anchor, "#app");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = AdminConfig::from_toml("[server]\nprot = 1\n").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_anchor_must_be_an_id_selector() {
        for anchor in [".app", "app", "#", "#app .content", "div#app"] {
            let toml = format!("[app]\nanchor = \"{anchor}\"\n");
            let err = AdminConfig::from_toml(&toml).unwrap_err();

            assert!(
                matches!(&err, ConfigError::InvalidAnchor { anchor: got } if got == anchor),
                "{anchor}: {err}"
            );
        }

        let config = AdminConfig::from_toml("[app]\nanchor = \"#admin-root\"\n").unwrap();
        assert_eq!(config.app.anchor_id(), Some("admin-root"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AdminConfig::load(Path::new("does/not/exist.toml")).unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to read config file `does/not/exist.toml`"
        );
    }
}
