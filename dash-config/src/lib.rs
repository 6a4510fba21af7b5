use config::{Config, ConfigError, File, FileFormat};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

mod api;
pub use api::ApiConfig;

mod toast;
pub use toast::ToastConfig;

mod log;
pub use log::LogConfig;

// The dashboard runs in a browser, so there's no config file to read at runtime
const EMBEDDED_CONFIG: &str = include_str!("../../dash.toml");

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Configuration {
    pub api: ApiConfig,
    pub toast: ToastConfig,
    pub log: LogConfig,
}

lazy_static! {
    pub static ref CONFIG: RwLock<Configuration> =
        RwLock::new(Configuration::from_toml(EMBEDDED_CONFIG).unwrap_or_default());
}

impl Configuration {
    /// Layer a TOML document over the built-in defaults
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(Config::try_from(&Configuration::default())?)
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?;

        conf.try_deserialize()
    }
}

#[macro_export]
macro_rules! read_config {
    ($($field:ident).+) => {
        $crate::CONFIG.read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .$($field).+
            .clone()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let conf = Configuration::from_toml("").unwrap();

        assert_eq!(conf.api.base_url, "/api");
        assert_eq!(conf.toast.lifetime_ms, 5_000);
        assert_eq!(conf.toast.fade_ms, 300);
        assert_eq!(conf.log.level, "info");
    }

    #[test]
    fn partial_document_overrides_only_named_fields() {
        let conf = Configuration::from_toml(r#"
            [api]
            base_url = "https://social.example/api"

            [toast]
            lifetime_ms = 2000
        "#).unwrap();

        assert_eq!(conf.api.base_url, "https://social.example/api");
        assert_eq!(conf.toast.lifetime_ms, 2_000);
        assert_eq!(conf.toast.fade_ms, 300);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(Configuration::from_toml("[toast]\nlifetime_ms = \"soon\"").is_err());
    }

    #[test]
    fn embedded_config_parses() {
        assert!(Configuration::from_toml(EMBEDDED_CONFIG).is_ok());
        assert_eq!(read_config!(api.base_url), "/api");
    }
}
